pub mod draft;
pub mod quiz;
