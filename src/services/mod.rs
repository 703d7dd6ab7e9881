pub mod draft_editor;
pub mod quiz_service;
pub mod validation;
