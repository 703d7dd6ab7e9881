pub mod config;
pub mod dto;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use crate::dto::submission_dto::{QuizSubmission, SubmissionQuestion};
pub use crate::error::{Error, Result};
pub use crate::models::draft::{AnswerDraft, ChoiceDraft, QuestionDraft, QuizDraft};
pub use crate::models::quiz::{CorrectAnswer, QuestionType, Quiz, QuizQuestion};
pub use crate::services::draft_editor::QuizDraftEditor;
pub use crate::services::quiz_service::{QuizApi, QuizService};
pub use crate::services::validation::{validate_draft, ValidationReport};
