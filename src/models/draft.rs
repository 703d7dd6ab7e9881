use crate::models::quiz::QuestionType;
use serde::{Deserialize, Serialize};

/// One authoring option paired with its correctness flag. Keeping the flag on
/// the option removes any need to hold two index-aligned lists in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDraft {
    pub text: String,
    pub correct: bool,
}

impl ChoiceDraft {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnswerDraft {
    Boolean { correct: bool },
    Input { correct: String },
    Checkbox { choices: Vec<ChoiceDraft> },
}

/// A question being authored. Switching the question type re-initializes the
/// answer shape; the last checkbox choices are cached so toggling away and
/// back does not lose typed-in options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub answer: AnswerDraft,
    #[serde(skip)]
    cached_choices: Vec<ChoiceDraft>,
}

impl QuestionDraft {
    /// New questions default to the input type with empty fields.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            answer: AnswerDraft::Input {
                correct: String::new(),
            },
            cached_choices: Vec::new(),
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self.answer {
            AnswerDraft::Boolean { .. } => QuestionType::Boolean,
            AnswerDraft::Input { .. } => QuestionType::Input,
            AnswerDraft::Checkbox { .. } => QuestionType::Checkbox,
        }
    }

    /// Re-initializes the answer for `new_type`. Switching to the current
    /// type is a no-op. Checkbox choices survive a round trip through the
    /// other types via the cache; boolean defaults to `true`, input to `""`.
    pub fn change_type(&mut self, new_type: QuestionType) {
        if self.question_type() == new_type {
            return;
        }
        if let AnswerDraft::Checkbox { choices } = &mut self.answer {
            self.cached_choices = std::mem::take(choices);
        }
        self.answer = match new_type {
            QuestionType::Boolean => AnswerDraft::Boolean { correct: true },
            QuestionType::Input => AnswerDraft::Input {
                correct: String::new(),
            },
            QuestionType::Checkbox => {
                let choices = if self.cached_choices.is_empty() {
                    vec![ChoiceDraft::default()]
                } else {
                    std::mem::take(&mut self.cached_choices)
                };
                AnswerDraft::Checkbox { choices }
            }
        };
    }

    pub fn choices(&self) -> Option<&[ChoiceDraft]> {
        match &self.answer {
            AnswerDraft::Checkbox { choices } => Some(choices),
            _ => None,
        }
    }

    pub(crate) fn choices_mut(&mut self) -> Option<&mut Vec<ChoiceDraft>> {
        match &mut self.answer {
            AnswerDraft::Checkbox { choices } => Some(choices),
            _ => None,
        }
    }
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-progress, unpersisted quiz. Always holds at least one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            questions: vec![QuestionDraft::new()],
        }
    }
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self::new()
    }
}
