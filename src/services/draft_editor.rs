use crate::dto::submission_dto::{QuizSubmission, SubmissionQuestion};
use crate::error::{Error, Result};
use crate::models::draft::{AnswerDraft, ChoiceDraft, QuestionDraft, QuizDraft};
use crate::models::quiz::QuestionType;
use crate::services::validation::{validate_draft, ValidationReport};

/// Owns one quiz draft for the duration of an editing session. Mutations are
/// applied serially through `&mut self`; `validate` and `to_submission` are
/// pure reads over the current draft.
///
/// Index arguments outside the draft, or option operations on a question that
/// is not checkbox-typed, are contract violations and fail with
/// [`Error::Precondition`].
#[derive(Debug, Clone, Default)]
pub struct QuizDraftEditor {
    draft: QuizDraft,
}

impl QuizDraftEditor {
    /// Starts a session with an empty title and one default input question.
    pub fn new() -> Self {
        Self {
            draft: QuizDraft::new(),
        }
    }

    pub fn from_draft(draft: QuizDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &QuizDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn add_question(&mut self) {
        self.draft.questions.push(QuestionDraft::new());
    }

    /// Removes the question at `index`. A quiz must keep at least one
    /// question, so removing the last one is rejected and the draft is left
    /// unchanged.
    pub fn remove_question(&mut self, index: usize) -> Result<()> {
        if self.draft.questions.len() == 1 {
            return Err(Error::Precondition(
                "a quiz must keep at least one question".to_string(),
            ));
        }
        self.question_mut(index)?;
        self.draft.questions.remove(index);
        Ok(())
    }

    pub fn change_type(&mut self, index: usize, new_type: QuestionType) -> Result<()> {
        self.question_mut(index)?.change_type(new_type);
        Ok(())
    }

    pub fn set_question_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.question_mut(index)?.text = text.into();
        Ok(())
    }

    pub fn set_correct_boolean(&mut self, index: usize, value: bool) -> Result<()> {
        match &mut self.question_mut(index)?.answer {
            AnswerDraft::Boolean { correct } => {
                *correct = value;
                Ok(())
            }
            _ => Err(Error::Precondition(format!(
                "question {} is not a boolean question",
                index
            ))),
        }
    }

    pub fn set_correct_input(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        match &mut self.question_mut(index)?.answer {
            AnswerDraft::Input { correct } => {
                *correct = value.into();
                Ok(())
            }
            _ => Err(Error::Precondition(format!(
                "question {} is not an input question",
                index
            ))),
        }
    }

    /// Appends an empty, unselected option to a checkbox question.
    pub fn add_option(&mut self, question_index: usize) -> Result<()> {
        self.choices_mut(question_index)?.push(ChoiceDraft::default());
        Ok(())
    }

    /// Removes one option together with its flag. Removing the last option
    /// leaves the question without options, which validation rejects.
    pub fn remove_option(&mut self, question_index: usize, option_index: usize) -> Result<()> {
        let choices = self.choices_mut(question_index)?;
        if option_index >= choices.len() {
            return Err(Error::Precondition(format!(
                "option index {} out of range for question {}",
                option_index, question_index
            )));
        }
        choices.remove(option_index);
        Ok(())
    }

    pub fn set_option_text(
        &mut self,
        question_index: usize,
        option_index: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        self.choice_mut(question_index, option_index)?.text = text.into();
        Ok(())
    }

    pub fn set_option_correct(
        &mut self,
        question_index: usize,
        option_index: usize,
        correct: bool,
    ) -> Result<()> {
        self.choice_mut(question_index, option_index)?.correct = correct;
        Ok(())
    }

    /// Collects every rule violation in the current draft, keyed by field
    /// path. An empty report means `to_submission` will succeed.
    pub fn validate(&self) -> ValidationReport {
        validate_draft(&self.draft)
    }

    /// Maps the draft to its normalized submission payload. Callers must
    /// validate first; an invalid draft here is a programming error.
    pub fn to_submission(&self) -> Result<QuizSubmission> {
        let report = self.validate();
        if !report.is_empty() {
            return Err(Error::Precondition(format!(
                "to_submission called on an invalid draft: {}",
                report
            )));
        }

        Ok(self.build_submission())
    }

    /// Validate-then-convert for submit handlers: a failed validation comes
    /// back as [`Error::Validation`] so the attempt threads through `?`.
    pub fn submit_payload(&self) -> Result<QuizSubmission> {
        let report = self.validate();
        if !report.is_empty() {
            return Err(Error::Validation(report));
        }
        Ok(self.build_submission())
    }

    fn build_submission(&self) -> QuizSubmission {
        QuizSubmission {
            title: self.draft.title.trim().to_string(),
            questions: self.draft.questions.iter().map(build_question).collect(),
        }
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut QuestionDraft> {
        let count = self.draft.questions.len();
        self.draft.questions.get_mut(index).ok_or_else(|| {
            Error::Precondition(format!(
                "question index {} out of range (draft has {})",
                index, count
            ))
        })
    }

    fn choices_mut(&mut self, index: usize) -> Result<&mut Vec<ChoiceDraft>> {
        self.question_mut(index)?.choices_mut().ok_or_else(|| {
            Error::Precondition(format!("question {} is not a checkbox question", index))
        })
    }

    fn choice_mut(&mut self, question_index: usize, option_index: usize) -> Result<&mut ChoiceDraft> {
        self.choices_mut(question_index)?
            .get_mut(option_index)
            .ok_or_else(|| {
                Error::Precondition(format!(
                    "option index {} out of range for question {}",
                    option_index, question_index
                ))
            })
    }
}

fn build_question(question: &QuestionDraft) -> SubmissionQuestion {
    let text = question.text.trim().to_string();
    match &question.answer {
        AnswerDraft::Boolean { correct } => SubmissionQuestion::Boolean {
            text,
            options: vec!["True".to_string(), "False".to_string()],
            correct_answer: *correct,
        },
        AnswerDraft::Input { correct } => SubmissionQuestion::Input {
            text,
            correct_answer: correct.trim().to_string(),
        },
        AnswerDraft::Checkbox { choices } => SubmissionQuestion::Checkbox {
            text,
            options: choices
                .iter()
                .map(|choice| choice.text.trim().to_string())
                .collect(),
            correct_answer: choices
                .iter()
                .filter(|choice| choice.correct)
                .map(|choice| choice.text.trim().to_string())
                .collect(),
        },
    }
}
