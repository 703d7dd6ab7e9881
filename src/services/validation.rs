use crate::models::draft::{AnswerDraft, QuizDraft};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation failures keyed by field path (`title`, `questions[2].text`,
/// `questions[0].options[1]`, ...). Paths here are index-addressed, which the
/// `validator` derive cannot express, so the report is built by hand; the
/// flat DTO rules still go through `validator` (see `dto::submission_dto`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(path.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn field_count(&self) -> usize {
        self.errors.len()
    }

    pub fn messages(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", path, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Runs every rule over the draft and collects all violations, so the caller
/// can surface them simultaneously. Pure; never short-circuits.
pub fn validate_draft(draft: &QuizDraft) -> ValidationReport {
    let mut report = ValidationReport::new();

    if draft.title.trim().is_empty() {
        report.add("title", "Title must not be empty");
    }
    if draft.questions.is_empty() {
        report.add("questions", "Quiz must contain at least one question");
    }

    for (index, question) in draft.questions.iter().enumerate() {
        if question.text.trim().is_empty() {
            report.add(
                format!("questions[{}].text", index),
                "Question text must not be empty",
            );
        }

        match &question.answer {
            // The correct value is a plain bool, so a boolean question cannot
            // be left unanswered; only the text rule applies.
            AnswerDraft::Boolean { .. } => {}
            AnswerDraft::Input { correct } => {
                if correct.trim().is_empty() {
                    report.add(
                        format!("questions[{}].correctInput", index),
                        "Correct answer must not be empty",
                    );
                }
            }
            AnswerDraft::Checkbox { choices } => {
                let path = format!("questions[{}].options", index);
                if choices.is_empty() {
                    report.add(path, "Checkbox question needs at least one option");
                } else {
                    if !choices.iter().any(|choice| choice.correct) {
                        report.add(path, "At least one option must be marked correct");
                    }
                    for (option_index, choice) in choices.iter().enumerate() {
                        if choice.text.trim().is_empty() {
                            report.add(
                                format!("questions[{}].options[{}]", index, option_index),
                                "Option text must not be empty",
                            );
                        }
                    }
                }
            }
        }
    }

    report
}
