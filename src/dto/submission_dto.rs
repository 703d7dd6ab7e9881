use serde::{Deserialize, Serialize};
use validator::Validate;

/// The normalized payload handed to the quiz service's create operation.
/// Produced only by `QuizDraftEditor::to_submission`, which guarantees the
/// field rules below already hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuizSubmission {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub questions: Vec<SubmissionQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmissionQuestion {
    Boolean {
        text: String,
        options: Vec<String>,
        #[serde(rename = "correctAnswer")]
        correct_answer: bool,
    },
    Input {
        text: String,
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
    Checkbox {
        text: String,
        options: Vec<String>,
        #[serde(rename = "correctAnswer")]
        correct_answer: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_question_serializes_with_fixed_options() {
        let question = SubmissionQuestion::Boolean {
            text: "Water boils at 100C".to_string(),
            options: vec!["True".to_string(), "False".to_string()],
            correct_answer: true,
        };

        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "type": "boolean",
                "text": "Water boils at 100C",
                "options": ["True", "False"],
                "correctAnswer": true
            })
        );
    }

    #[test]
    fn input_question_serializes_without_options() {
        let question = SubmissionQuestion::Input {
            text: "Capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "type": "input",
                "text": "Capital of France?",
                "correctAnswer": "Paris"
            })
        );
    }

    #[test]
    fn checkbox_question_serializes_selected_options() {
        let question = SubmissionQuestion::Checkbox {
            text: "Primary colors?".to_string(),
            options: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
            correct_answer: vec!["Red".to_string(), "Blue".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "type": "checkbox",
                "text": "Primary colors?",
                "options": ["Red", "Green", "Blue"],
                "correctAnswer": ["Red", "Blue"]
            })
        );
    }

    #[test]
    fn blank_title_fails_dto_validation() {
        let submission = QuizSubmission {
            title: String::new(),
            questions: vec![SubmissionQuestion::Input {
                text: "q".to_string(),
                correct_answer: "a".to_string(),
            }],
        };
        assert!(submission.validate().is_err());
    }
}
