use serde::{Deserialize, Serialize};

/// A quiz as returned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: CorrectAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Boolean,
    Input,
    Checkbox,
}

/// The wire shape of `correctAnswer` depends on the question type:
/// a bool for boolean questions, one string for input questions, the
/// selected options for checkbox questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Bool(bool),
    Text(String),
    Many(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_each_correct_answer_shape() {
        let raw = json!({
            "id": 7,
            "title": "Geography",
            "questions": [
                {
                    "id": 1,
                    "text": "The Nile is the longest river.",
                    "type": "boolean",
                    "options": ["True", "False"],
                    "correctAnswer": true
                },
                {
                    "id": 2,
                    "text": "Capital of France?",
                    "type": "input",
                    "correctAnswer": "Paris"
                },
                {
                    "id": 3,
                    "text": "Which are primary colors?",
                    "type": "checkbox",
                    "options": ["Red", "Green", "Blue"],
                    "correctAnswer": ["Red", "Blue"]
                }
            ]
        });

        let quiz: Quiz = serde_json::from_value(raw).unwrap();
        assert_eq!(quiz.id, 7);
        assert_eq!(quiz.questions.len(), 3);

        assert_eq!(quiz.questions[0].question_type, QuestionType::Boolean);
        assert_eq!(quiz.questions[0].correct_answer, CorrectAnswer::Bool(true));

        assert_eq!(quiz.questions[1].question_type, QuestionType::Input);
        assert_eq!(quiz.questions[1].options, None);
        assert_eq!(
            quiz.questions[1].correct_answer,
            CorrectAnswer::Text("Paris".to_string())
        );

        assert_eq!(quiz.questions[2].question_type, QuestionType::Checkbox);
        assert_eq!(
            quiz.questions[2].correct_answer,
            CorrectAnswer::Many(vec!["Red".to_string(), "Blue".to_string()])
        );
    }

    #[test]
    fn serializing_skips_absent_options() {
        let question = QuizQuestion {
            id: 2,
            text: "Capital of France?".to_string(),
            question_type: QuestionType::Input,
            options: None,
            correct_answer: CorrectAnswer::Text("Paris".to_string()),
        };

        let value = serde_json::to_value(&question).unwrap();
        assert!(value.get("options").is_none());
        assert_eq!(value["type"], "input");
        assert_eq!(value["correctAnswer"], "Paris");
    }
}
