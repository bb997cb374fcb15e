use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::ServerError;

pub const DEFAULT_AMOUNT: u16 = 5;
pub const DEFAULT_CATEGORY: &str = "General Knowledge";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ServerError::BadRequest(format!(
                "Invalid difficulty `{}`. Expected one of: easy, medium, hard.",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub difficulty: Difficulty,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// A question as sent to the quiz taker. It has no correct answer field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DerivedQuestion {
    pub id: Uuid,
    pub difficulty: Difficulty,
    pub category: String,
    pub question: String,
    pub answers: Vec<String>,
}

/// Raw query string of `GET /api/quiz`.
#[derive(Debug, Deserialize, Default)]
pub struct QuizQuery {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub amount: u16,
    pub category: String,
    pub difficulty: Difficulty,
}

impl QuizQuery {
    /// Fills in defaults. Whether the store can supply `amount` questions is
    /// decided by the sample, not here.
    pub fn validate(self) -> Result<QuizRequest, ServerError> {
        let amount = match self.amount.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_AMOUNT,
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|amount| *amount > 0)
                .ok_or_else(|| {
                    ServerError::BadRequest(format!(
                        "Invalid amount `{}`. Expected a positive integer.",
                        raw
                    ))
                })?,
        };

        let category = match self.category {
            Some(category) if !category.trim().is_empty() => category,
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let difficulty = match self.difficulty.as_deref() {
            None | Some("") => Difficulty::Easy,
            Some(raw) => raw.parse()?,
        };

        Ok(QuizRequest {
            amount,
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserAnswer {
    pub question_id: String,
    pub user_answer: String,
}

impl UserAnswer {
    /// `None` when the id is not a question id at all. Such an answer can never
    /// resolve to a stored question.
    pub fn parsed_id(&self) -> Option<Uuid> {
        Uuid::parse_str(self.question_id.trim()).ok()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub user_answers: Vec<UserAnswer>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionResult {
    pub question_id: Uuid,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizResults {
    pub results: Vec<QuestionResult>,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub total_questions: usize,
    pub percentage: f64,
}
