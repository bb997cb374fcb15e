use html_escape::decode_html_entities;
use tracing::debug;
use uuid::Uuid;

use crate::{
    category::models::Category,
    client::trivia_client::{TriviaCategory, TriviaQuestion},
    quiz::models::Question,
};

/// Result of fetching the questions of one category.
#[derive(Debug)]
pub enum CategoryFetch {
    Fetched {
        category: TriviaCategory,
        questions: Vec<TriviaQuestion>,
    },
    Failed {
        category: TriviaCategory,
        reason: String,
    },
}

/// Store contents ready to be written, with all text decoded.
#[derive(Debug, Default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    pub pruned: Vec<String>,
}

fn decode(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

impl From<TriviaQuestion> for Question {
    fn from(raw: TriviaQuestion) -> Self {
        Self {
            id: Uuid::new_v4(),
            difficulty: raw.difficulty,
            category: decode(&raw.category),
            question: decode(&raw.question),
            correct_answer: decode(&raw.correct_answer),
            incorrect_answers: raw.incorrect_answers.iter().map(|a| decode(a)).collect(),
        }
    }
}

impl SeedData {
    /// Decodes every fetched question and prunes categories that produced none.
    pub fn from_fetches(fetches: Vec<CategoryFetch>) -> Self {
        let mut data = SeedData::default();

        for fetch in fetches {
            match fetch {
                CategoryFetch::Fetched {
                    category,
                    questions,
                } if !questions.is_empty() => {
                    data.categories.push(Category {
                        id: Uuid::new_v4(),
                        name: decode(category.name.trim()),
                    });
                    data.questions
                        .extend(questions.into_iter().map(Question::from));
                }
                CategoryFetch::Fetched { category, .. } => {
                    debug!("Category {} has no questions", category.name);
                    data.pruned.push(category.name);
                }
                CategoryFetch::Failed { category, reason } => {
                    debug!("Category {} failed: {}", category.name, reason);
                    data.pruned.push(category.name);
                }
            }
        }

        data
    }
}

/// Drops blank names and applies the optional limit.
pub fn usable_categories(
    mut categories: Vec<TriviaCategory>,
    limit: Option<usize>,
) -> Vec<TriviaCategory> {
    categories.retain(|c| !c.name.trim().is_empty());
    if let Some(limit) = limit {
        categories.truncate(limit);
    }
    categories
}
