use tracing::level_filters::LevelFilter;
use uuid::Uuid;

use crate::quiz::models::{Difficulty, Question};

pub fn setup_logging() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn question(n: usize) -> Question {
    Question {
        id: Uuid::new_v4(),
        difficulty: Difficulty::Easy,
        category: "General Knowledge".to_string(),
        question: format!("Question {}", n),
        correct_answer: format!("Correct {}", n),
        incorrect_answers: vec![
            format!("Wrong {}a", n),
            format!("Wrong {}b", n),
            format!("Wrong {}c", n),
        ],
    }
}

pub fn questions(count: usize) -> Vec<Question> {
    (1..=count).map(question).collect()
}
