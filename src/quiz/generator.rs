use rand::{Rng, seq::SliceRandom};

use crate::{
    common::error::ServerError,
    quiz::models::{DerivedQuestion, Question},
};

impl DerivedQuestion {
    pub fn from_question<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Self {
        let mut answers = Vec::with_capacity(question.incorrect_answers.len() + 1);
        answers.push(question.correct_answer);
        answers.extend(question.incorrect_answers);
        answers.shuffle(rng);

        Self {
            id: question.id,
            difficulty: question.difficulty,
            category: question.category,
            question: question.question,
            answers,
        }
    }
}

/// Turns a sampled question set into a quiz of exactly `requested` questions.
pub fn derive_quiz<R: Rng + ?Sized>(
    sample: Vec<Question>,
    requested: u16,
    rng: &mut R,
) -> Result<Vec<DerivedQuestion>, ServerError> {
    if sample.len() < requested as usize {
        return Err(ServerError::InsufficientQuestions {
            requested,
            available: sample.len(),
        });
    }

    let quiz = sample
        .into_iter()
        .take(requested as usize)
        .map(|question| DerivedQuestion::from_question(question, rng))
        .collect();

    Ok(quiz)
}
