use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    common::error::ServerError,
    quiz::models::{Question, QuestionResult, QuizResults, UserAnswer},
};

/// Scores all answers or none. Every answer must reference one of `questions`,
/// and no question may be answered twice. An empty submission scores 0 of 0.
pub fn score_quiz(
    user_answers: &[UserAnswer],
    questions: Vec<Question>,
) -> Result<QuizResults, ServerError> {
    if questions.len() != user_answers.len() {
        return Err(not_found());
    }

    let by_id: HashMap<Uuid, Question> = questions.into_iter().map(|q| (q.id, q)).collect();

    let results = user_answers
        .iter()
        .map(|answer| -> Result<QuestionResult, ServerError> {
            let question = answer
                .parsed_id()
                .and_then(|id| by_id.get(&id))
                .ok_or_else(not_found)?;
            Ok(QuestionResult {
                question_id: question.id,
                question: question.question.clone(),
                user_answer: answer.user_answer.clone(),
                correct_answer: question.correct_answer.clone(),
                is_correct: question.correct_answer == answer.user_answer,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_questions = results.len();
    let correct_answers = results.iter().filter(|r| r.is_correct).count();
    let incorrect_answers = total_questions - correct_answers;

    Ok(QuizResults {
        results,
        correct_answers,
        incorrect_answers,
        total_questions,
        percentage: percentage(correct_answers, total_questions),
    })
}

/// Equals `round(correct / total, 2) * 100` without the float noise.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (correct as f64 * 100.0 / total as f64).round()
}

fn not_found() -> ServerError {
    ServerError::NotFound(
        "Unable to score the quiz. One or more questions could not be found for the associated `user_answers`."
            .into(),
    )
}
