use uuid::Uuid;

use crate::{
    category::models::Category,
    common::models::{ApiResult, ResponseCode},
    quiz::models::{DerivedQuestion, QuizResults, UserAnswer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Categories,
    Quiz,
    Results,
}

/// Everything a quiz front end renders from.
#[derive(Debug, Default, Clone)]
pub struct QuizState {
    pub categories: Option<Vec<Category>>,
    pub categories_error: Option<String>,
    pub quiz: Option<Vec<DerivedQuestion>>,
    pub quiz_error: Option<String>,
    pub user_answers: Vec<UserAnswer>,
    pub results: Option<QuizResults>,
    pub results_error: Option<String>,
    pending: Option<PendingRequest>,
}

#[derive(Debug)]
pub enum Action {
    CategoriesRequested,
    CategoriesLoaded(ApiResult<Vec<Category>>),
    QuizRequested,
    QuizLoaded(ApiResult<Vec<DerivedQuestion>>),
    AnswerSelected { question_id: Uuid, answer: String },
    ResultsRequested,
    ResultsLoaded(ApiResult<QuizResults>),
    Reset,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    /// Applies one action. Returns false when the action was ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::CategoriesRequested => {
                if !self.begin(PendingRequest::Categories) {
                    return false;
                }
                self.categories_error = None;
            }
            Action::CategoriesLoaded(result) => {
                self.pending = None;
                match result {
                    Ok(categories) => self.categories = Some(categories),
                    Err(_) => {
                        self.categories = None;
                        self.categories_error = Some("Unable to get quiz categories.".into());
                    }
                }
            }
            Action::QuizRequested => {
                if !self.begin(PendingRequest::Quiz) {
                    return false;
                }
                self.user_answers.clear();
                self.results = None;
                self.results_error = None;
                self.quiz_error = None;
            }
            Action::QuizLoaded(result) => {
                self.pending = None;
                match result {
                    Ok(quiz) => self.quiz = Some(quiz),
                    Err(failure) => {
                        self.quiz = None;
                        self.quiz_error = Some(match failure.code {
                            ResponseCode::InsufficientQuestions => failure.message,
                            _ => "Unable to get quiz.".into(),
                        });
                    }
                }
            }
            Action::AnswerSelected {
                question_id,
                answer,
            } => {
                let known = self
                    .quiz
                    .as_ref()
                    .is_some_and(|quiz| quiz.iter().any(|q| q.id == question_id));
                if !known || self.results.is_some() {
                    return false;
                }

                match self
                    .user_answers
                    .iter_mut()
                    .find(|a| a.parsed_id() == Some(question_id))
                {
                    Some(existing) => existing.user_answer = answer,
                    None => self.user_answers.push(UserAnswer {
                        question_id: question_id.to_string(),
                        user_answer: answer,
                    }),
                }
            }
            Action::ResultsRequested => {
                if self.quiz.is_none() || !self.begin(PendingRequest::Results) {
                    return false;
                }
                self.results_error = None;
            }
            Action::ResultsLoaded(result) => {
                self.pending = None;
                match result {
                    Ok(results) => self.results = Some(results),
                    Err(_) => {
                        self.results = None;
                        self.results_error = Some("Unable to get quiz results.".into());
                    }
                }
            }
            Action::Reset => {
                let categories = self.categories.take();
                let categories_error = self.categories_error.take();
                *self = Self {
                    categories,
                    categories_error,
                    ..Self::default()
                };
            }
        }

        true
    }

    /// True once every question of the current quiz has an answer.
    pub fn is_complete(&self) -> bool {
        match &self.quiz {
            Some(quiz) => quiz.len() == self.user_answers.len(),
            None => false,
        }
    }

    fn begin(&mut self, request: PendingRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(request);
        true
    }
}
