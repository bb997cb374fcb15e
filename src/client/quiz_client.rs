use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{
    category::models::Category,
    common::models::{ApiFailure, ApiResponse, ApiResult},
    quiz::models::{DerivedQuestion, QuizRequest, QuizResults, UserAnswer},
};

#[derive(Debug, Serialize)]
struct ScoreBody<'a> {
    user_answers: &'a [UserAnswer],
}

/// Talks to the quiz api and folds every outcome into an `ApiResult`.
#[derive(Debug, Clone)]
pub struct QuizClient {
    client: Client,
    domain: String,
}

impl QuizClient {
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            domain,
        }
    }

    pub async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        let request = self.client.get(format!("{}/api/categories", self.domain));
        self.send(request).await
    }

    pub async fn get_quiz(&self, quiz: &QuizRequest) -> ApiResult<Vec<DerivedQuestion>> {
        let amount = quiz.amount.to_string();
        let request = self
            .client
            .get(format!("{}/api/quiz", self.domain))
            .query(&[
                ("amount", amount.as_str()),
                ("category", quiz.category.as_str()),
                ("difficulty", quiz.difficulty.as_str()),
            ]);

        self.send(request).await
    }

    pub async fn score_quiz(&self, user_answers: &[UserAnswer]) -> ApiResult<QuizResults> {
        let request = self
            .client
            .post(format!("{}/api/quiz/score", self.domain))
            .json(&ScoreBody { user_answers });

        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(|e| {
            error!("QuizClient request failed: {}", e);
            ApiFailure::server_error()
        })?;

        debug!("QuizClient received status {}", response.status());
        let envelope = response.json::<ApiResponse<T>>().await.map_err(|e| {
            error!("QuizClient failed to decode response: {}", e);
            ApiFailure::server_error()
        })?;

        envelope.into_result()
    }
}
