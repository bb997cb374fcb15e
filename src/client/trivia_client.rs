use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::{client::client_error::ClientError, quiz::models::Difficulty};

#[derive(Debug, Deserialize, Clone)]
pub struct TriviaCategory {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    trivia_categories: Vec<TriviaCategory>,
}

/// A question as Open Trivia DB serves it. Text is HTML-entity encoded.
#[derive(Debug, Deserialize, Clone)]
pub struct TriviaQuestion {
    pub difficulty: Difficulty,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionListResponse {
    response_code: u8,
    results: Vec<TriviaQuestion>,
}

/// Client for the Open Trivia DB api. One request per 5 seconds per IP.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    client: Client,
    domain: String,
}

impl TriviaClient {
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            domain,
        }
    }

    pub async fn get_categories(&self) -> Result<Vec<TriviaCategory>, ClientError> {
        let url = format!("{}/api_category.php", self.domain);
        debug!("TriviaClient sending request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("TriviaClient request failed: {} - {}", status, body);
            return Err(ClientError::ApiError(status, body));
        }

        let list = response.json::<CategoryListResponse>().await?;
        Ok(list.trivia_categories)
    }

    /// Multiple choice questions only. The api caps `amount` at 50.
    pub async fn get_questions(
        &self,
        category_id: u32,
        amount: u8,
    ) -> Result<Vec<TriviaQuestion>, ClientError> {
        let url = format!(
            "{}/api.php?amount={}&type=multiple&category={}",
            self.domain, amount, category_id
        );
        debug!("TriviaClient sending request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("TriviaClient request failed: {} - {}", status, body);
            return Err(ClientError::ApiError(status, body));
        }

        let list = response.json::<QuestionListResponse>().await?;
        if list.response_code != 0 {
            return Err(ClientError::ResponseCode(list.response_code));
        }

        Ok(list.results)
    }
}
