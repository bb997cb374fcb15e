use serde::{Deserialize, Serialize};

/// Codes shared by the server and the client layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
    InsufficientQuestions,
}

/// Uniform response envelope: `{ code, data, message, success }`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub code: ResponseCode,
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: ResponseCode::Ok,
            data: Some(data),
            message: "Success.".to_string(),
            success: true,
        }
    }

    pub fn failure(code: ResponseCode, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
            success: false,
        }
    }

    /// Collapses the envelope into a tagged result.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiFailure {
                code: self.code,
                message: "Response did not contain any data.".to_string(),
            }),
            (false, _) => Err(ApiFailure {
                code: self.code,
                message: self.message,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: ResponseCode,
    pub message: String,
}

impl ApiFailure {
    pub fn server_error() -> Self {
        Self {
            code: ResponseCode::InternalServerError,
            message: "Server error.".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiFailure>;
