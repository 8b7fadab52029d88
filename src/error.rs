use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Meal not found: {0}")]
    MealNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No valid meals found within budget")]
    NoMealsInBudget,

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    pub fn log_safe(&self) -> String {
        match self {
            Error::MealNotFound(id) => format!("Meal not found: {id}"),
            Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
            Error::NoMealsInBudget => "No valid meals found within budget".to_string(),
            Error::Dataset(msg) => format!("Dataset error: {msg}"),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }

    /// Status code the HTTP layer reports for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MealNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) | Error::NoMealsInBudget => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Domain results are not faults, keep them out of the error log
        if status.is_server_error() {
            tracing::error!("Request error: {}", self.log_safe());
        } else {
            tracing::debug!("Request rejected: {}", self.log_safe());
        }

        let error_message = match &self {
            Error::MealNotFound(_) => "Meal not found".to_string(),
            Error::InvalidInput(msg) => msg.clone(),
            Error::NoMealsInBudget => self.to_string(),
            _ => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
