use axum::http::StatusCode;
use thiserror::Error;

pub const IMPORT_FAILED: &str = "Could not import data. Please choose a valid export JSON file.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        Self::bad_request(format!("{IMPORT_FAILED} ({err})"))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("file is not UTF-8 text: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("expected a JSON object at the top level, found {0}")]
    InvalidShape(&'static str),
}
