use actix_web::{http::StatusCode, HttpResponse};
use nudge_api_structs::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NudgeError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
    #[error("{error}. Error message: `{details}`")]
    StorageError { error: String, details: String },
}

impl actix_web::error::ResponseError for NudgeError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StorageError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::InternalError => ErrorResponse::new("Internal server error"),
            Self::BadClientData(msg) | Self::NotFound(msg) => ErrorResponse::new(msg.as_str()),
            Self::StorageError { error, details } => {
                ErrorResponse::with_details(error.as_str(), details.as_str())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
