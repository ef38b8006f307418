use axum::{extract::multipart::MultipartError, http::StatusCode, response::IntoResponse};
use tgrelay_proto::MISSING_FILES_MESSAGE;
use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{}", MISSING_FILES_MESSAGE)]
    MissingFiles,
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Upload(e) => e.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl UploadError {
    fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFiles => StatusCode::BAD_REQUEST,
            UploadError::Multipart(e) => e.status(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Upload(e) => e.into_response(),
            _ => (self.status_code(), "Internal server error").into_response(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> axum::response::Response {
        let body = match &self {
            UploadError::MissingFiles => self.to_string(),
            UploadError::Multipart(e) => e.body_text(),
        };
        (self.status_code(), body).into_response()
    }
}
