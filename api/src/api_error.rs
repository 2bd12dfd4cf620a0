use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paper_synthesis::{AnalysisError, ErrorResponse};

pub const TOO_FEW_PAPERS_MESSAGE: &str = "Please upload 2 or 3 PDF files.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred during analysis.";

#[derive(Debug)]
pub enum ApiError {
    /// A 4xx the client can fix (too few papers, bad or oversized upload).
    /// The message is shown to the user.
    Rejected { status: StatusCode, message: String },
    /// Anything else. Logged in full, reported to the client opaquely.
    Internal(AnalysisError),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        if err.is_validation() {
            ApiError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: TOO_FEW_PAPERS_MESSAGE.to_string(),
            }
        } else {
            ApiError::Internal(err)
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Rejected { status, message } => {
                log::warn!("Rejected analysis request: {}", message);
                (status, message)
            }
            ApiError::Internal(err) => {
                log::error!("--- BACKEND CRASH --- {}", err);
                if let Some(source) = std::error::Error::source(&err) {
                    log::error!("caused by: {}", source);
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
