use axum::{Json, http::StatusCode, response::IntoResponse};
use rust_xlsxwriter::XlsxError;
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Spreadsheet error: {0}")]
    Export(#[from] XlsxError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Error internals never reach the client.
        let body = ApiErrorBody {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse { error: body }),
        )
            .into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
