use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::domain::error::AppError;

pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse GPT output";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Maps domain errors onto the wire contract. Only validation messages and
/// raw model output reach the client; everything else is a generic 500.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(msg) => json!({ "error": msg }),
            AppError::ParseError { raw, .. } => json!({
                "error": PARSE_FAILURE_MESSAGE,
                "raw": raw,
            }),
            AppError::NotFound(_) => json!({ "error": "Not found" }),
            _ => json!({ "error": SERVER_ERROR_MESSAGE }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
