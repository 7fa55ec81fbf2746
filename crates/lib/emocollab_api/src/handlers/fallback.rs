//! Catch-all for unmatched routes.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Answers any unknown method/path pair with a JSON 404.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {method} {}", uri.path()))
}
