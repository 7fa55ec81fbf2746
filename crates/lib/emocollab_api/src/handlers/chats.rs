//! Chat history request handler.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use emocollab_core::chat::parse_user_id;
use emocollab_core::models::ChatMessage;
use tracing::{debug, warn};

use crate::AppState;
use crate::error::AppResult;

/// `GET /api/chats/{user_id}` — chat history for a user.
///
/// An id that is not an integer (including one that does not percent-decode
/// to UTF-8) is read as user `0` unless strict mode is on, in which case it
/// is rejected with 400.
pub async fn chat_history_handler(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let raw_user_id = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!(%rejection, "user id segment did not decode");
            last_segment(&uri).to_string()
        }
    };

    let user_id = match parse_user_id(&raw_user_id) {
        Ok(id) => id,
        Err(e) if state.config.strict_user_id => return Err(e.into()),
        Err(e) => {
            warn!(raw_user_id = %raw_user_id, "{e}, falling back to user 0");
            0
        }
    };

    Ok(Json(state.chats.history(user_id)))
}

/// Final path segment, still percent-encoded.
fn last_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_keeps_encoding() {
        let uri: Uri = "/api/chats/%FF".parse().unwrap();
        assert_eq!(last_segment(&uri), "%FF");
    }
}
