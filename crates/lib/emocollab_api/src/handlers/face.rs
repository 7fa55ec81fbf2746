//! Face analysis request handler.

use axum::Json;
use axum::extract::State;
use emocollab_core::models::FaceAnalysisResult;
use tracing::debug;

use crate::AppState;

/// `POST /api/face/analyze` — request body is ignored.
pub async fn analyze_face_handler(State(state): State<AppState>) -> Json<FaceAnalysisResult> {
    let result = state.faces.analyze();
    debug!(stress_level = result.stress_level, "face analysis generated");
    Json(result)
}
