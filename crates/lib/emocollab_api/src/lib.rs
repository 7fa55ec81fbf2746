//! # emocollab_api
//!
//! HTTP API library for EmoCollab.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use emocollab_core::chat::ChatService;
use emocollab_core::face::FaceService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chats, face, fallback, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Chat history lookup.
    pub chats: ChatService,
    /// Face analysis.
    pub faces: FaceService,
}

impl AppState {
    /// State with the wall-clock chat service and default face service.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            chats: ChatService::default(),
            faces: FaceService::new(),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_HEALTHZ, get(health::healthz_handler))
        .route(routes::GET_API_CHATS_USER_ID, get(chats::chat_history_handler))
        .route(routes::POST_API_FACE_ANALYZE, post(face::analyze_face_handler))
        .fallback(fallback::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
