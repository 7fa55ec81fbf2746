//! Domain models.

pub mod chat;
pub mod face;
pub mod user;

pub use chat::ChatMessage;
pub use face::{EmotionScores, FaceAnalysisResult};
pub use user::{Role, User};
