//! Request handlers.

pub mod chats;
pub mod face;
pub mod fallback;
pub mod health;
