//! Route paths served by the API.

pub const GET_HEALTHZ: &str = "/healthz";
pub const GET_API_CHATS_USER_ID: &str = "/api/chats/{user_id}";
pub const POST_API_FACE_ANALYZE: &str = "/api/face/analyze";
