pub mod user_service;
pub mod render_service;
