pub mod admin;
pub mod api;
pub mod auth;
pub mod export;
pub mod format;
pub mod openai;
pub mod submission;
