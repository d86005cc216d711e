#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod admin_submission;

#[cfg(feature = "web")]
pub mod admin_user;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod evaluation;

#[cfg(feature = "web")]
pub mod openai;

#[cfg(feature = "web")]
pub mod submission;

#[cfg(feature = "web")]
pub mod test_data;
