pub mod admin;
mod business;
mod home;
mod login;
mod mypage;
mod not_found;
mod personal;
mod signup;

pub use business::Business;
pub use home::Home;
pub use login::Login;
pub use mypage::{MyPage, SubmissionDetail};
pub use not_found::NotFound;
pub use personal::{Personal, PersonalComplete};
pub use signup::Signup;
