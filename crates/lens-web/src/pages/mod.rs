//! Top-level pages

mod home;
mod login;
mod signup;

pub use home::HomePage;
pub use login::{submit_fields, submit_login, LoginPage};
pub use signup::SignupPage;
