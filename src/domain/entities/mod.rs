//! Core data carried between the frontend and the backend API.

mod query;
mod token;
mod user;

pub use query::{QueryAnswer, QueryRequest};
pub use token::{AccessToken, Credentials, TokenGrant};
pub use user::UserProfile;
