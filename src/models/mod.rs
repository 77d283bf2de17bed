//! Wire types for the NutriCare API
//!
//! Request payloads implement [`Validate`](crate::config::Validate) with the
//! same bounds the API enforces, so obviously bad input never leaves the
//! process.

pub mod admin;
pub mod assignment;
pub mod auth;
pub mod meal_plan;
pub mod nutritionist;
pub mod pagination;
pub mod patient;
pub mod progress;
pub mod subscription;
pub mod timestamp;
pub mod user;
mod validation;

pub use admin::*;
pub use assignment::*;
pub use auth::*;
pub use meal_plan::*;
pub use nutritionist::*;
pub use pagination::*;
pub use patient::*;
pub use progress::*;
pub use subscription::*;
pub use user::*;

/// Plain `{"message": "..."}` acknowledgement
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
