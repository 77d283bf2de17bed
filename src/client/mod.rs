//! NutriCare API client
//!
//! [`ApiClient`] attaches the stored access credential to every request and
//! renews the session once when the API answers 401. Endpoint groups are
//! exposed through borrowed views such as [`ApiClient::patients`].

mod admin;
mod assignments;
mod auth;
mod client;
mod meal_plans;
mod nutritionists;
mod patients;
mod progress;
mod request;
mod stats;
mod subscriptions;
mod users;


pub use admin::Admin;
pub use assignments::Assignments;
pub use auth::Auth;
pub use client::ApiClient;
pub use meal_plans::MealPlans;
pub use nutritionists::Nutritionists;
pub use patients::Patients;
pub use progress::Progress;
pub use request::{ApiRequest, RequestBody};
pub use stats::ClientStats;
pub use subscriptions::Subscriptions;
pub use users::Users;
