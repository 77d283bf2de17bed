//! # NutriCare client
//!
//! Session-aware client for the NutriCare nutrition-coaching API, plus the
//! role-based route gating a front end needs on top of it.
//!
//! ## Features
//!
//! - **Bearer injection**: the stored access credential rides on every request
//! - **Silent renewal**: a 401 triggers one refresh and one retry; a failed
//!   refresh clears the session and broadcasts [`SessionEvent::Expired`]
//! - **Typed endpoints**: patients, nutritionists, meal plans, progress,
//!   subscriptions, assignments and administration
//! - **Route gating**: role-restricted screens with redirects to login or
//!   the role dashboard
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutricare_client::{AppContext, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load(None).await?;
//!     let mut app = AppContext::from_config(&config)?;
//!     app.bootstrap().await?;
//!
//!     app.login("pat@example.com", "secret123").await?;
//!     let plan = app.client().patients().current_meal_plan().await?;
//!     println!("{} kcal this week", plan.totals().calories);
//!
//!     let nav = app.navigate("/admin")?;
//!     println!("{:?}", nav.outcome);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod routing;
pub mod session;
pub mod utils;

// Re-export main types
pub use app::{AppContext, AuthState, Navigation};
pub use client::{ApiClient, ApiRequest, ClientStats};
pub use config::ClientConfig;
pub use routing::{GuardOutcome, Route};
pub use session::{FileStore, MemoryStore, Session, SessionEvent, SessionStore};
pub use utils::error::{ClientError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build metadata baked in by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
    }
}
