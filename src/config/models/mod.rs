//! Configuration data models

mod api;
mod logging;
mod session;

pub use api::*;
pub use logging::*;
pub use session::*;

/// Default API base URL (versioned)
pub fn default_base_url() -> String {
    "http://localhost:8001/api/v1".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
