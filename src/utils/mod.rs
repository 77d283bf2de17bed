//! Utility modules for the NutriCare client
//!
//! - **error**: the client error type and status mapping
//! - **logging**: subscriber setup and credential redaction

pub mod error;
pub mod logging;

pub use error::{ClientError, Result};
pub use logging::{Sanitization, init_logging};
