//! Error handling for the NutriCare client
//!
//! This module defines the error type shared by the session client, the
//! session stores, configuration loading and route gating.

mod helpers;
mod types;

pub use types::{ClientError, Result};
