//! Common test utilities for nutricare-client
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{MockApi, fixtures::UserFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let api = MockApi::start().await;
//!     api.mount_me(&UserFactory::patient()).await;
//!     let client = api.client_with_tokens("a1", "r1").await;
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod server;

pub use server::MockApi;
