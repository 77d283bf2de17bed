//! Client-side credential persistence
//!
//! A session is the access/renewal credential pair kept in a
//! [`SessionStore`]. The store is injected into the API client so tests and
//! the CLI can choose between process-local and on-disk persistence.

mod file_store;
mod store;
mod types;


pub use file_store::FileStore;
pub use store::{MemoryStore, SessionStore};
pub use types::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SessionEvent};

use crate::config::SessionConfig;
use crate::models::TokenPair;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Build the store selected by configuration
pub fn open_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match config {
        SessionConfig::Memory => Arc::new(MemoryStore::new()),
        SessionConfig::File { path } => Arc::new(FileStore::new(path.clone())),
    }
}

/// Typed view over a [`SessionStore`]
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// In-memory session, mostly for tests
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub async fn access_token(&self) -> Result<Option<String>> {
        self.store.get(ACCESS_TOKEN_KEY).await
    }

    pub async fn refresh_token(&self) -> Result<Option<String>> {
        self.store.get(REFRESH_TOKEN_KEY).await
    }

    /// Both credentials, or `None` unless both are present
    pub async fn tokens(&self) -> Result<Option<TokenPair>> {
        let access = self.access_token().await?;
        let refresh = self.refresh_token().await?;
        Ok(match (access, refresh) {
            (Some(access), Some(refresh)) => Some(TokenPair::new(access, refresh)),
            _ => None,
        })
    }

    /// Replace both credentials
    pub async fn save(&self, tokens: &TokenPair) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token).await?;
        self.store
            .set(REFRESH_TOKEN_KEY, &tokens.refresh_token)
            .await?;
        debug!("Session credentials stored");
        Ok(())
    }

    /// Remove both credentials
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN_KEY).await?;
        self.store.remove(REFRESH_TOKEN_KEY).await?;
        debug!("Session credentials cleared");
        Ok(())
    }

    /// True when an access credential is stored
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.access_token().await?.is_some())
    }
}
