//! Core API client

use super::stats::ClientStats;
use crate::config::{ApiConfig, ClientConfig, Validate};
use crate::session::{Session, SessionEvent, SessionStore, open_store};
use crate::utils::error::{ClientError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::info;

const DEFAULT_USER_AGENT: &str = concat!("nutricare-client/", env!("CARGO_PKG_VERSION"));
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Session-aware client for the NutriCare API
///
/// Cloning is cheap: clones share the HTTP connection pool, the session
/// store, the statistics and the event channel.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) config: ApiConfig,
    pub(crate) http_client: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) stats: Arc<RwLock<ClientStats>>,
    pub(crate) events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Create a client around an injected session store
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        config.validate()?;

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {}", e)))?;

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(
            "ApiClient created for {} (timeout {}s)",
            config.normalized_base_url(),
            config.timeout
        );

        Ok(Self {
            config,
            http_client,
            session: Session::new(store),
            stats: Arc::new(RwLock::new(ClientStats::default())),
            events,
        })
    }

    /// Create a client with the store selected by `config.session`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api.clone(), open_store(&config.session))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.normalized_base_url()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Receive session lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the request counters
    pub fn stats(&self) -> ClientStats {
        self.stats.read().clone()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // no receivers is fine
        let _ = self.events.send(event);
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
