//! Request and renewal counters

use super::client::ApiClient;
use serde::Serialize;
use tracing::debug;

/// Counters kept by [`ApiClient`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    /// HTTP requests dispatched, retries and renewals included
    pub requests: u64,
    pub renewals_attempted: u64,
    pub renewals_failed: u64,
    /// Requests replayed after a successful renewal
    pub retries: u64,
}

impl ApiClient {
    pub(crate) fn record_request(&self) {
        self.stats.write().requests += 1;
    }

    pub(crate) fn record_renewal(&self, succeeded: bool) {
        let mut stats = self.stats.write();
        stats.renewals_attempted += 1;
        if !succeeded {
            stats.renewals_failed += 1;
        }
        debug!(
            "Renewal recorded: attempted={}, failed={}",
            stats.renewals_attempted, stats.renewals_failed
        );
    }

    pub(crate) fn record_retry(&self) {
        self.stats.write().retries += 1;
    }
}
