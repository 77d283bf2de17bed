//! Mock NutriCare API

use nutricare_client::config::ApiConfig;
use nutricare_client::session::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY};
use nutricare_client::{ApiClient, AppContext, SessionStore};
use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures;

/// A `wiremock` server speaking the `/api/v1` surface
pub struct MockApi {
    pub server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api/v1", self.server.uri())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            timeout: 5,
            ..Default::default()
        }
    }

    /// Client over the given store
    pub fn client(&self, store: Arc<dyn SessionStore>) -> ApiClient {
        ApiClient::new(self.api_config(), store).expect("valid test config")
    }

    /// Client whose memory store already holds a token pair
    pub async fn client_with_tokens(&self, access: &str, refresh: &str) -> ApiClient {
        let store = Arc::new(MemoryStore::new());
        store.set(ACCESS_TOKEN_KEY, access).await.unwrap();
        store.set(REFRESH_TOKEN_KEY, refresh).await.unwrap();
        self.client(store)
    }

    pub async fn context_with_tokens(&self, access: &str, refresh: &str) -> AppContext {
        AppContext::new(self.client_with_tokens(access, refresh).await)
    }

    pub async fn mount_me(&self, user: &Value) {
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_login(&self, access: &str, refresh: &str) {
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::tokens(access, refresh)),
            )
            .mount(&self.server)
            .await;
    }

    /// Refresh endpoint that must be hit exactly `times` times
    pub async fn mount_refresh(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .respond_with(response)
            .expect(times)
            .mount(&self.server)
            .await;
    }
}
