//! Application context
//!
//! [`AppContext`] owns the API client and the authentication state, and is
//! what a front end talks to: it signs users in and out, guards navigation
//! and turns errors into something presentable.

mod auth_state;


pub use auth_state::AuthState;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::models::{SignupRequest, TokenPair, User};
use crate::routing::{GuardOutcome, MAX_REDIRECTS, NavItem, Route, menu_for, resolve};
use crate::session::SessionEvent;
use crate::utils::error::{ClientError, Result};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

/// Outcome of [`AppContext::navigate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub requested: String,
    /// Redirects followed, in order
    pub redirects: Vec<Route>,
    /// `Render`, `Loading` or `NotFound`
    pub outcome: GuardOutcome,
}

impl Navigation {
    /// The screen that ends up rendered, if any
    pub fn rendered(&self) -> Option<&Route> {
        match &self.outcome {
            GuardOutcome::Render(route) => Some(route),
            _ => None,
        }
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Composition root for a signed-in (or signing-in) user
#[derive(Debug)]
pub struct AppContext {
    client: ApiClient,
    state: AuthState,
    events: broadcast::Receiver<SessionEvent>,
}

impl AppContext {
    pub fn new(client: ApiClient) -> Self {
        let events = client.subscribe();
        Self {
            client,
            state: AuthState::default(),
            events,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Restore the user from stored credentials
    ///
    /// Credentials the API rejects are cleared. Any other failure (network,
    /// server) keeps them and is returned. Loading always ends.
    pub async fn bootstrap(&mut self) -> Result<Option<&User>> {
        let has_token = self.client.session().is_authenticated().await;
        let user = match has_token {
            Ok(true) => match self.client.auth().current_user().await {
                Ok(user) => {
                    debug!("Session restored for {}", user.email);
                    Some(user)
                }
                Err(e) if e.is_auth_error() => {
                    warn!("Stored session rejected: {}", e);
                    if let Err(clear_err) = self.client.session().clear().await {
                        error!("Failed to clear stored session: {}", clear_err);
                    }
                    None
                }
                Err(e) => {
                    warn!("Could not restore session, keeping credentials: {}", e);
                    self.drain_events();
                    self.state = AuthState::signed_out();
                    return Err(e);
                }
            },
            Ok(false) => None,
            Err(e) => {
                self.state = AuthState::signed_out();
                return Err(e);
            }
        };

        self.drain_events();
        self.state = AuthState {
            user,
            loading: false,
        };
        Ok(self.state.user.as_ref())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        self.client.auth().login(email, password).await?;
        self.load_user().await
    }

    pub async fn signup(&mut self, request: &SignupRequest) -> Result<&User> {
        self.client.auth().signup(request).await?;
        self.load_user().await
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.client.auth().logout().await?;
        self.drain_events();
        self.state = AuthState::signed_out();
        Ok(())
    }

    /// Renew the session explicitly
    pub async fn refresh_token(&mut self) -> Result<TokenPair> {
        let result = self.client.renew_session().await;
        self.drain_events();
        result
    }

    /// Guard `path` and follow redirects to the final screen
    pub fn navigate(&mut self, path: &str) -> Result<Navigation> {
        self.drain_events();

        let mut redirects = Vec::new();
        let mut current = path.to_string();
        loop {
            match resolve(&current, self.state.access()) {
                GuardOutcome::Redirect(route) => {
                    if redirects.len() >= MAX_REDIRECTS {
                        return Err(ClientError::access_denied(format!(
                            "Too many redirects while opening {}",
                            path
                        )));
                    }
                    debug!("{} -> {}", current, route);
                    current = route.path();
                    redirects.push(route);
                }
                outcome => {
                    return Ok(Navigation {
                        requested: path.to_string(),
                        redirects,
                        outcome,
                    });
                }
            }
        }
    }

    /// Menu of the signed-in user
    pub fn menu(&self) -> &'static [NavItem] {
        self.state.role().map(menu_for).unwrap_or_default()
    }

    /// React to a failed call and return a message for the user
    ///
    /// A lost session drops the user so the next navigation lands on the
    /// login screen.
    pub fn handle_error(&mut self, err: &ClientError) -> String {
        if err.is_session_expired() {
            info!("Session expired, signing out");
            self.state = AuthState::signed_out();
        } else {
            error!("Request failed: {}", err);
        }
        err.user_message()
    }

    async fn load_user(&mut self) -> Result<&User> {
        let user = self.client.auth().current_user().await?;
        self.drain_events();
        self.state = AuthState::signed_out();
        Ok(self.state.user.insert(user))
    }

    /// Apply session events broadcast by the client
    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) if event.requires_login() => {
                    debug!("Session event {:?}, dropping user", event);
                    self.state.user = None;
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Missed {} session events", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }
}
