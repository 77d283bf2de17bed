//! Credential endpoints

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::config::Validate;
use crate::models::auth::LoginForm;
use crate::models::{SignupRequest, TokenPair, User};
use crate::session::SessionEvent;
use crate::utils::error::Result;
use tracing::info;

/// `/auth/*`
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }
}

impl Auth<'_> {
    /// Sign in and store the returned credentials
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        let form = LoginForm {
            username: email,
            password,
        };
        let request = ApiRequest::post("/auth/login")
            .form(form.into_fields())
            .without_renewal();

        let tokens: TokenPair = self.client.execute(request).await?;
        self.establish(&tokens).await?;
        info!("Logged in as {}", email);
        Ok(tokens)
    }

    /// Create an account and store the returned credentials
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenPair> {
        request.validate()?;

        let request = ApiRequest::post("/auth/signup")
            .json(request)?
            .without_renewal();
        let tokens: TokenPair = self.client.execute(request).await?;
        self.establish(&tokens).await?;
        info!("Account created");
        Ok(tokens)
    }

    /// Exchange a renewal credential without touching the store
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        self.client.exchange_refresh_token(refresh_token).await
    }

    pub async fn current_user(&self) -> Result<User> {
        self.client.get("/auth/me", Vec::new()).await
    }

    /// Drop both credentials locally; the API keeps no session state
    pub async fn logout(&self) -> Result<()> {
        self.client.session.clear().await?;
        self.client.emit(SessionEvent::Cleared);
        info!("Logged out");
        Ok(())
    }

    async fn establish(&self, tokens: &TokenPair) -> Result<()> {
        self.client.session.save(tokens).await?;
        self.client.emit(SessionEvent::Established);
        Ok(())
    }
}
