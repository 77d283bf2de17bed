//! Credential types

use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Access + renewal credential pair returned by login, signup and refresh
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl TokenPair {
    pub fn new<A: Into<String>, R: Into<String>>(access_token: A, refresh_token: R) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: default_token_type(),
        }
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Body of `POST /auth/refresh`
#[derive(Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Form fields of `POST /auth/login` (OAuth2 password form)
#[derive(Clone)]
pub(crate) struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl LoginForm<'_> {
    pub(crate) fn into_fields(self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.username.to_string()),
            ("password".to_string(), self.password.to_string()),
        ]
    }
}
