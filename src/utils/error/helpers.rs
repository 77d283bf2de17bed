//! Helper functions for creating and classifying errors

use super::types::ClientError;

impl ClientError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn session_expired<S: Into<String>>(message: S) -> Self {
        Self::SessionExpired(message.into())
    }

    pub fn no_session<S: Into<String>>(message: S) -> Self {
        Self::NoSession(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied(message.into())
    }

    /// Map a non-success HTTP status and its response body to an error.
    ///
    /// The API reports failures as `{"detail": "..."}`; when the body has that
    /// shape the detail string becomes the message, otherwise the raw body is
    /// used (or the canonical reason phrase if the body is empty).
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

        match status {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::Validation(message),
            500..=599 => Self::Server { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// HTTP status carried by this error, if it came from an API response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Authentication failures, including a lost session
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::SessionExpired(_) | Self::NoSession(_)
        )
    }

    /// True when the caller must sign in again
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }

    /// Transient failures a caller may choose to retry. The client itself
    /// never retries these.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Server { status, .. } => matches!(status, 502..=504),
            Self::Api { status, .. } => *status == 429,
            _ => false,
        }
    }

    /// Generic text suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionExpired(_) | Self::NoSession(_) | Self::Unauthorized(_) => {
                "Your session has ended. Please sign in again.".to_string()
            }
            Self::Validation(msg) | Self::BadRequest(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Forbidden(_) | Self::AccessDenied(_) => {
                "You do not have access to this page.".to_string()
            }
            Self::NotFound(msg) => msg.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        // FastAPI validation failures carry a list of {loc, msg, type}
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(|loc| loc.as_array())
                        .and_then(|loc| loc.last())
                        .and_then(|f| f.as_str());
                    Some(match field {
                        Some(field) => format!("{}: {}", field, msg),
                        None => msg.to_string(),
                    })
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
