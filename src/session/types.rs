//! Session keys and lifecycle events

/// Storage key of the access credential
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the renewal credential
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Broadcast whenever the stored credentials change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Login or signup stored a fresh pair
    Established,
    /// A renewal replaced the pair
    Renewed,
    /// Renewal failed and the pair was dropped; the user must sign in again
    Expired,
    /// Explicit logout
    Cleared,
}

impl SessionEvent {
    /// Whether the application should send the user to the login screen
    pub fn requires_login(&self) -> bool {
        matches!(self, SessionEvent::Expired | SessionEvent::Cleared)
    }
}
