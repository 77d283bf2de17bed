//! Configuration validation

use super::models::*;
use crate::utils::error::{ClientError, Result};
use tracing::{debug, warn};
use url::Url;

/// Validation trait for configuration sections
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Check that `url_str` parses and uses an http(s) scheme
pub(crate) fn validate_http_url(url_str: &str, context: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|e| {
        ClientError::config(format!("{} has invalid URL format: {}", context, e))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ClientError::config(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(ClientError::config(format!(
            "{} URL must have a valid host",
            context
        )));
    }

    Ok(url)
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating API configuration");

        let url = validate_http_url(&self.base_url, "api.base_url")?;

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ClientError::config(
                "api.base_url must not carry a query string or fragment",
            ));
        }

        if url.scheme() == "http" && !is_local_host(url.host_str().unwrap_or_default()) {
            warn!(
                "api.base_url uses plain http for a non-local host; credentials will travel unencrypted"
            );
        }

        if self.timeout == 0 {
            return Err(ClientError::config("api.timeout must be greater than 0"));
        }

        if self.timeout > 600 {
            return Err(ClientError::config(
                "api.timeout must not exceed 600 seconds",
            ));
        }

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        if let SessionConfig::File { path } = self {
            if path.as_os_str().is_empty() {
                return Err(ClientError::config("session.path must not be empty"));
            }
            if path.is_dir() {
                return Err(ClientError::config(format!(
                    "session.path {} is a directory",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ClientError::config("logging.level must not be empty"));
        }
        Ok(())
    }
}

fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1" | "[::1]")
}
