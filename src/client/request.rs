//! Request dispatch with bearer injection and single session renewal

use super::client::ApiClient;
use crate::models::{RefreshRequest, TokenPair};
use crate::session::SessionEvent;
use crate::utils::error::{ClientError, Result};
use crate::utils::logging::Sanitization;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use url::Url;

// only the path of this URL is ever read
const SEGMENT_BASE: &str = "http://localhost/";

/// Build an API path from segments, percent-encoding each one
///
/// Identifiers are caller input: `/`, `?`, `#` and `%` inside a segment are
/// encoded, and empty, `.` or `..` segments are rejected, so an identifier
/// can never address a different endpoint.
pub(crate) fn resource_path(segments: &[&str]) -> Result<String> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.trim().is_empty() || **s == "." || **s == "..")
    {
        return Err(ClientError::validation(format!(
            "'{}' is not a valid identifier",
            bad
        )));
    }

    let mut url = Url::parse(SEGMENT_BASE)
        .map_err(|e| ClientError::config(format!("Invalid URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::config("URL cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
}

/// Description of one API call, replayable after a renewal
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the versioned base, starting with `/`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
    /// Whether a 401 may trigger a session renewal
    pub renew_on_unauthorized: bool,
}

impl ApiRequest {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            renew_on_unauthorized: true,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        self.query.extend(pairs);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    /// Credential-issuing endpoints answer 401 for bad input, never for an
    /// expired session
    pub fn without_renewal(mut self) -> Self {
        self.renew_on_unauthorized = false;
        self
    }
}

impl ApiClient {
    /// Send a request, renewing the session and retrying once on 401
    ///
    /// Returns the successful response; any other status becomes an error.
    pub async fn send(&self, request: ApiRequest) -> Result<Response> {
        let response = self.dispatch(&request).await?;

        if response.status() != StatusCode::UNAUTHORIZED || !request.renew_on_unauthorized {
            return Self::check(response).await;
        }

        let Some(refresh_token) = self.session.refresh_token().await? else {
            debug!(
                "401 from {} {} with no renewal credential stored",
                request.method, request.path
            );
            return Self::check(response).await;
        };

        debug!(
            "401 from {} {}, renewing session with {}",
            request.method,
            request.path,
            Sanitization::mask_token(&refresh_token)
        );
        self.renew_with(&refresh_token).await?;

        self.record_retry();
        let retried = self.dispatch(&request).await?;
        Self::check(retried).await
    }

    /// Exchange the stored renewal credential for a new pair
    ///
    /// On failure both credentials are cleared and
    /// [`SessionEvent::Expired`] is broadcast.
    pub async fn renew_session(&self) -> Result<TokenPair> {
        let refresh_token = self
            .session
            .refresh_token()
            .await?
            .ok_or_else(|| ClientError::no_session("No refresh token stored"))?;
        self.renew_with(&refresh_token).await
    }

    async fn renew_with(&self, refresh_token: &str) -> Result<TokenPair> {
        // storing the new pair is part of the renewal
        let result = match self.exchange_refresh_token(refresh_token).await {
            Ok(tokens) => self.session.save(&tokens).await.map(|()| tokens),
            Err(e) => Err(e),
        };
        self.record_renewal(result.is_ok());

        match result {
            Ok(tokens) => {
                self.emit(SessionEvent::Renewed);
                debug!("Session renewed");
                Ok(tokens)
            }
            Err(e) => {
                warn!("Session renewal failed: {}", e);
                if let Err(clear_err) = self.session.clear().await {
                    error!("Failed to clear session after renewal failure: {}", clear_err);
                }
                self.emit(SessionEvent::Expired);
                Err(ClientError::session_expired(e.to_string()))
            }
        }
    }

    /// `POST /auth/refresh`, sent outside the renewal path and without a
    /// bearer header
    pub(crate) async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenPair> {
        let url = self.url("/auth/refresh");
        self.record_request();

        let response = self
            .http_client
            .post(&url)
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            })
            .send()
            .await?;

        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<Response> {
        let url = self.url(&request.path);
        let mut builder = self.http_client.request(request.method.clone(), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = self.session.access_token().await? {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
        };

        debug!("{} {}", request.method, url);
        self.record_request();

        Ok(builder.send().await?)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(
            "API error: {} - {}",
            status,
            Sanitization::sanitize_log_data(&body)
        );
        Err(ClientError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and decode the JSON response
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// `GET path` decoding JSON
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        self.execute(ApiRequest::get(path).query(query)).await
    }

    /// `POST path` with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::post(path).json(body)?).await
    }

    /// `PUT path` with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::put(path).json(body)?).await
    }

    /// `DELETE path` decoding JSON
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::delete(path)).await
    }
}
