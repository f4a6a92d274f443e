//! Shared HTTP client for the fichajesPi backend.
//!
//! One `ApiClient` is built per command invocation; all endpoint modules
//! go through its JSON helpers so status handling and auth stay in one
//! place. Non-2xx responses surface as `AppError::Api` carrying the status
//! code and the raw response body, which the command handlers show to the
//! user the way the browser client shows its error toasts.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        if cfg.api_url.trim().is_empty() {
            return Err(AppError::InvalidBaseUrl("(empty)".into()));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_default()
            .trim()
            .to_string();
        let message = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            message
        };
        Err(AppError::Api { status: status.as_u16(), message })
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.authorize(self.http.get(self.url(path))).send()?;
        Ok(Self::check(response)?.json()?)
    }

    pub fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    /// POST where only the status matters.
    pub fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    /// POST with an empty JSON object body (admin password reset).
    pub fn post_empty(&self, path: &str) -> AppResult<()> {
        self.post_unit(path, &serde_json::json!({}))
    }

    pub fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> AppResult<()> {
        let response = self
            .authorize(self.http.put(self.url(path)))
            .json(body)
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    pub fn delete(&self, path: &str) -> AppResult<()> {
        let response = self.authorize(self.http.delete(self.url(path))).send()?;
        Self::check(response)?;
        Ok(())
    }
}
