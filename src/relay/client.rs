//! HTTP client for the form relay.
//!
//! This module provides a low-level wrapper that posts JSON bodies to the
//! relay endpoint with the headers the relay expects.

use super::RelayError;
use reqwest::{header, Response};
use serde::Serialize;

/// Makes requests to a single relay endpoint.
///
pub struct Client {
    pub(crate) endpoint: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given endpoint URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(endpoint: &str) -> Self {
        Client {
            endpoint: endpoint.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Send one POST request with a JSON body and return the raw response.
    /// Non-success statuses are not treated as errors here.
    ///
    pub async fn post_json<B: Serialize + ?Sized>(&self, body: &B) -> Result<Response, RelayError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}
