//! Third-party form relay integration.
//!
//! The relay is an external endpoint that forwards submitted contact data to
//! an inbox. The contract is a single JSON POST; any 2xx status is a success
//! and the response body is ignored.

mod client;
mod error;

pub use error::RelayError;

use client::Client;
use log::*;
use serde::Serialize;

/// Relay used when neither the config nor the command line names one.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/mojnbgao";

/// Body posted to the relay.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Responsible for delivering contact messages to the relay endpoint.
///
pub struct Relay {
    client: Client,
}

impl Relay {
    /// Returns a new instance posting to the given endpoint.
    ///
    pub fn new(endpoint: &str) -> Relay {
        debug!("Initializing relay client for endpoint {}...", endpoint);
        Relay {
            client: Client::new(endpoint),
        }
    }

    /// Deliver a message with a single attempt.
    ///
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        debug!("Posting contact message to relay...");
        let response = self.client.post_json(message).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Relay responded with status {}", status);
            return Err(RelayError::Rejected {
                status: status.as_u16(),
            });
        }
        info!("Relay accepted contact message (status {}).", status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_success() -> Result<(), RelayError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/f/test")
                    .header("content-type", "application/json")
                    .header("accept", "application/json")
                    .json_body(json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "message": "Hello"
                    }));
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let relay = Relay::new(&server.url("/f/test"));
        relay.submit(&message()).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn submit_accepts_any_2xx() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/test");
                then.status(204);
            })
            .await;

        let relay = Relay::new(&server.url("/f/test"));
        assert!(relay.submit(&message()).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/test");
                then.status(500);
            })
            .await;

        let relay = Relay::new(&server.url("/f/test"));
        let result = relay.submit(&message()).await;
        assert!(matches!(result, Err(RelayError::Rejected { status: 500 })));
        // Single attempt, no retry.
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn submit_transport_error() {
        // Nothing listens on the discard port.
        let relay = Relay::new("http://127.0.0.1:9/f/test");
        let result = relay.submit(&message()).await;
        assert!(matches!(result, Err(RelayError::HttpRequest(_))));
    }
}
