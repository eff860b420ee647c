use crate::config::ApiConfig;
use crate::domain::ports::ImageGenerator;
use crate::utils::error::{InviteError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Bannerbear-backed image generation. Uses the synchronous endpoint, so a
/// successful response already carries the rendered image URL.
pub struct BannerbearClient {
    client: Client,
    endpoint: String,
    api_key: String,
    template_id: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    image_url: String,
}

impl BannerbearClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.bannerbear_api_url.clone(),
            api_key: config.bannerbear_api_key.clone(),
            template_id: config.bannerbear_template_id.clone(),
        }
    }
}

#[async_trait]
impl ImageGenerator for BannerbearClient {
    async fn create_invite_image(&self, recipient_name: &str) -> Result<String> {
        let payload = serde_json::json!({
            "template": self.template_id,
            "modifications": [
                {
                    "name": "recipient_name",
                    "text": recipient_name,
                }
            ],
        });

        tracing::debug!("Requesting invite image from {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("❌ Image request failed ({}): {}", status, body);
            return Err(InviteError::ImageError {
                recipient: recipient_name.to_string(),
                message: format!("{}: {}", status, body),
            });
        }

        let image: ImageResponse = response.json().await?;
        tracing::info!("Image created for {}: {}", recipient_name, image.image_url);
        Ok(image.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WHATSAPP_API_URL;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> BannerbearClient {
        BannerbearClient::new(&ApiConfig {
            bannerbear_api_key: "bb_test_key".to_string(),
            bannerbear_template_id: "template123".to_string(),
            bannerbear_api_url: server.url("/v2/images"),
            whatsapp_token: "wa_token".to_string(),
            whatsapp_phone_number_id: "555123".to_string(),
            whatsapp_api_url: DEFAULT_WHATSAPP_API_URL.to_string(),
        })
    }

    #[tokio::test]
    async fn test_returns_image_url_on_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/images")
                .header("authorization", "Bearer bb_test_key")
                .json_body(serde_json::json!({
                    "template": "template123",
                    "modifications": [
                        {"name": "recipient_name", "text": "Alice"}
                    ],
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "completed",
                    "image_url": "https://img/x.png",
                }));
        });

        let client = client_for(&server);
        let url = client.create_invite_image("Alice").await.unwrap();

        api_mock.assert();
        assert_eq!(url, "https://img/x.png");
    }

    #[tokio::test]
    async fn test_auth_failure_is_fatal() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/v2/images");
            then.status(401)
                .json_body(serde_json::json!({"message": "invalid key"}));
        });

        let client = client_for(&server);
        let err = client.create_invite_image("Alice").await.unwrap_err();

        api_mock.assert();
        match err {
            InviteError::ImageError { recipient, message } => {
                assert_eq!(recipient, "Alice");
                assert!(message.contains("401"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_response_without_image_url_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v2/images");
            then.status(200)
                .json_body(serde_json::json!({"status": "pending"}));
        });

        let client = client_for(&server);
        let result = client.create_invite_image("Alice").await;

        assert!(result.is_err());
    }
}
