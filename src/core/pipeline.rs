use crate::domain::model::Guest;
use crate::domain::ports::{ImageGenerator, MessageSender};
use crate::utils::error::Result;
use serde_json::Value;

/// Two-stage delivery for one guest: generate the personalized image, then
/// send it. The image URL lives only for the duration of the send.
pub struct InvitePipeline<I: ImageGenerator, M: MessageSender> {
    pub(crate) image: I,
    pub(crate) messenger: M,
}

impl<I: ImageGenerator, M: MessageSender> InvitePipeline<I, M> {
    pub fn new(image: I, messenger: M) -> Self {
        Self { image, messenger }
    }

    pub async fn deliver_to(&self, guest: &Guest) -> Result<Value> {
        let image_url = self.image.create_invite_image(&guest.name).await?;
        let confirmation = self.messenger.send_invitation(&image_url, guest).await?;
        Ok(confirmation)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::utils::error::InviteError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    pub struct FakeImageGenerator {
        pub calls: Arc<Mutex<Vec<String>>>,
        pub fail_for: Option<String>,
    }

    impl FakeImageGenerator {
        pub fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_for: None,
            }
        }

        pub fn failing_for(name: &str) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_for: Some(name.to_string()),
            }
        }
    }

    #[async_trait]
    impl ImageGenerator for FakeImageGenerator {
        async fn create_invite_image(&self, recipient_name: &str) -> Result<String> {
            self.calls.lock().await.push(recipient_name.to_string());
            if self.fail_for.as_deref() == Some(recipient_name) {
                return Err(InviteError::ImageError {
                    recipient: recipient_name.to_string(),
                    message: "render failed".to_string(),
                });
            }
            Ok(format!("https://img/{}.png", recipient_name))
        }
    }

    pub struct FakeMessageSender {
        pub calls: Arc<Mutex<Vec<(String, String, String)>>>,
        pub reject_with: Option<reqwest::StatusCode>,
    }

    impl FakeMessageSender {
        pub fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reject_with: None,
            }
        }

        pub fn rejecting_with(status: reqwest::StatusCode) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reject_with: Some(status),
            }
        }
    }

    #[async_trait]
    impl MessageSender for FakeMessageSender {
        async fn send_invitation(&self, image_url: &str, guest: &Guest) -> Result<Value> {
            self.calls.lock().await.push((
                image_url.to_string(),
                guest.name.clone(),
                guest.phone.clone(),
            ));
            if let Some(status) = self.reject_with {
                return Err(InviteError::MessageRejected {
                    status,
                    body: r#"{"error":"invalid token"}"#.to_string(),
                });
            }
            Ok(serde_json::json!({"messages": [{"id": "wamid.fake"}]}))
        }
    }
}
