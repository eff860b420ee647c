use crate::domain::model::Guest;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GuestSource: Send + Sync {
    /// Produces the full guest list, in source order, before the driver starts.
    async fn load_guests(&self) -> Result<Vec<Guest>>;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Renders a personalized invitation image and returns its URL.
    async fn create_invite_image(&self, recipient_name: &str) -> Result<String>;
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Submits the templated invitation message and returns the provider's
    /// confirmation body.
    async fn send_invitation(&self, image_url: &str, guest: &Guest) -> Result<serde_json::Value>;
}
