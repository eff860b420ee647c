use crate::config::ApiConfig;
use crate::domain::model::Guest;
use crate::domain::ports::MessageSender;
use crate::utils::error::{InviteError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const TEMPLATE_NAME: &str = "wedding_invitation";
const LANGUAGE_CODE: &str = "en";

// Deployment constants for the template body, not derived from guest data.
const EVENT_DATE: &str = "1 Apr 26";
const EVENT_TIME: &str = "7:00pm";
const VENUE: &str = "Hard Rock Hotel, Pattaya";
const RSVP_BY: &str = "1 Nov 25";
const BRIDE: &str = "Abbey";
const GROOM: &str = "John";

/// WhatsApp Cloud API-backed message delivery.
pub struct WhatsAppClient {
    client: Client,
    api_base: String,
    token: String,
    phone_number_id: String,
}

impl WhatsAppClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.whatsapp_api_url.clone(),
            token: config.whatsapp_token.clone(),
            phone_number_id: config.whatsapp_phone_number_id.clone(),
        }
    }
}

/// Template payload: image header plus seven ordered body parameters, the
/// guest's name first.
fn invitation_payload(image_url: &str, guest: &Guest) -> Value {
    serde_json::json!({
        "messaging_product": "whatsapp",
        "to": guest.phone,
        "type": "template",
        "template": {
            "name": TEMPLATE_NAME,
            "language": { "code": LANGUAGE_CODE },
            "components": [
                {
                    "type": "header",
                    "parameters": [
                        { "type": "image", "image": { "link": image_url } }
                    ],
                },
                {
                    "type": "body",
                    "parameters": [
                        { "type": "text", "text": guest.name },
                        { "type": "text", "text": EVENT_DATE },
                        { "type": "text", "text": EVENT_TIME },
                        { "type": "text", "text": VENUE },
                        { "type": "text", "text": RSVP_BY },
                        { "type": "text", "text": BRIDE },
                        { "type": "text", "text": GROOM },
                    ],
                },
            ],
        },
    })
}

#[async_trait]
impl MessageSender for WhatsAppClient {
    async fn send_invitation(&self, image_url: &str, guest: &Guest) -> Result<Value> {
        let url = format!("{}/{}/messages", self.api_base, self.phone_number_id);
        let payload = invitation_payload(image_url, guest);

        tracing::debug!("Submitting invitation to {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text));

        if !status.is_success() {
            tracing::error!("❌ Send error: {}", body);
            return Err(InviteError::MessageRejected {
                status,
                body: body.to_string(),
            });
        }

        tracing::info!("Message sent to {}: {}", guest.name, body);
        Ok(body)
    }
}
