use crate::utils::error::{InviteError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_BANNERBEAR_API_URL: &str = "https://sync.api.bannerbear.com/v2/images";
pub const DEFAULT_WHATSAPP_API_URL: &str = "https://graph.facebook.com/v20.0";

#[derive(Debug, Clone, Parser)]
#[command(name = "invite-sender")]
#[command(about = "Sends personalized wedding-invitation images over WhatsApp")]
pub struct CliConfig {
    /// CSV guest list with `name` and `phone` columns
    #[arg(long, default_value = "guests.csv")]
    pub guest_file: String,

    /// Keep going after a per-guest failure instead of aborting the run
    #[arg(long)]
    pub continue_on_error: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Provider credentials and endpoints, read once at startup and passed
/// explicitly into the HTTP clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bannerbear_api_key: String,
    pub bannerbear_template_id: String,
    pub bannerbear_api_url: String,
    pub whatsapp_token: String,
    pub whatsapp_phone_number_id: String,
    pub whatsapp_api_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bannerbear_api_key: require_env("BANNERBEAR_API_KEY")?,
            bannerbear_template_id: require_env("BANNERBEAR_TEMPLATE_ID")?,
            bannerbear_api_url: env_or("BANNERBEAR_API_URL", DEFAULT_BANNERBEAR_API_URL),
            whatsapp_token: require_env("WHATSAPP_TOKEN")?,
            whatsapp_phone_number_id: require_env("WHATSAPP_PHONE_NUMBER_ID")?,
            whatsapp_api_url: env_or("WHATSAPP_API_URL", DEFAULT_WHATSAPP_API_URL),
        })
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("BANNERBEAR_API_KEY", &self.bannerbear_api_key)?;
        validate_non_empty_string("BANNERBEAR_TEMPLATE_ID", &self.bannerbear_template_id)?;
        validate_non_empty_string("WHATSAPP_TOKEN", &self.whatsapp_token)?;
        validate_non_empty_string("WHATSAPP_PHONE_NUMBER_ID", &self.whatsapp_phone_number_id)?;
        validate_url("BANNERBEAR_API_URL", &self.bannerbear_api_url)?;
        validate_url("WHATSAPP_API_URL", &self.whatsapp_api_url)?;
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| InviteError::MissingConfigError {
        name: name.to_string(),
    })
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
