use thiserror::Error;

#[derive(Error, Debug)]
pub enum InviteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing environment variable: {name}")]
    MissingConfigError { name: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Image generation failed for {recipient}: {message}")]
    ImageError { recipient: String, message: String },

    #[error("WhatsApp API error: {status}")]
    MessageRejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, InviteError>;
