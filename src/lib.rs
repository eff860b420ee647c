pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ApiConfig, CliConfig};
pub use core::engine::InviteEngine;
pub use core::image::BannerbearClient;
pub use core::loader::CsvGuestSource;
pub use core::messaging::WhatsAppClient;
pub use core::pipeline::InvitePipeline;
pub use domain::model::{Guest, RunSummary};
pub use utils::error::{InviteError, Result};
