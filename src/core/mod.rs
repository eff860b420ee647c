pub mod engine;
pub mod image;
pub mod loader;
pub mod messaging;
pub mod pipeline;

pub use crate::domain::model::{Guest, RunSummary};
pub use crate::domain::ports::{GuestSource, ImageGenerator, MessageSender};
pub use crate::utils::error::Result;
