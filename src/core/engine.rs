use crate::core::pipeline::InvitePipeline;
use crate::domain::model::RunSummary;
use crate::domain::ports::{GuestSource, ImageGenerator, MessageSender};
use crate::utils::error::Result;

/// Drives one run: load the full guest list, then deliver to each guest in
/// load order. Each guest completes before the next begins. The default is
/// fail-fast; `continue_on_error` trades that for a per-run failure count.
pub struct InviteEngine<G: GuestSource, I: ImageGenerator, M: MessageSender> {
    source: G,
    pipeline: InvitePipeline<I, M>,
    continue_on_error: bool,
}

impl<G: GuestSource, I: ImageGenerator, M: MessageSender> InviteEngine<G, I, M> {
    pub fn new(source: G, pipeline: InvitePipeline<I, M>) -> Self {
        Self {
            source,
            pipeline,
            continue_on_error: false,
        }
    }

    pub fn with_continue_on_error(
        source: G,
        pipeline: InvitePipeline<I, M>,
        continue_on_error: bool,
    ) -> Self {
        Self {
            source,
            pipeline,
            continue_on_error,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let guests = self.source.load_guests().await?;

        let mut summary = RunSummary {
            loaded: guests.len(),
            sent: 0,
            failed: 0,
        };

        for guest in &guests {
            match self.pipeline.deliver_to(guest).await {
                Ok(_) => {
                    summary.sent += 1;
                    tracing::info!("Invitation sent to {}", guest.name);
                }
                Err(e) => {
                    if !self.continue_on_error {
                        return Err(e);
                    }
                    summary.failed += 1;
                    tracing::error!("Delivery to {} failed: {}", guest.name, e);
                }
            }
        }

        Ok(summary)
    }
}
