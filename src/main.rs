use clap::Parser;
use invite_sender::utils::{logger, validation::Validate};
use invite_sender::{
    ApiConfig, BannerbearClient, CliConfig, CsvGuestSource, InviteEngine, InvitePipeline,
    WhatsAppClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting invite-sender");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let api_config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = api_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let source = CsvGuestSource::new(&cli.guest_file);
    let pipeline = InvitePipeline::new(
        BannerbearClient::new(&api_config),
        WhatsAppClient::new(&api_config),
    );
    let engine = InviteEngine::with_continue_on_error(source, pipeline, cli.continue_on_error);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Run complete: {} loaded, {} sent, {} failed",
                summary.loaded,
                summary.sent,
                summary.failed
            );
            println!("✅ Sent {} of {} invitations", summary.sent, summary.loaded);
            if summary.failed > 0 {
                eprintln!("❌ {} deliveries failed", summary.failed);
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
