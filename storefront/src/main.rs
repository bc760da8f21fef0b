use anyhow::Result;
use clap::Parser;
use storefront::cli::{self, Args};
use storefront::{AppError, setup_environment};

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Environment (dotenv, logging) and configuration
    let config = setup_environment(args.log_level.as_deref());
    config.validate()?;

    tracing::debug!(environment = %config.environment, "Configuration loaded");

    // 2. Run the command
    if let Err(e) = cli::run(args, &config) {
        match e.downcast_ref::<AppError>() {
            Some(app) => tracing::error!(
                code = %app.code,
                category = app.category().name(),
                "{}",
                app
            ),
            None => tracing::error!("{:#}", e),
        }
        return Err(e);
    }

    Ok(())
}
