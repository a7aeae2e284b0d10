use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use api::bootstrap::config::Config;
use api::bootstrap::lifecycle::Application;
use api::presentation::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::from_env()?;
    info!(?cfg, "Starting clean-architecture backend");

    let app = Application::build(cfg).await?;
    app.run(cli.run_mode()).await
}
