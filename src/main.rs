use tracing::error;

use roster::config::AppConfig;
use roster::{db, shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "roster=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "initialization error");
            std::process::exit(1);
        }
    };

    if let Err(e) = db::init_schema(&config).await {
        error!(error = %e, "initialization error");
        std::process::exit(1);
    }

    shell::run(&config).await?;
    Ok(())
}
