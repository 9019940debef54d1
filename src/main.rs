//! powerranger server binary.

use powerranger::{run, ServiceConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("powerranger=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(bind_addr = %config.bind_addr, "starting");
    run(config).await?;
    Ok(())
}
