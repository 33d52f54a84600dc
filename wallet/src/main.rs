use zwallet_host::{api::server, HostConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenv::dotenv().ok();

    // Initialize logger (set RUST_LOG=debug for verbose output, RUST_LOG=info for normal)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::from_env();

    log::info!(
        "Starting wallet navigation host on {} ({} network)",
        config.bind_address,
        config.nav.network
    );
    server::start_server(config).await?;
    Ok(())
}
