pub mod cli;
pub mod config;
pub mod models;
pub mod relay;
pub mod server;

use cli::Args;
use config::RelayConfig;
use log::info;
use relay::BeamRelay;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let relay_config = RelayConfig::from_args(&args)?;

    info!("--- Core Configuration ---");
    info!("Endpoint URL: {}", relay_config.endpoint);
    info!("Request Timeout: {:?}", relay_config.timeout);
    info!("Server Address: {}", args.server_addr);
    info!("-------------------------");

    let relay = Arc::new(BeamRelay::new(&relay_config)?);
    let server = Server::new(args.server_addr.clone(), relay);
    server.run().await?;

    Ok(())
}
