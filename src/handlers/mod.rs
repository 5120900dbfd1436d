//! Request handlers: NATS subscriptions and the HTTP API

pub mod http;
pub mod optimize;
pub mod ping;

use std::sync::Arc;
use anyhow::Result;
use async_nats::Client;
use tracing::{info, error};
use tokio::select;

use crate::services::optimize::OptimizeService;

pub const PING_SUBJECT: &str = "mtvrp.ping";
pub const OPTIMIZE_SUBJECT: &str = "mtvrp.optimize";

/// Start all NATS message handlers. Returns when any of them stops.
pub async fn start_handlers(client: Client, service: Arc<OptimizeService>) -> Result<()> {
    info!("Starting message handlers...");

    let ping_sub = client.subscribe(PING_SUBJECT).await?;
    let optimize_sub = client.subscribe(OPTIMIZE_SUBJECT).await?;

    info!("Subscribed to NATS subjects");

    let client_ping = client.clone();
    let client_optimize = client.clone();

    let ping_handle = tokio::spawn(async move {
        ping::handle_ping(client_ping, ping_sub).await
    });

    let optimize_handle = tokio::spawn(async move {
        optimize::handle_optimize(client_optimize, optimize_sub, service).await
    });

    info!("All handlers started");

    select! {
        result = ping_handle => {
            error!("Ping handler finished: {:?}", result);
        }
        result = optimize_handle => {
            error!("Optimize handler finished: {:?}", result);
        }
    }

    Ok(())
}
