//! MTVRP Worker - route optimization backend for the workspace UI
//!
//! Serves the optimize operation over HTTP and, when configured, NATS.

mod cli;
mod config;
mod defaults;
mod handlers;
mod services;
mod types;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::services::optimize::OptimizeService;
use crate::services::{sample_data, workspace};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs directory - use LOGS_DIR env var or default to ../logs (relative to worker)
    let logs_dir = std::env::var("LOGS_DIR")
        .unwrap_or_else(|_| "../logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        &logs_dir,
        "worker.log",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Logs go to stderr so `optimize` can print its result on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,mtvrp_worker=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Optimize { input, output } => optimize_file(&input, output.as_deref()).await,
        Command::SampleData { output } => {
            workspace::save(&output, &sample_data::nyc_sample())?;
            println!("Sample workspace written to {}", output.display());
            Ok(())
        }
    }
}

async fn serve() -> Result<()> {
    info!("Starting MTVRP Worker...");

    let config = Config::from_env()?;
    info!("Configuration loaded");

    let service = Arc::new(OptimizeService::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", config.http_addr))?;
    info!("HTTP API listening on {}", config.http_addr);

    let router = handlers::http::build_router(Arc::clone(&service));
    let http_handle = tokio::spawn(async move {
        axum::serve(listener, router).await
    });

    let Some(nats_url) = config.nats_url.as_deref() else {
        info!("NATS_URL not set, NATS handlers disabled");
        let result = http_handle.await?;
        error!("HTTP server finished: {:?}", result);
        return Ok(());
    };

    let nats_client = connect_nats(nats_url).await?;
    info!("Connected to NATS at {}", nats_url);

    let nats_handle = tokio::spawn(async move {
        handlers::start_handlers(nats_client, service).await
    });

    tokio::select! {
        result = http_handle => {
            error!("HTTP server finished: {:?}", result);
        }
        result = nats_handle => {
            error!("NATS handlers finished: {:?}", result);
        }
    }

    Ok(())
}

/// Connect to NATS (supports optional NATS_USER/NATS_PASSWORD auth)
async fn connect_nats(url: &str) -> Result<async_nats::Client> {
    let client = match (std::env::var("NATS_USER"), std::env::var("NATS_PASSWORD")) {
        (Ok(user), Ok(password)) if !user.is_empty() => {
            async_nats::ConnectOptions::new()
                .user_and_password(user, password)
                .connect(url)
                .await?
        }
        _ => async_nats::connect(url).await?,
    };
    Ok(client)
}

/// Load a workspace file over the default workspace and optimize it
async fn optimize_file(input: &Path, output: Option<&Path>) -> Result<()> {
    let mut request = workspace::default_workspace();
    workspace::load_import(input)?.apply_to(&mut request);

    let result = OptimizeService::new(Duration::ZERO)
        .optimize(&request)
        .await
        .with_context(|| format!("Failed to optimize {}", input.display()))?;

    let json = serde_json::to_string_pretty(&result)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write result to {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
