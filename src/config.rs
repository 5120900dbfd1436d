//! Configuration management

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::defaults::DEFAULT_HTTP_ADDR;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP API listens on
    pub http_addr: SocketAddr,

    /// NATS server URL (NATS handlers are disabled when unset)
    pub nats_url: Option<String>,

    /// Pause before constructing routes, imitating a model call
    pub simulated_solve_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_addr = lookup("HTTP_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("HTTP_ADDR must be a socket address such as 0.0.0.0:3001")?;

        let nats_url = lookup("NATS_URL").filter(|url| !url.is_empty());

        let delay_ms = match lookup("SIMULATED_SOLVE_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("SIMULATED_SOLVE_DELAY_MS must be a whole number of milliseconds")?,
            None => 0,
        };

        Ok(Self {
            http_addr,
            nats_url,
            simulated_solve_delay: Duration::from_millis(delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.http_addr, "0.0.0.0:3001".parse().unwrap());
        assert!(config.nats_url.is_none());
        assert_eq!(config.simulated_solve_delay, Duration::ZERO);
    }

    #[test]
    fn test_config_nats_url_some_when_set() {
        let config = config_from(&[("NATS_URL", "nats://localhost:4222")]).unwrap();
        assert_eq!(config.nats_url, Some("nats://localhost:4222".to_string()));
    }

    #[test]
    fn test_config_empty_nats_url_disables_nats() {
        let config = config_from(&[("NATS_URL", "")]).unwrap();
        assert!(config.nats_url.is_none());
    }

    #[test]
    fn test_config_delay_parsed() {
        let config = config_from(&[("SIMULATED_SOLVE_DELAY_MS", "2000")]).unwrap();
        assert_eq!(config.simulated_solve_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(config_from(&[("HTTP_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("SIMULATED_SOLVE_DELAY_MS", "soon")]).is_err());
    }
}
