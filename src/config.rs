use crate::constants::{DEFAULT_FEE_POLL_SECS, DEFAULT_RATE_POLL_SECS};
use crate::models::{Chain, ChainDescriptor};
use anyhow::{bail, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Chain RPC endpoints
    pub eth_rpc_url: String,
    pub polygon_rpc_url: String,
    pub arbitrum_rpc_url: String,

    // Price feed
    pub price_api_url: String,

    // Polling cadence
    pub fee_poll_interval: Duration,
    pub rate_poll_interval: Duration,
}

impl Config {
    // Falls back to public endpoints and the stock cadence so the binary
    // runs with no setup
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,

            eth_rpc_url: std::env::var("ETH_RPC_URL")
                .unwrap_or_else(|_| "https://eth.llamarpc.com".to_string()),
            polygon_rpc_url: std::env::var("POLYGON_RPC_URL")
                .unwrap_or_else(|_| "https://polygon-rpc.com".to_string()),
            arbitrum_rpc_url: std::env::var("ARBITRUM_RPC_URL")
                .unwrap_or_else(|_| "https://arb1.arbitrum.io/rpc".to_string()),

            price_api_url: std::env::var("PRICE_API_URL")
                .unwrap_or_else(|_| "https://api.coingecko.com".to_string()),

            fee_poll_interval: Duration::from_secs(
                std::env::var("FEE_POLL_SECS")
                    .unwrap_or_else(|_| DEFAULT_FEE_POLL_SECS.to_string())
                    .parse()
                    .context("Invalid FEE_POLL_SECS")?,
            ),
            rate_poll_interval: Duration::from_secs(
                std::env::var("RATE_POLL_SECS")
                    .unwrap_or_else(|_| DEFAULT_RATE_POLL_SECS.to_string())
                    .parse()
                    .context("Invalid RATE_POLL_SECS")?,
            ),
        };

        config.validate()?;
        Ok(config)
    }

    // One descriptor per tracked chain, in board order
    pub fn chain_descriptors(&self) -> Vec<ChainDescriptor> {
        vec![
            ChainDescriptor::new(Chain::Ethereum, self.eth_rpc_url.clone()),
            ChainDescriptor::new(Chain::Polygon, self.polygon_rpc_url.clone()),
            ChainDescriptor::new(Chain::Arbitrum, self.arbitrum_rpc_url.clone()),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("ETH_RPC_URL", &self.eth_rpc_url),
            ("POLYGON_RPC_URL", &self.polygon_rpc_url),
            ("ARBITRUM_RPC_URL", &self.arbitrum_rpc_url),
            ("PRICE_API_URL", &self.price_api_url),
        ] {
            if !url.starts_with("http") {
                bail!("{} must be an HTTP(S) URL", name);
            }
        }

        if self.fee_poll_interval.is_zero() || self.rate_poll_interval.is_zero() {
            bail!("Poll intervals must be at least one second");
        }

        tracing::info!(
            "Configuration validated, fee cadence {:?}, rate cadence {:?}",
            self.fee_poll_interval,
            self.rate_poll_interval
        );

        Ok(())
    }
}
