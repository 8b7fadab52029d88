use crate::engine::{BaselineTier, PricingPolicy, UnitTable};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub pricing: PricingPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let data_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "./data/catalog.json".to_string())
            .into();

        let unit_table: UnitTable = std::env::var("UNIT_TABLE")
            .unwrap_or_else(|_| "legacy".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid UNIT_TABLE value".to_string()))?;

        let baseline_tier: BaselineTier = std::env::var("BASELINE_TIER")
            .unwrap_or_else(|_| "first-listed".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid BASELINE_TIER value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
            catalog: CatalogConfig { data_path },
            pricing: PricingPolicy {
                unit_table,
                baseline_tier,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("Rate limit must be non-zero".to_string()));
        }

        // The limiter allows bursts of twice the rate in a u32
        if self.server.api_rate_limit > u64::from(u32::MAX / 2) {
            return Err(Error::Config(format!(
                "Rate limit must be at most {}",
                u32::MAX / 2
            )));
        }

        if self.server.max_request_body_size == 0 {
            return Err(Error::Config(
                "Request body limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
