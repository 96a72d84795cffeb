use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of memoized query outputs kept by the engine (0 disables).
    pub cache_capacity: usize,
    /// Cap on facet values returned per category by the API.
    pub max_facet_values: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "1048576".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "./data/recipes.json".to_string())
            .into();

        let cache_capacity = std::env::var("QUERY_CACHE_CAPACITY")
            .unwrap_or_else(|_| "64".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid QUERY_CACHE_CAPACITY value".to_string()))?;

        let max_facet_values = std::env::var("MAX_FACET_VALUES")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_FACET_VALUES value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            catalog: CatalogConfig { path: catalog_path },
            search: SearchConfig {
                cache_capacity,
                max_facet_values,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.search.max_facet_values == 0 {
            return Err(Error::Config(
                "MAX_FACET_VALUES must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_request_body_size: 1048576,
            },
            catalog: CatalogConfig {
                path: "./data/recipes.json".into(),
            },
            search: SearchConfig {
                cache_capacity: 64,
                max_facet_values: 1000,
            },
        };

        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());

        settings.server.port = 3000;
        settings.search.max_facet_values = 0;
        assert!(settings.validate().is_err());
    }
}
