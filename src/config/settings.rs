use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_DATA_PATH;
use crate::Error;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("SDG_API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("SDG_API_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid SDG_API_PORT: {}", raw)))?,
            Err(_) => 8000,
        };

        Ok(Self { host, port })
    }
}

impl DatasetConfig {
    pub fn from_env() -> Result<Self> {
        let path = env::var("SDG_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self { path })
    }
}
