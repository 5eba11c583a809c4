use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

pub use storage_mongo::MongoStoreConfig;

#[derive(Parser)]
#[command(name = "student-server", about = "Student records CRUD service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Path to a TOML config file. Built-in defaults apply when omitted.
    #[arg(long, env = "CONFIG_PATH")]
    pub config: Option<String>,

    /// Overrides `api_port` from the config file.
    #[arg(long, env = "API_PORT")]
    pub port: Option<u16>,
}

// ---- TOML Config ----

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Which `RecordStore` backs the server.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    Mongo(MongoStoreConfig),
    /// In-process, lost on restart.
    Memory,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Mongo(MongoStoreConfig::default())
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_api_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            api_port: default_api_port(),
            storage: StorageConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self, crate::error::ServerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ServerError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|e| crate::error::ServerError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
