use std::net::IpAddr;
use std::path::PathBuf;

use courses_core::config::ConfigError;
use courses_core::service::error::ServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod dto;
pub mod endpoint;
pub mod router;
pub mod seed;

mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
    /// JSON seed data loaded into an empty store at startup
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read seed file `{path}`: {source}")]
    SeedFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file: {0}")]
    SeedParsing(#[from] serde_json::Error),

    #[error("Failed to load seed data: {0}")]
    Seed(#[from] ServiceError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
