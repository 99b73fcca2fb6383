//! Gateway configuration read from the process environment.
//!
//! A `.env` file in the working directory is loaded first (see
//! [`load_dotenv`]), so local setups don't need to export anything.

use anyhow::{Context, Result, bail};

use crate::consts::{DEFAULT_MODEL, DEFAULT_PORT};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const PORT_VAR: &str = "PORT";
pub const MODEL_VAR: &str = "GEMINI_MODEL";

/// Settings the gateway needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub port: u16,
    pub model: String,
}

impl GatewayConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup. Values are trimmed and
    /// empty ones count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let Some(api_key) = get(API_KEY_VAR) else {
            bail!("{API_KEY_VAR} environment variable is required");
        };

        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let model = get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            port,
            model,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, port: Option<u16>, model: Option<String>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(model) = model {
            self.model = model;
        }
        self
    }
}

/// Load `.env` from the working directory if there is one. Missing file is fine.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}
