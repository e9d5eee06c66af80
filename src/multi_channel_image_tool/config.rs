use std::net::SocketAddr;

use crate::application::error::ApplicationError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3300";
pub const BIND_ADDR_VAR: &str = "CHANNEL_TOOL_ADDR";
pub const CORS_VAR: &str = "CHANNEL_TOOL_CORS";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub allow_any_origin: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset variables
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.trim().parse::<SocketAddr>().map_err(|e| {
            ApplicationError::ConfigurationError(format!("{}={:?} is not a socket address: {}", BIND_ADDR_VAR, addr, e))
        })?;

        let allow_any_origin = match lookup(CORS_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(other) => {
                return Err(ApplicationError::ConfigurationError(format!(
                    "{}={:?} must be true/false or 1/0",
                    CORS_VAR, other
                )))
            }
        };

        Ok(Self {
            bind_addr,
            allow_any_origin,
        })
    }
}
