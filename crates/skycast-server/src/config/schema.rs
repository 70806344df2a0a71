use skycast_core::error::{Result, SkycastError};

/// Environment variable holding the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the reported version string.
pub const ENV_APP_VERSION: &str = "APP_VERSION";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port, bound on all interfaces.
    pub port: u16,
    /// Version string reported by the service-info endpoint.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            version: default_version(),
        }
    }
}

impl ServerConfig {
    /// Build from a variable lookup, falling back to per-field defaults.
    /// A present-but-malformed `PORT` is an error, not a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                SkycastError::InvalidConfig(format!("{ENV_PORT} must be a port number: {e}"))
            })?,
            None => default_port(),
        };

        let version = lookup(ENV_APP_VERSION).unwrap_or_else(default_version);

        Ok(Self { port, version })
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(SkycastError::InvalidConfig(format!(
                "{ENV_APP_VERSION} must not be empty"
            )));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    5000
}
fn default_version() -> String {
    "1.0.0".into()
}
