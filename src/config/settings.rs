use std::env;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid value for {setting}: {reason}")]
    InvalidSetting {
        setting: &'static str,
        reason: String,
    },
}

/// Server settings loaded from the environment
///
/// Falls back to a local SQLite file when DATABASE_URL is not set, so a
/// bare `cargo run` works without any external database.
#[derive(Debug, Clone)]
pub struct Settings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl Settings {
    /// Load settings from process environment variables
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an injectable lookup, for tests
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let server_host = lookup("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match lookup("PORT") {
            Some(value) => {
                let port: u16 =
                    value
                        .parse()
                        .map_err(|_| SettingsError::InvalidSetting {
                            setting: "PORT",
                            reason: format!(
                                "expected port number between 1 and 65535, got '{}'",
                                value
                            ),
                        })?;
                if port == 0 {
                    return Err(SettingsError::InvalidSetting {
                        setting: "PORT",
                        reason: "port 0 is outside the valid range".to_string(),
                    });
                }
                port
            }
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
