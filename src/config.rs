use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_APP_NAME: &str = "Tourvisto";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Server settings read from `TOURVISTO_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    /// When unset the dataset compiled into the binary is served.
    pub constants_path: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("TOURVISTO_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("TOURVISTO_PORT={raw:?} is not a valid port: {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("TOURVISTO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            app_name: get("TOURVISTO_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            constants_path: get("TOURVISTO_CONSTANTS").map(PathBuf::from),
            static_dir: get("TOURVISTO_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
