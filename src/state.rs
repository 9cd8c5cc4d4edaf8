use crate::config::AppConfig;
use crate::models::constants::Constants;

/// Shared, read-only application state handed to every handler.
pub struct AppState {
    pub app_name: String,
    pub constants: Constants,
}

impl AppState {
    pub fn new(config: &AppConfig, constants: Constants) -> Self {
        Self { app_name: config.app_name.clone(), constants }
    }
}
