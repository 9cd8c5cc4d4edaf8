//! The read-only dataset behind every admin page.
//!
//! A default copy is compiled in from `data/constants.json`; deployments can
//! point `TOURVISTO_CONSTANTS` at their own file with the same shape.

use std::path::Path;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::dashboard::DashboardStats;
use crate::models::trip::Trip;
use crate::models::user::{User, UserRecord};

const EMBEDDED: &str = include_str!("../../data/constants.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constants {
    #[serde(default)]
    pub user: Option<User>,
    pub dashboard_stats: DashboardStats,
    #[serde(default)]
    pub all_trips: Vec<Trip>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl Constants {
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load from `path` when given, otherwise the embedded dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => {
                log::info!("Loading constants from {}", p.display());
                Self::from_path(p)
            }
            None => {
                log::info!("Using embedded constants");
                Self::embedded()
            }
        }
    }
}
