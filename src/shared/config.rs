//! Process configuration loaded from the environment (and `.env` via dotenvy).
//!
//! Every setting has a default; a variable that is present but unparsable is
//! a `ValidationError` so misconfiguration fails at startup, not mid-request.

use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_FALLBACK_SCAN_LIMIT: usize = 1000;

/// Which document store backs the process
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Memory,
    Firestore(FirestoreConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database_id: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub requests_per_second: f64,
    pub burst_size: u32,
    pub timeout_seconds: u64,
}

/// Knobs for the category search pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Upper bound on documents scanned by the in-memory fallback path.
    /// Categories larger than this are silently truncated on that path.
    pub fallback_scan_limit: usize,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fallback_scan_limit: DEFAULT_FALLBACK_SCAN_LIMIT,
            default_page_size: crate::shared::application::DEFAULT_PAGE_SIZE,
            max_page_size: crate::shared::application::MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyConfig {
    /// Currency units spent per loyalty point earned
    pub currency_units_per_point: u64,
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            currency_units_per_point: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub search: SearchConfig,
    pub loyalty: LoyaltyConfig,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            search: SearchConfig::default(),
            loyalty: LoyaltyConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load from process environment, reading `.env` first if present
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            info!(".env not loaded ({}), using process environment only", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search = SearchConfig {
            fallback_scan_limit: try_load(
                &lookup,
                "WAYFARER_FALLBACK_SCAN_LIMIT",
                DEFAULT_FALLBACK_SCAN_LIMIT,
            )?,
            default_page_size: try_load(
                &lookup,
                "WAYFARER_DEFAULT_PAGE_SIZE",
                crate::shared::application::DEFAULT_PAGE_SIZE,
            )?,
            max_page_size: try_load(
                &lookup,
                "WAYFARER_MAX_PAGE_SIZE",
                crate::shared::application::MAX_PAGE_SIZE,
            )?,
        };

        if search.fallback_scan_limit == 0 {
            return Err(AppError::ValidationError(
                "WAYFARER_FALLBACK_SCAN_LIMIT must be positive".to_string(),
            ));
        }

        let loyalty = LoyaltyConfig {
            currency_units_per_point: try_load(&lookup, "WAYFARER_CURRENCY_UNITS_PER_POINT", 100)?,
        };

        if loyalty.currency_units_per_point == 0 {
            return Err(AppError::ValidationError(
                "WAYFARER_CURRENCY_UNITS_PER_POINT must be positive".to_string(),
            ));
        }

        let backend: String = try_load(&lookup, "WAYFARER_STORE", "memory".to_string())?;
        let store = match backend.trim().to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "firestore" => StoreBackend::Firestore(FirestoreConfig {
                project_id: lookup("FIRESTORE_PROJECT_ID").ok_or_else(|| {
                    AppError::ValidationError(
                        "FIRESTORE_PROJECT_ID is required for the firestore store".to_string(),
                    )
                })?,
                database_id: try_load(&lookup, "FIRESTORE_DATABASE_ID", "(default)".to_string())?,
                api_key: lookup("FIRESTORE_API_KEY").filter(|k| !k.trim().is_empty()),
                base_url: try_load(
                    &lookup,
                    "FIRESTORE_BASE_URL",
                    DEFAULT_FIRESTORE_BASE_URL.to_string(),
                )?,
                requests_per_second: try_load(&lookup, "FIRESTORE_REQUESTS_PER_SECOND", 10.0)?,
                burst_size: try_load(&lookup, "FIRESTORE_BURST_SIZE", 20)?,
                timeout_seconds: try_load(&lookup, "FIRESTORE_TIMEOUT_SECONDS", 10)?,
            }),
            other => {
                return Err(AppError::ValidationError(format!(
                    "Unknown WAYFARER_STORE '{}', expected 'memory' or 'firestore'",
                    other
                )))
            }
        };

        Ok(Self {
            seed_demo_data: try_load(
                &lookup,
                "WAYFARER_SEED_DEMO_DATA",
                store == StoreBackend::Memory,
            )?,
            store,
            search,
            loyalty,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            warn!("Invalid {key} value '{raw}': {e}");
            AppError::ValidationError(format!("Invalid {} value '{}': {}", key, raw, e))
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
