//! Process configuration and snapshot loading

use std::path::Path;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::AppConfig;

use crate::orders::validate_status_priorities;
use crate::pricing::validate_cost_settings;
use crate::utils::logger::init_logger_with_file;
use crate::utils::validation::{MAX_NAME_LEN, require_non_negative, validate_required_text};

/// Process configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily-rolling log directory |
/// | LOG_JSON | true in production | JSON log lines |
/// | ENVIRONMENT | development | runtime environment |
/// | CONFIG_SNAPSHOT_PATH | config.json | JSON configuration snapshot |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// development | staging | production
    pub environment: String,
    pub snapshot_path: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// Used by tests to avoid touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(environment == "production"),
            environment,
            snapshot_path: lookup("CONFIG_SNAPSHOT_PATH").unwrap_or_else(|| "config.json".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is normal outside development
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    tracing::debug!(
        environment = %config.environment,
        snapshot = %config.snapshot_path,
        "Environment ready"
    );
    config
}

/// Read and validate a JSON configuration snapshot
pub fn load_snapshot(path: impl AsRef<Path>) -> AppResult<AppConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(
            ErrorCode::SnapshotUnreadable,
            format!("Cannot read configuration snapshot: {e}"),
        )
        .with_detail("path", path.display().to_string())
    })?;

    let config: AppConfig = serde_json::from_str(&raw).map_err(|e| {
        AppError::with_message(
            ErrorCode::SnapshotUnreadable,
            format!("Invalid configuration snapshot: {e}"),
        )
        .with_detail("path", path.display().to_string())
        .with_detail("line", e.line())
    })?;

    validate_snapshot(&config)?;
    tracing::info!(
        path = %path.display(),
        materials = config.materials.len(),
        job_types = config.job_types.len(),
        "Configuration snapshot loaded"
    );
    Ok(config)
}

/// Check costs, the material catalog and status priorities
pub fn validate_snapshot(config: &AppConfig) -> AppResult<()> {
    validate_cost_settings(&config.costs)?;
    validate_status_priorities(&config.status_priorities)?;

    let mut seen = std::collections::HashSet::new();
    for material in &config.materials {
        validate_required_text(&material.name, "material name", MAX_NAME_LEN)?;
        require_non_negative(material.price, "material price")?;
        if !seen.insert(material.id.as_str()) {
            return Err(AppError::already_exists(format!("Material {}", material.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert!(!config.log_json);
        assert!(config.is_development());
        assert_eq!(config.snapshot_path, "config.json");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", ""),
            ("ENVIRONMENT", "production"),
            ("CONFIG_SNAPSHOT_PATH", "/etc/printfarm/config.json"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, None);
        assert!(config.is_production());
        assert!(config.log_json);
        assert_eq!(config.snapshot_path, "/etc/printfarm/config.json");
    }
}
