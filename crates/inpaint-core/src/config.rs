//! Read-only configuration loading.
//!
//! Priority (highest first):
//! 1. `INPAINT_MODEL` / `INPAINT_BASE_URL` environment variables
//! 2. JSON file from `--config`, or `<config dir>/inpaint-studio/config.json`
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use inpaint_types::{AppConfig, ConfigError};
use tracing::{debug, info};
use validator::Validate;

const CONFIG_DIR: &str = "inpaint-studio";
const CONFIG_FILE: &str = "config.json";

/// Default config location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit` or the default location.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound { path: path.display().to_string() });
            }
            read_config_file(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path)?,
            _ => {
                debug!("No config file found, using defaults");
                AppConfig::new()
            }
        },
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    config.validate().map_err(|e| ConfigError::from_validation(&e))?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&e))?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(model) = lookup("INPAINT_MODEL").filter(|v| !v.trim().is_empty()) {
        debug!("Model overridden by INPAINT_MODEL: {}", model);
        config.generation.model = model.trim().to_string();
    }
    if let Some(base_url) = lookup("INPAINT_BASE_URL").filter(|v| !v.trim().is_empty()) {
        debug!("Base URL overridden by INPAINT_BASE_URL: {}", base_url);
        config.generation.base_url = base_url.trim().trim_end_matches('/').to_string();
    }
    config
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "generation": {{ "model": "custom-image-model" }}, "editor": {{ "default_brush_size": 48 }} }}"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.editor.default_brush_size, 48);
        assert_eq!(config.generation.retry.max_attempts, 3);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_out_of_range_brush_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "editor": {{ "default_brush_size": 0 }} }}"#).unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_env_overrides(AppConfig::new(), |key| match key {
            "INPAINT_MODEL" => Some(" other-model ".to_string()),
            "INPAINT_BASE_URL" => Some("http://127.0.0.1:9000/v1beta/".to_string()),
            _ => None,
        });

        assert_eq!(config.generation.model, "other-model");
        assert_eq!(config.generation.base_url, "http://127.0.0.1:9000/v1beta");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = apply_env_overrides(AppConfig::new(), |_| Some("   ".to_string()));
        assert_eq!(config, AppConfig::new());
    }
}
