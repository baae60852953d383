//! Top-level netconform configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutliersConfig, ReportConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`NETCONFORM_*`)
/// 3. Project config (`netconform.toml` in project root)
/// 4. User config (`~/.netconform/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct NetconformConfig {
    pub outliers: OutliersConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub hypothesis: Option<String>,
    pub node_regex: Option<String>,
    pub named_struct_types: Option<Vec<String>>,
    pub report_format: Option<String>,
}

impl NetconformConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// The regex itself is compiled by the query builder, which reports
    /// failures with the offending pattern.
    pub fn validate(config: &NetconformConfig) -> Result<(), ConfigError> {
        if let Some(ref regex) = config.outliers.node_regex {
            if regex.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "outliers.node_regex".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config
            .outliers
            .named_struct_types
            .iter()
            .any(|t| t.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "outliers.named_struct_types".to_string(),
                message: "structure type names must not be empty".to_string(),
            });
        }
        if let Some(ref format) = config.report.format {
            if !matches!(format.as_str(), "text" | "json") {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("unknown format '{format}', expected text or json"),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".netconform").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut NetconformConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: NetconformConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut NetconformConfig, other: &NetconformConfig) {
        if other.outliers.hypothesis.is_some() {
            base.outliers.hypothesis = other.outliers.hypothesis.clone();
        }
        if other.outliers.node_regex.is_some() {
            base.outliers.node_regex = other.outliers.node_regex.clone();
        }
        if !other.outliers.named_struct_types.is_empty() {
            base.outliers.named_struct_types = other.outliers.named_struct_types.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
    }

    /// Pattern: `NETCONFORM_OUTLIERS_HYPOTHESIS`, `NETCONFORM_OUTLIERS_NODE_REGEX`, etc.
    fn apply_env_overrides(config: &mut NetconformConfig) {
        if let Ok(val) = std::env::var("NETCONFORM_OUTLIERS_HYPOTHESIS") {
            config.outliers.hypothesis = Some(val);
        }
        if let Ok(val) = std::env::var("NETCONFORM_OUTLIERS_NODE_REGEX") {
            config.outliers.node_regex = Some(val);
        }
        if let Ok(val) = std::env::var("NETCONFORM_OUTLIERS_STRUCT_TYPES") {
            config.outliers.named_struct_types = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(val) = std::env::var("NETCONFORM_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut NetconformConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.hypothesis {
            config.outliers.hypothesis = Some(v.clone());
        }
        if let Some(ref v) = cli.node_regex {
            config.outliers.node_regex = Some(v.clone());
        }
        if let Some(ref v) = cli.named_struct_types {
            config.outliers.named_struct_types = v.clone();
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
