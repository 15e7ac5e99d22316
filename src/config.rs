//! Configuration module for javadoc-index.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `JDI_` and use double underscores
//! to separate nested levels:
//! - `JDI_OUTPUT__FORMAT=json` sets `output.format`
//! - `JDI_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `JDI_LIST_FILE=/tmp/files` sets `list_file`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{IndexError, IndexResult};

const CONFIG_DIR_NAME: &str = "javadoc-index";
const CONFIG_FILE_NAME: &str = "settings.toml";
const LIST_FILE_NAME: &str = ".javadoc-index-files";
const ENV_PREFIX: &str = "JDI_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// File listing the index files to scan when none are given on the command line
    #[serde(default = "default_list_file")]
    pub list_file: PathBuf,

    /// Documentation tree layout conventions
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Markup extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output rendering settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How documentation trees are laid out on disk.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Subdirectory name some generators put split index pages in
    #[serde(default = "default_index_dir_name")]
    pub index_dir_name: String,

    /// Vendor subdirectories that hold the real documentation root
    #[serde(default = "default_vendor_subdirs")]
    pub vendor_subdirs: Vec<String>,

    /// Subdirectory whose presence marks a modular JDK documentation tree
    #[serde(default = "default_module_marker")]
    pub module_marker: String,

    /// Module directory prefixes ignored individually in a JDK tree
    #[serde(default = "default_module_prefixes")]
    pub module_prefixes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Leading `title` descriptors that mark an anchor as a type link
    #[serde(default = "default_title_prefixes")]
    pub title_prefixes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Elisp,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Lisp variable bound to the symbol list
    #[serde(default = "default_refs_variable")]
    pub refs_variable: String,

    /// Lisp variable bound to the ignored prefix list
    #[serde(default = "default_prefixes_variable")]
    pub prefixes_variable: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for all targets
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `javadoc_index::pipeline = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_list_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(LIST_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LIST_FILE_NAME))
}
fn default_index_dir_name() -> String { "index-files".to_string() }
fn default_vendor_subdirs() -> Vec<String> { vec!["org.eclipse.jgit".to_string()] }
fn default_module_marker() -> String { "java.base".to_string() }
fn default_module_prefixes() -> Vec<String> { vec!["java.".to_string(), "jdk.".to_string()] }
fn default_refs_variable() -> String { "javadoc-html-refs".to_string() }
fn default_prefixes_variable() -> String { "javadoc-ignored-prefixes".to_string() }
fn default_log_level() -> String { "warn".to_string() }

fn default_title_prefixes() -> Vec<String> {
    // "type parameter in " is left out: type parameters are not lookup targets.
    [
        "annotation in ",
        "annotation interface in ",
        "class in ",
        "class or interface in ",
        "enum in ",
        "enum class in ",
        "interface in ",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            list_file: default_list_file(),
            layout: LayoutConfig::default(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            index_dir_name: default_index_dir_name(),
            vendor_subdirs: default_vendor_subdirs(),
            module_marker: default_module_marker(),
            module_prefixes: default_module_prefixes(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_prefixes: default_title_prefixes(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            refs_variable: default_refs_variable(),
            prefixes_variable: default_prefixes_variable(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from the default location (or defaults if absent)
    pub fn load() -> IndexResult<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Load configuration from a specific file, layered over defaults and
    /// under environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> IndexResult<Self> {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(|e| IndexError::Config(Box::new(e)))
    }

    /// `<config_dir>/javadoc-index/settings.toml`, or a relative path when the
    /// platform has no config directory.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(format!(".{CONFIG_DIR_NAME}")))
            .join(CONFIG_FILE_NAME)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file. Refuses to overwrite unless `force` is set.
    pub fn init_config_file(path: &Path, force: bool) -> anyhow::Result<PathBuf> {
        if !force && path.exists() {
            anyhow::bail!("Configuration file already exists. Use --force to overwrite");
        }

        Settings::default().save(path)?;
        Ok(path.to_path_buf())
    }
}
