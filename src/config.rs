use crate::filter::{Filter, FilterMode};
use color_eyre::{Result, eyre::WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(skip)]
    path: Option<PathBuf>,
    /// Filters applied before the ones given on the command line.
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FilterConfig {
    /// Literal text to look for. Matched case-insensitively.
    pub pattern: String,
    /// Whether matching lines are dropped instead of kept.
    #[serde(default)]
    pub exclude: bool,
    /// Whether the filter is active.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl FilterConfig {
    pub fn mode(&self) -> FilterMode {
        if self.exclude { FilterMode::Exclude } else { FilterMode::Include }
    }
}

impl Config {
    /// Load configuration from the specified path, the default config dir (~/.config/fuzzymatch/) or a local .fuzzymatch.toml.
    ///
    /// An explicit path has to exist and parse. The default locations are optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let config_path = PathBuf::from(p);
                if !config_path.exists() {
                    color_eyre::eyre::bail!("config file {} does not exist", config_path.display());
                }
                Self::load_from_path(&config_path)
            }
            None => {
                let config_path = Self::default_config_path();
                if config_path.exists() {
                    Self::load_from_path(&config_path)
                } else {
                    debug!("No config file at {}", config_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from_path(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .wrap_err_with(|| format!("failed to read config file {}", config_path.display()))?;
        let mut config = Self::parse(&content)
            .wrap_err_with(|| format!("failed to parse config file {}", config_path.display()))?;
        config.path = Some(config_path.to_path_buf());
        info!(
            "Loaded {} filters from {}",
            config.filters.len(),
            config_path.display()
        );
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the path of the configuration file if it was loaded from a file.
    pub fn get_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("fuzzymatch").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .fuzzymatch.toml (might not exist)
        PathBuf::from(".fuzzymatch.toml")
    }

    /// Adds the configured filters to `filter`.
    pub fn apply_to(&self, filter: &mut Filter) -> Result<()> {
        for filter_config in &self.filters {
            filter
                .add_filter(&filter_config.pattern, filter_config.mode(), filter_config.enabled)
                .wrap_err_with(|| format!("invalid filter pattern {:?}", filter_config.pattern))?;
        }
        Ok(())
    }
}
