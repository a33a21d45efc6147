use anyhow::{Context, Result};
use listing_search::{SortDirection, SortKey};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "listings.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listings file used when `--listings` is not given
    pub listings_path: Option<PathBuf>,
    /// Result limit used when neither `--limit` nor `--page` is given
    pub default_limit: Option<usize>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_path: None,
            default_limit: None,
            page_size: default_page_size(),
            sort_by: None,
            sort_order: None,
        }
    }
}

impl Config {
    /// An explicit path must exist; without one, `listings.toml` in the
    /// working directory is used if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load_from(fallback)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(sort_by) = &self.sort_by {
            sort_by.parse::<SortKey>().map_err(|_| {
                anyhow::anyhow!("Invalid sort_by {:?} in {}", sort_by, path.display())
            })?;
        }
        if let Some(sort_order) = &self.sort_order {
            sort_order.parse::<SortDirection>().map_err(|_| {
                anyhow::anyhow!("Invalid sort_order {:?} in {}", sort_order, path.display())
            })?;
        }
        Ok(())
    }

    pub fn listings_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit.or_else(|| self.listings_path.clone()).context(
            "No listings file given: pass --listings or set listings_path in the config file",
        )
    }
}

fn default_page_size() -> usize {
    20
}
