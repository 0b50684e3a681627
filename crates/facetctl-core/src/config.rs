use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::panel::SectionState;
use crate::selection::CommitOrder;

/// Global configuration loaded from `~/.config/facetctl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetConfig {
    /// Search page that committed filters are applied to.
    pub base_url: String,
    /// Member order inside each committed parameter: "sorted" (default) or "insertion".
    #[serde(default)]
    pub commit_order: CommitOrder,
    /// Initial expansion of the facet sections; all expanded if missing.
    #[serde(default)]
    pub sections: Option<SectionState>,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            commit_order: CommitOrder::Sorted,
            sections: None,
        }
    }
}

impl FacetConfig {
    pub fn sections(&self) -> SectionState {
        self.sections.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("facetctl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FacetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FacetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<FacetConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FacetConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
