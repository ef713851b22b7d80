use crate::catalog::{AllowList, SortOrder};
use crate::portfolio::{DEFAULT_ALLOWED_LOGOS, SITE_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/folio/config.toml`.
///
/// Every field has a default, so a partial file is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Directory holding the logo images.
    pub logo_dir: PathBuf,
    /// Extension (without the dot) of logo files to pick up.
    pub logo_extension: String,
    /// Prefix joined with the file name to form each logo's URL.
    pub url_prefix: String,
    /// Display names allowed into the logo catalog.
    pub allowed_logos: Vec<String>,
    /// Catalog ordering: "locale" (default) or "ordinal".
    pub sort_order: SortOrder,
    /// Public URL of the site.
    pub site_url: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            logo_dir: PathBuf::from("src/assets/logos"),
            logo_extension: "svg".to_string(),
            url_prefix: "/assets/logos".to_string(),
            allowed_logos: DEFAULT_ALLOWED_LOGOS.iter().map(|s| s.to_string()).collect(),
            sort_order: SortOrder::default(),
            site_url: SITE_URL.to_string(),
        }
    }
}

impl FolioConfig {
    pub fn allow_list(&self) -> AllowList {
        self.allowed_logos.iter().cloned().collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("folio")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FolioConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<FolioConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FolioConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = FolioConfig::default();
        assert_eq!(cfg.logo_dir, PathBuf::from("src/assets/logos"));
        assert_eq!(cfg.logo_extension, "svg");
        assert_eq!(cfg.url_prefix, "/assets/logos");
        assert_eq!(cfg.allowed_logos.len(), 11);
        assert_eq!(cfg.sort_order, SortOrder::Locale);
        assert_eq!(cfg.site_url, "https://achrafsalimi.me");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FolioConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FolioConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            allowed_logos = ["Rust", "Go"]
            sort_order = "ordinal"
        "#;
        let cfg: FolioConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.allowed_logos, vec!["Rust", "Go"]);
        assert_eq!(cfg.sort_order, SortOrder::Ordinal);
        assert_eq!(cfg.logo_extension, "svg");

        let allow = cfg.allow_list();
        assert!(allow.contains("Rust"));
        assert!(!allow.contains("Python"));
    }

    #[test]
    fn config_toml_rejects_unknown_sort_order() {
        let toml = r#"sort_order = "random""#;
        assert!(toml::from_str::<FolioConfig>(toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"logo_dir = \"/srv/logos\"\nlogo_extension = \"png\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.logo_dir, PathBuf::from("/srv/logos"));
        assert_eq!(cfg.logo_extension, "png");
    }

    #[test]
    fn load_from_missing_file_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_from(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
