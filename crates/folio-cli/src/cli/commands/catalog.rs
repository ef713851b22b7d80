//! `folio catalog` – discover logos and print the catalog.

use anyhow::{Context, Result};
use folio_core::assets::discover;
use folio_core::catalog::{build_catalog_with, Catalog, SortOrder};
use folio_core::config::FolioConfig;
use std::io::Write;
use std::path::Path;

use super::write_json;

pub fn run_catalog<W: Write>(
    out: &mut W,
    cfg: &FolioConfig,
    dir: Option<&Path>,
    ordinal: bool,
    json: bool,
) -> Result<()> {
    let dir = dir.unwrap_or(cfg.logo_dir.as_path());
    let assets = discover(dir, &cfg.logo_extension, &cfg.url_prefix)
        .with_context(|| format!("discover logos in {}", dir.display()))?;
    let order = if ordinal {
        SortOrder::Ordinal
    } else {
        cfg.sort_order
    };
    let catalog = build_catalog_with(&assets, &cfg.allow_list(), order);

    if json {
        write_json(out, &catalog)
    } else {
        write_table(out, &catalog)
    }
}

fn write_table<W: Write>(out: &mut W, catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No logos matched the allow-list.")?;
        return Ok(());
    }
    let width = catalog.names().map(str::len).max().unwrap_or(0).max(4);
    writeln!(out, "{:<width$}  LOGO", "NAME")?;
    for item in catalog {
        writeln!(out, "{:<width$}  {}", item.name, item.logo)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn logo_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn table_lists_allowed_logos_sorted() {
        let dir = logo_dir(&["Python-logo.svg", "Java-logo.svg", "unknown-logo.svg"]);
        let mut buf = Vec::new();
        run_catalog(&mut buf, &FolioConfig::default(), Some(dir.path()), false, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "NAME    LOGO\n\
             Java    /assets/logos/Java-logo.svg\n\
             Python  /assets/logos/Python-logo.svg\n"
        );
    }

    #[test]
    fn json_output() {
        let dir = logo_dir(&["Git-logo.svg"]);
        let mut buf = Vec::new();
        run_catalog(&mut buf, &FolioConfig::default(), Some(dir.path()), false, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["name"], "Git");
        assert_eq!(value[0]["logo"], "/assets/logos/Git-logo.svg");
    }

    #[test]
    fn ordinal_flag_overrides_config() {
        let dir = logo_dir(&["SQL.svg", "Scipy-logo.svg"]);
        let mut buf = Vec::new();
        run_catalog(&mut buf, &FolioConfig::default(), Some(dir.path()), true, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["name"], "SQL");
        assert_eq!(value[1]["name"], "Scipy");
    }

    #[test]
    fn empty_catalog_message() {
        let dir = logo_dir(&[]);
        let mut buf = Vec::new();
        run_catalog(&mut buf, &FolioConfig::default(), Some(dir.path()), false, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No logos matched the allow-list.\n");
    }

    #[test]
    fn missing_dir_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("logos");
        let mut buf = Vec::new();
        let err = run_catalog(&mut buf, &FolioConfig::default(), Some(&missing), false, false)
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("discover logos in"));
    }
}
