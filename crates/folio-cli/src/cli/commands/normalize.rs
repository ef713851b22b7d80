//! `folio normalize <path>...` – show display names for asset paths.

use anyhow::Result;
use folio_core::normalize::normalize;
use std::io::Write;

pub fn run_normalize<W: Write>(out: &mut W, paths: &[String]) -> Result<()> {
    let width = paths.iter().map(|p| p.len()).max().unwrap_or(0);
    for path in paths {
        writeln!(out, "{:<width$}  {}", path, normalize(path))?;
    }
    Ok(())
}
