//! CLI command handlers. Each writes to the given output so tests can capture it.

mod catalog;
mod normalize;
mod portfolio;
mod projects;

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub use catalog::run_catalog;
pub use normalize::run_normalize;
pub use portfolio::{run_author, run_skills, run_studies};
pub use projects::run_projects;

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
