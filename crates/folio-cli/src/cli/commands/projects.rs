//! `folio projects` – list projects, optionally filtered by tech stack.

use anyhow::Result;
use folio_core::catalog::{filter_and_sort, SortOrder};
use folio_core::portfolio::{Project, PROJECTS};
use std::io::Write;

use super::write_json;

/// Projects matching `stack` (all when `None`), in declaration order or by title.
pub fn select_projects(stack: Option<&str>, sorted: bool) -> Vec<&'static Project> {
    let keep = |p: &&'static Project| stack.map_or(true, |tech| p.uses(tech));
    if sorted {
        filter_and_sort(PROJECTS, keep, |p| p.title, SortOrder::Locale)
    } else {
        PROJECTS.iter().filter(keep).collect()
    }
}

pub fn run_projects<W: Write>(
    out: &mut W,
    stack: Option<&str>,
    sorted: bool,
    json: bool,
) -> Result<()> {
    let projects = select_projects(stack, sorted);
    if json {
        return write_json(out, &projects);
    }
    if projects.is_empty() {
        writeln!(out, "No projects found.")?;
        return Ok(());
    }
    for p in projects {
        writeln!(out, "{}", p.title)?;
        writeln!(out, "  {}", p.tech_stack)?;
        writeln!(out, "  {}", p.description)?;
        writeln!(out, "  {} {} [{}]", p.cta_text, p.cta_link, p.icon_name())?;
    }
    Ok(())
}
