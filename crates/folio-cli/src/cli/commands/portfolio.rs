//! `folio skills`, `folio studies`, `folio author`.

use anyhow::Result;
use folio_core::portfolio::{Author, AUTHOR, SKILLS, STUDIES};
use serde::Serialize;
use std::io::Write;

use super::write_json;

pub fn run_skills<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, SKILLS);
    }
    for skill in SKILLS {
        writeln!(out, "{}", skill.title)?;
        writeln!(out, "  {}", skill.description)?;
    }
    Ok(())
}

pub fn run_studies<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        return write_json(out, STUDIES);
    }
    for study in STUDIES {
        writeln!(out, "{} ({})", study.title, study.institution)?;
        writeln!(out, "  {}", study.description)?;
        writeln!(out, "  tags: {}", study.tags.join(", "))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct AuthorView<'a> {
    #[serde(flatten)]
    author: &'a Author,
    site: &'a str,
}

/// Prints the author together with the site URL from config.
pub fn run_author<W: Write>(out: &mut W, site_url: &str, json: bool) -> Result<()> {
    if json {
        let view = AuthorView {
            author: &AUTHOR,
            site: site_url,
        };
        return write_json(out, &view);
    }
    writeln!(out, "{} <{}>", AUTHOR.name, AUTHOR.url)?;
    writeln!(out, "  site: {}", site_url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn author_text() {
        let text = capture(|out| run_author(out, "https://example.me", false));
        assert_eq!(
            text,
            "Achraf Salimi <https://github.com/AchrafSL>\n  site: https://example.me\n"
        );
    }

    #[test]
    fn author_json_includes_site() {
        let text = capture(|out| run_author(out, "https://example.me", true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "Achraf Salimi");
        assert_eq!(value["site"], "https://example.me");
    }

    #[test]
    fn skills_text_lists_titles_in_order() {
        let text = capture(|out| run_skills(out, false));
        let titles: Vec<&str> = text.lines().filter(|l| !l.starts_with("  ")).collect();
        assert_eq!(
            titles,
            vec!["Data Analysis", "Data Science", "Data Engineering", "Development & CS"]
        );
    }

    #[test]
    fn studies_text_includes_tags() {
        let text = capture(|out| run_studies(out, false));
        assert!(text.contains("  tags: Big Data, Artificial Intelligence, Advanced Applications, Machine Learning\n"));
    }

    #[test]
    fn json_outputs_parse() {
        let runs: [fn(&mut Vec<u8>, bool) -> Result<()>; 2] = [run_skills, run_studies];
        for f in runs {
            let text = capture(|out| f(out, true));
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert!(value.is_array() || value.is_object());
        }
    }
}
