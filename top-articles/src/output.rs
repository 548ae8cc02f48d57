use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pageviews::is_content_title;

pub const OUTPUT_FILE_NAME: &str = "top_articles.json";

/// Pretty JSON array with four space indentation. Non-ASCII titles are
/// written as-is rather than escaped.
pub fn to_json(titles: &[String]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    titles
        .serialize(&mut serializer)
        .context("Failed to serialize top articles")?;

    String::from_utf8(buf).context("Serialized top articles are not valid UTF-8")
}

/// Write `titles` to `<output_dir>/top_articles.json`, replacing any previous
/// file. Nothing is written for an empty list; `None` is returned instead.
pub fn save_top_articles(titles: &[String], output_dir: &Path) -> Result<Option<PathBuf>> {
    if titles.is_empty() {
        warn!("No pages were fetched. Please check your date settings or API availability.");
        return Ok(None);
    }

    let json = to_json(titles)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(OUTPUT_FILE_NAME);
    fs::write(&path, json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;

    Ok(Some(path))
}

pub fn load_top_articles(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read top articles from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse top articles JSON from {}", path.display()))
}

/// Verify a loaded list is usable by the game: non-empty, no front page,
/// no `Special:` pages, no duplicates.
pub fn check_top_articles(titles: &[String]) -> Result<()> {
    if titles.is_empty() {
        return Err(anyhow!("Top articles list is empty"));
    }

    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    for (idx, title) in titles.iter().enumerate() {
        if !is_content_title(title) {
            problems.push(format!("{}: not an article: {}", idx, title));
        }
        if !seen.insert(title.as_str()) {
            problems.push(format!("{}: duplicate title: {}", idx, title));
        }
    }

    if !problems.is_empty() {
        return Err(anyhow!(problems.join("\n")));
    }
    Ok(())
}
