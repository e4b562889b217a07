use crate::{Corpus, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};
use tracing::debug;

/// Builds a [`Corpus`] from a directory of HTML pages.
///
/// Scans `directory` (non-recursively), reads every `*.html` file, and takes
/// its `<a href="...">` targets as outbound links. Links that do not name
/// another page of the corpus, and self-links, are dropped during corpus
/// construction.
pub fn crawl(directory: &Path) -> Result<Corpus> {
    let href = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");

    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links = href
            .captures_iter(&contents)
            .map(|cap| cap[1].to_string())
            .collect();
        pages.insert(name.to_string(), links);
    }
    debug!(pages = pages.len(), "crawled corpus directory");
    Ok(Corpus::from_links(pages))
}
