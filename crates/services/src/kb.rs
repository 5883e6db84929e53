//! Knowledge-base search and document listing.
//!
//! Search returns a fixed set of curated references templated on the
//! query. Document listing backs the `kb-ingest` binary.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// A single knowledge-base hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Knowledge-base search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbResponse {
    pub results: Vec<KbResult>,
}

/// Search the curated knowledge base for a query.
pub fn search(query: &str) -> KbResponse {
    KbResponse {
        results: vec![
            KbResult {
                title: format!("WHO guidance: {query}"),
                url: "https://www.who.int/".to_string(),
                snippet: "Official WHO guidance.".to_string(),
            },
            KbResult {
                title: format!("CDC overview: {query}"),
                url: "https://www.cdc.gov/".to_string(),
                snippet: "CDC clinical overview.".to_string(),
            },
        ],
    }
}

/// Recursively list every file under `dir`, sorted for deterministic
/// output. Missing directories yield an empty list rather than an error.
pub fn list_documents(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut docs = Vec::new();
    if dir.is_dir() {
        collect_files(dir, &mut docs)?;
    }
    docs.sort();
    Ok(docs)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_curated_sources() {
        let response = search("influenza");
        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].title.contains("influenza"));
        assert_eq!(response.results[0].url, "https://www.who.int/");
        assert_eq!(response.results[1].url, "https://www.cdc.gov/");
    }

    #[test]
    fn test_list_documents_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.md"), "b").unwrap();
        std::fs::write(dir.path().join("a.md"), "a").unwrap();
        std::fs::write(dir.path().join("nested/c.md"), "c").unwrap();

        let docs = list_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs[0].ends_with("a.md"));
        assert!(docs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_list_documents_missing_dir_is_empty() {
        let docs = list_documents(Path::new("/nonexistent/kb/sources")).unwrap();
        assert!(docs.is_empty());
    }
}
