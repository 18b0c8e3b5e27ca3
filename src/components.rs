//! Pathway component extraction
//!
//! Each socioeconomic pathway ships a `{ssp}_config.xml` file holding the scenario
//! components for that pathway. The extractor reads it once, turns every `Value` and
//! every top-level comment into a [`ComponentEntry`], and caches the result for the
//! lifetime of the extractor.

use crate::document::{ConfigDocument, VALUE_TAG};
use crate::error::ExtractError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Name prefix marking entries that are re-emitted as comments.
pub const COMMENT_PREFIX: &str = "COMMENT_";

/// A `(name, value)` pair taken from a pathway file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    pub value: String,
}

/// How an entry is written back into a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Value,
    Comment,
}

impl ComponentEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a comment entry from raw comment text.
    pub fn comment(text: &str) -> Self {
        let text = text.trim();
        let key = text.to_lowercase().replace([' ', '-'], "_");
        Self {
            name: format!("{}{}", COMMENT_PREFIX, key),
            value: format!("<!-- {} -->", text),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        if self.name.starts_with(COMMENT_PREFIX) && self.value.starts_with("<!--") {
            ComponentKind::Comment
        } else {
            ComponentKind::Value
        }
    }

    /// Comment payload with the `<!-- -->` delimiters removed.
    pub fn comment_text(&self) -> &str {
        let inner = self.value.trim();
        let inner = inner.strip_prefix("<!--").unwrap_or(inner);
        let inner = inner.strip_suffix("-->").unwrap_or(inner);
        inner.trim()
    }
}

/// Source file path for a pathway id.
pub fn component_file_path(dir: &Path, ssp: &str) -> PathBuf {
    dir.join(format!("{}_config.xml", ssp))
}

/// Reads and caches pathway component files
pub struct ComponentExtractor {
    directory: PathBuf,
    cache: RwLock<HashMap<String, Arc<[ComponentEntry]>>>,
}

impl ComponentExtractor {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Components for `ssp`; empty when the file is missing or unreadable.
    ///
    /// The first call per id reads the file, later calls hit the cache. Two workers
    /// racing on a cold id may both read the file; the entries are identical either way.
    pub fn extract(&self, ssp: &str) -> Arc<[ComponentEntry]> {
        if let Some(cached) = self.cache.read().get(ssp) {
            return Arc::clone(cached);
        }

        let path = component_file_path(&self.directory, ssp);
        let entries: Arc<[ComponentEntry]> = match read_components(&path) {
            Ok(entries) => {
                info!(ssp, count = entries.len(), "Extracted {} components from {}", entries.len(), ssp);
                entries.into()
            }
            Err(e) => {
                error!(ssp, path = %path.display(), "{}", e);
                Arc::from(Vec::new())
            }
        };

        Arc::clone(
            self.cache
                .write()
                .entry(ssp.to_string())
                .or_insert(entries),
        )
    }

    /// Pathway ids currently held in the cache, sorted.
    pub fn cached_pathways(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.cache.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}

/// Parse a pathway file into entries: every `Value` in document order, then the
/// root's direct comments in document order.
pub fn read_components(path: &Path) -> Result<Vec<ComponentEntry>, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    let xml = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = ConfigDocument::parse(&xml).map_err(|e| ExtractError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(entries_from_document(&doc))
}

fn entries_from_document(doc: &ConfigDocument) -> Vec<ComponentEntry> {
    let root = doc.root();
    let mut entries: Vec<ComponentEntry> = root
        .descendants()
        .filter(|el| el.name == VALUE_TAG)
        .filter_map(|el| {
            let name = el.attribute("name").filter(|n| !n.is_empty())?;
            let text = el.text().filter(|t| !t.is_empty())?;
            Some(ComponentEntry::new(name, text.trim()))
        })
        .collect();
    entries.extend(root.comments().map(ComponentEntry::comment));
    entries
}
