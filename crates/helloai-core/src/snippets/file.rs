use super::{normalize_key, Snippet, SnippetStore};
use crate::error::{HelloError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// On-disk layout of the snippet file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct SnippetIndex {
    #[serde(default)]
    snippets: BTreeMap<String, Snippet>,
}

/// Snippet store backed by a single JSON document.
///
/// The whole index is cached in memory and written through on every
/// mutation. A write goes to `<file>.tmp` first and is renamed into place, so
/// a crash never leaves a half-written file behind.
pub struct FileSnippetStore {
    path: PathBuf,
    index: Mutex<SnippetIndex>,
}

impl FileSnippetStore {
    /// Open the store at `path`, creating parent directories as needed.
    /// A missing file is an empty store; a corrupt one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    HelloError::Storage(format!(
                        "Failed to create snippet directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let index = Self::load_index(&path)?;
        tracing::debug!(
            path = %path.display(),
            count = index.snippets.len(),
            "Opened snippet store"
        );

        Ok(Self {
            path,
            index: Mutex::new(index),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_index(path: &Path) -> Result<SnippetIndex> {
        if !path.exists() {
            return Ok(SnippetIndex::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            HelloError::Storage(format!("Failed to read snippet file: {}", e))
        })?;

        if contents.trim().is_empty() {
            return Ok(SnippetIndex::default());
        }

        serde_json::from_str(&contents)
            .map_err(|e| HelloError::Storage(format!("Failed to parse snippet file: {}", e)))
    }

    fn write_index(&self, index: &SnippetIndex) -> Result<()> {
        let contents = serde_json::to_string_pretty(index).map_err(|e| {
            HelloError::Storage(format!("Failed to serialize snippets: {}", e))
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(|e| {
            HelloError::Storage(format!("Failed to write temporary snippet file: {}", e))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            HelloError::Storage(format!("Failed to rename snippet file: {}", e))
        })?;

        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, SnippetIndex> {
        self.index.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply `change` to a copy of the index, persist it, then commit it to
    /// the cache. The cache only moves forward once the file is on disk.
    fn mutate<T>(&self, change: impl FnOnce(&mut SnippetIndex) -> T) -> Result<T> {
        let mut guard = self.lock();
        let mut next = guard.clone();
        let out = change(&mut next);
        self.write_index(&next)?;
        *guard = next;
        Ok(out)
    }
}

impl SnippetStore for FileSnippetStore {
    fn save(&self, name: &str, content: &str) -> Result<()> {
        let key = normalize_key(name);
        self.mutate(|index| {
            index
                .snippets
                .insert(key.clone(), Snippet::new(name.trim(), content));
        })?;
        tracing::info!(key = %key, "Saved snippet");
        Ok(())
    }

    fn fetch(&self, name: &str) -> Option<String> {
        self.lock()
            .snippets
            .get(&normalize_key(name))
            .map(|s| s.content.clone())
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let key = normalize_key(name);
        if !self.lock().snippets.contains_key(&key) {
            return Ok(false);
        }
        let removed = self.mutate(|index| index.snippets.remove(&key).is_some())?;
        tracing::info!(key = %key, removed, "Deleted snippet");
        Ok(removed)
    }

    fn list_all(&self) -> Vec<Snippet> {
        self.lock().snippets.values().cloned().collect()
    }

    fn clear(&self) -> Result<()> {
        self.mutate(|index| index.snippets.clear())?;
        tracing::info!(path = %self.path.display(), "Cleared snippet store");
        Ok(())
    }
}
