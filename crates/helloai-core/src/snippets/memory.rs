use super::{normalize_key, Snippet, SnippetStore};
use crate::error::Result;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-process snippet store. Nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemorySnippetStore {
    snippets: Mutex<BTreeMap<String, Snippet>>,
}

impl MemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Snippet>> {
        self.snippets.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SnippetStore for MemorySnippetStore {
    fn save(&self, name: &str, content: &str) -> Result<()> {
        self.lock()
            .insert(normalize_key(name), Snippet::new(name.trim(), content));
        Ok(())
    }

    fn fetch(&self, name: &str) -> Option<String> {
        self.lock()
            .get(&normalize_key(name))
            .map(|s| s.content.clone())
    }

    fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.lock().remove(&normalize_key(name)).is_some())
    }

    fn list_all(&self) -> Vec<Snippet> {
        self.lock().values().cloned().collect()
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
}
