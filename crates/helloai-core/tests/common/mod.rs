#![allow(dead_code)]

use helloai_core::{
    CompletionClient, DocResult, DocSearch, HelloError, IntentRouter, MemorySnippetStore, Snippet,
    SnippetStore,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Memory store that counts mutations.
#[derive(Default)]
pub struct CountingStore {
    inner: MemorySnippetStore,
    pub writes: AtomicUsize,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnippetStore for CountingStore {
    fn save(&self, name: &str, content: &str) -> helloai_core::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save(name, content)
    }

    fn fetch(&self, name: &str) -> Option<String> {
        self.inner.fetch(name)
    }

    fn delete(&self, name: &str) -> helloai_core::Result<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(name)
    }

    fn list_all(&self) -> Vec<Snippet> {
        self.inner.list_all()
    }

    fn clear(&self) -> helloai_core::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.clear()
    }
}

/// Store whose writes always fail.
pub struct BrokenStore;

impl SnippetStore for BrokenStore {
    fn save(&self, _name: &str, _content: &str) -> helloai_core::Result<()> {
        Err(HelloError::Storage("disk is read-only".into()))
    }

    fn fetch(&self, _name: &str) -> Option<String> {
        None
    }

    fn delete(&self, _name: &str) -> helloai_core::Result<bool> {
        Err(HelloError::Storage("disk is read-only".into()))
    }

    fn list_all(&self) -> Vec<Snippet> {
        Vec::new()
    }

    fn clear(&self) -> helloai_core::Result<()> {
        Err(HelloError::Storage("disk is read-only".into()))
    }
}

pub enum DocsBehavior {
    Results(Vec<DocResult>),
    Fail(String),
}

/// Doc search fake that records queries.
pub struct FakeDocs {
    behavior: DocsBehavior,
    pub queries: Mutex<Vec<String>>,
}

impl FakeDocs {
    pub fn with_results(results: Vec<DocResult>) -> Self {
        Self {
            behavior: DocsBehavior::Results(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            behavior: DocsBehavior::Fail(reason.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl DocSearch for FakeDocs {
    async fn search(&self, query: &str) -> Result<Vec<DocResult>, HelloError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.behavior {
            DocsBehavior::Results(results) => Ok(results.clone()),
            DocsBehavior::Fail(reason) => Err(HelloError::Transport(reason.clone())),
        }
    }
}

pub enum CompletionBehavior {
    Reply(String),
    Transport(String),
    Auth(String),
}

/// Completion fake that records `(prompt, max_tokens)` pairs.
pub struct FakeCompletion {
    behavior: CompletionBehavior,
    pub prompts: Mutex<Vec<(String, u32)>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self::new(CompletionBehavior::Reply(text.to_string()))
    }

    pub fn transport_error(reason: &str) -> Self {
        Self::new(CompletionBehavior::Transport(reason.to_string()))
    }

    pub fn auth_error(reason: &str) -> Self {
        Self::new(CompletionBehavior::Auth(reason.to_string()))
    }

    fn new(behavior: CompletionBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<(String, u32)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl CompletionClient for FakeCompletion {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, HelloError> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens));
        match &self.behavior {
            CompletionBehavior::Reply(text) => Ok(text.clone()),
            CompletionBehavior::Transport(reason) => Err(HelloError::Transport(reason.clone())),
            CompletionBehavior::Auth(reason) => Err(HelloError::Auth(reason.clone())),
        }
    }
}

/// Router over fresh fakes, with handles kept for assertions.
pub struct Harness {
    pub store: Arc<CountingStore>,
    pub docs: Arc<FakeDocs>,
    pub completion: Arc<FakeCompletion>,
    pub router: IntentRouter,
}

impl Harness {
    pub fn new(docs: FakeDocs, completion: FakeCompletion) -> Self {
        let store = Arc::new(CountingStore::default());
        let docs = Arc::new(docs);
        let completion = Arc::new(completion);
        let router = IntentRouter::new(store.clone(), docs.clone(), completion.clone());
        Self {
            store,
            docs,
            completion,
            router,
        }
    }

    pub fn default_fakes() -> Self {
        Self::new(
            FakeDocs::with_results(Vec::new()),
            FakeCompletion::replying("  generated text \n"),
        )
    }

    pub fn remote_calls(&self) -> usize {
        self.docs.calls() + self.completion.calls()
    }
}
