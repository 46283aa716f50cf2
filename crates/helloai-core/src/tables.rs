use crate::snippets::normalize_key;
use std::collections::HashMap;

/// One preloaded trigger → response pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEntry {
    pub trigger: &'static str,
    pub response: &'static str,
}

const fn entry(trigger: &'static str, response: &'static str) -> StaticEntry {
    StaticEntry { trigger, response }
}

pub const CODE_SNIPPETS: &[StaticEntry] = &[
    entry("hello world in python", "print('Hello, world!')"),
    entry(
        "create a react component",
        r#"import React from 'react';

function MyComponent() {
  return (
    <div>
      Hello, World!
    </div>
  );
}

export default MyComponent;"#,
    ),
    entry(
        "hello world in rust",
        r#"fn main() {
    println!("Hello, world!");
}"#,
    ),
    entry("hello world in javascript", "console.log('Hello, world!');"),
    entry(
        "read a file in python",
        r#"with open('file.txt') as f:
    contents = f.read()"#,
    ),
    entry(
        "fetch json in javascript",
        r#"const response = await fetch(url);
const data = await response.json();"#,
    ),
];

pub const GIT_COMMANDS: &[StaticEntry] = &[
    entry("git init", "This command initializes a new Git repository."),
    entry(
        "git clone",
        "This command clones an existing Git repository into a local directory.",
    ),
    entry(
        "git status",
        "This command shows the status of changes as untracked, modified, or staged.",
    ),
    entry(
        "git add",
        "This command stages changes in the working directory for the next commit.",
    ),
    entry(
        "git commit",
        "This command records the staged changes as a new commit in the repository history.",
    ),
    entry(
        "git push",
        "This command uploads local commits to a remote repository.",
    ),
    entry(
        "git pull",
        "This command fetches changes from a remote repository and merges them into the current branch.",
    ),
    entry(
        "git branch",
        "This command lists, creates, or deletes branches.",
    ),
    entry(
        "git log",
        "This command shows the commit history of the current branch.",
    ),
    entry(
        "git diff",
        "This command shows changes between commits, the index, and the working tree.",
    ),
];

/// Immutable trigger tables, built once and matched on the whole
/// normalized input.
#[derive(Debug, Clone)]
pub struct StaticTables {
    code: HashMap<String, &'static str>,
    git: HashMap<String, &'static str>,
}

impl StaticTables {
    pub fn new(code: &[StaticEntry], git: &[StaticEntry]) -> Self {
        Self {
            code: Self::index(code),
            git: Self::index(git),
        }
    }

    pub fn builtin() -> Self {
        Self::new(CODE_SNIPPETS, GIT_COMMANDS)
    }

    fn index(entries: &[StaticEntry]) -> HashMap<String, &'static str> {
        entries
            .iter()
            .map(|e| (normalize_key(e.trigger), e.response))
            .collect()
    }

    pub fn lookup_code(&self, input: &str) -> Option<&'static str> {
        self.code.get(&normalize_key(input)).copied()
    }

    pub fn lookup_git(&self, input: &str) -> Option<&'static str> {
        self.git.get(&normalize_key(input)).copied()
    }
}

impl Default for StaticTables {
    fn default() -> Self {
        Self::builtin()
    }
}
