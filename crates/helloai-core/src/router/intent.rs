use crate::constants::commands;
use crate::tables::StaticTables;

/// What a line of user input is asking for. Produced once by
/// [`Intent::classify`] and consumed by an exhaustive match in the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<'a> {
    /// Exact hit in the code-snippet table.
    CodeSnippet(&'static str),
    /// Exact hit in the Git-command table.
    GitHelp(&'static str),
    Docs { query: &'a str },
    /// `name` ends at the first whitespace; `content` is the rest, verbatim.
    SaveSnippet { name: &'a str, content: &'a str },
    FetchSnippet { name: &'a str },
    DeleteSnippet { name: &'a str },
    ListSnippets,
    ReviewCode { code: &'a str },
    /// Anything else goes to the completion service untouched.
    Chat { prompt: &'a str },
}

impl<'a> Intent<'a> {
    /// First match wins. Static tables are checked before any command
    /// keyword, so an exact trigger can never be shadowed by a prefix.
    pub fn classify(input: &'a str, tables: &StaticTables) -> Self {
        let trimmed = input.trim();

        if let Some(response) = tables.lookup_code(trimmed) {
            return Intent::CodeSnippet(response);
        }
        if let Some(response) = tables.lookup_git(trimmed) {
            return Intent::GitHelp(response);
        }

        // Command bodies keep their trailing whitespace; only keys and
        // queries are trimmed.
        let command = input.trim_start();

        if let Some(query) = strip_keyword(command, commands::DOCS) {
            return Intent::Docs { query: query.trim_end() };
        }
        if let Some(rest) = strip_keyword(command, commands::SAVE_SNIPPET) {
            let (name, content) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            return Intent::SaveSnippet { name, content };
        }
        if let Some(name) = strip_keyword(command, commands::FETCH_SNIPPET) {
            return Intent::FetchSnippet { name: name.trim_end() };
        }
        if let Some(name) = strip_keyword(command, commands::DELETE_SNIPPET) {
            return Intent::DeleteSnippet { name: name.trim_end() };
        }
        if trimmed.eq_ignore_ascii_case(commands::LIST_SNIPPETS) {
            return Intent::ListSnippets;
        }
        if let Some(code) = strip_keyword(command, commands::REVIEW_CODE) {
            return Intent::ReviewCode { code };
        }

        Intent::Chat { prompt: input }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::CodeSnippet(_) => "code_snippet",
            Intent::GitHelp(_) => "git_help",
            Intent::Docs { .. } => "docs",
            Intent::SaveSnippet { .. } => "save_snippet",
            Intent::FetchSnippet { .. } => "fetch_snippet",
            Intent::DeleteSnippet { .. } => "delete_snippet",
            Intent::ListSnippets => "list_snippets",
            Intent::ReviewCode { .. } => "review_code",
            Intent::Chat { .. } => "chat",
        }
    }
}

/// Case-insensitive keyword match. Returns the remainder with leading
/// whitespace removed, or `None` if the keyword is absent or only whitespace
/// follows.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = input[keyword.len()..].trim_start();
    (!rest.trim_end().is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> Intent<'_> {
        Intent::classify(input, &StaticTables::builtin())
    }

    #[test]
    fn test_static_tables_come_first() {
        assert!(matches!(classify("Git Init"), Intent::GitHelp(_)));
        assert!(matches!(classify("hello world in python"), Intent::CodeSnippet(_)));
    }

    #[test]
    fn test_exact_trigger_beats_command_prefix() {
        let code = [crate::tables::StaticEntry {
            trigger: "docs array map",
            response: "literal",
        }];
        let tables = StaticTables::new(&code, &[]);
        assert_eq!(
            Intent::classify("DOCS array map", &tables),
            Intent::CodeSnippet("literal")
        );
    }

    #[test]
    fn test_docs_query() {
        assert_eq!(classify("Docs   array map "), Intent::Docs { query: "array map" });
        assert!(matches!(classify("docs"), Intent::Chat { .. }));
        assert!(matches!(classify("documentation please"), Intent::Chat { .. }));
    }

    #[test]
    fn test_save_splits_on_first_whitespace() {
        assert_eq!(
            classify("save snippet greet console.log('hi')"),
            Intent::SaveSnippet {
                name: "greet",
                content: "console.log('hi')"
            }
        );
        assert_eq!(
            classify("SAVE SNIPPET My Snippet body"),
            Intent::SaveSnippet {
                name: "My",
                content: "Snippet body"
            }
        );
        assert_eq!(
            classify("save snippet empty"),
            Intent::SaveSnippet {
                name: "empty",
                content: ""
            }
        );
    }

    #[test]
    fn test_content_keeps_inner_whitespace() {
        assert_eq!(
            classify("save snippet f a  b\n  c"),
            Intent::SaveSnippet {
                name: "f",
                content: "a  b\n  c"
            }
        );
    }

    #[test]
    fn test_save_keeps_trailing_whitespace() {
        assert_eq!(
            classify("save snippet py def f():\n    pass\n"),
            Intent::SaveSnippet {
                name: "py",
                content: "def f():\n    pass\n"
            }
        );
        assert_eq!(
            classify("review code x = 1  \n"),
            Intent::ReviewCode { code: "x = 1  \n" }
        );
        assert_eq!(classify("fetch snippet py \n"), Intent::FetchSnippet { name: "py" });
        assert!(matches!(classify("docs   \n"), Intent::Chat { .. }));
    }

    #[test]
    fn test_snippet_management_commands() {
        assert_eq!(classify("fetch snippet greet"), Intent::FetchSnippet { name: "greet" });
        assert_eq!(classify("delete snippet greet"), Intent::DeleteSnippet { name: "greet" });
        assert_eq!(classify("List Snippets"), Intent::ListSnippets);
    }

    #[test]
    fn test_review_and_fallback() {
        assert_eq!(
            classify("review code fn main() {}"),
            Intent::ReviewCode { code: "fn main() {}" }
        );
        assert_eq!(
            classify("  explain recursion"),
            Intent::Chat { prompt: "  explain recursion" }
        );
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert!(matches!(classify("ドキュメント"), Intent::Chat { .. }));
        assert!(matches!(classify("é"), Intent::Chat { .. }));
    }
}
