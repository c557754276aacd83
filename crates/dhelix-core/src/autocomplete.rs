//! Tab autocomplete for command names and entry names.
//!
//! - Command names (e.g., "cl" → "clear ")
//! - Directory names in the current directory after `cd`
//! - File names in the current directory after `cat`
//!
//! Single match: complete immediately. Multiple matches: extend to the
//! common prefix and report every option. Ghost-text hints use the same
//! matching.

use crate::commands::CommandInterpreter;
use crate::filesystem::VirtualFs;

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

/// What the word under the cursor names.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    Command,
    Directory,
    File,
    None,
}

impl CompletionMode {
    fn from_input(input: &str) -> (Self, &str, &str) {
        match input.split_once(char::is_whitespace) {
            None => (Self::Command, input, ""),
            Some((cmd, rest)) => {
                let mode = match cmd {
                    "cd" => Self::Directory,
                    "cat" => Self::File,
                    _ => Self::None,
                };
                (mode, cmd, rest.trim_start())
            }
        }
    }
}

/// Candidates for the word under the cursor, in display order.
fn candidates<'a>(
    mode: CompletionMode,
    partial: &str,
    interpreter: &'a CommandInterpreter,
    fs: &'a VirtualFs,
) -> Vec<&'a str> {
    match mode {
        CompletionMode::Command => interpreter
            .names()
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .collect(),
        CompletionMode::Directory | CompletionMode::File => {
            let want_dirs = mode == CompletionMode::Directory;
            fs.entries_in_current()
                .filter(|e| e.is_directory() == want_dirs)
                .map(|e| e.filename.as_str())
                .filter(|name| name.starts_with(partial))
                .collect()
        }
        CompletionMode::None => Vec::new(),
    }
}

/// Perform autocomplete on Tab press.
pub fn autocomplete(
    input: &str,
    interpreter: &CommandInterpreter,
    fs: &VirtualFs,
) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, cmd, partial) = CompletionMode::from_input(input);
    let word = if mode == CompletionMode::Command { cmd } else { partial };
    let matches = candidates(mode, word, interpreter, fs);

    let prefix = match mode {
        CompletionMode::Command => String::new(),
        _ => format!("{} ", cmd),
    };

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!("{}{} ", prefix, only)),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(
                format!("{}{}", prefix, common),
                matches.iter().map(|s| s.to_string()).collect(),
            )
        }
    }
}

/// Suffix that would complete the current input, for ghost text.
pub fn get_hint(input: &str, interpreter: &CommandInterpreter, fs: &VirtualFs) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let (mode, cmd, partial) = CompletionMode::from_input(input);
    let word = if mode == CompletionMode::Command { cmd } else { partial };

    candidates(mode, word, interpreter, fs)
        .into_iter()
        .find(|name| *name != word)
        .map(|name| name[word.len()..].to_string())
}

/// Longest common prefix of the given strings.
fn find_common_prefix(strings: &[&str]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FsEntry, Seed};

    fn setup() -> (CommandInterpreter, VirtualFs) {
        let seed = Seed {
            creator: "x".to_string(),
            contacts: vec![],
            entries: vec![
                FsEntry::directory("/", "documents"),
                FsEntry::directory("/", "downloads"),
                FsEntry::file("/", "AUTHOR", "me"),
            ],
        };
        (
            CommandInterpreter::with_builtins(&seed),
            VirtualFs::from_seed(&seed).unwrap(),
        )
    }

    #[test]
    fn test_command_completion_single() {
        let (interpreter, fs) = setup();
        assert_eq!(
            autocomplete("he", &interpreter, &fs),
            AutocompleteResult::Single("help ".to_string())
        );
    }

    #[test]
    fn test_command_completion_multiple() {
        let (interpreter, fs) = setup();
        match autocomplete("c", &interpreter, &fs) {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "c");
                assert_eq!(matches, vec!["cat", "cd", "clear", "contact", "cwd"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }

        match autocomplete("co", &interpreter, &fs) {
            AutocompleteResult::Single(s) => assert_eq!(s, "contact "),
            other => panic!("Expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_completion() {
        let (interpreter, fs) = setup();
        assert_eq!(
            autocomplete("cd doc", &interpreter, &fs),
            AutocompleteResult::Single("cd documents ".to_string())
        );
        assert_eq!(
            autocomplete("cd d", &interpreter, &fs),
            AutocompleteResult::Multiple(
                "cd do".to_string(),
                vec!["documents".to_string(), "downloads".to_string()]
            )
        );
        // Files are not offered to cd
        assert_eq!(
            autocomplete("cd AU", &interpreter, &fs),
            AutocompleteResult::None
        );
    }

    #[test]
    fn test_file_completion() {
        let (interpreter, fs) = setup();
        assert_eq!(
            autocomplete("cat A", &interpreter, &fs),
            AutocompleteResult::Single("cat AUTHOR ".to_string())
        );
        assert_eq!(
            autocomplete("cat d", &interpreter, &fs),
            AutocompleteResult::None
        );
    }

    #[test]
    fn test_no_completion_for_other_commands() {
        let (interpreter, fs) = setup();
        assert_eq!(
            autocomplete("contact e", &interpreter, &fs),
            AutocompleteResult::None
        );
        assert_eq!(autocomplete("   ", &interpreter, &fs), AutocompleteResult::None);
    }

    #[test]
    fn test_tab_separated_argument_completes_like_space() {
        let (interpreter, fs) = setup();
        assert_eq!(
            autocomplete("cd\tdoc", &interpreter, &fs),
            AutocompleteResult::Single("cd documents ".to_string())
        );
        assert_eq!(get_hint("cat\tAUT", &interpreter, &fs), Some("HOR".to_string()));
    }

    #[test]
    fn test_hints() {
        let (interpreter, fs) = setup();
        assert_eq!(get_hint("hel", &interpreter, &fs), Some("p".to_string()));
        assert_eq!(get_hint("cd docu", &interpreter, &fs), Some("ments".to_string()));
        assert_eq!(get_hint("help", &interpreter, &fs), None);
        assert_eq!(get_hint("xyz", &interpreter, &fs), None);
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(find_common_prefix(&["hello", "help", "helicopter"]), "hel");
        assert_eq!(find_common_prefix(&["abc"]), "abc");
        assert_eq!(find_common_prefix(&["abc", "xyz"]), "");
        assert_eq!(find_common_prefix(&[]), "");
    }
}
