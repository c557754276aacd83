//! The session root: one filesystem cursor plus the command table.

use crate::autocomplete::{self, AutocompleteResult};
use crate::commands::{CommandInterpreter, Reply};
use crate::error::SeedError;
use crate::filesystem::VirtualFs;
use crate::models::Seed;

/// One interactive terminal session.
///
/// Owns the [`VirtualFs`] (and with it the navigation cursor) and lends it
/// to the interpreter for each submitted line. Independent sessions never
/// share state.
#[derive(Debug)]
pub struct Session {
    fs: VirtualFs,
    interpreter: CommandInterpreter,
}

impl Session {
    pub fn new(fs: VirtualFs, interpreter: CommandInterpreter) -> Self {
        Self { fs, interpreter }
    }

    /// Session with the built-in commands over the seed's filesystem.
    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        let fs = VirtualFs::from_seed(seed)?;
        log::debug!(
            "session started with {} entries and {} contacts",
            seed.entries.len(),
            seed.contacts.len()
        );
        Ok(Self::new(fs, CommandInterpreter::with_builtins(seed)))
    }

    /// Session over the seed embedded in the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_seed(&Seed::builtin()?)
    }

    /// Run one line of input.
    pub fn submit(&mut self, line: &str) -> Reply {
        let reply = self.interpreter.execute(&mut self.fs, line);
        if let Err(ref e) = reply {
            log::debug!("'{}' failed: {}", line.trim(), e);
        }
        reply
    }

    /// Prompt reflecting the current directory, e.g. `$ /documents > `.
    pub fn prompt(&self) -> String {
        format!("$ {} > ", self.fs.current_directory())
    }

    pub fn current_directory(&self) -> &str {
        self.fs.current_directory()
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    pub fn autocomplete(&self, input: &str) -> AutocompleteResult {
        autocomplete::autocomplete(input, &self.interpreter, &self.fs)
    }

    pub fn hint(&self, input: &str) -> Option<String> {
        autocomplete::get_hint(input, &self.interpreter, &self.fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_follows_cd() {
        let mut session = Session::builtin().unwrap();
        assert_eq!(session.prompt(), "$ / > ");

        session.submit("cd documents").unwrap();
        assert_eq!(session.prompt(), "$ /documents > ");

        session.submit("cd ..").unwrap();
        assert_eq!(session.prompt(), "$ / > ");
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::builtin().unwrap();
        let second = Session::builtin().unwrap();

        first.submit("cd documents").unwrap();
        assert_eq!(first.current_directory(), "/documents");
        assert_eq!(second.current_directory(), "/");
    }

    #[test]
    fn test_session_completion() {
        let session = Session::builtin().unwrap();
        assert_eq!(
            session.autocomplete("cd d"),
            AutocompleteResult::Single("cd documents ".to_string())
        );
        assert_eq!(session.hint("cl"), Some("ear".to_string()));
    }

    #[test]
    fn test_seed_with_trailing_slash_location_is_rejected() {
        let seed = Seed::parse(
            r#"
creator = "x"

[[entries]]
location = "/"
filename = "docs"
type = "directory"

[[entries]]
location = "/docs/"
filename = "README"
type = "file"
content = "hidden"
"#,
        )
        .unwrap();

        assert!(matches!(
            Session::from_seed(&seed),
            Err(SeedError::InvalidLocation { ref location, .. }) if location == "/docs/"
        ));
    }
}
