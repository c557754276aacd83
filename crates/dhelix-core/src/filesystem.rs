use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FsError, SeedError};
use crate::models::{FsEntry, Seed};

/// Root of the mock filesystem.
pub const ROOT: &str = "/";

static SLASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("/+").expect("slash pattern is a valid regex"));

/// Canonical form of a path.
///
/// Trims surrounding whitespace and collapses every run of `/` into a single
/// `/`. An empty result becomes the root `/`.
pub fn normalize(path: &str) -> String {
    let collapsed = SLASH_RUNS.replace_all(path.trim(), "/");
    if collapsed.is_empty() {
        ROOT.to_string()
    } else {
        collapsed.into_owned()
    }
}

/// `/`, or an absolute path without a trailing slash.
fn is_directory_path(path: &str) -> bool {
    path == ROOT || (path.starts_with('/') && !path.ends_with('/'))
}

// =============================================================================
// Navigator State
// =============================================================================

/// The current-directory cursor of one session.
///
/// `current` is always normalized and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorState {
    current: String,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self {
            current: ROOT.to_string(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    fn set(&mut self, path: &str) {
        self.current = normalize(path);
    }
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Result of `ls`: the entries of one directory plus a summary line.
#[derive(Clone, Debug)]
pub struct Listing<'a> {
    location: &'a str,
    entries: Vec<&'a FsEntry>,
}

impl Listing<'_> {
    pub fn entries(&self) -> &[&FsEntry] {
        &self.entries
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    /// `<n> file(s), <n> dir(s) in <location>`
    pub fn summary(&self) -> String {
        format!(
            "{} file(s), {} dir(s) in {}",
            self.file_count(),
            self.directory_count(),
            self.location
        )
    }

    /// Display lines: one padded row per entry, a blank line, the summary.
    ///
    /// An empty directory renders the summary alone.
    pub fn lines(&self) -> Vec<String> {
        let Some(max_len) = self
            .entries
            .iter()
            .map(|e| e.filename.chars().count())
            .max()
        else {
            return vec![self.summary()];
        };

        let width = max_len + 1;
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{:<width$} <{}>", e.filename, e.type_name()))
            .collect();
        lines.push(String::new());
        lines.push(self.summary());
        lines
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

// =============================================================================
// Virtual Filesystem
// =============================================================================

/// Flat, read-only mock filesystem with a navigation cursor.
///
/// Entries never change after construction; only the cursor moves. Lookups
/// are linear scans filtered by `location`, which is fine for the handful of
/// seeded entries.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    entries: Vec<FsEntry>,
    nav: NavigatorState,
}

impl VirtualFs {
    /// Build a filesystem positioned at the root.
    ///
    /// Rejects entries with an empty filename, a location that is not an
    /// absolute directory path, and duplicate `(location, filename)` pairs.
    pub fn new(entries: Vec<FsEntry>) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.filename.trim().is_empty() {
                return Err(SeedError::EmptyFilename(entry.location.clone()));
            }
            if !is_directory_path(&entry.location) {
                return Err(SeedError::InvalidLocation {
                    location: entry.location.clone(),
                    filename: entry.filename.clone(),
                });
            }
            if !seen.insert((entry.location.as_str(), entry.filename.as_str())) {
                return Err(SeedError::DuplicateEntry {
                    location: entry.location.clone(),
                    filename: entry.filename.clone(),
                });
            }
        }

        Ok(Self {
            entries,
            nav: NavigatorState::new(),
        })
    }

    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        Self::new(seed.entries.clone())
    }

    /// Filesystem with no entries at all.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            nav: NavigatorState::new(),
        }
    }

    /// See [`normalize`].
    pub fn normalize(path: &str) -> String {
        normalize(path)
    }

    pub fn current_directory(&self) -> &str {
        self.nav.current()
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.nav
    }

    /// Entries whose parent is the current directory, in seed order.
    pub fn entries_in_current(&self) -> impl Iterator<Item = &FsEntry> {
        let current = self.nav.current();
        self.entries.iter().filter(move |e| e.location == current)
    }

    fn find_in_current(&self, name: &str) -> Option<&FsEntry> {
        self.entries_in_current().find(|e| e.filename == name)
    }

    /// Move the cursor.
    ///
    /// - `None` leaves the cursor alone and returns the current directory.
    /// - `".."` drops the last path segment; the parent of `/` is `/`.
    /// - A name enters the directory of that name in the current directory.
    ///
    /// On success the returned message names the new directory. On failure
    /// the cursor is unchanged.
    pub fn change_directory(&mut self, target: Option<&str>) -> Result<String, FsError> {
        let Some(target) = target else {
            return Ok(self.current_directory().to_string());
        };
        let target = normalize(target);

        if target == ".." {
            let mut parts: Vec<&str> = self.nav.current().split('/').collect();
            parts.pop();
            let parent = parts.join("/");
            self.nav.set(&parent);
        } else {
            let dir = self.current_directory().to_string();
            match self.find_in_current(&target) {
                Some(entry) if entry.is_directory() => {
                    self.nav.set(&format!("{}/{}", dir, target));
                }
                Some(_) => {
                    return Err(FsError::NotADirectory { name: target, dir });
                }
                None => {
                    return Err(FsError::DirectoryNotFound { name: target, dir });
                }
            }
        }

        log::debug!("cd: now in {}", self.current_directory());
        Ok(format!("Entered '{}'", self.current_directory()))
    }

    /// List the current directory.
    pub fn list(&self) -> Listing<'_> {
        Listing {
            location: self.nav.current(),
            entries: self.entries_in_current().collect(),
        }
    }

    /// Content of the file `name` in the current directory.
    pub fn read_file(&self, name: &str) -> Result<&str, FsError> {
        self.find_in_current(name)
            .and_then(FsEntry::content)
            .ok_or_else(|| FsError::FileNotFound {
                name: name.to_string(),
                dir: self.current_directory().to_string(),
            })
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(vec![
            FsEntry::directory("/", "documents"),
            FsEntry::file("/", "AUTHOR", "Aaron Dalman <atdalman@gmail.com>"),
            FsEntry::directory("/documents", "notes"),
            FsEntry::file("/documents", "todo.txt", "roll initiative"),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("   "), "/");
        assert_eq!(normalize("//documents///notes"), "/documents/notes");
        assert_eq!(normalize("  /documents/ "), "/documents/");
        assert_eq!(normalize("AUTHOR"), "AUTHOR");
    }

    #[test]
    fn test_starts_at_root() {
        let fs = create_test_fs();
        assert_eq!(fs.current_directory(), "/");
        assert_eq!(fs.navigator(), &NavigatorState::new());
    }

    #[test]
    fn test_cd_none_returns_current() {
        let mut fs = create_test_fs();
        assert_eq!(fs.change_directory(None).unwrap(), "/");
        assert_eq!(fs.current_directory(), "/");
    }

    #[test]
    fn test_cd_into_directory() {
        let mut fs = create_test_fs();
        let msg = fs.change_directory(Some("documents")).unwrap();
        assert_eq!(msg, "Entered '/documents'");
        assert_eq!(fs.current_directory(), "/documents");

        fs.change_directory(Some("notes")).unwrap();
        assert_eq!(fs.current_directory(), "/documents/notes");
    }

    #[test]
    fn test_cd_trims_target() {
        let mut fs = create_test_fs();
        fs.change_directory(Some("  documents ")).unwrap();
        assert_eq!(fs.current_directory(), "/documents");
    }

    #[test]
    fn test_cd_parent() {
        let mut fs = create_test_fs();
        fs.change_directory(Some("documents")).unwrap();
        fs.change_directory(Some("notes")).unwrap();

        assert_eq!(
            fs.change_directory(Some("..")).unwrap(),
            "Entered '/documents'"
        );
        assert_eq!(fs.change_directory(Some("..")).unwrap(), "Entered '/'");
        assert_eq!(fs.current_directory(), "/");
    }

    #[test]
    fn test_cd_parent_of_root_is_root() {
        let mut fs = create_test_fs();
        for _ in 0..3 {
            fs.change_directory(Some("..")).unwrap();
            assert_eq!(fs.current_directory(), "/");
        }
    }

    #[test]
    fn test_cd_missing_directory() {
        let mut fs = create_test_fs();
        let err = fs.change_directory(Some("nowhere")).unwrap_err();
        assert_eq!(
            err,
            FsError::DirectoryNotFound {
                name: "nowhere".to_string(),
                dir: "/".to_string(),
            }
        );
        assert_eq!(fs.current_directory(), "/");
    }

    #[test]
    fn test_cd_into_file_is_rejected() {
        let mut fs = create_test_fs();
        let err = fs.change_directory(Some("AUTHOR")).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { ref name, .. } if name == "AUTHOR"));
        assert_eq!(fs.current_directory(), "/");
    }

    #[test]
    fn test_cd_only_searches_current_directory() {
        let mut fs = create_test_fs();
        assert!(fs.change_directory(Some("notes")).is_err());
    }

    #[test]
    fn test_list_root() {
        let fs = create_test_fs();
        let listing = fs.list();

        assert_eq!(listing.file_count(), 1);
        assert_eq!(listing.directory_count(), 1);
        assert_eq!(
            listing.lines(),
            vec![
                "documents  <directory>".to_string(),
                "AUTHOR     <file>".to_string(),
                String::new(),
                "1 file(s), 1 dir(s) in /".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_empty_directory() {
        let mut fs = create_test_fs();
        fs.change_directory(Some("documents")).unwrap();
        fs.change_directory(Some("notes")).unwrap();

        let listing = fs.list();
        assert!(listing.entries().is_empty());
        assert_eq!(
            listing.to_string(),
            "0 file(s), 0 dir(s) in /documents/notes"
        );
    }

    #[test]
    fn test_list_empty_fs() {
        let fs = VirtualFs::empty();
        assert_eq!(fs.list().lines(), vec!["0 file(s), 0 dir(s) in /"]);
    }

    #[test]
    fn test_read_file() {
        let mut fs = create_test_fs();
        assert_eq!(
            fs.read_file("AUTHOR").unwrap(),
            "Aaron Dalman <atdalman@gmail.com>"
        );

        fs.change_directory(Some("documents")).unwrap();
        assert_eq!(fs.read_file("todo.txt").unwrap(), "roll initiative");
        assert!(fs.read_file("AUTHOR").is_err());
    }

    #[test]
    fn test_read_missing_file_names_file_and_directory() {
        let fs = create_test_fs();
        let msg = fs.read_file("missing.txt").unwrap_err().to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("'/'"));
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let fs = create_test_fs();
        assert!(matches!(
            fs.read_file("documents"),
            Err(FsError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_entries_rejected() {
        let result = VirtualFs::new(vec![
            FsEntry::directory("/", "documents"),
            FsEntry::file("//", "documents", "clash"),
        ]);
        assert!(matches!(
            result,
            Err(SeedError::DuplicateEntry { ref filename, .. }) if filename == "documents"
        ));
    }

    #[test]
    fn test_same_name_in_different_directories_allowed() {
        let result = VirtualFs::new(vec![
            FsEntry::directory("/", "notes"),
            FsEntry::directory("/notes", "notes"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_directory_locations_rejected() {
        for location in ["/docs/", "docs", "docs/"] {
            let result = VirtualFs::new(vec![
                FsEntry::directory("/", "docs"),
                FsEntry::file(location, "README", "unreachable"),
            ]);
            assert!(
                matches!(
                    result,
                    Err(SeedError::InvalidLocation { ref filename, .. }) if filename == "README"
                ),
                "location {:?} should be rejected",
                location
            );
        }
    }

    #[test]
    fn test_nested_locations_accepted() {
        let mut fs = VirtualFs::new(vec![
            FsEntry::directory("/", "docs"),
            FsEntry::file("//docs", "README", "hi"),
        ])
        .unwrap();
        fs.change_directory(Some("docs")).unwrap();
        assert_eq!(fs.read_file("README").unwrap(), "hi");
    }

    #[test]
    fn test_empty_filename_rejected() {
        let result = VirtualFs::new(vec![FsEntry::directory("/", " ")]);
        assert!(matches!(result, Err(SeedError::EmptyFilename(_))));
    }
}
