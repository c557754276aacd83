//! Data types for the mock filesystem and the seed document.

use std::fmt;

use serde::Deserialize;

use crate::config::SEED_TOML;
use crate::error::SeedError;
use crate::filesystem::normalize;

// =============================================================================
// Filesystem Entries
// =============================================================================

/// Kind of a filesystem entry. Only files carry content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { content: String },
}

/// One record of the mock filesystem.
///
/// `location` is the normalized absolute path of the directory that contains
/// the entry, so the root listing is every entry with `location == "/"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsEntry {
    pub location: String,
    pub filename: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn directory(location: impl AsRef<str>, filename: impl Into<String>) -> Self {
        Self {
            location: normalize(location.as_ref()),
            filename: filename.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(
        location: impl AsRef<str>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            location: normalize(location.as_ref()),
            filename: filename.into(),
            kind: EntryKind::File {
                content: content.into(),
            },
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::File { content } => Some(content),
            EntryKind::Directory => None,
        }
    }

    /// Name shown in angle brackets by `ls`.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            EntryKind::Directory => "directory",
            EntryKind::File { .. } => "file",
        }
    }
}

// =============================================================================
// Contacts
// =============================================================================

/// A contact link listed by `contact`, e.g. `email - someone@example.com`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub key: String,
    pub value: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key, self.value)
    }
}

// =============================================================================
// Seed Document
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EntryType {
    Directory,
    File,
}

/// Entry as written in the seed file.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    location: String,
    filename: String,
    #[serde(rename = "type")]
    kind: EntryType,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    creator: String,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

/// Initial state of a terminal session: who made it, where to reach them,
/// and what the mock filesystem contains.
#[derive(Clone, Debug)]
pub struct Seed {
    pub creator: String,
    /// Contacts in declaration order.
    pub contacts: Vec<Contact>,
    pub entries: Vec<FsEntry>,
}

impl Seed {
    /// Parse a seed from TOML text.
    ///
    /// Entry locations are normalized. Uniqueness of `(location, filename)` is
    /// checked when the filesystem is built from the entries.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let doc: SeedDocument = toml::from_str(text)?;

        let entries = doc
            .entries
            .into_iter()
            .map(|record| match (record.kind, record.content) {
                (EntryType::Directory, None) => {
                    Ok(FsEntry::directory(&record.location, record.filename))
                }
                (EntryType::File, Some(content)) => {
                    Ok(FsEntry::file(&record.location, record.filename, content))
                }
                _ => Err(SeedError::ContentMismatch {
                    location: record.location,
                    filename: record.filename,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            creator: doc.creator,
            contacts: doc.contacts,
            entries,
        })
    }

    /// The seed embedded in the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(SEED_TOML)
    }

    /// Look up a contact by key.
    pub fn contact(&self, key: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.key == key)
    }
}
