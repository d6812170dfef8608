//! The alias file: one `name=target` record per line.
//!
//! The file is only ever appended to. Reading it back applies the records in
//! order, so a later line for the same name shadows an earlier one.

mod parse;

pub use parse::{parse, parse_bytes, MalformedLine, Parsed, DELIMITER};

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the alias file inside the home directory.
pub const FILE_NAME: &str = ".opnrc";

/// Loaded aliases, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases(HashMap<String, String>);

impl Aliases {
    /// Target for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no aliases are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alias names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(name, target)` pairs sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    pub(crate) fn insert(&mut self, name: String, target: String) {
        self.0.insert(name, target);
    }
}

impl FromIterator<(String, String)> for Aliases {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Handle on an alias file at a fixed path.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `.opnrc` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(FILE_NAME))
    }

    /// Path of the alias file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty alias file if there is none yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created.
    pub fn ensure_exists(&self) -> Result<()> {
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => {
                log::info!("Created alias file at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(Error::io("failed to create", &self.path, e)),
        }
    }

    /// Read every alias from disk.
    ///
    /// Malformed lines are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn load(&self) -> Result<Aliases> {
        let content = std::fs::read(&self.path)
            .map_err(|e| Error::io("failed to read", &self.path, e))?;
        let Parsed { aliases, malformed } = parse_bytes(&content);

        for bad in &malformed {
            log::warn!(
                "{}:{}: skipping malformed line (expected name=target): {:?}",
                self.path.display(),
                bad.line,
                bad.text
            );
        }
        log::debug!("Loaded {} aliases from {}", aliases.len(), self.path.display());

        Ok(aliases)
    }

    /// Append a `name=target` record.
    ///
    /// An existing record for `name` is left in place; it is shadowed on the
    /// next [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] if the record would not read back as
    /// written, or [`Error::Io`] if the file cannot be opened or written.
    pub fn append(&self, name: &str, target: &str) -> Result<()> {
        validate(name, target)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| Error::io("failed to open", &self.path, e))?;

        let mut record = parse::format_record(name, target);
        let needs_newline = missing_final_newline(&mut file)
            .map_err(|e| Error::io("failed to read", &self.path, e))?;
        if needs_newline {
            record.insert(0, '\n');
        }

        file.write_all(record.as_bytes())
            .map_err(|e| Error::io("failed to write", &self.path, e))?;
        log::debug!("Appended {name:?} to {}", self.path.display());
        Ok(())
    }
}

fn missing_final_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

fn validate(name: &str, target: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name.contains(DELIMITER) {
        "name must not contain '='"
    } else if target.is_empty() {
        "target must not be empty"
    } else if has_line_break(name) || has_line_break(target) {
        "name and target must fit on a single line"
    } else if name.trim() != name || target.trim() != target {
        "name and target must not start or end with whitespace"
    } else {
        return Ok(());
    };
    Err(Error::InvalidAlias { reason: reason.to_string() })
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}
