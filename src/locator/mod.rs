//! Locating OrthoMCL groups in a groups file.
//!
//! A lookup is a two-phase filter: every line is screened with a cheap literal
//! [`SearchPattern`], and only lines that pass are parsed into a [`Group`]. The
//! caller then applies the exact check for its query mode.
//!
//! Two implementations are provided:
//!
//! - [`StreamingLocator`]: re-reads the file for every lookup, never holding more
//!   than one line in memory. Suitable for multi-gigabyte groups files.
//! - [`InMemoryLocator`]: reads the file once and scans the cached lines. Faster
//!   for long input lists at the cost of holding the whole file.
//!
//! Files ending in `.gz` or `.bgz` are decompressed transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::core::group::{Group, GroupError};
use crate::core::types::SearchPattern;
use crate::utils::validation::is_gzipped;

pub mod memory;
pub mod stream;

pub use memory::InMemoryLocator;
pub use stream::StreamingLocator;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Groups file {} is unavailable: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Malformed(#[from] GroupError),
}

impl LocateError {
    fn unavailable(path: &Path, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Source of OrthoMCL groups that can be searched by pattern
pub trait GroupLocator {
    /// All groups on lines passing `pattern`, in file order. Duplicate lines yield
    /// duplicate groups.
    ///
    /// # Errors
    ///
    /// Returns `LocateError::ResourceUnavailable` if the groups file cannot be read,
    /// or `LocateError::Malformed` if a screened line is not a valid group.
    fn locate(&self, pattern: &SearchPattern) -> Result<Vec<Group>, LocateError>;
}

/// Open a groups file for line reading, decompressing gzip by file name
fn open_groups_file(path: &Path) -> Result<Box<dyn BufRead>, LocateError> {
    let file = File::open(path).map_err(|e| LocateError::unavailable(path, e))?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse a raw line that passed the screen. Blank lines never do.
///
/// Only screened lines are decoded, so invalid UTF-8 elsewhere in the file is
/// never seen; a screened line that is not UTF-8 is a malformed group line.
fn parse_screened(line: &[u8], pattern: &SearchPattern) -> Option<Result<Group, GroupError>> {
    if line.iter().all(u8::is_ascii_whitespace) || !pattern.matches_bytes(line) {
        return None;
    }
    let parsed = match std::str::from_utf8(line) {
        Ok(text) => Group::parse(text),
        Err(_) => Err(GroupError::MalformedGroupLine(
            String::from_utf8_lossy(line).trim_end().to_string(),
        )),
    };
    Some(parsed)
}
