use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use super::{open_groups_file, parse_screened, GroupLocator, LocateError};
use crate::core::group::Group;
use crate::core::types::SearchPattern;

/// Holds every line of the groups file in memory.
///
/// Lines are kept as raw bytes, unparsed, so a malformed or non-UTF-8 line only
/// fails a lookup whose pattern selects it, exactly as with
/// [`super::StreamingLocator`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocator {
    lines: Vec<Vec<u8>>,
}

impl InMemoryLocator {
    /// Read the whole groups file (decompressing if needed).
    ///
    /// # Errors
    ///
    /// Returns `LocateError::ResourceUnavailable` if the file cannot be opened or read.
    pub fn load(path: &Path) -> Result<Self, LocateError> {
        let reader = open_groups_file(path)?;
        let lines = reader
            .split(b'\n')
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LocateError::unavailable(path, e))?;

        info!("Loaded {} lines from {}", lines.len(), path.display());

        Ok(Self { lines })
    }

    /// Build from lines already in memory
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|l| Into::<String>::into(l).into_bytes())
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl GroupLocator for InMemoryLocator {
    fn locate(&self, pattern: &SearchPattern) -> Result<Vec<Group>, LocateError> {
        let groups = self
            .lines
            .iter()
            .filter_map(|line| parse_screened(line, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Scanned {} cached lines for '{pattern}': {} candidate groups",
            self.lines.len(),
            groups.len()
        );

        Ok(groups)
    }
}
