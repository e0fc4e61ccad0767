use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{open_groups_file, parse_screened, GroupLocator, LocateError};
use crate::core::group::Group;
use crate::core::types::SearchPattern;

/// Scans the groups file from disk on every lookup
#[derive(Debug, Clone)]
pub struct StreamingLocator {
    path: PathBuf,
}

impl StreamingLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GroupLocator for StreamingLocator {
    fn locate(&self, pattern: &SearchPattern) -> Result<Vec<Group>, LocateError> {
        let mut reader = open_groups_file(&self.path)?;
        let mut line: Vec<u8> = Vec::new();
        let mut groups = Vec::new();
        let mut lines_scanned = 0usize;

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| LocateError::unavailable(&self.path, e))?;
            if n == 0 {
                break;
            }
            lines_scanned += 1;

            if let Some(group) = parse_screened(&line, pattern) {
                groups.push(group?);
            }
        }

        debug!(
            "Scanned {lines_scanned} lines of {} for '{pattern}': {} candidate groups",
            self.path.display(),
            groups.len()
        );

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::group::GroupError;
    use crate::locator::test_support::{
        gzipped_groups_file, plain_groups_file, GROUPS, NON_UTF8_GROUPS,
    };

    #[test]
    fn test_locate_by_prefix() {
        let file = plain_groups_file(GROUPS);
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::LinePrefix("OG001".to_string()))
            .unwrap();
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["OG0010", "OG0011"]);
    }

    #[test]
    fn test_locate_substring_returns_candidates_in_file_order() {
        let file = plain_groups_file(GROUPS);
        let locator = StreamingLocator::new(file.path());

        // Screen only: both the exact gene and its longer sibling pass
        let groups = locator
            .locate(&SearchPattern::Contains("MAL13P1.15".to_string()))
            .unwrap();
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["OG0010", "OG0011"]);
    }

    #[test]
    fn test_locate_gzipped() {
        let file = gzipped_groups_file(GROUPS);
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::LinePrefix("OG0001:".to_string()))
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].genes[2], "pfal|GENE3");
    }

    #[test]
    fn test_locate_keeps_duplicates() {
        let file = plain_groups_file("OG1: hsap|A\nOG1: hsap|A\n");
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::Contains("hsap|A".to_string()))
            .unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_locate_no_match() {
        let file = plain_groups_file(GROUPS);
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::Contains("nothing".to_string()))
            .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_malformed_screened_line_aborts() {
        let file = plain_groups_file("OG1: hsap|A\ngarbage hsap|A\n");
        let locator = StreamingLocator::new(file.path());

        let result = locator.locate(&SearchPattern::Contains("hsap|A".to_string()));
        assert!(matches!(
            result,
            Err(LocateError::Malformed(GroupError::MalformedGroupLine(_)))
        ));
    }

    #[test]
    fn test_malformed_unscreened_line_is_ignored() {
        let file = plain_groups_file("garbage\nOG1: hsap|A\n");
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::Contains("hsap|A".to_string()))
            .unwrap();
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_non_utf8_unscreened_line_is_ignored() {
        let file = plain_groups_file(NON_UTF8_GROUPS);
        let locator = StreamingLocator::new(file.path());

        let groups = locator
            .locate(&SearchPattern::LinePrefix("OG1:".to_string()))
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].genes, vec!["hsap|A", "mmus|B"]);
    }

    #[test]
    fn test_non_utf8_screened_line_is_malformed() {
        let file = plain_groups_file(NON_UTF8_GROUPS);
        let locator = StreamingLocator::new(file.path());

        match locator.locate(&SearchPattern::Contains("pfal|C".to_string())) {
            Err(LocateError::Malformed(GroupError::MalformedGroupLine(line))) => {
                assert!(line.starts_with("OG2: hsap|caf"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let locator = StreamingLocator::new("/nonexistent/groups.txt");
        let result = locator.locate(&SearchPattern::Contains("x".to_string()));
        assert!(matches!(
            result,
            Err(LocateError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_corrupt_gzip_is_unavailable() {
        let file = plain_groups_file("this is not gzip data\n");
        let gz_path = file.path().with_extension("gz");
        std::fs::copy(file.path(), &gz_path).unwrap();

        let locator = StreamingLocator::new(&gz_path);
        let result = locator.locate(&SearchPattern::Contains("x".to_string()));
        std::fs::remove_file(&gz_path).unwrap();

        assert!(matches!(
            result,
            Err(LocateError::ResourceUnavailable { .. })
        ));
    }
}
