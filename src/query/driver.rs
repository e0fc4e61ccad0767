use std::io::Write;

use thiserror::Error;
use tracing::debug;

use crate::core::group::{Group, GroupError};
use crate::core::types::{OutputRecord, Projection, QueryMode, QueryOutcome};
use crate::locator::{GroupLocator, LocateError};

#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Malformed(#[from] GroupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts of how each input token fared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub resolved: usize,
    pub not_found: usize,
    pub ambiguous: usize,
}

impl RunSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved + self.not_found + self.ambiguous
    }
}

/// Resolves input identifiers to exactly one OrthoMCL group each
pub struct QueryDriver<'a, L: GroupLocator + ?Sized> {
    locator: &'a L,
    mode: QueryMode,
    projection: Projection,
}

impl<'a, L: GroupLocator + ?Sized> QueryDriver<'a, L> {
    pub fn new(locator: &'a L, mode: QueryMode, projection: Projection) -> Self {
        Self {
            locator,
            mode,
            projection,
        }
    }

    #[must_use]
    pub fn mode(&self) -> &QueryMode {
        &self.mode
    }

    /// Look up one token: screen the groups file, keep only exact matches, and
    /// require exactly one survivor.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Locate` if the groups file is unreadable or a selected line
    /// is malformed, or `QueryError::Malformed` if a selected group has a bad gene token.
    pub fn resolve(&self, token: &str) -> Result<QueryOutcome, QueryError> {
        let pattern = self.mode.search_pattern(token);
        let candidates = self.locator.locate(&pattern)?;
        let screened = candidates.len();

        let mut matched: Vec<Group> = Vec::new();
        for group in candidates {
            if self.mode.accepts(&group, token)? {
                matched.push(group);
            }
        }

        debug!(
            "{token}: {screened} screened, {} exact {}",
            matched.len(),
            if matched.len() == 1 { "match" } else { "matches" }
        );

        let token = token.to_string();
        Ok(match matched.len() {
            0 => QueryOutcome::NotFound { token },
            1 => QueryOutcome::Resolved {
                token,
                group: matched.remove(0),
            },
            count => QueryOutcome::Ambiguous { token, count },
        })
    }

    /// Shape a resolved group into an output record.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` if an inverse projection meets a gene
    /// token it cannot split.
    pub fn record(&self, token: &str, group: &Group) -> Result<OutputRecord, GroupError> {
        Ok(OutputRecord {
            input: self.mode.echoes_token().then(|| token.to_string()),
            group_id: group.id.clone(),
            genes: self.projection.columns(group)?,
        })
    }

    /// Resolve every token in order. Resolved tokens are passed to `emit`;
    /// unresolved ones get a single diagnostic line on `diagnostics` and are skipped.
    ///
    /// # Errors
    ///
    /// Stops at the first unreadable or malformed groups file error, or the first
    /// failure to write output.
    pub fn run<I, S, F, W>(
        &self,
        tokens: I,
        mut emit: F,
        diagnostics: &mut W,
    ) -> Result<RunSummary, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&OutputRecord) -> std::io::Result<()>,
        W: Write,
    {
        let mut summary = RunSummary::default();

        for token in tokens {
            let token = token.as_ref();
            let outcome = self.resolve(token)?;

            if let Some(message) = outcome.diagnostic() {
                writeln!(diagnostics, "{message}")?;
            }

            match outcome {
                QueryOutcome::Resolved { token, group } => {
                    let record = self.record(&token, &group)?;
                    emit(&record)?;
                    summary.resolved += 1;
                }
                QueryOutcome::NotFound { .. } => summary.not_found += 1,
                QueryOutcome::Ambiguous { .. } => summary.ambiguous += 1,
            }
        }

        debug!(
            "Processed {} inputs: {} resolved, {} not found, {} ambiguous",
            summary.total(),
            summary.resolved,
            summary.not_found,
            summary.ambiguous
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::InMemoryLocator;

    const GROUPS: [&str; 4] = [
        "OG0001: hsap|GENE1 mmus|GENE2 pfal|GENE3",
        "OG0010: hsap|GENE10 pfal|MAL13P1.150",
        "OG0011: pfal|MAL13P1.15 pviv|PVX_1",
        "OG0100: hsap|SHARED mmus|SHARED2",
    ];

    fn locator() -> InMemoryLocator {
        InMemoryLocator::from_lines(GROUPS)
    }

    fn run_to_strings(
        driver: &QueryDriver<'_, InMemoryLocator>,
        tokens: &[&str],
    ) -> (Vec<String>, String, RunSummary) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = driver
            .run(
                tokens.iter().copied(),
                |r| {
                    out.push(r.to_tsv());
                    Ok(())
                },
                &mut err,
            )
            .unwrap();
        (out, String::from_utf8(err).unwrap(), summary)
    }

    #[test]
    fn test_group_id_mode_with_output_species() {
        let locator = locator();
        let driver = QueryDriver::new(
            &locator,
            QueryMode::GroupId,
            Projection::new(vec!["hsap".into(), "mmus".into()], false),
        );
        let (out, err, _) = run_to_strings(&driver, &["OG0001"]);
        assert_eq!(out, vec!["OG0001\thsap|GENE1\tmmus|GENE2"]);
        assert!(err.is_empty());
    }

    #[test]
    fn test_group_id_prefix_does_not_collide() {
        let locator = locator();
        let driver = QueryDriver::new(&locator, QueryMode::GroupId, Projection::default());
        let (out, _, _) = run_to_strings(&driver, &["OG001", "OG0010"]);
        assert_eq!(out, vec!["OG0010"]);
    }

    #[test]
    fn test_species_qualified_mode_without_projection() {
        let locator = locator();
        let driver = QueryDriver::new(
            &locator,
            QueryMode::SpeciesQualified("hsap".into()),
            Projection::default(),
        );
        let (out, _, _) = run_to_strings(&driver, &["GENE1"]);
        assert_eq!(out, vec!["GENE1\tOG0001"]);
    }

    #[test]
    fn test_species_qualified_rejects_substring_hits() {
        // "hsap|GENE1" is a substring of "hsap|GENE10"; only the exact token counts
        let locator = locator();
        let driver = QueryDriver::new(
            &locator,
            QueryMode::SpeciesQualified("hsap".into()),
            Projection::default(),
        );
        assert!(matches!(
            driver.resolve("GENE1").unwrap(),
            QueryOutcome::Resolved { ref group, .. } if group.id == "OG0001"
        ));
    }

    #[test]
    fn test_unqualified_prefix_collision() {
        let locator = locator();
        let driver = QueryDriver::new(&locator, QueryMode::UnqualifiedGene, Projection::default());
        match driver.resolve("MAL13P1.15").unwrap() {
            QueryOutcome::Resolved { group, .. } => assert_eq!(group.id, "OG0011"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        match driver.resolve("MAL13P1.150").unwrap() {
            QueryOutcome::Resolved { group, .. } => assert_eq!(group.id, "OG0010"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_is_reported_and_skipped() {
        let locator = InMemoryLocator::from_lines([
            "OG1: hsap|DUP mmus|A",
            "OG2: hsap|DUP pfal|B",
            "OG3: hsap|UNIQUE",
        ]);
        let driver = QueryDriver::new(
            &locator,
            QueryMode::SpeciesQualified("hsap".into()),
            Projection::default(),
        );
        assert_eq!(
            driver.resolve("DUP").unwrap(),
            QueryOutcome::Ambiguous {
                token: "DUP".into(),
                count: 2
            }
        );

        let (out, err, summary) = run_to_strings(&driver, &["DUP", "UNIQUE"]);
        assert_eq!(out, vec!["UNIQUE\tOG3"]);
        assert_eq!(
            err,
            "More than expected (2) OrthoMCL groups found for input DUP, skipping\n"
        );
        assert_eq!(
            summary,
            RunSummary {
                resolved: 1,
                not_found: 0,
                ambiguous: 1
            }
        );
    }

    #[test]
    fn test_not_found_is_reported_and_skipped() {
        let locator = locator();
        let driver = QueryDriver::new(
            &locator,
            QueryMode::SpeciesQualified("hsap".into()),
            Projection::default(),
        );
        let (out, err, summary) = run_to_strings(&driver, &["NOPE", "GENE1"]);
        assert_eq!(out, vec!["GENE1\tOG0001"]);
        assert_eq!(err, "No groups found for input NOPE, skipping\n");
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_inverse_projection_output() {
        let locator = locator();
        let driver = QueryDriver::new(
            &locator,
            QueryMode::UnqualifiedGene,
            Projection::new(vec!["hsap".into(), "pfal".into()], true),
        );
        let (out, _, _) = run_to_strings(&driver, &["GENE2"]);
        assert_eq!(out, vec!["GENE2\tOG0001\tmmus|GENE2"]);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let locator = locator();
        let driver = QueryDriver::new(&locator, QueryMode::GroupId, Projection::default());
        let (out, _, _) = run_to_strings(&driver, &["OG0100", "OG0001", "OG0011"]);
        assert_eq!(out, vec!["OG0100", "OG0001", "OG0011"]);
    }

    #[test]
    fn test_malformed_gene_token_is_fatal() {
        let locator = InMemoryLocator::from_lines(["OG1: hsap|A BADTOKEN"]);
        let driver = QueryDriver::new(&locator, QueryMode::UnqualifiedGene, Projection::default());
        let mut err = Vec::new();
        let result = driver.run(["A"], |_| Ok(()), &mut err);
        assert!(matches!(
            result,
            Err(QueryError::Malformed(GroupError::MalformedGeneToken(_)))
        ));
    }
}
