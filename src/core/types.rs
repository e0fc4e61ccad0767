use serde::Serialize;

use crate::core::group::{gene_token, Group, GroupError};
use crate::utils::validation::ANY_SPECIES_SENTINEL;

/// How input identifiers are interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Inputs are OrthoMCL group IDs, e.g. `OG5_126538`
    GroupId,
    /// Inputs are gene IDs without a species code; matched against every species
    UnqualifiedGene,
    /// Inputs are gene IDs from one species, e.g. `hsap`
    SpeciesQualified(String),
}

impl QueryMode {
    /// Build the mode from the `--input-species-code` value: absent means group IDs,
    /// `-` means bare gene IDs.
    #[must_use]
    pub fn from_input_species_code(code: Option<&str>) -> Self {
        match code {
            None => Self::GroupId,
            Some(ANY_SPECIES_SENTINEL) => Self::UnqualifiedGene,
            Some(code) => Self::SpeciesQualified(code.to_string()),
        }
    }

    /// Cheap screen used while scanning the groups file
    #[must_use]
    pub fn search_pattern(&self, token: &str) -> SearchPattern {
        match self {
            // Anchored so that OG001 does not pick up OG0010
            Self::GroupId => SearchPattern::LinePrefix(format!("{token}:")),
            Self::UnqualifiedGene => SearchPattern::Contains(token.to_string()),
            Self::SpeciesQualified(code) => SearchPattern::Contains(gene_token(code, token)),
        }
    }

    /// Exact check applied to every group that passed the screen.
    ///
    /// Gene IDs are not length delimited (`MAL13P1.15` is a prefix of `MAL13P1.150`),
    /// so gene modes must compare whole tokens.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` if an unqualified lookup meets a gene
    /// token it cannot split.
    pub fn accepts(&self, group: &Group, token: &str) -> Result<bool, GroupError> {
        match self {
            Self::GroupId => Ok(group.id == token),
            Self::UnqualifiedGene => Ok(group.genes_without_species_codes()?.contains(&token)),
            Self::SpeciesQualified(code) => Ok(group.contains_gene(&gene_token(code, token))),
        }
    }

    /// Whether output lines start with the input token
    #[must_use]
    pub fn echoes_token(&self) -> bool {
        !matches!(self, Self::GroupId)
    }
}

/// Literal screen applied to raw lines of the groups file.
///
/// Matching is plain string comparison, so identifiers containing characters such as
/// `.`, `*` or `[` match only themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPattern {
    /// The line must start with this text
    LinePrefix(String),
    /// The line must contain this text anywhere
    Contains(String),
}

impl SearchPattern {
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.matches_bytes(line.as_bytes())
    }

    /// Screen a raw line. Lines need not be valid UTF-8 to be rejected.
    #[must_use]
    pub fn matches_bytes(&self, line: &[u8]) -> bool {
        match self {
            Self::LinePrefix(prefix) => line.starts_with(prefix.as_bytes()),
            Self::Contains(needle) => {
                let needle = needle.as_bytes();
                needle.is_empty() || line.windows(needle.len()).any(|w| w == needle)
            }
        }
    }
}

impl std::fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinePrefix(prefix) => write!(f, "^{prefix}"),
            Self::Contains(needle) => write!(f, "{needle}"),
        }
    }
}

/// Output-side selection of genes from a resolved group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub species_codes: Vec<String>,
    pub inverse: bool,
}

impl Projection {
    #[must_use]
    pub fn new(species_codes: Vec<String>, inverse: bool) -> Self {
        Self {
            species_codes,
            inverse,
        }
    }

    /// Gene columns for a group: one per target species, or with `inverse` a single
    /// column of every gene outside the targets. Empty when no targets were given.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` if an inverse projection meets a gene
    /// token it cannot split.
    pub fn columns(&self, group: &Group) -> Result<Vec<Vec<String>>, GroupError> {
        if self.species_codes.is_empty() {
            return Ok(Vec::new());
        }

        if self.inverse {
            let genes = group.genes_excluding_species_codes(self.species_codes.as_slice())?;
            return Ok(vec![genes.into_iter().map(str::to_string).collect()]);
        }

        Ok(self
            .species_codes
            .iter()
            .map(|code| {
                group
                    .genes_with_species_code(code)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect())
    }
}

/// Result of looking up a single input identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Resolved { token: String, group: Group },
    NotFound { token: String },
    Ambiguous { token: String, count: usize },
}

impl QueryOutcome {
    /// Diagnostic line for tokens that could not be resolved
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Resolved { .. } => None,
            Self::NotFound { token } => Some(format!("No groups found for input {token}, skipping")),
            Self::Ambiguous { token, count } => Some(format!(
                "More than expected ({count}) OrthoMCL groups found for input {token}, skipping"
            )),
        }
    }
}

/// One line of output for a resolved identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub group_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genes: Vec<Vec<String>>,
}

impl OutputRecord {
    /// Tab-separated form; gene columns are comma-joined
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(2 + self.genes.len());
        if let Some(input) = &self.input {
            fields.push(input.clone());
        }
        fields.push(self.group_id.clone());
        fields.extend(self.genes.iter().map(|column| column.join(",")));
        fields.join("\t")
    }
}
