use serde::Serialize;
use thiserror::Error;

use crate::utils::validation::{is_valid_group_id, is_valid_species_code};

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Failed to parse OrthoMCL line: {0}")]
    MalformedGroupLine(String),

    #[error("Couldn't parse OrthoMCL gene ID '{0}'")]
    MalformedGeneToken(String),
}

/// A gene token split into its species code and gene ID.
///
/// `pfal|PF10_0178` becomes `GeneToken { species_code: "pfal", gene_id: "PF10_0178" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneToken<'a> {
    pub species_code: &'a str,
    pub gene_id: &'a str,
}

impl<'a> GeneToken<'a> {
    /// Split a `species|gene` token.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` if the token has no `|`, the leading
    /// segment is not 3-4 lowercase letters, or the gene ID is empty.
    pub fn parse(token: &'a str) -> Result<Self, GroupError> {
        match token.split_once('|') {
            Some((species_code, gene_id))
                if is_valid_species_code(species_code) && !gene_id.is_empty() =>
            {
                Ok(Self {
                    species_code,
                    gene_id,
                })
            }
            _ => Err(GroupError::MalformedGeneToken(token.to_string())),
        }
    }
}

impl std::fmt::Display for GeneToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.species_code, self.gene_id)
    }
}

/// Join a species code and gene ID into the token form used in group files
#[must_use]
pub fn gene_token(species_code: &str, gene_id: &str) -> String {
    format!("{species_code}|{gene_id}")
}

/// One OrthoMCL ortholog group: an ID and its member gene tokens, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: String,
    pub genes: Vec<String>,
}

impl Group {
    /// Parse a line of an OrthoMCL groups file, e.g.
    /// `OG5_126538: hsap|ENSP00000354587 pfal|PF10_0178`.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGroupLine` if the line does not start with a
    /// group ID followed by `:`, or lists no genes.
    pub fn parse(line: &str) -> Result<Self, GroupError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let malformed = || GroupError::MalformedGroupLine(line.to_string());

        let (id, rest) = line.split_once(':').ok_or_else(malformed)?;
        if !is_valid_group_id(id) {
            return Err(malformed());
        }

        let genes: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
        if genes.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            id: id.to_string(),
            genes,
        })
    }

    /// All genes carrying the given species code, e.g. `hsap`
    #[must_use]
    pub fn genes_with_species_code(&self, species_code: &str) -> Vec<&str> {
        self.genes
            .iter()
            .map(String::as_str)
            .filter(|g| {
                g.strip_prefix(species_code)
                    .is_some_and(|rest| rest.starts_with('|'))
            })
            .collect()
    }

    /// Gene IDs with their species codes removed.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` for the first gene that cannot be split.
    pub fn genes_without_species_codes(&self) -> Result<Vec<&str>, GroupError> {
        self.genes
            .iter()
            .map(|g| GeneToken::parse(g).map(|t| t.gene_id))
            .collect()
    }

    /// Genes whose species code is not among `species_codes`.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` for the first gene that cannot be split.
    pub fn genes_excluding_species_codes<S: AsRef<str>>(
        &self,
        species_codes: &[S],
    ) -> Result<Vec<&str>, GroupError> {
        let mut kept = Vec::new();
        for gene in &self.genes {
            let token = GeneToken::parse(gene)?;
            if !species_codes
                .iter()
                .any(|c| c.as_ref() == token.species_code)
            {
                kept.push(gene.as_str());
            }
        }
        Ok(kept)
    }

    /// Split a gene token into species code and gene ID.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::MalformedGeneToken` if the token is not `species|gene`.
    pub fn split_species_and_id(gene: &str) -> Result<(&str, &str), GroupError> {
        GeneToken::parse(gene).map(|t| (t.species_code, t.gene_id))
    }

    /// Exact membership test for a full `species|gene` token
    #[must_use]
    pub fn contains_gene(&self, token: &str) -> bool {
        self.genes.iter().any(|g| g == token)
    }
}
