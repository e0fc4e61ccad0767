//! Resolving input identifiers to OrthoMCL groups.
//!
//! - [`QueryDriver`]: looks up each identifier and shapes the output records
//! - [`read_tokens`]: splits input text into identifiers
//!
//! ## Resolution
//!
//! Each identifier triggers one scan of the groups file:
//!
//! 1. **Screen**: a literal [`SearchPattern`](crate::core::SearchPattern) selects
//!    candidate lines (`^OG0001:` for group IDs, `hsap|GENE1` or `GENE1` for genes)
//! 2. **Exact check**: candidates are kept only if the group ID or a whole gene token
//!    equals the query, so `MAL13P1.15` never matches `MAL13P1.150`
//! 3. **Cardinality**: exactly one group must remain. No group or several groups
//!    produce a diagnostic and the identifier is skipped
//!
//! ## Example
//!
//! ```rust
//! use orthomcl_jumper::locator::InMemoryLocator;
//! use orthomcl_jumper::query::QueryDriver;
//! use orthomcl_jumper::{Projection, QueryMode, QueryOutcome};
//!
//! let locator = InMemoryLocator::from_lines(["OG0001: hsap|GENE1 mmus|GENE2 pfal|GENE3"]);
//! let driver = QueryDriver::new(
//!     &locator,
//!     QueryMode::SpeciesQualified("hsap".to_string()),
//!     Projection::new(vec!["mmus".to_string()], false),
//! );
//!
//! if let QueryOutcome::Resolved { token, group } = driver.resolve("GENE1").unwrap() {
//!     let record = driver.record(&token, &group).unwrap();
//!     assert_eq!(record.to_tsv(), "GENE1\tOG0001\tmmus|GENE2");
//! }
//! ```

pub mod driver;
pub mod input;

#[allow(unused_imports)] // used through the library API, not by the binary
pub use driver::{QueryDriver, QueryError, RunSummary};
pub use input::read_tokens;
