//! # orthomcl-jumper
//!
//! A library for jumping between species through OrthoMCL ortholog groups.
//!
//! OrthoMCL groups files list one ortholog group per line: a group ID followed by the
//! member genes, each tagged with a short species code (`hsap|ENSP00000354587`).
//! Given gene or group identifiers, `orthomcl-jumper` finds the single group each
//! belongs to and reports that group's members from the species you ask for.
//!
//! ## Features
//!
//! - **Three query modes**: group IDs, gene IDs from a named species, or bare gene IDs
//! - **Exact matching**: gene IDs that are prefixes of others (`MAL13P1.15` and
//!   `MAL13P1.150`) never cross-match
//! - **Ambiguity detection**: identifiers matching several groups are reported, not guessed
//! - **Streaming**: multi-gigabyte, optionally gzipped, groups files are scanned line by
//!   line; an in-memory cache is available for long input lists
//!
//! ## Example
//!
//! ```rust,no_run
//! use orthomcl_jumper::locator::StreamingLocator;
//! use orthomcl_jumper::query::QueryDriver;
//! use orthomcl_jumper::{Projection, QueryMode, QueryOutcome};
//!
//! let locator = StreamingLocator::new("groups_OrthoMCL-5.txt.gz");
//! let driver = QueryDriver::new(
//!     &locator,
//!     QueryMode::GroupId,
//!     Projection::new(vec!["hsap".to_string(), "mmus".to_string()], false),
//! );
//!
//! match driver.resolve("OG5_126538").unwrap() {
//!     QueryOutcome::Resolved { token, group } => {
//!         println!("{}", driver.record(&token, &group).unwrap().to_tsv());
//!     }
//!     other => eprintln!("{}", other.diagnostic().unwrap_or_default()),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Groups, gene tokens, query modes and output records
//! - [`locator`]: Scanning groups files for candidate groups
//! - [`query`]: Resolving identifiers to exactly one group
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod locator;
pub mod query;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::group::{GeneToken, Group, GroupError};
pub use crate::core::types::*;
pub use locator::{GroupLocator, LocateError};
pub use query::driver::{QueryDriver, QueryError, RunSummary};
