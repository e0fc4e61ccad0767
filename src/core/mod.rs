//! Core data types for OrthoMCL group lookups.
//!
//! - [`Group`]: one line of an OrthoMCL groups file, an ID plus member gene tokens
//! - [`GeneToken`]: a `species|gene` token split into its two parts
//! - [`QueryMode`]: how input identifiers are interpreted
//! - [`SearchPattern`]: the literal screen applied while scanning groups files
//! - [`Projection`], [`OutputRecord`], [`QueryOutcome`]: result shaping
//!
//! ## Groups file format
//!
//! ```text
//! OG5_126538: hsap|ENSP00000354587 mmus|ENSMUSP00000031564 pfal|PF10_0178
//! ```
//!
//! Group IDs are `OG` followed by digits and underscores. Species codes are three
//! or four lowercase letters.

pub mod group;
pub mod types;

#[allow(unused_imports)] // used through the library API, not by the binary
pub use group::{GeneToken, Group, GroupError};
#[allow(unused_imports)]
pub use types::{OutputRecord, Projection, QueryMode, QueryOutcome, SearchPattern};
