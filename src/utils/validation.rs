//! Centralized validation and helper functions.

use std::path::Path;

/// Sentinel accepted by `--input-species-code` meaning "match on gene ID only".
pub const ANY_SPECIES_SENTINEL: &str = "-";

/// Validate that a string is an OrthoMCL species code (3-4 lowercase ASCII letters).
///
/// # Examples
///
/// ```
/// use orthomcl_jumper::utils::validation::is_valid_species_code;
///
/// assert!(is_valid_species_code("hsap"));
/// assert!(is_valid_species_code("pfa"));
/// assert!(!is_valid_species_code("Hsap"));
/// assert!(!is_valid_species_code("hs"));
/// assert!(!is_valid_species_code("hsapi"));
/// ```
#[must_use]
pub fn is_valid_species_code(s: &str) -> bool {
    (3..=4).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Validate that a string is an OrthoMCL group identifier (`OG` followed by digits/underscores).
///
/// # Examples
///
/// ```
/// use orthomcl_jumper::utils::validation::is_valid_group_id;
///
/// assert!(is_valid_group_id("OG0001"));
/// assert!(is_valid_group_id("OG5_126538"));
/// assert!(!is_valid_group_id("OG"));
/// assert!(!is_valid_group_id("OGx1"));
/// ```
#[must_use]
pub fn is_valid_group_id(s: &str) -> bool {
    s.strip_prefix("OG")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit() || b == b'_'))
}

/// Check if the path names a gzip (or bgzip) compressed file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// clap value parser for a single species code.
///
/// # Errors
///
/// Returns a message naming the rejected code if it is not 3-4 lowercase letters.
pub fn parse_species_code(s: &str) -> Result<String, String> {
    if is_valid_species_code(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{s}' is not an OrthoMCL species code (expected 3-4 lowercase letters)"
        ))
    }
}

/// clap value parser for `--input-species-code`, which also accepts the `-` sentinel.
///
/// # Errors
///
/// Returns a message if the value is neither `-` nor a valid species code.
pub fn parse_input_species_code(s: &str) -> Result<String, String> {
    if s == ANY_SPECIES_SENTINEL {
        Ok(s.to_string())
    } else {
        parse_species_code(s)
    }
}
