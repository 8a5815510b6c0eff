//! The fixed DB07 industry-sector classification used by the Danish CVR
//! registry: 20 single-letter codes (A–T) mapped to human-readable names.
//!
//! This table is the single owner of the code↔name bijection. Selection
//! widgets are populated from it, and sector names coming back from them are
//! reverse-mapped here, so [`code_for_name`] missing is a caller bug surfaced
//! as an explicit error rather than a silent mismatch.

use thiserror::Error;

/// All sector codes with their full names, ordered by code.
pub const SECTORS: [(&str, &str); 20] = [
    ("A", "Agriculture, hunting, forestry and fishing"),
    ("B", "Raw material extraction"),
    ("C", "Manufacturing"),
    ("D", "Electricity, gas and district heating supply"),
    (
        "E",
        "Water supply; sewage system, waste management and cleaning of soil and groundwater",
    ),
    ("F", "Building and construction business"),
    (
        "G",
        "Wholesale and retail trade; repair of motor vehicles and motorcycles",
    ),
    ("H", "Transport and cargo handling"),
    ("I", "Accommodation facilities and restaurant business"),
    ("J", "Information and communication"),
    ("K", "Banking and financial services, insurance"),
    ("L", "Real estate"),
    ("M", "Liberal, scientific and technical services"),
    ("N", "Administrative and support services"),
    ("O", "Public administration and defence; social security"),
    ("P", "Teaching"),
    ("Q", "Health care and social measures"),
    ("R", "Culture, amusements and sports"),
    ("S", "Other services"),
    (
        "T",
        "Private households with hired help; households' production of goods and services for their own use",
    ),
];

/// Rendered for sector codes outside the A–T table. A defined fallback,
/// not an error: registry data may carry stale or blank codes.
pub const UNKNOWN_SECTOR: &str = "Unknown Sector";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectorError {
    #[error("unknown sector name: {0}")]
    UnknownName(String),
}

/// Full name for a sector code, if the code is in the table.
pub fn name_for_code(code: &str) -> Option<&'static str> {
    SECTORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Display name for a sector code, falling back to [`UNKNOWN_SECTOR`].
pub fn display_name(code: &str) -> &'static str {
    name_for_code(code).unwrap_or(UNKNOWN_SECTOR)
}

/// Reverse lookup: sector code for an exact full name.
pub fn code_for_name(name: &str) -> Result<&'static str, SectorError> {
    SECTORS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
        .ok_or_else(|| SectorError::UnknownName(name.to_string()))
}

/// Resolves user input that is either a one-letter code or a full sector name.
///
/// Single-character inputs pass through verbatim: an unmapped code is a
/// valid filter that simply matches nothing. Anything longer is treated as a
/// name and reverse-mapped, failing on unknown names.
pub fn resolve(input: &str) -> Result<String, SectorError> {
    if input.chars().count() == 1 {
        return Ok(input.to_string());
    }
    code_for_name(input).map(str::to_string)
}
