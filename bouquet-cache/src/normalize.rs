//! Request-key normalization.
//!
//! One canonical case-folding rule, applied in exactly one place: cache
//! keys fold with `str::to_lowercase` (full Unicode case mapping). Both
//! reads and writes go through [`NormalizedName`], so they cannot disagree
//! on case sensitivity. The display name keeps the caller's casing.

use bouquet_core::{BouquetResult, RequestError};

/// A validated, normalized request name.
///
/// Construction is the only place trimming and case folding happen; the
/// rest of the system treats `key()` as an opaque, already-canonical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    display: String,
    key: String,
}

impl NormalizedName {
    /// Parse raw user input into a normalized name.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::EmptyName` if the input is empty after
    /// trimming surrounding whitespace.
    pub fn parse(raw: &str) -> BouquetResult<Self> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(RequestError::EmptyName.into());
        }

        Ok(Self {
            display: display.to_string(),
            key: display.to_lowercase(),
        })
    }

    /// The trimmed name with original casing, for presentation.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The case-folded cache key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = NormalizedName::parse("  Ann \t").unwrap();
        assert_eq!(name.display(), "Ann");
        assert_eq!(name.key(), "ann");
    }

    #[test]
    fn test_empty_after_trim_is_rejected() {
        assert!(NormalizedName::parse("   ").is_err());
        assert!(NormalizedName::parse("").is_err());
    }

    #[test]
    fn test_key_folds_case_display_does_not() {
        let upper = NormalizedName::parse("BO").unwrap();
        let lower = NormalizedName::parse("bo").unwrap();
        assert_eq!(upper.key(), lower.key());
        assert_ne!(upper.display(), lower.display());
    }

    #[test]
    fn test_key_folds_non_ascii_case() {
        let name = NormalizedName::parse("Åsa").unwrap();
        assert_eq!(name.key(), "åsa");
    }
}
