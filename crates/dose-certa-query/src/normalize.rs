// SPDX-License-Identifier: Apache-2.0

use unicode_normalization::UnicodeNormalization;

use crate::limits::QueryLimits;
use crate::query_error::QueryError;

#[must_use]
pub fn normalize_search(input: &str) -> String {
    // NFKC + Unicode lowercase, applied to both the term and the haystack.
    input.nfkc().collect::<String>().to_lowercase()
}

/// A normalized, length-checked search term. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: &str, limits: &QueryLimits) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        limits.check_search(trimmed)?;
        Ok(Self(normalize_search(trimmed)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn matches_text(&self, haystack: &str) -> bool {
        self.is_empty() || normalize_search(haystack).contains(&self.0)
    }

    /// True when any of the fields contains the term.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches_text(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_folds_case_and_compatibility_forms() {
        assert_eq!(normalize_search("HEPATITE"), "hepatite");
        assert_eq!(normalize_search("ＣＯＶＩＤ"), "covid");
        assert_eq!(normalize_search("Tétano"), "tétano");
    }

    #[test]
    fn blank_term_matches_everything() {
        let term = SearchTerm::parse("   ", &QueryLimits::default()).expect("term");
        assert!(term.is_empty());
        assert!(term.matches_any(Vec::<&str>::new()));
    }

    #[test]
    fn long_terms_are_rejected() {
        let limits = QueryLimits { max_search_len: 4 };
        assert!(SearchTerm::parse("abcd", &limits).is_ok());
        let err = SearchTerm::parse("abcde", &limits).expect_err("too long");
        assert_eq!(err.code, crate::QueryErrorCode::Limit);
    }
}
