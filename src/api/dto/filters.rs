//! Year-range filter query parameters.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::repositories::{YearRange, YearSpan};

/// `?from=&to=` query parameters scoping an aggregation.
///
/// Uses `serde_with` to parse years from query strings as integers; a value
/// that is not an integer rejects the request before it reaches the query
/// layer.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct YearFilterParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub from: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub to: Option<i64>,
}

impl YearFilterParams {
    /// Resolves the filter into a concrete span, substituting the store's
    /// full available range for missing bounds.
    ///
    /// Returns `None` when a bound is missing and the store has no financial
    /// records to derive it from; callers treat that as "no data" and render
    /// an empty result rather than failing.
    pub fn resolve(&self, available: Option<&YearRange>) -> Option<YearSpan> {
        let start = self.from.or(available.map(|r| r.min_year))?;
        let end = self.to.or(available.map(|r| r.max_year))?;
        Some(YearSpan::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min_year: i64, max_year: i64) -> YearRange {
        YearRange { min_year, max_year }
    }

    #[test]
    fn explicit_bounds_win_over_available_range() {
        let params = YearFilterParams {
            from: Some(2019),
            to: Some(2021),
        };
        let span = params.resolve(Some(&range(2010, 2023))).unwrap();
        assert_eq!(span, YearSpan::new(2019, 2021));
    }

    #[test]
    fn missing_bounds_fall_back_to_available_range() {
        let params = YearFilterParams {
            from: None,
            to: Some(2021),
        };
        let span = params.resolve(Some(&range(2010, 2023))).unwrap();
        assert_eq!(span, YearSpan::new(2010, 2021));

        let span = YearFilterParams::default()
            .resolve(Some(&range(2010, 2023)))
            .unwrap();
        assert_eq!(span, YearSpan::new(2010, 2023));
    }

    #[test]
    fn empty_store_and_missing_bound_resolve_to_none() {
        assert!(YearFilterParams::default().resolve(None).is_none());

        let params = YearFilterParams {
            from: Some(2019),
            to: None,
        };
        assert!(params.resolve(None).is_none());
    }

    #[test]
    fn inverted_bounds_pass_through_unchanged() {
        // An inverted span is a valid filter that matches nothing; the query
        // layer returns empty rows for it rather than erroring here.
        let params = YearFilterParams {
            from: Some(2023),
            to: Some(2019),
        };
        let span = params.resolve(None).unwrap();
        assert_eq!(span, YearSpan::new(2023, 2019));
    }
}
