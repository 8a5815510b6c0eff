//! DTOs for company-scoped endpoints.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::api::dto::filters::YearFilterParams;

/// Query parameters for the multi-company comparison endpoint.
///
/// `cvr` is a comma-separated list of CVR numbers, e.g. `?cvr=101,102,103`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub cvr: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub from: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub to: Option<i64>,
}

impl CompareParams {
    /// Parses the comma-separated CVR list, rejecting non-numeric entries.
    pub fn cvr_list(&self) -> Result<Vec<i64>, String> {
        self.cvr
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|_| format!("'{part}' is not a valid CVR number"))
            })
            .collect()
    }

    pub fn year_filter(&self) -> YearFilterParams {
        YearFilterParams {
            from: self.from,
            to: self.to,
        }
    }
}

/// Query parameters for the company-vs-sector comparison endpoint.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ComparisonParams {
    /// Sector code or full name; defaults to the company's own sector.
    pub sector: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub from: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub to: Option<i64>,
}

impl ComparisonParams {
    pub fn year_filter(&self) -> YearFilterParams {
        YearFilterParams {
            from: self.from,
            to: self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cvr_list_parses_and_trims() {
        let params = CompareParams {
            cvr: "101, 102 ,103,".to_string(),
            from: None,
            to: None,
        };
        assert_eq!(params.cvr_list().unwrap(), vec![101, 102, 103]);
    }

    #[test]
    fn cvr_list_rejects_garbage() {
        let params = CompareParams {
            cvr: "101,abc".to_string(),
            from: None,
            to: None,
        };
        assert!(params.cvr_list().is_err());
    }
}
