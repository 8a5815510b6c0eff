//! DTOs for sector-scoped endpoints.

use serde::Serialize;

/// One entry of the fixed sector table, for populating selection widgets.
#[derive(Debug, Serialize)]
pub struct SectorInfo {
    pub code: &'static str,
    pub name: &'static str,
}

/// The full sector list response.
#[derive(Debug, Serialize)]
pub struct SectorListResponse {
    pub sectors: Vec<SectorInfo>,
}
