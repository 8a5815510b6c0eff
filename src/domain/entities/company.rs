//! Company entity mirroring the CVR registry row.

use serde::Serialize;

use crate::domain::sectors;

/// A registered company as persisted in the `company` table.
///
/// Everything except the CVR number may be missing in registry data, so all
/// other fields are optional and the consumer renders placeholders.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Company {
    pub cvr_number: i64,
    pub name: Option<String>,
    pub industry_sector: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub establishment_date: Option<String>,
    pub purpose: Option<String>,
}

impl Company {
    /// Human-readable sector name, with the "Unknown Sector" fallback for
    /// missing or unmapped codes.
    pub fn sector_name(&self) -> &'static str {
        self.industry_sector
            .as_deref()
            .map(sectors::display_name)
            .unwrap_or(sectors::UNKNOWN_SECTOR)
    }
}

/// The `(cvr, name)` pair company pickers are populated from.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompanySummary {
    pub cvr_number: i64,
    pub name: Option<String>,
}
