//! Dashboard user credential record.

use chrono::{DateTime, Utc};

/// A stored user row. `password` holds the PHC-style PBKDF2 hash string,
/// never a plaintext password.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub password: String,
    /// `;`-delimited sector names chosen at signup. Stored and echoed back on
    /// the profile endpoint; no dashboard query filters on it.
    pub sectors: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Splits the delimited sector list into individual names.
    pub fn sectors_of_interest(&self) -> Vec<&str> {
        self.sectors
            .as_deref()
            .map(|s| s.split(';').filter(|p| !p.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Input for creating a new user; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub sectors: Vec<String>,
}

impl NewUser {
    /// Joins the sector names into the stored `;`-delimited form.
    pub fn sectors_column(&self) -> String {
        self.sectors.join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectors_round_trip_through_delimited_column() {
        let new_user = NewUser {
            username: "inger".to_string(),
            password_hash: "pbkdf2-sha256$...".to_string(),
            sectors: vec!["Manufacturing".to_string(), "Real estate".to_string()],
        };
        assert_eq!(new_user.sectors_column(), "Manufacturing;Real estate");

        let user = User {
            username: "inger".to_string(),
            password: "pbkdf2-sha256$...".to_string(),
            sectors: Some("Manufacturing;Real estate".to_string()),
            created_at: Utc::now(),
        };
        assert_eq!(
            user.sectors_of_interest(),
            vec!["Manufacturing", "Real estate"]
        );
    }

    #[test]
    fn empty_sector_list_yields_no_names() {
        let user = User {
            username: "sven".to_string(),
            password: "hash".to_string(),
            sectors: None,
            created_at: Utc::now(),
        };
        assert!(user.sectors_of_interest().is_empty());
    }
}
