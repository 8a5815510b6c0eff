#![allow(dead_code)]

use cvr_insight::application::services::{AnalyticsService, AuthService};
use cvr_insight::infrastructure::persistence::{
    SqliteCompanyRepository, SqliteFinancialRepository, SqliteUserRepository,
};
use cvr_insight::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn create_test_company(pool: &SqlitePool, cvr: i64, name: &str, sector: &str) {
    sqlx::query(
        "INSERT INTO company (cvr_number, name, industry_sector, email, phone_number, establishment_date, purpose)
         VALUES (?, ?, ?, NULL, NULL, NULL, NULL)",
    )
    .bind(cvr)
    .bind(name)
    .bind(sector)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_financial(
    pool: &SqlitePool,
    cvr: i64,
    year: i64,
    profit_loss: Option<f64>,
    equity: Option<f64>,
) {
    sqlx::query(
        "INSERT INTO financials (cvr, year, profit_loss, equity, return_on_assets, return_on_investment, solvency_ratio)
         VALUES (?, ?, ?, ?, NULL, NULL, NULL)",
    )
    .bind(cvr)
    .bind(year)
    .bind(profit_loss)
    .bind(equity)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a full financial row including the three health ratios.
pub async fn create_test_financial_full(
    pool: &SqlitePool,
    cvr: i64,
    year: i64,
    profit_loss: Option<f64>,
    equity: Option<f64>,
    roa: Option<f64>,
    roi: Option<f64>,
    solvency: Option<f64>,
) {
    sqlx::query(
        "INSERT INTO financials (cvr, year, profit_loss, equity, return_on_assets, return_on_investment, solvency_ratio)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(cvr)
    .bind(year)
    .bind(profit_loss)
    .bind(equity)
    .bind(roa)
    .bind(roi)
    .bind(solvency)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str, sectors: &str) {
    let hash = AuthService::<SqliteUserRepository>::hash_password(password);
    sqlx::query("INSERT INTO users (username, password, sectors) VALUES (?, ?, ?)")
        .bind(username)
        .bind(hash)
        .bind(sectors)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let financial_repo = Arc::new(SqliteFinancialRepository::new(pool.clone()));
    let company_repo = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

    let analytics_service = Arc::new(AnalyticsService::new(financial_repo, company_repo));
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        "test-signing-secret".to_string(),
        3600,
    ));

    AppState::new(analytics_service, auth_service)
}
