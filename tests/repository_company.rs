mod common;

use cvr_insight::domain::repositories::CompanyRepository;
use cvr_insight::infrastructure::persistence::SqliteCompanyRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_companies_in_sector_ordered_by_name(pool: SqlitePool) {
    common::create_test_company(&pool, 102, "Beta A/S", "C").await;
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 201, "Gamma A/S", "F").await;

    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let companies = repo.companies_in_sector("C").await.unwrap();

    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].name.as_deref(), Some("Alfa ApS"));
    assert_eq!(companies[1].name.as_deref(), Some("Beta A/S"));
}

#[sqlx::test]
async fn test_companies_in_unpopulated_sector_is_empty(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;

    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let companies = repo.companies_in_sector("T").await.unwrap();

    assert!(companies.is_empty());
}

#[sqlx::test]
async fn test_find_by_cvr(pool: SqlitePool) {
    common::create_test_company(&pool, 12345678, "Alfa ApS", "C").await;

    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let company = repo.find_by_cvr(12345678).await.unwrap();

    assert!(company.is_some());
    let company = company.unwrap();
    assert_eq!(company.cvr_number, 12345678);
    assert_eq!(company.industry_sector.as_deref(), Some("C"));
}

#[sqlx::test]
async fn test_find_by_cvr_not_found(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));

    let company = repo.find_by_cvr(99999999).await.unwrap();

    assert!(company.is_none());
}
