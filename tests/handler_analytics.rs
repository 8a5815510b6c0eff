mod common;

use axum::{middleware, Router};
use axum_test::TestServer;
use cvr_insight::api::middleware::auth;
use cvr_insight::api::routes::{protected_routes, public_routes};
use serde_json::json;
use sqlx::SqlitePool;

/// Builds a server with the full API surface and logs a fixture user in,
/// returning the server plus a Bearer token for the protected routes.
async fn make_authed_server(pool: SqlitePool) -> (TestServer, String) {
    common::create_test_user(&pool, "analyst", "hunter2hunter2", "").await;

    let state = common::create_test_state(pool);
    let protected =
        protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let app: Router = public_routes().merge(protected).with_state(state);
    let server = TestServer::new(app).unwrap();

    let login = server
        .post("/auth/login")
        .json(&json!({ "username": "analyst", "password": "hunter2hunter2" }))
        .await;
    let token = login.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    (server, token)
}

#[sqlx::test]
async fn test_years_empty_store(pool: SqlitePool) {
    let (server, token) = make_authed_server(pool).await;

    let response = server.get("/years").authorization_bearer(&token).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["min_year"], serde_json::Value::Null);
    assert_eq!(body["max_year"], serde_json::Value::Null);
}

#[sqlx::test]
async fn test_years_populated(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2007, Some(1.0), None).await;
    common::create_test_financial(&pool, 101, 2022, Some(2.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server.get("/years").authorization_bearer(&token).await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["min_year"], 2007);
    assert_eq!(body["max_year"], 2022);
}

#[sqlx::test]
async fn test_years_requires_auth(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let protected =
        protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let app: Router = public_routes().merge(protected).with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/years").await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_sector_list_is_fixed_table(pool: SqlitePool) {
    let (server, token) = make_authed_server(pool).await;

    let response = server.get("/sectors").authorization_bearer(&token).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let sectors = body["sectors"].as_array().unwrap();
    assert_eq!(sectors.len(), 20);
    assert_eq!(sectors[0]["code"], "A");
    assert_eq!(sectors[2]["code"], "C");
    assert_eq!(sectors[2]["name"], "Manufacturing");
}

#[sqlx::test]
async fn test_sector_trends_by_code(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), Some(1000.0)).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/C/trends")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body[0]["year"], 2020);
    assert_eq!(body[0]["avg_profit_loss"], 100.0);
}

#[sqlx::test]
async fn test_sector_trends_by_full_name(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/Manufacturing/trends")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_sector_trends_unknown_name_is_404(pool: SqlitePool) {
    let (server, token) = make_authed_server(pool).await;

    let response = server
        .get("/sectors/Astrology/trends")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_sector_trends_unmapped_code_is_empty(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    // "Z" maps to no sector: a valid filter that matches nothing.
    let response = server
        .get("/sectors/Z/trends")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>().as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_sector_trends_explicit_year_window(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2018, Some(10.0), None).await;
    common::create_test_financial(&pool, 101, 2020, Some(20.0), None).await;
    common::create_test_financial(&pool, 101, 2022, Some(30.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/C/trends")
        .add_query_param("from", "2019")
        .add_query_param("to", "2021")
        .authorization_bearer(&token)
        .await;

    let body = response.json::<serde_json::Value>();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["year"], 2020);
}

#[sqlx::test]
async fn test_companies_in_sector(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 201, "Gamma A/S", "F").await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/C/companies")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["cvr_number"], 101);
}

#[sqlx::test]
async fn test_sector_health(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial_full(
        &pool,
        101,
        2020,
        None,
        None,
        Some(0.1),
        Some(0.2),
        Some(0.3),
    )
    .await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/C/health")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body[0]["avg_return_on_assets"], 0.1);
    assert_eq!(body[0]["avg_return_on_investment"], 0.2);
    assert_eq!(body[0]["avg_solvency_ratio"], 0.3);
}

#[sqlx::test]
async fn test_hidden_gems_endpoint(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    for year in 2016..=2020 {
        common::create_test_financial_full(
            &pool,
            101,
            year,
            Some(100.0),
            None,
            None,
            None,
            Some(0.4),
        )
        .await;
    }
    common::create_test_financial_full(&pool, 101, 2021, Some(-500.0), None, None, None, Some(0.4))
        .await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/sectors/C/hidden-gems")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body[0]["cvr"], 101);
    assert_eq!(body[0]["latest_year"], 2021);
}

#[sqlx::test]
async fn test_company_snapshot(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), Some(1000.0)).await;
    common::create_test_financial(&pool, 101, 2021, Some(150.0), Some(1100.0)).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["cvr_number"], 101);
    assert_eq!(body["sector_name"], "Manufacturing");
    assert_eq!(body["latest"]["year"], 2021);
}

#[sqlx::test]
async fn test_company_snapshot_without_financials(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "X").await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    // Unmapped sector code renders the fallback label; missing financials
    // are null, not an error.
    assert_eq!(body["sector_name"], "Unknown Sector");
    assert_eq!(body["latest"], serde_json::Value::Null);
}

#[sqlx::test]
async fn test_company_snapshot_unknown_cvr_is_404(pool: SqlitePool) {
    let (server, token) = make_authed_server(pool).await;

    let response = server
        .get("/companies/99999999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_company_history(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_financial(&pool, 101, 2021, Some(30.0), None).await;
    common::create_test_financial(&pool, 101, 2019, Some(10.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101/history")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let rows = body.as_array().unwrap();
    assert_eq!(rows[0]["year"], 2019);
    assert_eq!(rows[1]["year"], 2021);
}

#[sqlx::test]
async fn test_company_comparison_defaults_to_own_sector(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 102, "Beta A/S", "C").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), Some(1000.0)).await;
    common::create_test_financial(&pool, 102, 2020, Some(300.0), Some(3000.0)).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101/comparison")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["cvr"], 101);
    assert_eq!(body["sector_code"], "C");
    assert_eq!(body["points"][0]["year"], 2020);
    assert_eq!(body["points"][0]["company_profit_loss"], 100.0);
    assert_eq!(body["points"][0]["sector_avg_profit_loss"], 200.0);
}

#[sqlx::test]
async fn test_company_comparison_explicit_sector(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 201, "Gamma A/S", "F").await;
    common::create_test_financial(&pool, 101, 2020, Some(100.0), None).await;
    common::create_test_financial(&pool, 201, 2020, Some(500.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101/comparison")
        .add_query_param("sector", "Building and construction business")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["sector_code"], "F");
    assert_eq!(body["points"][0]["sector_avg_profit_loss"], 500.0);
}

#[sqlx::test]
async fn test_company_comparison_drops_unaligned_years(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 102, "Beta A/S", "F").await;
    // Company filed 2019-2020; the compared sector only has 2020.
    common::create_test_financial(&pool, 101, 2019, Some(10.0), None).await;
    common::create_test_financial(&pool, 101, 2020, Some(20.0), None).await;
    common::create_test_financial(&pool, 102, 2020, Some(40.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/101/comparison")
        .add_query_param("sector", "F")
        .authorization_bearer(&token)
        .await;

    let body = response.json::<serde_json::Value>();
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["year"], 2020);
}

#[sqlx::test]
async fn test_multi_company_compare(pool: SqlitePool) {
    common::create_test_company(&pool, 101, "Alfa ApS", "C").await;
    common::create_test_company(&pool, 102, "Beta A/S", "F").await;
    common::create_test_financial(&pool, 101, 2019, Some(10.0), None).await;
    common::create_test_financial(&pool, 101, 2021, Some(30.0), None).await;
    common::create_test_financial(&pool, 102, 2020, Some(20.0), None).await;

    let (server, token) = make_authed_server(pool).await;
    let response = server
        .get("/companies/compare")
        .add_query_param("cvr", "101,102")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["cvr"], 101);
    assert_eq!(rows[0]["year"], 2021);
    assert_eq!(rows[1]["cvr"], 102);
}

#[sqlx::test]
async fn test_multi_company_compare_bad_id_list(pool: SqlitePool) {
    let (server, token) = make_authed_server(pool).await;

    let response = server
        .get("/companies/compare")
        .add_query_param("cvr", "101,abc")
        .authorization_bearer(&token)
        .await;

    response.assert_status_bad_request();
}
