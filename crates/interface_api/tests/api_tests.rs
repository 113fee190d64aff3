//! HTTP API tests for interface_api

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_claims::ClaimStatus;
use domain_policyholder::PolicyType;
use infra_store::{InMemoryBackend, RecordStore, Records, StorageBackend};
use interface_api::{config::AppConfig, create_router, AppState};
use test_utils::{IdFixtures, TemporalFixtures, TestClaimBuilder, TestPolicyholderBuilder};

fn server_with(records: Records, config: AppConfig) -> TestServer {
    let backend: Box<dyn StorageBackend> = Box::new(InMemoryBackend::with_records(records));
    let state = AppState::new(RecordStore::open(backend), config).with_clock(TemporalFixtures::clock());
    TestServer::new(create_router(state)).unwrap()
}

fn empty_server() -> TestServer {
    server_with(Records::default(), AppConfig::default())
}

/// Two policyholders: PH001 (Health, 10k insured) with a large approved claim
/// and a pending one, PH002 (Vehicle) with one old pending claim
fn seeded_records() -> Records {
    let mut records = Records::default();
    for holder in [
        TestPolicyholderBuilder::new()
            .with_sequence(1)
            .with_name("Ann Lee")
            .with_sum_insured(dec!(10000))
            .build(),
        TestPolicyholderBuilder::new()
            .with_sequence(2)
            .with_name("Bob Ray")
            .with_policy_type(PolicyType::Vehicle)
            .build(),
    ] {
        records.policyholders.insert(holder.id(), holder);
    }

    for claim in [
        TestClaimBuilder::new()
            .with_sequence(1)
            .with_amount(dec!(8500))
            .with_status(ClaimStatus::Approved)
            .with_filed_at(TemporalFixtures::days_ago(40))
            .build(),
        TestClaimBuilder::new()
            .with_sequence(2)
            .with_amount(dec!(250))
            .with_filed_at(TemporalFixtures::days_ago(10))
            .build(),
        TestClaimBuilder::new()
            .with_sequence(3)
            .with_policyholder(IdFixtures::policyholder(2))
            .with_amount(dec!(1234.5))
            .with_filed_at(TemporalFixtures::days_ago(70))
            .build(),
    ] {
        records.claims.insert(claim.id(), claim);
    }
    records
}

fn seeded_server() -> TestServer {
    server_with(seeded_records(), AppConfig::default())
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = seeded_server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["policyholders"], 2);
        assert_eq!(body["claims"], 3);
    }

    #[tokio::test]
    async fn test_health_via_tower() {
        use tower::ServiceExt;

        let backend: Box<dyn StorageBackend> = Box::new(InMemoryBackend::new());
        let app = create_router(AppState::new(RecordStore::open(backend), AppConfig::default()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

// ============================================================================
// Policyholder Tests
// ============================================================================

mod policyholder_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_fetch_policyholder() {
        let server = empty_server();

        let response = server
            .post("/api/v1/policyholders")
            .json(&json!({
                "name": "Jane Doe",
                "age": 42,
                "policy_type": "life",
                "sum_insured": 250000
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["policyholder_id"], "PH001");
        assert_eq!(body["policy_type"], "Life");
        assert_eq!(body["sum_insured_display"], "$250,000.00");
        assert_eq!(body["registration_date"], "2024-07-01T12:00:00.000000Z");

        let fetched: Value = server.get("/api/v1/policyholders/PH001").await.json();
        assert_eq!(fetched["name"], "Jane Doe");

        let listed: Value = server.get("/api/v1/policyholders").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_policyholder_reports_every_error() {
        let response = empty_server()
            .post("/api/v1/policyholders")
            .json(&json!({
                "name": "R2D2",
                "age": 17,
                "policy_type": "Health",
                "sum_insured": 0
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_policy_type_rejected() {
        let response = empty_server()
            .post("/api/v1/policyholders")
            .json(&json!({
                "name": "Jane Doe",
                "age": 42,
                "policy_type": "Travel",
                "sum_insured": 1000
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_and_malformed_ids() {
        let server = empty_server();

        server.get("/api/v1/policyholders/PH404").await.assert_status_not_found();
        server
            .get("/api/v1/policyholders/nobody")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_policyholder_claims_and_frequency() {
        let server = seeded_server();

        let claims: Value = server.get("/api/v1/policyholders/PH001/claims").await.json();
        assert_eq!(claims.as_array().unwrap().len(), 2);

        let frequency: Value = server
            .get("/api/v1/policyholders/PH001/claim-frequency")
            .await
            .json();
        assert_eq!(frequency["total_claims"], 2);
        assert_eq!(frequency["claims_last_year"], 2);

        server
            .get("/api/v1/policyholders/PH009/claim-frequency")
            .await
            .assert_status_not_found();
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_claim() {
        let server = seeded_server();

        let response = server
            .post("/api/v1/claims")
            .json(&json!({
                "policyholder_id": "PH002",
                "claim_amount": 1500.25,
                "reason": "  Cracked windscreen on motorway  "
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["claim_id"], "CL004");
        assert_eq!(body["status"], "Pending");
        assert_eq!(body["reason"], "Cracked windscreen on motorway");
        assert_eq!(body["claim_amount_display"], "$1,500.25");
    }

    #[tokio::test]
    async fn test_submit_claim_for_unknown_policyholder() {
        let response = seeded_server()
            .post("/api/v1/claims")
            .json(&json!({
                "policyholder_id": "PH099",
                "claim_amount": 100,
                "reason": "Lost luggage at the airport"
            }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_submit_invalid_claim() {
        let response = seeded_server()
            .post("/api/v1/claims")
            .json(&json!({
                "policyholder_id": "PH001",
                "claim_amount": 100,
                "reason": "short"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid claim");
    }

    #[tokio::test]
    async fn test_update_status() {
        let server = seeded_server();

        let response = server
            .put("/api/v1/claims/CL002/status")
            .json(&json!({ "status": "rejected" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "Rejected");

        let fetched: Value = server.get("/api/v1/claims/CL002").await.json();
        assert_eq!(fetched["status"], "Rejected");
    }

    #[tokio::test]
    async fn test_update_status_of_unknown_claim() {
        seeded_server()
            .put("/api/v1/claims/CL404/status")
            .json(&json!({ "status": "Approved" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_status_with_unknown_status() {
        seeded_server()
            .put("/api/v1/claims/CL001/status")
            .json(&json!({ "status": "Closed" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_claims_in_id_order() {
        let claims: Value = seeded_server().get("/api/v1/claims").await.json();
        let ids: Vec<_> = claims
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["claim_id"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(ids, vec!["CL001", "CL002", "CL003"]);
    }
}

// ============================================================================
// Risk and Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[tokio::test]
    async fn test_high_risk() {
        let body: Value = seeded_server().get("/api/v1/risk/high-risk").await.json();
        let flagged = body.as_array().unwrap();

        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0]["policyholder_id"], "PH001");
        assert_eq!(flagged[0]["claim_ratio"], 0.875);
        assert_eq!(flagged[0]["claim_ratio_display"], "87.50%");
        assert_eq!(flagged[0]["total_claim_amount_display"], "$8,750.00");
    }

    #[tokio::test]
    async fn test_high_risk_thresholds_from_config() {
        let config = AppConfig {
            risk: domain_analytics::RiskThresholds {
                max_recent_claims: 3,
                max_claim_ratio: dec!(0.9),
            },
            ..AppConfig::default()
        };
        let body: Value = server_with(seeded_records(), config)
            .get("/api/v1/risk/high-risk")
            .await
            .json();

        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_by_policy_type() {
        let body: Value = seeded_server().get("/api/v1/risk/by-policy-type").await.json();

        assert_eq!(body["Health"]["total_claims"], 2);
        assert_eq!(body["Health"]["pending_claims"], 1);
        assert_eq!(body["Health"]["max_amount"], 8500.0);
        assert_eq!(body["Vehicle"]["total_amount_display"], "$1,234.50");
    }

    #[tokio::test]
    async fn test_monthly() {
        let body: Value = seeded_server().get("/api/v1/reports/monthly").await.json();
        let months: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["month"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(months, vec!["2024-04", "2024-05", "2024-06"]);
    }

    #[tokio::test]
    async fn test_average_by_policy() {
        let body: Value = seeded_server().get("/api/v1/reports/average-by-policy").await.json();

        assert_eq!(body["Health"]["claim_count"], 2);
        assert_eq!(body["Health"]["average_amount"], 4375.0);
        assert_eq!(body["Health"]["average_amount_display"], "$4,375.00");
    }

    #[tokio::test]
    async fn test_highest_claim() {
        let server = seeded_server();
        let body: Value = server.get("/api/v1/reports/highest-claim").await.json();

        assert_eq!(body["claim_id"], "CL001");
        assert_eq!(body["policyholder_name"], "Ann Lee");
        assert_eq!(body["status"], "Approved");
        assert_eq!(body["claim_amount_display"], "$8,500.00");

    }

    #[tokio::test]
    async fn test_highest_claim_without_claims_is_null() {
        let response = empty_server().get("/api/v1/reports/highest-claim").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), Value::Null);
    }

    #[tokio::test]
    async fn test_pending() {
        let body: Value = seeded_server().get("/api/v1/reports/pending").await.json();
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["claim_id"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(ids, vec!["CL002", "CL003"]);
    }

    #[tokio::test]
    async fn test_dashboard() {
        let body: Value = seeded_server().get("/api/v1/reports/dashboard").await.json();

        assert_eq!(
            body,
            json!({
                "total_policyholders": 2,
                "total_claims": 3,
                "pending_claims": 2,
                "high_risk_policyholders": 1
            })
        );
    }
}
