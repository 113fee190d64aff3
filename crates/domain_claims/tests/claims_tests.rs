//! Comprehensive tests for domain_claims

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, PolicyholderId};
use domain_claims::claim::{Claim, ClaimStatus, NewClaim};
use domain_claims::ClaimError;

fn valid_input() -> NewClaim {
    NewClaim {
        policyholder_id: PolicyholderId::first(),
        amount: dec!(5000),
        reason: "Medical expenses for routine checkup".to_string(),
    }
}

fn create_test_claim() -> Claim {
    let filed_at = Utc::now() - Duration::days(5);
    Claim::new(ClaimId::first(), valid_input(), filed_at).unwrap()
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_new_claim_is_pending() {
        let claim = create_test_claim();

        assert_eq!(claim.status(), ClaimStatus::Pending);
        assert!(claim.is_pending());
        assert_eq!(claim.id().to_string(), "CL001");
        assert_eq!(claim.policyholder_id().to_string(), "PH001");
        assert_eq!(claim.amount(), dec!(5000));
    }

    #[test]
    fn test_reason_is_trimmed() {
        let claim = Claim::new(
            ClaimId::first(),
            NewClaim {
                reason: "   Windscreen replacement   ".to_string(),
                ..valid_input()
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(claim.reason(), "Windscreen replacement");
    }

    #[test]
    fn test_update_status_returns_previous() {
        let mut claim = create_test_claim();

        assert_eq!(claim.update_status(ClaimStatus::Approved), ClaimStatus::Pending);
        assert_eq!(claim.status(), ClaimStatus::Approved);
    }

    #[test]
    fn test_any_status_change_is_allowed() {
        let mut claim = create_test_claim();

        claim.update_status(ClaimStatus::Rejected);
        claim.update_status(ClaimStatus::Approved);
        claim.update_status(ClaimStatus::Pending);
        assert!(claim.is_pending());
    }

    #[test]
    fn test_update_status_keeps_filing_time() {
        let mut claim = create_test_claim();
        let filed_at = claim.filed_at();

        claim.update_status(ClaimStatus::Approved);
        assert_eq!(claim.filed_at(), filed_at);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    fn reject(input: NewClaim) -> Vec<String> {
        Claim::new(ClaimId::first(), input, Utc::now())
            .unwrap_err()
            .messages()
    }

    #[test]
    fn test_zero_amount_rejected() {
        let errors = reject(NewClaim {
            amount: Decimal::ZERO,
            ..valid_input()
        });
        assert_eq!(errors, vec!["Claim amount must be greater than 0".to_string()]);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let errors = reject(NewClaim {
            amount: dec!(-1),
            ..valid_input()
        });
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_reason_rejected() {
        let errors = reject(NewClaim {
            reason: "      ".to_string(),
            ..valid_input()
        });
        assert_eq!(errors, vec!["Reason cannot be empty".to_string()]);
    }

    #[test]
    fn test_short_reason_rejected_after_trim() {
        let errors = reject(NewClaim {
            reason: "   too short   ".to_string(),
            ..valid_input()
        });
        assert!(errors[0].starts_with("Reason must be between 10 and 500 characters"));
    }

    #[test]
    fn test_reason_length_bounds() {
        let ok_min = NewClaim { reason: "a".repeat(10), ..valid_input() };
        let ok_max = NewClaim { reason: "a".repeat(500), ..valid_input() };
        let too_long = NewClaim { reason: "a".repeat(501), ..valid_input() };

        assert!(Claim::new(ClaimId::first(), ok_min, Utc::now()).is_ok());
        assert!(Claim::new(ClaimId::first(), ok_max, Utc::now()).is_ok());
        assert!(Claim::new(ClaimId::first(), too_long, Utc::now()).is_err());
    }

    #[test]
    fn test_all_failures_reported() {
        let err = Claim::new(
            ClaimId::first(),
            NewClaim {
                policyholder_id: PolicyholderId::first(),
                amount: Decimal::ZERO,
                reason: String::new(),
            },
            Utc::now(),
        )
        .unwrap_err();

        assert!(matches!(&err, ClaimError::ValidationFailed(errors) if errors.len() == 2));
        assert!(err.to_string().starts_with("Invalid claim: "));
    }
}

// ============================================================================
// Status Mapping Tests
// ============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(ClaimStatus::default(), ClaimStatus::Pending);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = ClaimStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["Pending", "Approved", "Rejected"]);
    }

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!("approved".parse::<ClaimStatus>().unwrap(), ClaimStatus::Approved);
        assert_eq!("REJECTED".parse::<ClaimStatus>().unwrap(), ClaimStatus::Rejected);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Closed".parse::<ClaimStatus>(),
            Err(ClaimError::UnknownStatus("Closed".to_string()))
        );
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_storage_field_names() {
        let filed_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let claim = Claim::new(ClaimId::from_sequence(2), valid_input(), filed_at).unwrap();
        let value = serde_json::to_value(&claim).unwrap();

        assert_eq!(value["claim_id"], "CL002");
        assert_eq!(value["policyholder_id"], "PH001");
        assert_eq!(value["claim_amount"], 5000.0);
        assert_eq!(value["reason"], "Medical expenses for routine checkup");
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["date_of_claim"], "2024-06-01T08:00:00.000000Z");
    }

    #[test]
    fn test_loads_legacy_record() {
        let json = r#"{
            "claim_id": "CL010",
            "policyholder_id": "PH002",
            "claim_amount": 1250.5,
            "reason": "Rear bumper damage in car park",
            "status": "Approved",
            "date_of_claim": "2024-02-29 17:45:12.000001"
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.id(), ClaimId::from_sequence(10));
        assert_eq!(claim.amount(), dec!(1250.5));
        assert_eq!(claim.status(), ClaimStatus::Approved);
        assert_eq!(claim.filed_at().date_naive().to_string(), "2024-02-29");
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let json = r#"{
            "claim_id": "CL001",
            "policyholder_id": "PH001",
            "claim_amount": 10,
            "reason": "Lost luggage at the airport",
            "date_of_claim": "2024-01-01T00:00:00Z"
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert!(claim.is_pending());
    }
}
