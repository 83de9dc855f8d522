//! Comprehensive tests for domain_claim

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use core_kernel::{ClaimId, Currency, DateRange, Money, PolicyId};
use domain_claim::{
    ClaimSnapshot, ClaimStatus, CoverageStatus, CoverageType, LossType, ParticipantRole,
    ParticipantSnapshot, PolicyCoverage, PolicySnapshot, PolicyStatus, SnapshotError,
    VehicleUsage,
};

fn base_policy() -> PolicySnapshot {
    let mut coverages = BTreeMap::new();
    coverages.insert(
        CoverageType::Collision,
        PolicyCoverage {
            status: CoverageStatus::Active,
            limit: Money::new(dec!(50000), Currency::USD),
            deductible: Money::new(dec!(500), Currency::USD),
            vehicle: None,
            pending_endorsement: false,
        },
    );

    PolicySnapshot {
        id: PolicyId::new_v7(),
        policy_number: "AP-2044".to_string(),
        period: DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
        .unwrap(),
        status: PolicyStatus::Active,
        coverages,
        named_drivers: None,
        business_use_endorsement: false,
        rideshare_endorsement: false,
        dui_exclusion: false,
    }
}

fn base_snapshot() -> ClaimSnapshot {
    ClaimSnapshot {
        id: ClaimId::new_v7(),
        claim_number: "CLM-7781".to_string(),
        policy: base_policy(),
        jurisdiction: "CA".to_string(),
        status: ClaimStatus::Intake,
        loss_date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        loss_type: LossType::Collision,
        loss_location: "I-5 southbound near Sacramento".to_string(),
        loss_description: "rear-ended at a stoplight".to_string(),
        damage_description: "rear bumper and trunk damage".to_string(),
        estimated_amount: Money::new(dec!(8200), Currency::USD),
        report_date: Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap(),
        as_of: Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0).unwrap(),
        usage_at_loss: VehicleUsage::Personal,
        driver: None,
        vehicle: None,
        participants: vec![ParticipantSnapshot::new("Riley Marsh", ParticipantRole::Claimant)],
        documents: vec![],
        medical_bills: vec![],
        glass_repair_only: false,
        subrogation_recovered: false,
        in_litigation: false,
    }
}

// ============================================================================
// Snapshot Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_snapshot_passes() {
        assert!(base_snapshot().validate().is_ok());
    }

    #[test]
    fn test_empty_claim_number_is_fatal() {
        let mut snapshot = base_snapshot();
        snapshot.claim_number = "  ".to_string();
        assert_eq!(snapshot.validate(), Err(SnapshotError::EmptyClaimNumber));
    }

    #[test]
    fn test_negative_estimate_is_fatal() {
        let mut snapshot = base_snapshot();
        snapshot.estimated_amount = Money::new(dec!(-100), Currency::USD);
        assert_eq!(snapshot.validate(), Err(SnapshotError::NegativeEstimatedAmount));
    }

    #[test]
    fn test_loss_after_report_is_fatal() {
        let mut snapshot = base_snapshot();
        snapshot.loss_date = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::LossAfterReport { .. })
        ));
    }

    #[test]
    fn test_malformed_jurisdiction_is_fatal() {
        let mut snapshot = base_snapshot();
        snapshot.jurisdiction = "California".to_string();
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::InvalidJurisdiction(_))
        ));
    }

    #[test]
    fn test_bill_for_unknown_participant_is_fatal() {
        use core_kernel::{MedicalBillId, ParticipantId};
        use domain_claim::{DocumentationLevel, MedicalBillSnapshot, ProcedureCategory};

        let mut snapshot = base_snapshot();
        snapshot.medical_bills.push(MedicalBillSnapshot {
            id: MedicalBillId::new_v7(),
            participant_id: ParticipantId::new_v7(),
            provider_name: "Bayview Clinic".to_string(),
            provider_state: "CA".to_string(),
            service_date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
            procedure_code: "99213".to_string(),
            category: ProcedureCategory::Evaluation,
            description: "office visit".to_string(),
            amount: Money::new(dec!(220), Currency::USD),
            documentation: DocumentationLevel::Moderate,
        });

        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::BillForUnknownParticipant { .. })
        ));
    }

    #[test]
    fn test_missing_vehicle_and_bills_are_not_errors() {
        let snapshot = base_snapshot();
        assert!(snapshot.vehicle.is_none());
        assert!(snapshot.medical_bills.is_empty());
        assert!(snapshot.validate().is_ok());
    }
}

// ============================================================================
// Snapshot Derivation Tests
// ============================================================================

mod derivation_tests {
    use super::*;

    #[test]
    fn test_days_since_inception() {
        let snapshot = base_snapshot();
        // Policy effective Jan 1, loss May 10
        assert_eq!(snapshot.days_since_inception(), 129);
    }

    #[test]
    fn test_days_to_report() {
        let snapshot = base_snapshot();
        assert_eq!(snapshot.days_to_report(), 2);
    }

    #[test]
    fn test_injured_participant_detection() {
        let mut snapshot = base_snapshot();
        assert!(!snapshot.has_injured_participant());

        snapshot.participants[0].injury_description = Some("neck strain".to_string());
        assert!(snapshot.has_injured_participant());
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = base_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ClaimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
