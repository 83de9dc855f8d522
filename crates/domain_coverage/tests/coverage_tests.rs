//! Comprehensive tests for domain_coverage

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use core_kernel::{ClaimId, Currency, DateRange, Money, PolicyId, VehicleId};
use domain_claim::{
    ClaimSnapshot, ClaimStatus, CoverageStatus, CoverageType, DocumentKind, DocumentSnapshot,
    DriverAtLoss, LossType, ParticipantRole, ParticipantSnapshot, PolicyCoverage, PolicySnapshot,
    PolicyStatus, TitleBrand, VehicleSnapshot, VehicleUsage,
};
use domain_coverage::{
    analyze_coverage, candidate_coverages, CoverageRecommendation, ExclusionCode, WaiverRule,
};

fn coverage(limit: i64, deductible: i64) -> PolicyCoverage {
    PolicyCoverage {
        status: CoverageStatus::Active,
        limit: Money::from_minor(limit * 100, Currency::USD),
        deductible: Money::from_minor(deductible * 100, Currency::USD),
        vehicle: None,
        pending_endorsement: false,
    }
}

fn policy_with(coverages: &[(CoverageType, PolicyCoverage)]) -> PolicySnapshot {
    PolicySnapshot {
        id: PolicyId::new_v7(),
        policy_number: "AP-3120".to_string(),
        period: DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
        .unwrap(),
        status: PolicyStatus::Active,
        coverages: coverages.iter().cloned().collect::<BTreeMap<_, _>>(),
        named_drivers: None,
        business_use_endorsement: false,
        rideshare_endorsement: false,
        dui_exclusion: false,
    }
}

fn claim(loss_type: LossType, policy: PolicySnapshot) -> ClaimSnapshot {
    ClaimSnapshot {
        id: ClaimId::new_v7(),
        claim_number: "CLM-9901".to_string(),
        policy,
        jurisdiction: "CA".to_string(),
        status: ClaimStatus::Intake,
        loss_date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        loss_type,
        loss_location: "Elm St and 5th Ave".to_string(),
        loss_description: "struck another vehicle at an intersection".to_string(),
        damage_description: "front-end damage".to_string(),
        estimated_amount: Money::new(dec!(9000), Currency::USD),
        report_date: Utc.with_ymd_and_hms(2025, 5, 11, 9, 0, 0).unwrap(),
        as_of: Utc.with_ymd_and_hms(2025, 5, 12, 12, 0, 0).unwrap(),
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
// Applicability Tests
// ============================================================================

mod applicability_tests {
    use super::*;

    #[test]
    fn test_active_coverage_applies() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(result.coverage_applies());
        let verdict = &result.verdicts[0];
        assert_eq!(verdict.coverage_type, CoverageType::Collision);
        assert!(verdict.applies);
        assert_eq!(verdict.deductible.unwrap().amount(), dec!(500));
    }

    #[test]
    fn test_coverage_absent_from_policy_never_applies() {
        let policy = policy_with(&[]);
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(!result.coverage_applies());
        let verdict = &result.verdicts[0];
        assert!(!verdict.applies);
        assert_eq!(verdict.reason, "not on policy");
    }

    #[test]
    fn test_one_verdict_per_candidate_coverage() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let result = analyze_coverage(&claim(LossType::HitAndRun, policy));

        // Hit-and-run candidates: Collision + UM property damage
        assert_eq!(result.verdicts.len(), candidate_coverages(LossType::HitAndRun).len());
        assert!(result.verdicts.iter().any(|v| v.coverage_type == CoverageType::Collision && v.applies));
        assert!(result
            .verdicts
            .iter()
            .any(|v| v.coverage_type == CoverageType::UninsuredMotoristPd && !v.applies));
    }

    #[test]
    fn test_suspended_coverage_does_not_apply() {
        let mut cov = coverage(50000, 500);
        cov.status = CoverageStatus::Suspended;
        let policy = policy_with(&[(CoverageType::Collision, cov)]);
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(!result.coverage_applies());
        assert_eq!(result.verdicts[0].reason, "coverage not active");
    }

    #[test]
    fn test_pending_endorsement_blocks_coverage() {
        let mut cov = coverage(50000, 500);
        cov.pending_endorsement = true;
        let policy = policy_with(&[(CoverageType::Collision, cov)]);
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(!result.coverage_applies());
        assert_eq!(result.verdicts[0].reason, "endorsement pending on coverage");
    }

    #[test]
    fn test_policy_not_in_force_degrades_with_warning() {
        let mut policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        policy.status = PolicyStatus::Lapsed;
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(!result.coverage_applies());
        assert_eq!(result.verdicts[0].reason, "policy not in force at loss date");
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_loss_outside_policy_period_degrades() {
        let mut policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        policy.period = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap();
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert!(!result.coverage_applies());
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_named_driver_restriction_blocks_unlisted_driver() {
        let mut policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        policy.named_drivers = Some(["Jordan Avery".to_string()].into_iter().collect());

        let mut c = claim(LossType::Collision, policy);
        c.driver = Some(DriverAtLoss {
            name: "Casey Unlisted".to_string(),
            licensed: true,
            listed_excluded: false,
            dui_involved: false,
        });

        let result = analyze_coverage(&c);
        assert!(!result.coverage_applies());
        assert_eq!(result.verdicts[0].reason, "driver not named on policy");
    }

    #[test]
    fn test_driverless_loss_skips_named_driver_check() {
        let mut policy = policy_with(&[(CoverageType::Comprehensive, coverage(30000, 250))]);
        policy.named_drivers = Some(["Jordan Avery".to_string()].into_iter().collect());

        // Theft has no driver at loss
        let result = analyze_coverage(&claim(LossType::Theft, policy));
        assert!(result.coverage_applies());
    }

    #[test]
    fn test_vehicle_scoped_coverage_requires_matching_vehicle() {
        let scheduled = VehicleId::new_v7();
        let mut cov = coverage(50000, 500);
        cov.vehicle = Some(scheduled);
        let policy = policy_with(&[(CoverageType::Collision, cov)]);

        let mut c = claim(LossType::Collision, policy);
        c.vehicle = Some(VehicleSnapshot {
            id: VehicleId::new_v7(),
            vin: "2T1BURHE5JC014906".to_string(),
            model_year: 2020,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            title_brand: TitleBrand::Clean,
            actual_cash_value: None,
        });

        let result = analyze_coverage(&c);
        assert!(!result.coverage_applies());
        assert_eq!(result.verdicts[0].reason, "loss vehicle not scheduled on this coverage");
    }
}

// ============================================================================
// Exclusion Tests
// ============================================================================

mod exclusion_tests {
    use super::*;

    #[test]
    fn test_all_exclusions_evaluated_without_short_circuit() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.loss_description = "staged collision during an illegal racing event".to_string();

        let result = analyze_coverage(&c);
        assert_eq!(result.exclusions.len(), ExclusionCode::ALL.len());

        // Both exclusions recorded simultaneously
        let applied = result.applied_exclusions();
        assert!(applied.iter().any(|e| e.code == ExclusionCode::IntentionalActs));
        assert!(applied.iter().any(|e| e.code == ExclusionCode::Racing));
    }

    #[test]
    fn test_commercial_use_excluded_without_endorsement() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.usage_at_loss = VehicleUsage::Commercial;

        let result = analyze_coverage(&c);
        assert!(result
            .applied_exclusions()
            .iter()
            .any(|e| e.code == ExclusionCode::CommercialUse));
    }

    #[test]
    fn test_business_use_endorsement_lifts_commercial_exclusion() {
        let mut policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        policy.business_use_endorsement = true;
        let mut c = claim(LossType::Collision, policy);
        c.usage_at_loss = VehicleUsage::Commercial;

        let result = analyze_coverage(&c);
        assert!(!result
            .applied_exclusions()
            .iter()
            .any(|e| e.code == ExclusionCode::CommercialUse));
    }

    #[test]
    fn test_dui_exclusion_requires_policy_opt_in() {
        let driver = DriverAtLoss {
            name: "Riley Marsh".to_string(),
            licensed: true,
            listed_excluded: false,
            dui_involved: true,
        };

        // Without opt-in the DUI exclusion never applies
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.driver = Some(driver.clone());
        let result = analyze_coverage(&c);
        assert!(!result.applied_exclusions().iter().any(|e| e.code == ExclusionCode::Dui));

        // With opt-in it applies
        let mut policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        policy.dui_exclusion = true;
        let mut c = claim(LossType::Collision, policy);
        c.driver = Some(driver);
        let result = analyze_coverage(&c);
        assert!(result.applied_exclusions().iter().any(|e| e.code == ExclusionCode::Dui));
    }

    #[test]
    fn test_unlicensed_driver_exclusion() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.driver = Some(DriverAtLoss {
            name: "Riley Marsh".to_string(),
            licensed: false,
            listed_excluded: false,
            dui_involved: false,
        });

        let result = analyze_coverage(&c);
        assert!(result
            .applied_exclusions()
            .iter()
            .any(|e| e.code == ExclusionCode::ExcludedDriver));
    }
}

// ============================================================================
// Waiver and Recommendation Tests
// ============================================================================

mod waiver_tests {
    use super::*;

    #[test]
    fn test_hit_and_run_with_police_report_waives_deductible() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::HitAndRun, policy);
        c.documents.push(DocumentSnapshot::new(
            DocumentKind::PoliceReport,
            "report.pdf",
            c.report_date,
        ));

        let result = analyze_coverage(&c);
        assert!(result
            .waivers
            .iter()
            .any(|w| w.rule == WaiverRule::HitAndRunPoliceReport
                && w.coverage_type == CoverageType::Collision));
    }

    #[test]
    fn test_hit_and_run_without_police_report_keeps_deductible() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let result = analyze_coverage(&claim(LossType::HitAndRun, policy));
        assert!(result.waivers.is_empty());
    }

    #[test]
    fn test_glass_repair_only_waiver() {
        let policy = policy_with(&[(CoverageType::Glass, coverage(1000, 100))]);
        let mut c = claim(LossType::GlassOnly, policy);
        c.glass_repair_only = true;

        let result = analyze_coverage(&c);
        assert!(result.waivers.iter().any(|w| w.rule == WaiverRule::GlassRepairOnly));
    }

    #[test]
    fn test_subrogation_recovery_waiver() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.subrogation_recovered = true;

        let result = analyze_coverage(&c);
        assert!(result.waivers.iter().any(|w| w.rule == WaiverRule::SubrogationRecovery));
    }
}

mod recommendation_tests {
    use super::*;

    #[test]
    fn test_no_applicable_coverage_recommends_denial() {
        let policy = policy_with(&[]);
        let result = analyze_coverage(&claim(LossType::Collision, policy));

        assert_eq!(result.recommendations, vec![CoverageRecommendation::DenyNoCoverage]);
    }

    #[test]
    fn test_applied_exclusion_recommends_coverage_counsel() {
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let mut c = claim(LossType::Collision, policy);
        c.loss_description = "deliberate damage to the vehicle".to_string();

        let result = analyze_coverage(&c);
        assert!(result
            .recommendations
            .contains(&CoverageRecommendation::EscalateToCoverageCounsel));
        assert!(result.has_dispute());
    }

    #[test]
    fn test_partial_coverage_recommendation_on_gaps() {
        // Collision applies, UM property damage missing
        let policy = policy_with(&[(CoverageType::Collision, coverage(50000, 500))]);
        let result = analyze_coverage(&claim(LossType::HitAndRun, policy));

        assert!(result.coverage_applies());
        assert!(!result.gaps.is_empty());
        assert!(result
            .recommendations
            .contains(&CoverageRecommendation::PartialCoverageOnly));
    }

    #[test]
    fn test_analyzer_always_returns_a_result() {
        // Empty policy, lapsed, no vehicle: still a full verdict set
        let mut policy = policy_with(&[]);
        policy.status = PolicyStatus::Cancelled;
        let result = analyze_coverage(&claim(LossType::GlassOnly, policy));

        assert_eq!(result.verdicts.len(), candidate_coverages(LossType::GlassOnly).len());
        assert!(!result.warnings.is_empty());
    }
}
