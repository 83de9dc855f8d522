//! Coverage applicability analysis

use domain_claim::{
    ClaimSnapshot, CoverageStatus, CoverageType, DocumentKind, LossType, PolicyStatus,
};

use crate::exclusions::evaluate_exclusions;
use crate::result::{
    CoverageGap, CoverageRecommendation, CoverageResult, CoverageVerdict, DeductibleWaiver,
    WaiverRule,
};

/// Coverage types that could respond to a loss type
///
/// Fixed lookup table; order determines verdict order in the result.
pub fn candidate_coverages(loss_type: LossType) -> &'static [CoverageType] {
    match loss_type {
        LossType::Collision => &[CoverageType::Collision],
        LossType::Theft => &[CoverageType::Comprehensive],
        LossType::Vandalism => &[CoverageType::Comprehensive],
        LossType::Weather => &[CoverageType::Comprehensive],
        LossType::Flood => &[CoverageType::Comprehensive],
        LossType::Fire => &[CoverageType::Comprehensive],
        LossType::AnimalCollision => &[CoverageType::Comprehensive],
        LossType::GlassOnly => &[CoverageType::Comprehensive, CoverageType::Glass],
        LossType::HitAndRun => &[CoverageType::Collision, CoverageType::UninsuredMotoristPd],
        LossType::Liability => &[CoverageType::Liability],
    }
}

/// Analyzes which coverages respond to the claim
///
/// Always returns a result. Degraded inputs (policy not in force, coverage
/// missing, unidentified vehicle) produce not-applicable verdicts and
/// warnings rather than errors.
pub fn analyze_coverage(claim: &ClaimSnapshot) -> CoverageResult {
    let mut verdicts = Vec::new();
    let mut warnings = Vec::new();

    let policy = &claim.policy;
    let candidates = candidate_coverages(claim.loss_type);

    if policy.coverages.is_empty() {
        warnings.push("Policy has no coverages on file".to_string());
        tracing::warn!(
            claim_id = %claim.id,
            policy_number = %policy.policy_number,
            "policy has no coverages on file; degrading to not-applicable verdicts"
        );
    }

    let policy_in_force =
        policy.status == PolicyStatus::Active && policy.period.contains(claim.loss_date);
    if !policy_in_force {
        warnings.push(format!(
            "Policy {} not in force on loss date {}",
            policy.policy_number, claim.loss_date
        ));
    }

    for &candidate in candidates {
        let verdict = match policy.coverage(candidate) {
            None => CoverageVerdict::not_applicable(candidate, "not on policy"),
            Some(coverage) => {
                let mut verdict = CoverageVerdict {
                    coverage_type: candidate,
                    applies: true,
                    reason: "coverage applies".to_string(),
                    limit: Some(coverage.limit),
                    deductible: Some(coverage.deductible),
                };

                if !policy_in_force {
                    verdict.applies = false;
                    verdict.reason = "policy not in force at loss date".to_string();
                } else if coverage.status != CoverageStatus::Active {
                    verdict.applies = false;
                    verdict.reason = "coverage not active".to_string();
                } else if coverage.pending_endorsement {
                    verdict.applies = false;
                    verdict.reason = "endorsement pending on coverage".to_string();
                } else if candidate.is_vehicle_scoped() {
                    if let Some(scheduled) = coverage.vehicle {
                        match &claim.vehicle {
                            Some(vehicle) if vehicle.id != scheduled => {
                                verdict.applies = false;
                                verdict.reason =
                                    "loss vehicle not scheduled on this coverage".to_string();
                            }
                            None => {
                                verdict.applies = false;
                                verdict.reason =
                                    "loss vehicle not identified on claim".to_string();
                                warnings.push(format!(
                                    "Vehicle-scoped coverage {:?} could not be matched: no vehicle on claim",
                                    candidate
                                ));
                            }
                            _ => {}
                        }
                    }
                }

                // Named-driver restriction applies only when a driver was involved
                if verdict.applies {
                    if let Some(driver) = &claim.driver {
                        if !policy.permits_driver(&driver.name) {
                            verdict.applies = false;
                            verdict.reason = "driver not named on policy".to_string();
                        }
                    }
                }

                verdict
            }
        };
        verdicts.push(verdict);
    }

    let exclusions = evaluate_exclusions(claim);
    let waivers = determine_waivers(claim, &verdicts);

    let gaps: Vec<CoverageGap> = verdicts
        .iter()
        .filter(|v| !v.applies)
        .map(|v| CoverageGap {
            coverage_type: v.coverage_type,
            reason: v.reason.clone(),
        })
        .collect();

    let mut recommendations = Vec::new();
    let any_applies = verdicts.iter().any(|v| v.applies);
    let any_exclusion = exclusions.iter().any(|e| e.applies);
    if !any_applies {
        recommendations.push(CoverageRecommendation::DenyNoCoverage);
    } else {
        if any_exclusion {
            recommendations.push(CoverageRecommendation::EscalateToCoverageCounsel);
        }
        if !gaps.is_empty() {
            recommendations.push(CoverageRecommendation::PartialCoverageOnly);
        }
    }

    CoverageResult {
        verdicts,
        exclusions,
        waivers,
        gaps,
        warnings,
        recommendations,
    }
}

/// Applies the narrow deductible-waiver rules to applicable verdicts
fn determine_waivers(claim: &ClaimSnapshot, verdicts: &[CoverageVerdict]) -> Vec<DeductibleWaiver> {
    let mut waivers = Vec::new();

    let applicable = |waivers: &mut Vec<DeductibleWaiver>, rule: WaiverRule, reason: &str| {
        for verdict in verdicts.iter().filter(|v| v.applies) {
            waivers.push(DeductibleWaiver {
                coverage_type: verdict.coverage_type,
                rule,
                reason: reason.to_string(),
            });
        }
    };

    match claim.loss_type {
        LossType::HitAndRun if claim.has_document(DocumentKind::PoliceReport) => {
            applicable(
                &mut waivers,
                WaiverRule::HitAndRunPoliceReport,
                "hit-and-run loss with police report on file",
            );
        }
        LossType::GlassOnly if claim.glass_repair_only => {
            applicable(
                &mut waivers,
                WaiverRule::GlassRepairOnly,
                "glass damage repairable without replacement",
            );
        }
        _ => {}
    }

    if claim.subrogation_recovered {
        applicable(
            &mut waivers,
            WaiverRule::SubrogationRecovery,
            "subrogation recovery completed",
        );
    }

    waivers
}
