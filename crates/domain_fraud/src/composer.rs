//! Risk composition
//!
//! Merges the pattern scorer and medical screener outputs into one composite
//! score. The combination is max(), not an average: either signal alone can
//! justify escalation, and the stronger signal must not be diluted by the
//! weaker one. Crossing the escalation threshold raises an SIU referral with
//! a requested transition to Suspended - the one place scoring drives
//! lifecycle state directly.

use serde::{Deserialize, Serialize};

use domain_claim::ClaimStatus;

use crate::config::FraudConfig;
use crate::medical::MedicalScreenOutput;
use crate::score::{RiskScore, ScorerOutput};

/// An automatic Special Investigation Unit referral
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiuReferral {
    pub reason: String,
    /// The lifecycle transition the referral requests
    pub requested_status: ClaimStatus,
}

/// Composite risk assessment for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub siu_referral: Option<SiuReferral>,
}

/// Composes pattern and medical fraud signals into one risk score
pub fn compose_risk(
    pattern: ScorerOutput,
    medical: Option<MedicalScreenOutput>,
    config: &FraudConfig,
) -> RiskAssessment {
    let mut indicators = pattern.indicators;

    let raw = match &medical {
        Some(screen) => pattern.score.max(screen.score),
        None => pattern.score,
    };
    if let Some(screen) = medical {
        indicators.extend(screen.indicators);
    }

    let score = RiskScore::from_raw(raw, indicators, &config.breakpoints);

    let siu_referral = if score.score >= config.escalation_threshold {
        tracing::info!(
            score = score.score,
            threshold = config.escalation_threshold,
            "composite risk crossed the escalation threshold; requesting SIU referral"
        );
        Some(SiuReferral {
            reason: format!(
                "Composite fraud score {} at or above escalation threshold {}",
                score.score, config.escalation_threshold
            ),
            requested_status: ClaimStatus::Suspended,
        })
    } else {
        None
    };

    RiskAssessment {
        score,
        siu_referral,
    }
}
