//! Injected fraud scoring configuration
//!
//! Keyword tables and thresholds are reference data, versioned per deployment
//! and jurisdiction rollout, not hard-coded constants. Validation runs once
//! when the configuration is loaded; scoring-time code may assume a valid
//! table and never re-checks.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at configuration load time, never at scoring time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FraudConfigError {
    #[error("Risk tier breakpoints must be strictly increasing: medium={medium}, high={high}, critical={critical}")]
    NonMonotonicBreakpoints {
        medium: u32,
        high: u32,
        critical: u32,
    },

    #[error("Breakpoint {0} exceeds the score ceiling of 100")]
    BreakpointAboveCeiling(u32),

    #[error("Escalation threshold {threshold} is below the high breakpoint {high}")]
    EscalationBelowHigh { threshold: u32, high: u32 },

    #[error("Keyword table '{0}' is empty")]
    EmptyKeywordTable(&'static str),
}

/// Score breakpoints for tier assignment (score >= threshold)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakpoints {
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl Default for TierBreakpoints {
    fn default() -> Self {
        Self {
            medium: 30,
            high: 50,
            critical: 75,
        }
    }
}

/// Versioned fraud scoring reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudConfig {
    /// Table version, for audit attribution
    pub version: u32,

    /// Tier breakpoints
    pub breakpoints: TierBreakpoints,
    /// Crossing this score triggers an automatic SIU referral
    pub escalation_threshold: u32,

    // Pattern scorer: timing
    /// Weight when the loss is within 30 days of policy inception
    pub early_inception_weight: u32,
    /// Additional weight when the loss is within 7 days of inception
    pub very_early_inception_weight: u32,
    /// Weight when the loss is reported more than 30 days late
    pub late_report_weight: u32,
    /// Cap on the timing sub-check
    pub timing_cap: u32,

    // Pattern scorer: location
    /// Suspicious loss-location keywords, +location_weight per match
    pub location_keywords: Vec<String>,
    pub location_weight: u32,
    pub location_cap: u32,

    // Pattern scorer: vehicle
    /// Weight for a salvage or rebuilt title
    pub branded_title_weight: u32,
    /// High-amount/old-vehicle combination weight
    pub high_amount_old_vehicle_weight: u32,
    /// Claim amount above this on an old vehicle is suspicious
    pub high_amount_threshold: Decimal,
    /// Vehicle age in years above which the amount heuristic applies
    pub old_vehicle_years: i32,

    // Medical screener: severity mismatch
    pub severe_injury_keywords: Vec<String>,
    pub moderate_injury_keywords: Vec<String>,
    pub minor_damage_keywords: Vec<String>,
    pub severe_minor_mismatch_weight: u32,
    pub moderate_minor_mismatch_weight: u32,

    // Medical screener: provider risk
    /// Suspicious provider-name substrings
    pub provider_watchlist: Vec<String>,
    pub watchlist_provider_weight: u32,
    pub provider_risk_cap: u32,

    // Medical screener: billing anomalies
    /// High-risk procedure codes mapped to their amount thresholds
    pub upcoding_codes: BTreeMap<String, Decimal>,
    /// Low-complexity description keywords contradicting a high-level code
    pub low_complexity_keywords: Vec<String>,
    /// Code pairs that are bundled when billed on the same date
    pub bundling_patterns: Vec<(String, String)>,
    pub upcoding_weight: u32,
    pub unbundling_weight: u32,
    pub duplicate_weight: u32,
    pub billing_anomaly_cap: u32,

    // Medical screener: treatment duration
    /// Treatment spans longer than this many days are suspicious
    pub extended_treatment_days: i64,
    pub extended_treatment_weight: u32,
    /// Therapy session counts above this are suspicious
    pub therapy_session_limit: usize,
    pub therapy_session_weight: u32,
}

impl Default for FraudConfig {
    fn default() -> Self {
        Self {
            version: 1,
            breakpoints: TierBreakpoints::default(),
            escalation_threshold: 75,

            early_inception_weight: 20,
            very_early_inception_weight: 15,
            late_report_weight: 15,
            timing_cap: 50,

            location_keywords: [
                "parking lot",
                "staged",
                "no witnesses",
                "remote area",
                "abandoned",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            location_weight: 10,
            location_cap: 30,

            branded_title_weight: 15,
            high_amount_old_vehicle_weight: 20,
            high_amount_threshold: dec!(20000),
            old_vehicle_years: 10,

            severe_injury_keywords: [
                "fracture",
                "surgery",
                "traumatic brain",
                "spinal",
                "herniated",
                "internal bleeding",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            moderate_injury_keywords: ["whiplash", "concussion", "sprain", "torn ligament"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            minor_damage_keywords: ["scratch", "dent", "scuff", "cosmetic", "minor"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            severe_minor_mismatch_weight: 30,
            moderate_minor_mismatch_weight: 15,

            provider_watchlist: [
                "rapid recovery",
                "total wellness",
                "accident care",
                "quick relief",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            watchlist_provider_weight: 15,
            provider_risk_cap: 45,

            upcoding_codes: [
                ("99285", dec!(600)),
                ("99215", dec!(400)),
                ("99205", dec!(450)),
                ("99284", dec!(450)),
            ]
            .iter()
            .map(|(c, t)| (c.to_string(), *t))
            .collect(),
            low_complexity_keywords: ["routine", "follow-up", "brief", "minor"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bundling_patterns: [
                ("97110", "97140"),
                ("80048", "80053"),
                ("99213", "99214"),
            ]
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
            upcoding_weight: 20,
            unbundling_weight: 15,
            duplicate_weight: 25,
            billing_anomaly_cap: 60,

            extended_treatment_days: 90,
            extended_treatment_weight: 15,
            therapy_session_limit: 50,
            therapy_session_weight: 10,
        }
    }
}

impl FraudConfig {
    /// Validates the configuration
    ///
    /// Fails fast at load time so scoring can assume a valid table. Tier
    /// breakpoints must be strictly increasing and the escalation threshold
    /// must sit at or above the high breakpoint.
    pub fn validate(&self) -> Result<(), FraudConfigError> {
        let TierBreakpoints {
            medium,
            high,
            critical,
        } = self.breakpoints;

        if !(medium < high && high < critical) {
            return Err(FraudConfigError::NonMonotonicBreakpoints {
                medium,
                high,
                critical,
            });
        }
        if critical > 100 {
            return Err(FraudConfigError::BreakpointAboveCeiling(critical));
        }
        if self.escalation_threshold < high {
            return Err(FraudConfigError::EscalationBelowHigh {
                threshold: self.escalation_threshold,
                high,
            });
        }
        if self.location_keywords.is_empty() {
            return Err(FraudConfigError::EmptyKeywordTable("location_keywords"));
        }
        if self.severe_injury_keywords.is_empty() {
            return Err(FraudConfigError::EmptyKeywordTable("severe_injury_keywords"));
        }
        if self.minor_damage_keywords.is_empty() {
            return Err(FraudConfigError::EmptyKeywordTable("minor_damage_keywords"));
        }
        if self.provider_watchlist.is_empty() {
            return Err(FraudConfigError::EmptyKeywordTable("provider_watchlist"));
        }
        Ok(())
    }
}
