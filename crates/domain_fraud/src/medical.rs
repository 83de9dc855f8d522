//! Medical billing screener
//!
//! Runs only when a participant reported an injury. Four independently capped
//! sub-scores are summed then clamped to 100: injury/damage severity mismatch,
//! provider risk, per-bill billing anomalies, and treatment-duration
//! heuristics. Given identical bill data the same anomalies are flagged every
//! run: no randomness, no external calls.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use core_kernel::MedicalBillId;
use domain_claim::{ClaimSnapshot, DocumentationLevel, MedicalBillSnapshot, ProcedureCategory};

use crate::config::FraudConfig;
use crate::score::{FraudIndicator, IndicatorSource};

/// Kinds of billing anomalies the screener detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    SeverityMismatch,
    WatchlistProvider,
    DoctorShopping,
    OutOfStateProvider,
    Upcoding,
    Unbundling,
    DuplicateBilling,
    ExtendedTreatment,
    ExcessiveTherapySessions,
}

/// One detected anomaly with the bills that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAnomaly {
    pub kind: AnomalyKind,
    pub description: String,
    pub bill_ids: Vec<MedicalBillId>,
}

/// Output of the medical billing screener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalScreenOutput {
    /// Clamped to 0..=100
    pub score: u32,
    pub anomalies: Vec<BillingAnomaly>,
    pub indicators: Vec<FraudIndicator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
}

fn text_matches(text: &str, keywords: &[String]) -> bool {
    let haystack = text.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

fn classify_injury(text: &str, config: &FraudConfig) -> InjurySeverity {
    if text_matches(text, &config.severe_injury_keywords) {
        InjurySeverity::Severe
    } else if text_matches(text, &config.moderate_injury_keywords) {
        InjurySeverity::Moderate
    } else {
        InjurySeverity::Minor
    }
}

struct Accumulator {
    anomalies: Vec<BillingAnomaly>,
    indicators: Vec<FraudIndicator>,
}

impl Accumulator {
    fn push(&mut self, kind: AnomalyKind, description: String, bill_ids: Vec<MedicalBillId>, weight: u32) {
        self.indicators.push(FraudIndicator {
            source: IndicatorSource::MedicalBilling,
            description: description.clone(),
            weight,
        });
        self.anomalies.push(BillingAnomaly {
            kind,
            description,
            bill_ids,
        });
    }
}

fn severity_mismatch_check(claim: &ClaimSnapshot, config: &FraudConfig, acc: &mut Accumulator) -> u32 {
    let injury_text: String = claim
        .participants
        .iter()
        .filter_map(|p| p.injury_description.as_deref())
        .collect::<Vec<_>>()
        .join("; ");

    let damage_is_minor = text_matches(&claim.damage_description, &config.minor_damage_keywords);
    if !damage_is_minor {
        return 0;
    }

    match classify_injury(&injury_text, config) {
        InjurySeverity::Severe => {
            acc.push(
                AnomalyKind::SeverityMismatch,
                "Severe injury reported against minor vehicle damage".to_string(),
                vec![],
                config.severe_minor_mismatch_weight,
            );
            config.severe_minor_mismatch_weight
        }
        InjurySeverity::Moderate => {
            acc.push(
                AnomalyKind::SeverityMismatch,
                "Moderate injury reported against minor vehicle damage".to_string(),
                vec![],
                config.moderate_minor_mismatch_weight,
            );
            config.moderate_minor_mismatch_weight
        }
        InjurySeverity::Minor => 0,
    }
}

fn provider_risk_check(claim: &ClaimSnapshot, config: &FraudConfig, acc: &mut Accumulator) -> u32 {
    let mut score = 0;

    let providers: BTreeSet<String> = claim
        .medical_bills
        .iter()
        .map(|b| b.provider_name.trim().to_lowercase())
        .collect();

    for provider in &providers {
        if config
            .provider_watchlist
            .iter()
            .any(|w| provider.contains(w.as_str()))
        {
            let bill_ids = bills_for_provider(claim, provider);
            acc.push(
                AnomalyKind::WatchlistProvider,
                format!("Provider '{}' matches the watchlist", provider),
                bill_ids,
                config.watchlist_provider_weight,
            );
            score += config.watchlist_provider_weight;
        }
    }

    let distinct = providers.len();
    if distinct > 5 {
        acc.push(
            AnomalyKind::DoctorShopping,
            format!("Treatment spread across {} distinct providers", distinct),
            vec![],
            20,
        );
        score += 20;
    } else if distinct > 3 {
        acc.push(
            AnomalyKind::DoctorShopping,
            format!("Treatment spread across {} distinct providers", distinct),
            vec![],
            10,
        );
        score += 10;
    }

    let out_of_state: Vec<MedicalBillId> = claim
        .medical_bills
        .iter()
        .filter(|b| !b.provider_state.eq_ignore_ascii_case(&claim.jurisdiction))
        .map(|b| b.id)
        .collect();
    if !out_of_state.is_empty() {
        acc.push(
            AnomalyKind::OutOfStateProvider,
            "Billing from a provider outside the loss jurisdiction".to_string(),
            out_of_state,
            10,
        );
        score += 10;
    }

    score.min(config.provider_risk_cap)
}

fn bills_for_provider(claim: &ClaimSnapshot, provider_lower: &str) -> Vec<MedicalBillId> {
    claim
        .medical_bills
        .iter()
        .filter(|b| b.provider_name.trim().to_lowercase() == provider_lower)
        .map(|b| b.id)
        .collect()
}

fn upcoding_suspected(bill: &MedicalBillSnapshot, config: &FraudConfig) -> bool {
    let Some(threshold) = config.upcoding_codes.get(&bill.procedure_code) else {
        return false;
    };
    bill.documentation == DocumentationLevel::Minimal
        || text_matches(&bill.description, &config.low_complexity_keywords)
        || bill.amount.amount() > *threshold
}

fn billing_anomaly_check(claim: &ClaimSnapshot, config: &FraudConfig, acc: &mut Accumulator) -> u32 {
    let mut score = 0;

    // Upcoding: high-level codes contradicted by documentation, description,
    // or billed amount
    for bill in &claim.medical_bills {
        if upcoding_suspected(bill, config) {
            acc.push(
                AnomalyKind::Upcoding,
                format!(
                    "Procedure code {} billed at {} with documentation inconsistent with code level",
                    bill.procedure_code, bill.amount
                ),
                vec![bill.id],
                config.upcoding_weight,
            );
            score += config.upcoding_weight;
        }
    }

    // Unbundling: same-date code pairs matching bundling patterns, or broad
    // same-date code spreads across service categories
    let mut by_date: BTreeMap<chrono::NaiveDate, Vec<&MedicalBillSnapshot>> = BTreeMap::new();
    for bill in &claim.medical_bills {
        by_date.entry(bill.service_date).or_default().push(bill);
    }

    for (date, bills) in &by_date {
        let codes: BTreeSet<&str> = bills.iter().map(|b| b.procedure_code.as_str()).collect();

        for (a, b) in &config.bundling_patterns {
            if codes.contains(a.as_str()) && codes.contains(b.as_str()) {
                let ids = bills
                    .iter()
                    .filter(|bill| bill.procedure_code == *a || bill.procedure_code == *b)
                    .map(|bill| bill.id)
                    .collect();
                acc.push(
                    AnomalyKind::Unbundling,
                    format!("Codes {} and {} billed separately on {}", a, b, date),
                    ids,
                    config.unbundling_weight,
                );
                score += config.unbundling_weight;
            }
        }

        let categories: BTreeSet<ProcedureCategory> = bills
            .iter()
            .map(|b| b.category)
            .filter(|c| {
                matches!(
                    c,
                    ProcedureCategory::Evaluation
                        | ProcedureCategory::Laboratory
                        | ProcedureCategory::Procedure
                )
            })
            .collect();
        if codes.len() > 3 && categories.len() >= 3 {
            acc.push(
                AnomalyKind::Unbundling,
                format!(
                    "{} distinct codes spanning evaluation, laboratory, and procedure categories on {}",
                    codes.len(),
                    date
                ),
                bills.iter().map(|b| b.id).collect(),
                config.unbundling_weight,
            );
            score += config.unbundling_weight;
        }
    }

    // Exact duplicates: same date, amount, and code. Every member of a
    // duplicate group is flagged, so detection is symmetric.
    let mut by_key: BTreeMap<(chrono::NaiveDate, String, String), Vec<MedicalBillId>> =
        BTreeMap::new();
    for bill in &claim.medical_bills {
        by_key.entry(bill.duplicate_key()).or_default().push(bill.id);
    }
    for ((date, amount, code), ids) in by_key {
        if ids.len() >= 2 {
            acc.push(
                AnomalyKind::DuplicateBilling,
                format!(
                    "{} identical bills for code {} ({}) on {}",
                    ids.len(),
                    code,
                    amount,
                    date
                ),
                ids,
                config.duplicate_weight,
            );
            score += config.duplicate_weight;
        }
    }

    score.min(config.billing_anomaly_cap)
}

fn treatment_duration_check(claim: &ClaimSnapshot, config: &FraudConfig, acc: &mut Accumulator) -> u32 {
    let mut score = 0;

    let dates: Vec<chrono::NaiveDate> = claim.medical_bills.iter().map(|b| b.service_date).collect();
    if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
        let span = (*last - *first).num_days();
        if span > config.extended_treatment_days {
            acc.push(
                AnomalyKind::ExtendedTreatment,
                format!("Treatment span of {} days", span),
                vec![],
                config.extended_treatment_weight,
            );
            score += config.extended_treatment_weight;
        }
    }

    let therapy_sessions = claim
        .medical_bills
        .iter()
        .filter(|b| b.category == ProcedureCategory::Therapy)
        .count();
    if therapy_sessions > config.therapy_session_limit {
        acc.push(
            AnomalyKind::ExcessiveTherapySessions,
            format!("{} physical therapy sessions billed", therapy_sessions),
            vec![],
            config.therapy_session_weight,
        );
        score += config.therapy_session_weight;
    }

    score
}

/// Screens injury-related billing for fraud signals
///
/// Returns None when no participant reported an injury; the medical signal
/// then contributes nothing to the composite.
pub fn screen_medical_billing(claim: &ClaimSnapshot, config: &FraudConfig) -> Option<MedicalScreenOutput> {
    if !claim.has_injured_participant() {
        return None;
    }

    let mut acc = Accumulator {
        anomalies: Vec::new(),
        indicators: Vec::new(),
    };

    let mut score = 0;
    score += severity_mismatch_check(claim, config, &mut acc);
    score += provider_risk_check(claim, config, &mut acc);
    score += billing_anomaly_check(claim, config, &mut acc);
    score += treatment_duration_check(claim, config, &mut acc);

    Some(MedicalScreenOutput {
        score: score.min(100),
        anomalies: acc.anomalies,
        indicators: acc.indicators,
    })
}
