//! Fraud pattern scorer
//!
//! Four independent sub-checks over the claim snapshot, each additive and
//! capped: timing, location, vehicle, and the repeat-claimant hook. All four
//! run unconditionally; their scores sum before the composite clamp.

use domain_claim::ClaimSnapshot;

use crate::config::FraudConfig;
use crate::score::{FraudIndicator, IndicatorSource, ScorerOutput};

fn indicator(description: String, weight: u32) -> FraudIndicator {
    FraudIndicator {
        source: IndicatorSource::FraudPattern,
        description,
        weight,
    }
}

fn timing_check(claim: &ClaimSnapshot, config: &FraudConfig) -> (u32, Vec<FraudIndicator>) {
    let mut score = 0;
    let mut indicators = Vec::new();

    let since_inception = claim.days_since_inception();
    if (0..=30).contains(&since_inception) {
        score += config.early_inception_weight;
        indicators.push(indicator(
            format!(
                "Loss occurred {} days after policy inception (within 30-day window)",
                since_inception
            ),
            config.early_inception_weight,
        ));

        if since_inception <= 7 {
            score += config.very_early_inception_weight;
            indicators.push(indicator(
                format!(
                    "Loss occurred {} days after policy inception (within 7-day window)",
                    since_inception
                ),
                config.very_early_inception_weight,
            ));
        }
    }

    let report_delay = claim.days_to_report();
    if report_delay > 30 {
        score += config.late_report_weight;
        indicators.push(indicator(
            format!("Loss reported {} days after the date of loss", report_delay),
            config.late_report_weight,
        ));
    }

    (score.min(config.timing_cap), indicators)
}

fn location_check(claim: &ClaimSnapshot, config: &FraudConfig) -> (u32, Vec<FraudIndicator>) {
    let haystack = claim.loss_location.to_lowercase();
    let mut score = 0;
    let mut indicators = Vec::new();

    for keyword in &config.location_keywords {
        if haystack.contains(keyword.as_str()) {
            score += config.location_weight;
            indicators.push(indicator(
                format!("Loss location matches suspicious keyword '{}'", keyword),
                config.location_weight,
            ));
        }
    }

    (score.min(config.location_cap), indicators)
}

fn vehicle_check(claim: &ClaimSnapshot, config: &FraudConfig) -> (u32, Vec<FraudIndicator>) {
    let Some(vehicle) = &claim.vehicle else {
        // No vehicle on file: this signal source contributes zero
        return (0, Vec::new());
    };

    let mut score = 0;
    let mut indicators = Vec::new();

    if vehicle.title_brand.is_branded() {
        score += config.branded_title_weight;
        indicators.push(indicator(
            format!("Vehicle carries a {:?} title", vehicle.title_brand),
            config.branded_title_weight,
        ));
    }

    use chrono::Datelike;
    let age = vehicle.age_at(claim.loss_date.year());
    if claim.estimated_amount.amount() > config.high_amount_threshold
        && age > config.old_vehicle_years
    {
        score += config.high_amount_old_vehicle_weight;
        indicators.push(indicator(
            format!(
                "Estimated amount {} on a {}-year-old vehicle",
                claim.estimated_amount, age
            ),
            config.high_amount_old_vehicle_weight,
        ));
    }

    (score, indicators)
}

/// Repeat-claimant / cross-claim network check
///
/// Reserved hook: contributes zero until wired to historical claim data.
fn repeat_claimant_check(_claim: &ClaimSnapshot) -> (u32, Vec<FraudIndicator>) {
    (0, Vec::new())
}

/// Scores behavioral, timing, location, and vehicle fraud signals
pub fn score_patterns(claim: &ClaimSnapshot, config: &FraudConfig) -> ScorerOutput {
    let mut score = 0;
    let mut indicators = Vec::new();

    for (sub_score, sub_indicators) in [
        timing_check(claim, config),
        location_check(claim, config),
        vehicle_check(claim, config),
        repeat_claimant_check(claim),
    ] {
        score += sub_score;
        indicators.extend(sub_indicators);
    }

    ScorerOutput { score, indicators }
}
