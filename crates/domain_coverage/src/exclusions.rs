//! Policy exclusion evaluation
//!
//! The exclusion list is fixed and ordered. Every exclusion is evaluated
//! independently and recorded whether or not an earlier one already applied,
//! so multiple simultaneous exclusions show up together in the result.

use serde::{Deserialize, Serialize};

use domain_claim::{ClaimSnapshot, VehicleUsage};

use crate::result::ExclusionFinding;

/// Fixed exclusion codes, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionCode {
    IntentionalActs,
    CommercialUse,
    Racing,
    Dui,
    ExcludedDriver,
    MechanicalWear,
    WarTerrorism,
}

impl ExclusionCode {
    /// All exclusions in evaluation order
    pub const ALL: [ExclusionCode; 7] = [
        ExclusionCode::IntentionalActs,
        ExclusionCode::CommercialUse,
        ExclusionCode::Racing,
        ExclusionCode::Dui,
        ExclusionCode::ExcludedDriver,
        ExclusionCode::MechanicalWear,
        ExclusionCode::WarTerrorism,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExclusionCode::IntentionalActs => "EX-INT",
            ExclusionCode::CommercialUse => "EX-COM",
            ExclusionCode::Racing => "EX-RAC",
            ExclusionCode::Dui => "EX-DUI",
            ExclusionCode::ExcludedDriver => "EX-DRV",
            ExclusionCode::MechanicalWear => "EX-MEC",
            ExclusionCode::WarTerrorism => "EX-WAR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExclusionCode::IntentionalActs => "Intentional acts by an insured",
            ExclusionCode::CommercialUse => "Business or commercial use without endorsement",
            ExclusionCode::Racing => "Racing or speed contest",
            ExclusionCode::Dui => "Driving under the influence (policy opt-in)",
            ExclusionCode::ExcludedDriver => "Unlicensed or excluded driver",
            ExclusionCode::MechanicalWear => "Mechanical breakdown or wear and tear",
            ExclusionCode::WarTerrorism => "War or terrorism",
        }
    }
}

fn description_matches(description: &str, phrases: &[&str]) -> bool {
    let haystack = description.to_lowercase();
    phrases.iter().any(|p| haystack.contains(p))
}

fn applies(code: ExclusionCode, claim: &ClaimSnapshot) -> bool {
    match code {
        ExclusionCode::IntentionalActs => description_matches(
            &claim.loss_description,
            &["intentional", "deliberate", "on purpose", "staged"],
        ),
        ExclusionCode::CommercialUse => match claim.usage_at_loss {
            VehicleUsage::Commercial => !claim.policy.business_use_endorsement,
            VehicleUsage::Rideshare => !claim.policy.rideshare_endorsement,
            _ => false,
        },
        ExclusionCode::Racing => {
            claim.usage_at_loss == VehicleUsage::Racing
                || description_matches(
                    &claim.loss_description,
                    &["racing", "speed contest", "track event"],
                )
        }
        ExclusionCode::Dui => {
            claim.policy.dui_exclusion
                && claim.driver.as_ref().map(|d| d.dui_involved).unwrap_or(false)
        }
        ExclusionCode::ExcludedDriver => claim
            .driver
            .as_ref()
            .map(|d| !d.licensed || d.listed_excluded)
            .unwrap_or(false),
        ExclusionCode::MechanicalWear => description_matches(
            &claim.loss_description,
            &["mechanical breakdown", "wear and tear", "corrosion", "rust damage"],
        ),
        ExclusionCode::WarTerrorism => description_matches(
            &claim.loss_description,
            &["act of war", "terrorism", "insurrection", "civil unrest"],
        ),
    }
}

/// Evaluates the full exclusion list against a claim
///
/// Returns one finding per exclusion, in order, with no short-circuiting.
pub fn evaluate_exclusions(claim: &ClaimSnapshot) -> Vec<ExclusionFinding> {
    ExclusionCode::ALL
        .iter()
        .map(|&code| ExclusionFinding {
            code,
            description: code.description().to_string(),
            applies: applies(code, claim),
        })
        .collect()
}
