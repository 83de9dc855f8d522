//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains domain
//! invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_claim::{LossType, ProcedureCategory};
use domain_escalation::Severity;

/// Strategy for generating valid loss types
pub fn loss_type_strategy() -> impl Strategy<Value = LossType> {
    prop_oneof![
        Just(LossType::Collision),
        Just(LossType::Theft),
        Just(LossType::Vandalism),
        Just(LossType::Weather),
        Just(LossType::Flood),
        Just(LossType::Fire),
        Just(LossType::HitAndRun),
        Just(LossType::GlassOnly),
        Just(LossType::AnimalCollision),
        Just(LossType::Liability),
    ]
}

/// Strategy for generating procedure categories
pub fn procedure_category_strategy() -> impl Strategy<Value = ProcedureCategory> {
    prop_oneof![
        Just(ProcedureCategory::Evaluation),
        Just(ProcedureCategory::Laboratory),
        Just(ProcedureCategory::Imaging),
        Just(ProcedureCategory::Procedure),
        Just(ProcedureCategory::Therapy),
        Just(ProcedureCategory::Other),
    ]
}

/// Strategy for generating trigger severities
pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

/// Strategy for generating positive USD claim amounts
pub fn claim_amount_strategy() -> impl Strategy<Value = Money> {
    (100i64..50_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}

/// Strategy for generating raw scorer sums, including values past the clamp
pub fn raw_score_strategy() -> impl Strategy<Value = u32> {
    0u32..400u32
}

/// Strategy for generating service dates within a claim year
pub fn service_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u32..365u32).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset as i64)
    })
}
