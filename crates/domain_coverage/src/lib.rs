//! Coverage Analysis Domain
//!
//! Determines which policy coverages respond to a claim, evaluates the fixed
//! exclusion list, applies deductible-waiver rules, and derives coverage gaps
//! and recommendations. The analyzer always returns a result: missing policy
//! data degrades to not-applicable verdicts plus a warning, never an error.

pub mod analyzer;
pub mod exclusions;
pub mod result;

pub use analyzer::{analyze_coverage, candidate_coverages};
pub use exclusions::{evaluate_exclusions, ExclusionCode};
pub use result::{
    CoverageGap, CoverageRecommendation, CoverageResult, CoverageVerdict, DeductibleWaiver,
    ExclusionFinding, WaiverRule,
};
