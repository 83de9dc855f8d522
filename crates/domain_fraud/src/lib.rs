//! Fraud Risk Scoring Domain
//!
//! Two independent scorers evaluate a claim snapshot: the pattern scorer
//! (timing, location, vehicle, repeat-claimant signals) and the medical
//! billing screener (severity mismatch, provider risk, billing anomalies,
//! treatment duration). The composer merges their outputs into one composite
//! [`RiskScore`] and raises an SIU referral when the escalation threshold is
//! crossed.
//!
//! All keyword tables and thresholds are injected through [`FraudConfig`],
//! validated once at load time. Scoring itself is pure and deterministic:
//! identical snapshots produce identical scores.

pub mod config;
pub mod score;
pub mod pattern;
pub mod medical;
pub mod composer;

pub use config::{FraudConfig, FraudConfigError, TierBreakpoints};
pub use score::{FraudIndicator, IndicatorSource, RiskScore, RiskTier, ScorerOutput};
pub use pattern::score_patterns;
pub use medical::{screen_medical_billing, AnomalyKind, BillingAnomaly, MedicalScreenOutput};
pub use composer::{compose_risk, RiskAssessment, SiuReferral};
