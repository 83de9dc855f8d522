//! Jurisdiction reference data
//!
//! Per-state statutory parameters, versioned by effective date. The table is
//! read-only during scoring; a lookup for an unknown state degrades to a
//! conservative default rule with a warning rather than failing the run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Rate, Timezone};

/// Statutory parameters for one state, at one rule version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionRule {
    /// Two-letter state code
    pub state: String,
    /// Rule version, monotonically increasing per state
    pub version: u32,
    /// Date this version takes effect
    pub effective_date: NaiveDate,
    /// Jurisdiction timezone
    pub timezone: Timezone,
    /// Repair-cost share of ACV above which the vehicle is a total loss
    pub total_loss_threshold: Rate,
    /// Days allowed to acknowledge a reported claim
    pub acknowledgment_days: i64,
    /// Days allowed to complete the investigation
    pub investigation_days: i64,
    /// Days allowed to issue payment after approval
    pub payment_days: i64,
    /// Whether this jurisdiction counts business days rather than calendar
    /// days. False for every shipped rule; deadline arithmetic is calendar-day
    /// until a jurisdiction explicitly defines otherwise.
    pub business_days: bool,
}

impl JurisdictionRule {
    /// Conservative fallback used when no rule is on file for a state
    pub fn conservative_default() -> Self {
        Self {
            state: "XX".to_string(),
            version: 0,
            effective_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            timezone: Timezone::default(),
            total_loss_threshold: Rate::from_percentage(dec!(70)),
            acknowledgment_days: 15,
            investigation_days: 30,
            payment_days: 30,
            business_days: false,
        }
    }
}

/// Outcome of a jurisdiction lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub rule: JurisdictionRule,
    /// True when the conservative default was substituted for missing data
    pub defaulted: bool,
}

/// Versioned rule table keyed by state
#[derive(Debug, Clone, Default)]
pub struct JurisdictionTable {
    rules: BTreeMap<String, Vec<JurisdictionRule>>,
}

impl JurisdictionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule version, keeping versions ordered by effective date
    pub fn insert(&mut self, rule: JurisdictionRule) {
        let versions = self.rules.entry(rule.state.clone()).or_default();
        versions.push(rule);
        versions.sort_by_key(|r| (r.effective_date, r.version));
    }

    /// Resolves the rule in force for a state on the given date
    ///
    /// Picks the latest version effective on or before `as_of_date`. Unknown
    /// states, or states whose every version is effective only in the future,
    /// resolve to the conservative default.
    pub fn resolve(&self, state: &str, as_of_date: NaiveDate) -> ResolvedRule {
        let state = state.to_uppercase();
        let found = self.rules.get(&state).and_then(|versions| {
            versions
                .iter()
                .rev()
                .find(|r| r.effective_date <= as_of_date)
        });

        match found {
            Some(rule) => ResolvedRule {
                rule: rule.clone(),
                defaulted: false,
            },
            None => ResolvedRule {
                rule: JurisdictionRule::conservative_default(),
                defaulted: true,
            },
        }
    }

    /// Number of states with at least one rule version
    pub fn state_count(&self) -> usize {
        self.rules.len()
    }

    /// Table preloaded with the supported states
    pub fn standard() -> Self {
        let mut table = Self::new();
        let effective = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

        let entries = [
            ("CA", chrono_tz::America::Los_Angeles, dec!(75), 15, 40, 30),
            ("TX", chrono_tz::America::Chicago, dec!(100), 15, 45, 5),
            ("NY", chrono_tz::America::New_York, dec!(75), 15, 30, 30),
            ("FL", chrono_tz::America::New_York, dec!(80), 14, 90, 20),
            ("GA", chrono_tz::America::New_York, dec!(75), 15, 30, 10),
            ("WA", chrono_tz::America::Los_Angeles, dec!(75), 10, 30, 30),
        ];

        for (state, tz, threshold, ack, inv, pay) in entries {
            table.insert(JurisdictionRule {
                state: state.to_string(),
                version: 1,
                effective_date: effective,
                timezone: Timezone::new(tz),
                total_loss_threshold: Rate::from_percentage(threshold),
                acknowledgment_days: ack,
                investigation_days: inv,
                payment_days: pay,
                business_days: false,
            });
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_known_state() {
        let table = JurisdictionTable::standard();
        let resolved = table.resolve("CA", date(2025, 6, 1));

        assert!(!resolved.defaulted);
        assert_eq!(resolved.rule.state, "CA");
        assert_eq!(resolved.rule.acknowledgment_days, 15);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = JurisdictionTable::standard();
        let resolved = table.resolve("ca", date(2025, 6, 1));
        assert!(!resolved.defaulted);
    }

    #[test]
    fn test_unknown_state_degrades_to_default() {
        let table = JurisdictionTable::standard();
        let resolved = table.resolve("ZZ", date(2025, 6, 1));

        assert!(resolved.defaulted);
        assert_eq!(resolved.rule.acknowledgment_days, 15);
        assert_eq!(resolved.rule.investigation_days, 30);
    }

    #[test]
    fn test_versioning_picks_rule_in_force() {
        let mut table = JurisdictionTable::new();
        let mut v1 = JurisdictionRule::conservative_default();
        v1.state = "CA".to_string();
        v1.version = 1;
        v1.effective_date = date(2023, 1, 1);
        v1.acknowledgment_days = 15;

        let mut v2 = v1.clone();
        v2.version = 2;
        v2.effective_date = date(2025, 1, 1);
        v2.acknowledgment_days = 10;

        table.insert(v2.clone());
        table.insert(v1);

        assert_eq!(table.resolve("CA", date(2024, 6, 1)).rule.acknowledgment_days, 15);
        assert_eq!(table.resolve("CA", date(2025, 6, 1)).rule.acknowledgment_days, 10);
    }

    #[test]
    fn test_future_only_versions_degrade_to_default() {
        let mut table = JurisdictionTable::new();
        let mut rule = JurisdictionRule::conservative_default();
        rule.state = "NV".to_string();
        rule.effective_date = date(2030, 1, 1);
        table.insert(rule);

        assert!(table.resolve("NV", date(2025, 6, 1)).defaulted);
    }
}
