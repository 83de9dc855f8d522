//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixture instants are fixed so
//! that day-count arithmetic in tests is predictable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use core_kernel::{Currency, Money};
use domain_claim::JurisdictionTable;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A routine repair estimate
    pub fn usd_small_claim() -> Money {
        Money::new(dec!(4200.00), Currency::USD)
    }

    /// An estimate just under the high-value threshold
    pub fn usd_under_high_value() -> Money {
        Money::new(dec!(24000.00), Currency::USD)
    }

    /// An estimate that lands in the supervisor referral tier
    pub fn usd_supervisor_tier() -> Money {
        Money::new(dec!(60000.00), Currency::USD)
    }

    /// An estimate that lands in the manager referral tier
    pub fn usd_manager_tier() -> Money {
        Money::new(dec!(150000.00), Currency::USD)
    }

    /// A standard deductible
    pub fn usd_deductible() -> Money {
        Money::new(dec!(500.00), Currency::USD)
    }

    /// A standard per-occurrence limit
    pub fn usd_limit() -> Money {
        Money::new(dec!(50000.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy effective date (Jan 1, 2025)
    pub fn policy_effective() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Standard policy expiration date (Dec 31, 2025)
    pub fn policy_expiration() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Standard loss date, well into the policy term (May 10, 2025)
    pub fn loss_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
    }

    /// A loss date five days after policy inception
    pub fn early_loss_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    /// Standard report instant, two days after the loss
    pub fn report_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap()
    }

    /// Standard evaluation instant
    pub fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0).unwrap()
    }
}

/// The standard jurisdiction table, shared across tests
pub static STANDARD_JURISDICTIONS: Lazy<JurisdictionTable> =
    Lazy::new(JurisdictionTable::standard);
