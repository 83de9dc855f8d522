//! Policy snapshot
//!
//! A read-only view of the policy as of the decision cycle. Coverages are
//! keyed by type so the coverage analyzer can look them up in O(1); the map
//! is a BTreeMap so iteration order (and therefore every derived artifact)
//! is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, Money, PolicyId, VehicleId};

/// Auto coverage types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoverageType {
    /// Collision with another vehicle or object
    Collision,
    /// Non-collision physical damage (theft, weather, fire, vandalism)
    Comprehensive,
    /// Liability for third-party bodily injury and property damage
    Liability,
    /// Uninsured motorist property damage
    UninsuredMotoristPd,
    /// Uninsured motorist bodily injury
    UninsuredMotoristBi,
    /// Medical payments for occupants
    MedicalPayments,
    /// Personal injury protection (no-fault jurisdictions)
    PersonalInjuryProtection,
    /// Glass repair/replacement
    Glass,
    /// Rental reimbursement while the vehicle is in repair
    RentalReimbursement,
    /// Towing and roadside assistance
    Towing,
}

impl CoverageType {
    /// Whether this coverage attaches to a specific vehicle
    pub fn is_vehicle_scoped(&self) -> bool {
        !matches!(self, CoverageType::Liability | CoverageType::MedicalPayments)
    }
}

/// Status of a single policy coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    Active,
    Suspended,
    Cancelled,
}

/// Status of the policy as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Lapsed,
    Cancelled,
    Expired,
}

/// A single coverage on the policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCoverage {
    /// Coverage status
    pub status: CoverageStatus,
    /// Per-occurrence limit
    pub limit: Money,
    /// Deductible
    pub deductible: Money,
    /// Vehicle this coverage attaches to, when vehicle-scoped
    pub vehicle: Option<VehicleId>,
    /// A requested endorsement on this coverage has not yet been bound
    pub pending_endorsement: bool,
}

/// Read-only policy view for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    /// Unique identifier
    pub id: PolicyId,
    /// Policy number
    pub policy_number: String,
    /// Effective period (inclusive dates)
    pub period: DateRange,
    /// Policy status
    pub status: PolicyStatus,
    /// Coverages keyed by type
    pub coverages: BTreeMap<CoverageType, PolicyCoverage>,
    /// Named-driver restriction; None means any permissive driver is covered
    pub named_drivers: Option<BTreeSet<String>>,
    /// Business-use endorsement is bound
    pub business_use_endorsement: bool,
    /// Rideshare endorsement is bound
    pub rideshare_endorsement: bool,
    /// Policy carries the optional DUI exclusion
    pub dui_exclusion: bool,
}

impl PolicySnapshot {
    /// Looks up a coverage by type
    pub fn coverage(&self, coverage_type: CoverageType) -> Option<&PolicyCoverage> {
        self.coverages.get(&coverage_type)
    }

    /// Whether the named-driver restriction permits this driver
    ///
    /// Unrestricted policies permit everyone. Matching is case-insensitive on
    /// the full name as recorded on the policy.
    pub fn permits_driver(&self, driver_name: &str) -> bool {
        match &self.named_drivers {
            None => true,
            Some(names) => {
                let needle = driver_name.trim().to_lowercase();
                names.iter().any(|n| n.trim().to_lowercase() == needle)
            }
        }
    }
}
