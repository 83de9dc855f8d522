//! Test Data Builders
//!
//! Builder patterns for constructing snapshots with sensible defaults. Tests
//! specify only the fields they care about.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, Currency, DateRange, MedicalBillId, Money, PolicyId, VehicleId};
use domain_claim::{
    ClaimSnapshot, ClaimStatus, CoverageStatus, CoverageType, DocumentKind, DocumentSnapshot,
    DocumentationLevel, DriverAtLoss, LossType, MedicalBillSnapshot, ParticipantRole,
    ParticipantSnapshot, PolicyCoverage, PolicySnapshot, PolicyStatus, ProcedureCategory,
    TitleBrand, VehicleSnapshot, VehicleUsage,
};

use crate::fixtures::TemporalFixtures;

/// Builder for [`PolicySnapshot`] test data
pub struct PolicySnapshotBuilder {
    policy: PolicySnapshot,
}

impl Default for PolicySnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicySnapshotBuilder {
    /// Creates a builder for an active policy with no coverages
    pub fn new() -> Self {
        Self {
            policy: PolicySnapshot {
                id: PolicyId::new_v7(),
                policy_number: "AP-1000".to_string(),
                period: DateRange::new(
                    TemporalFixtures::policy_effective(),
                    TemporalFixtures::policy_expiration(),
                )
                .expect("valid fixture period"),
                status: PolicyStatus::Active,
                coverages: BTreeMap::new(),
                named_drivers: None,
                business_use_endorsement: false,
                rideshare_endorsement: false,
                dui_exclusion: false,
            },
        }
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.policy.period = DateRange::new(start, end).expect("valid period");
        self
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.policy.status = status;
        self
    }

    /// Adds an active coverage with the given limit and deductible
    pub fn with_coverage(mut self, coverage_type: CoverageType, limit: Money, deductible: Money) -> Self {
        self.policy.coverages.insert(
            coverage_type,
            PolicyCoverage {
                status: CoverageStatus::Active,
                limit,
                deductible,
                vehicle: None,
                pending_endorsement: false,
            },
        );
        self
    }

    pub fn with_named_drivers(mut self, names: &[&str]) -> Self {
        self.policy.named_drivers = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_dui_exclusion(mut self) -> Self {
        self.policy.dui_exclusion = true;
        self
    }

    pub fn build(self) -> PolicySnapshot {
        self.policy
    }
}

/// Builder for [`ClaimSnapshot`] test data
pub struct ClaimSnapshotBuilder {
    claim: ClaimSnapshot,
}

impl Default for ClaimSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSnapshotBuilder {
    /// Creates a builder for a routine collision claim on an active policy
    /// with collision coverage
    pub fn new() -> Self {
        let policy = PolicySnapshotBuilder::new()
            .with_coverage(
                CoverageType::Collision,
                crate::fixtures::MoneyFixtures::usd_limit(),
                crate::fixtures::MoneyFixtures::usd_deductible(),
            )
            .build();

        let claimant_name: String = Name().fake();
        Self {
            claim: ClaimSnapshot {
                id: ClaimId::new_v7(),
                claim_number: "CLM-1000".to_string(),
                policy,
                jurisdiction: "CA".to_string(),
                status: ClaimStatus::Intake,
                loss_date: TemporalFixtures::loss_date(),
                loss_type: LossType::Collision,
                loss_location: "Mission St at 16th".to_string(),
                loss_description: "rear-ended while stopped in traffic".to_string(),
                damage_description: "rear bumper and trunk lid damage".to_string(),
                estimated_amount: crate::fixtures::MoneyFixtures::usd_small_claim(),
                report_date: TemporalFixtures::report_date(),
                as_of: TemporalFixtures::as_of(),
                usage_at_loss: VehicleUsage::Personal,
                driver: None,
                vehicle: None,
                participants: vec![ParticipantSnapshot::new(claimant_name, ParticipantRole::Claimant)],
                documents: vec![],
                medical_bills: vec![],
                glass_repair_only: false,
                subrogation_recovered: false,
                in_litigation: false,
            },
        }
    }

    pub fn with_policy(mut self, policy: PolicySnapshot) -> Self {
        self.claim.policy = policy;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.claim.status = status;
        self
    }

    pub fn with_loss_type(mut self, loss_type: LossType) -> Self {
        self.claim.loss_type = loss_type;
        self
    }

    pub fn with_loss_date(mut self, loss_date: NaiveDate) -> Self {
        self.claim.loss_date = loss_date;
        self
    }

    /// Sets the report instant to 09:00 UTC on the given date
    pub fn reported_on(mut self, date: NaiveDate) -> Self {
        self.claim.report_date = Utc.from_utc_datetime(&date.and_hms_opt(9, 0, 0).unwrap());
        self
    }

    pub fn as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.claim.as_of = as_of;
        self
    }

    pub fn with_estimated_amount(mut self, amount: Money) -> Self {
        self.claim.estimated_amount = amount;
        self
    }

    pub fn with_jurisdiction(mut self, state: &str) -> Self {
        self.claim.jurisdiction = state.to_string();
        self
    }

    pub fn with_loss_location(mut self, location: &str) -> Self {
        self.claim.loss_location = location.to_string();
        self
    }

    pub fn with_loss_description(mut self, description: &str) -> Self {
        self.claim.loss_description = description.to_string();
        self
    }

    pub fn with_damage_description(mut self, description: &str) -> Self {
        self.claim.damage_description = description.to_string();
        self
    }

    pub fn with_usage(mut self, usage: VehicleUsage) -> Self {
        self.claim.usage_at_loss = usage;
        self
    }

    pub fn with_driver(mut self, driver: DriverAtLoss) -> Self {
        self.claim.driver = Some(driver);
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleSnapshot) -> Self {
        self.claim.vehicle = Some(vehicle);
        self
    }

    /// Adds a participant with the given injury description
    pub fn with_injured_participant(mut self, injury: &str) -> Self {
        let name: String = Name().fake();
        let mut participant = ParticipantSnapshot::new(name, ParticipantRole::Passenger);
        participant.injury_description = Some(injury.to_string());
        self.claim.participants.push(participant);
        self
    }

    pub fn with_document(mut self, kind: DocumentKind) -> Self {
        self.claim.documents.push(DocumentSnapshot::new(
            kind,
            "upload.pdf",
            self.claim.report_date,
        ));
        self
    }

    pub fn with_medical_bill(mut self, bill: MedicalBillSnapshot) -> Self {
        self.claim.medical_bills.push(bill);
        self
    }

    pub fn in_litigation(mut self) -> Self {
        self.claim.in_litigation = true;
        self
    }

    pub fn build(self) -> ClaimSnapshot {
        self.claim
    }
}

/// Builder for [`VehicleSnapshot`] test data
pub struct VehicleSnapshotBuilder {
    vehicle: VehicleSnapshot,
}

impl Default for VehicleSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleSnapshotBuilder {
    pub fn new() -> Self {
        Self {
            vehicle: VehicleSnapshot {
                id: VehicleId::new_v7(),
                vin: "1HGCM82633A004352".to_string(),
                model_year: 2021,
                make: "Honda".to_string(),
                model: "Accord".to_string(),
                title_brand: TitleBrand::Clean,
                actual_cash_value: None,
            },
        }
    }

    pub fn with_model_year(mut self, year: i32) -> Self {
        self.vehicle.model_year = year;
        self
    }

    pub fn with_title_brand(mut self, brand: TitleBrand) -> Self {
        self.vehicle.title_brand = brand;
        self
    }

    pub fn with_acv(mut self, acv: Money) -> Self {
        self.vehicle.actual_cash_value = Some(acv);
        self
    }

    pub fn build(self) -> VehicleSnapshot {
        self.vehicle
    }
}

/// Builder for [`MedicalBillSnapshot`] test data
pub struct MedicalBillBuilder {
    bill: MedicalBillSnapshot,
}

impl MedicalBillBuilder {
    /// Creates a builder for a routine office-visit bill for the participant
    pub fn for_participant(participant: &ParticipantSnapshot) -> Self {
        Self {
            bill: MedicalBillSnapshot {
                id: MedicalBillId::new_v7(),
                participant_id: participant.id,
                provider_name: "Lakeside Orthopedics".to_string(),
                provider_state: "CA".to_string(),
                service_date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
                procedure_code: "99213".to_string(),
                category: ProcedureCategory::Evaluation,
                description: "office visit".to_string(),
                amount: Money::new(Decimal::new(22000, 2), Currency::USD),
                documentation: DocumentationLevel::Moderate,
            },
        }
    }

    pub fn with_provider(mut self, name: &str, state: &str) -> Self {
        self.bill.provider_name = name.to_string();
        self.bill.provider_state = state.to_string();
        self
    }

    pub fn with_service_date(mut self, date: NaiveDate) -> Self {
        self.bill.service_date = date;
        self
    }

    pub fn with_code(mut self, code: &str, category: ProcedureCategory) -> Self {
        self.bill.procedure_code = code.to_string();
        self.bill.category = category;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.bill.amount = amount;
        self
    }

    pub fn with_documentation(mut self, level: DocumentationLevel) -> Self {
        self.bill.documentation = level;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.bill.description = description.to_string();
        self
    }

    pub fn build(self) -> MedicalBillSnapshot {
        self.bill
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_claim_builder_produces_valid_snapshot() {
        let claim = ClaimSnapshotBuilder::new().build();
        assert!(claim.validate().is_ok());
        assert_eq!(claim.loss_type, LossType::Collision);
    }

    #[test]
    fn test_injured_participant_builder() {
        let claim = ClaimSnapshotBuilder::new()
            .with_injured_participant("whiplash")
            .build();
        assert!(claim.has_injured_participant());
    }

    #[test]
    fn test_medical_bill_builder_links_participant() {
        let claim = ClaimSnapshotBuilder::new()
            .with_injured_participant("neck pain")
            .build();
        let bill = MedicalBillBuilder::for_participant(&claim.participants[1]).build();
        assert_eq!(bill.participant_id, claim.participants[1].id);
    }
}
