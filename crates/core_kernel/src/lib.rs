//! Core Kernel - Foundational types and utilities for the claim decision engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal types for date ranges and calendar-day deadline math
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use temporal::{DateRange, Timezone, TemporalError, days_between, calendar_deadline};
pub use identifiers::{
    ClaimId, PolicyId, VehicleId, ParticipantId, DocumentId,
    MedicalBillId, DecisionId, AuditEventId,
};
pub use error::CoreError;
