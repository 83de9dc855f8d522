//! Vehicle snapshot

use serde::{Deserialize, Serialize};

use core_kernel::{Money, VehicleId};

/// Title brand recorded for the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleBrand {
    Clean,
    Salvage,
    Rebuilt,
    FloodDamage,
}

impl TitleBrand {
    /// Salvage and rebuilt titles carry elevated fraud weight
    pub fn is_branded(&self) -> bool {
        !matches!(self, TitleBrand::Clean)
    }
}

/// Read-only vehicle view for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    /// Unique identifier
    pub id: VehicleId,
    /// Vehicle identification number
    pub vin: String,
    /// Model year
    pub model_year: i32,
    /// Make
    pub make: String,
    /// Model
    pub model: String,
    /// Title brand
    pub title_brand: TitleBrand,
    /// Actual cash value, when a valuation is on file
    pub actual_cash_value: Option<Money>,
}

impl VehicleSnapshot {
    /// Vehicle age in whole years at the given loss year
    pub fn age_at(&self, loss_year: i32) -> i32 {
        (loss_year - self.model_year).max(0)
    }
}
