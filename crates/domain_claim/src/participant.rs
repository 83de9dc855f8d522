//! Participant snapshot

use serde::{Deserialize, Serialize};

use core_kernel::ParticipantId;

/// Role of a participant in the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantRole {
    /// The person filing the claim
    Claimant,
    /// The named insured
    Insured,
    /// Driver of the insured vehicle at loss
    Driver,
    /// Passenger in the insured vehicle
    Passenger,
    /// Occupant or owner of another involved vehicle
    ThirdParty,
    /// Witness to the loss
    Witness,
}

/// Read-only participant view for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    /// Unique identifier
    pub id: ParticipantId,
    /// Full name
    pub name: String,
    /// Role in the claim
    pub role: ParticipantRole,
    /// Reported injury description, when injured
    pub injury_description: Option<String>,
}

impl ParticipantSnapshot {
    /// Creates an uninjured participant
    pub fn new(name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id: ParticipantId::new_v7(),
            name: name.into(),
            role,
            injury_description: None,
        }
    }

    /// Whether this participant reported a non-empty injury description
    pub fn has_injury(&self) -> bool {
        self.injury_description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_injury_by_default() {
        let p = ParticipantSnapshot::new("Dana Whitfield", ParticipantRole::Driver);
        assert!(!p.has_injury());
    }

    #[test]
    fn test_blank_injury_description_is_not_an_injury() {
        let mut p = ParticipantSnapshot::new("Dana Whitfield", ParticipantRole::Driver);
        p.injury_description = Some("   ".to_string());
        assert!(!p.has_injury());
    }

    #[test]
    fn test_injury_detected() {
        let mut p = ParticipantSnapshot::new("Dana Whitfield", ParticipantRole::Passenger);
        p.injury_description = Some("whiplash and neck pain".to_string());
        assert!(p.has_injury());
    }
}
