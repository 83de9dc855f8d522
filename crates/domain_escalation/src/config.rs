//! Escalation threshold configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at configuration load time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscalationConfigError {
    #[error("Investigate score {investigate} must be below the auto-deny score {auto_deny}")]
    InvestigateAboveAutoDeny { investigate: u32, auto_deny: u32 },

    #[error("High-value approve limit {approve} must be below the supervisor referral limit {supervisor}")]
    ApproveLimitAboveSupervisor {
        approve: Decimal,
        supervisor: Decimal,
    },
}

/// Thresholds for the escalation decision handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationConfig {
    /// Fraud score at or above which a suspected-fraud claim is auto-denied
    pub auto_deny_score: u32,
    /// Fraud score at or above which a suspected-fraud claim is investigated
    pub investigate_score: u32,
    /// High-value claims at or below this amount may auto-approve
    pub high_value_approve_limit: Decimal,
    /// High-value claims at or below this amount route to a supervisor;
    /// above it they route to the claims manager tier
    pub supervisor_referral_limit: Decimal,
    /// Approvals above this amount always require human review
    pub supervisor_authority_limit: Decimal,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            auto_deny_score: 85,
            investigate_score: 50,
            high_value_approve_limit: dec!(25000),
            supervisor_referral_limit: dec!(100000),
            supervisor_authority_limit: dec!(50000),
        }
    }
}

impl EscalationConfig {
    /// Validates threshold ordering; fails fast at load time
    pub fn validate(&self) -> Result<(), EscalationConfigError> {
        if self.investigate_score >= self.auto_deny_score {
            return Err(EscalationConfigError::InvestigateAboveAutoDeny {
                investigate: self.investigate_score,
                auto_deny: self.auto_deny_score,
            });
        }
        if self.high_value_approve_limit >= self.supervisor_referral_limit {
            return Err(EscalationConfigError::ApproveLimitAboveSupervisor {
                approve: self.high_value_approve_limit,
                supervisor: self.supervisor_referral_limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EscalationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_scores_rejected() {
        let mut config = EscalationConfig::default();
        config.investigate_score = 90;
        assert!(matches!(
            config.validate(),
            Err(EscalationConfigError::InvestigateAboveAutoDeny { .. })
        ));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let mut config = EscalationConfig::default();
        config.high_value_approve_limit = dec!(200000);
        assert!(matches!(
            config.validate(),
            Err(EscalationConfigError::ApproveLimitAboveSupervisor { .. })
        ));
    }
}
