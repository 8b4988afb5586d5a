//! Tally parameters.

use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// 100% in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Quorum and threshold settings, all in basis points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyParams {
    /// Minimum share of bonded tokens that must vote.
    pub quorum_bps: u32,
    /// Yes share of non-abstaining power that must be exceeded.
    pub threshold_bps: u32,
    pub law_quorum_bps: u32,
    pub law_threshold_bps: u32,
    pub constitution_amendment_quorum_bps: u32,
    pub constitution_amendment_threshold_bps: u32,
    /// Burn deposits of proposals that miss quorum.
    pub burn_vote_quorum: bool,
}

impl Default for TallyParams {
    fn default() -> Self {
        Self {
            quorum_bps: 2_500,
            threshold_bps: 6_667,
            law_quorum_bps: 2_500,
            law_threshold_bps: 9_000,
            constitution_amendment_quorum_bps: 2_500,
            constitution_amendment_threshold_bps: 9_000,
            burn_vote_quorum: false,
        }
    }
}

impl TallyParams {
    pub fn validate(&self) -> Result<(), GovernanceError> {
        let ratios = [
            ("quorum", self.quorum_bps),
            ("threshold", self.threshold_bps),
            ("law quorum", self.law_quorum_bps),
            ("law threshold", self.law_threshold_bps),
            ("constitution amendment quorum", self.constitution_amendment_quorum_bps),
            ("constitution amendment threshold", self.constitution_amendment_threshold_bps),
        ];
        for (name, value) in ratios {
            if value > BPS_DENOMINATOR {
                return Err(GovernanceError::InvalidParams(format!(
                    "{name} {value} exceeds {BPS_DENOMINATOR} bps"
                )));
            }
        }
        if self.threshold_bps == 0 {
            return Err(GovernanceError::InvalidParams(
                "threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TallyParams::default().validate().is_ok());
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        let params = TallyParams {
            law_quorum_bps: 10_001,
            ..TallyParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GovernanceError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let params = TallyParams {
            threshold_bps: 0,
            ..TallyParams::default()
        };
        assert!(params.validate().is_err());
    }
}
