//! Content of the staking starter screen.
//!
//! Shown before a first delegation: what delegating means, three key points,
//! a slashing warning and a link to the staking rewards documentation.

use crate::i18n::t;

/// Documentation page about Solana staking rewards.
pub const SOLANA_STAKING_REWARDS_URL: &str = "https://solana.com/staking";

/// Resolved text of the earn-rewards info screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarnRewardsInfo {
    /// Lead paragraph.
    pub description: String,
    /// Key points.
    pub bullets: Vec<String>,
    /// Slashing warning.
    pub warning: String,
    /// Label of the learn-more link.
    pub learn_more_label: String,
    /// Target of the learn-more link.
    pub learn_more_url: &'static str,
}

impl EarnRewardsInfo {
    /// The Solana delegation starter content.
    #[must_use]
    pub fn solana() -> Self {
        Self {
            description: t("solana.delegation.flow.steps.starter.description"),
            bullets: (0..3)
                .map(|i| t(&format!("solana.delegation.flow.steps.starter.bullet.{i}")))
                .collect(),
            warning: t("solana.delegation.flow.steps.starter.warning.description"),
            learn_more_label: t("delegation.howItWorks"),
            learn_more_url: SOLANA_STAKING_REWARDS_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solana_info_is_fully_translated() {
        let info = EarnRewardsInfo::solana();
        assert_eq!(info.bullets.len(), 3);
        // Unresolved keys would come back verbatim.
        assert!(!info.description.starts_with("solana."));
        assert!(info.bullets.iter().all(|b| !b.starts_with("solana.")));
        assert!(!info.warning.starts_with("solana."));
        assert!(info.learn_more_url.starts_with("https://"));
    }
}
