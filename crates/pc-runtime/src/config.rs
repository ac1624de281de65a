//! Engine configuration

use pc_02_provenance_ledger::LedgerConfig;
use pc_03_redemption::RedemptionConfig;
use pc_05_governance::GovernanceConfig;

/// Top-level engine configuration: one section per subsystem plus an
/// optional RNG seed.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub ledger: LedgerConfig,
    pub redemption: RedemptionConfig,
    pub governance: GovernanceConfig,
    /// When set, fallback inference and vote weights replay from this seed
    /// instead of OS entropy.
    pub rng_seed: Option<u64>,
    /// Pre-seed the proposal ledger with the representative demo proposals.
    pub seed_demo_proposals: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_subsystem_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.governance.quorum_threshold, 50_000);
        assert_eq!(config.redemption.reserved_suffix, "99");
        assert!(config.rng_seed.is_none());
        assert!(!config.seed_demo_proposals);
    }
}
