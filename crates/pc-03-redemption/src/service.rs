//! Redemption Registry service - locked consumption state

use crate::error::{RedemptionError, RedemptionResult};
use parking_lot::RwLock;
use shared_types::{mint_tx_ref, TokenState, TxRef};
use std::collections::HashSet;

/// Redemption configuration
#[derive(Clone, Debug)]
pub struct RedemptionConfig {
    /// Tokens ending in this suffix are treated as pre-redeemed.
    pub reserved_suffix: String,
}

impl Default for RedemptionConfig {
    fn default() -> Self {
        Self {
            reserved_suffix: "99".into(),
        }
    }
}

/// In-memory redemption registry.
///
/// Tokens default to `Active` until explicitly redeemed; only the set of
/// consumed identifiers is stored. Redemption is check-then-set inside a
/// single write-lock section, making consumption at-most-once across all
/// concurrent callers.
pub struct RedemptionRegistry {
    config: RedemptionConfig,
    redeemed: RwLock<HashSet<String>>,
}

impl RedemptionRegistry {
    /// Create a registry with the default reserved suffix.
    pub fn new() -> Self {
        Self::with_config(RedemptionConfig::default())
    }

    /// Create a registry with explicit configuration.
    pub fn with_config(config: RedemptionConfig) -> Self {
        Self {
            config,
            redeemed: RwLock::new(HashSet::new()),
        }
    }

    fn is_pre_redeemed(&self, token_id: &str) -> bool {
        token_id.ends_with(&self.config.reserved_suffix)
    }

    fn validate(token_id: &str) -> RedemptionResult<()> {
        if token_id.trim().is_empty() {
            return Err(RedemptionError::InvalidInput {
                reason: "empty token identifier".into(),
            });
        }
        Ok(())
    }

    /// Current state of a token. Pure read; never mutates.
    pub async fn status(&self, token_id: &str) -> RedemptionResult<TokenState> {
        Self::validate(token_id)?;
        if self.redeemed.read().contains(token_id) || self.is_pre_redeemed(token_id) {
            Ok(TokenState::Redeemed)
        } else {
            Ok(TokenState::Active)
        }
    }

    /// Consume a token. At-most-once: an already-redeemed token (including
    /// pre-redeemed reserved-suffix tokens) fails with `AlreadyRedeemed`.
    ///
    /// # Returns
    /// * The minted transaction reference of the burn
    pub async fn redeem(&self, token_id: &str) -> RedemptionResult<TxRef> {
        Self::validate(token_id)?;

        let mut redeemed = self.redeemed.write();
        if redeemed.contains(token_id) || self.is_pre_redeemed(token_id) {
            return Err(RedemptionError::AlreadyRedeemed {
                token_id: token_id.to_string(),
            });
        }
        redeemed.insert(token_id.to_string());

        let tx_ref = mint_tx_ref();
        tracing::info!(%token_id, %tx_ref, "token redeemed");
        Ok(tx_ref)
    }

    /// Number of explicitly redeemed tokens.
    pub fn redeemed_count(&self) -> usize {
        self.redeemed.read().len()
    }
}

impl Default for RedemptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
