//! # Double-Redemption Attempts
//!
//! The core anti-double-dispense guarantee: a token may be redeemed at most
//! once across all concurrent callers. Two callers racing the same token
//! must split into exactly one success and one `AlreadyRedeemed`.

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use pc_03_redemption::{RedemptionError, RedemptionRegistry};

#[cfg(test)]
use shared_types::TokenState;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_pair_yields_one_success() {
        let registry = Arc::new(RedemptionRegistry::new());

        let a = {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.redeem("NFT-RACE-1").await })
        };
        let b = {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.redeem("NFT-RACE-1").await })
        };

        let (ra, rb) = (a.await.unwrap(), b.await.unwrap());
        let successes = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one concurrent redeem may win");

        let failure = if ra.is_err() { ra } else { rb };
        assert!(matches!(
            failure.unwrap_err(),
            RedemptionError::AlreadyRedeemed { .. }
        ));

        assert_eq!(
            registry.status("NFT-RACE-1").await.unwrap(),
            TokenState::Redeemed
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn redemption_storm_admits_exactly_one_winner_per_token() {
        let registry = Arc::new(RedemptionRegistry::new());

        for token_index in 0..16 {
            let token_id = format!("NFT-STORM-{token_index}");
            let mut handles = Vec::new();
            for _ in 0..32 {
                let registry = Arc::clone(&registry);
                let token_id = token_id.clone();
                handles.push(tokio::spawn(
                    async move { registry.redeem(&token_id).await },
                ));
            }

            let mut successes = 0;
            for handle in handles {
                if handle.await.unwrap().is_ok() {
                    successes += 1;
                }
            }
            assert_eq!(successes, 1, "token {token_id} redeemed more than once");
        }

        assert_eq!(registry.redeemed_count(), 16);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn status_reads_race_safely_with_redeems() {
        let registry = Arc::new(RedemptionRegistry::new());

        let readers: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    for _ in 0..64 {
                        let state = registry.status("NFT-READ-RACE").await.unwrap();
                        assert!(matches!(state, TokenState::Active | TokenState::Redeemed));
                    }
                })
            })
            .collect();

        registry.redeem("NFT-READ-RACE").await.unwrap();

        for reader in readers {
            reader.await.unwrap();
        }
        assert_eq!(
            registry.status("NFT-READ-RACE").await.unwrap(),
            TokenState::Redeemed
        );
    }
}
