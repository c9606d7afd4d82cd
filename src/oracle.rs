multiversx_sc::imports!();

use crate::errors::{ERROR_INVALID_POOL_CONFIG, ERROR_INVALID_POOL_RESPONSE};
use crate::math;
use crate::types::{PoolConfig, PoolSnapshot};
use crate::weighted_pool_proxy;

/// One whole reward token at 18 decimals, the unit getRewardTokenPrice quotes.
const ONE_REWARD_TOKEN: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Price oracle over an external weighted liquidity pool.
// Only spot balances and weights are read; no swap math.
// ============================================================

#[multiversx_sc::module]
pub trait OracleModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
{
    #[endpoint(setPoolConfig)]
    fn set_pool_config(
        &self,
        pool_address: ManagedAddress,
        assets_in_pool: u32,
        base_token_index: u32,
        reward_token_index: u32,
    ) {
        self.require_owner();
        let config = PoolConfig {
            pool_address,
            assets_in_pool,
            base_token_index,
            reward_token_index,
        };
        self.store_pool_config(&config);
    }

    /// Whether the current epoch may accept donations: the free incentive
    /// balance covers the epoch's rewards, and those rewards are worth at
    /// least one minimum donation at the pool's spot price.
    #[view(canPlayGame)]
    fn can_play_game(&self) -> bool {
        let epoch = self.current_epoch_record();
        if epoch.available_rewards == 0u64 {
            return false;
        }
        if self.free_incentive_balance() < epoch.available_rewards {
            return false;
        }

        let pool = self.pool_snapshot();
        math::reward_value_in_base(&epoch.available_rewards, &pool) >= epoch.min_donation
    }

    /// Base-currency value of one whole reward token.
    #[view(getRewardTokenPrice)]
    fn get_reward_token_price(&self) -> BigUint {
        let pool = self.pool_snapshot();
        math::reward_value_in_base(&BigUint::from(ONE_REWARD_TOKEN), &pool)
    }

    fn store_pool_config(&self, config: &PoolConfig<Self::Api>) {
        require!(!config.pool_address.is_zero(), ERROR_INVALID_POOL_CONFIG);
        require!(
            config.base_token_index < config.assets_in_pool
                && config.reward_token_index < config.assets_in_pool
                && config.base_token_index != config.reward_token_index,
            ERROR_INVALID_POOL_CONFIG
        );

        self.pool_config().set(config);
        self.pool_config_changed_event(
            &config.pool_address,
            config.base_token_index,
            config.reward_token_index,
        );
    }

    fn pool_snapshot(&self) -> PoolSnapshot<Self::Api> {
        let config = self.pool_config().get();

        let balances = self
            .tx()
            .to(&config.pool_address)
            .typed(weighted_pool_proxy::WeightedPoolProxy)
            .get_balances()
            .returns(ReturnsResult)
            .sync_call();
        let weights = self
            .tx()
            .to(&config.pool_address)
            .typed(weighted_pool_proxy::WeightedPoolProxy)
            .get_normalized_weights()
            .returns(ReturnsResult)
            .sync_call();

        let (base_balance, reward_balance) = self.pick_pool_entries(balances, &config);
        let (base_weight, reward_weight) = self.pick_pool_entries(weights, &config);
        PoolSnapshot {
            base_balance,
            base_weight,
            reward_balance,
            reward_weight,
        }
    }

    /// Extracts the (base, reward) entries of a per-asset pool response.
    fn pick_pool_entries(
        &self,
        entries: MultiValueEncoded<BigUint>,
        config: &PoolConfig<Self::Api>,
    ) -> (BigUint, BigUint) {
        let mut base = BigUint::zero();
        let mut reward = BigUint::zero();
        let mut count = 0u32;
        for entry in entries.into_iter() {
            if count == config.base_token_index {
                base = entry;
            } else if count == config.reward_token_index {
                reward = entry;
            }
            count += 1;
        }
        require!(count == config.assets_in_pool, ERROR_INVALID_POOL_RESPONSE);
        (base, reward)
    }
}
