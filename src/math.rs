multiversx_sc::imports!();

use crate::types::PoolSnapshot;

/// Fixed-point scale for shares: 10^18 means 100%.
pub const SHARE_PRECISION: u64 = 1_000_000_000_000_000_000;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// amount / total, scaled by SHARE_PRECISION. Zero when nothing was donated.
pub fn share_of<M: ManagedTypeApi>(amount: &BigUint<M>, total: &BigUint<M>) -> BigUint<M> {
    if *total == 0u64 {
        return BigUint::zero();
    }
    (amount * SHARE_PRECISION) / total
}

/// floor(amount * reward_pool / total). Summed over every donor of an epoch
/// this never exceeds reward_pool.
pub fn entitlement<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    reward_pool: &BigUint<M>,
    total: &BigUint<M>,
) -> BigUint<M> {
    if *total == 0u64 {
        return BigUint::zero();
    }
    (amount * reward_pool) / total
}

/// floor(rewards * share / SHARE_PRECISION)
pub fn apply_share<M: ManagedTypeApi>(rewards: &BigUint<M>, share: &BigUint<M>) -> BigUint<M> {
    (rewards * share) / SHARE_PRECISION
}

/// Spot value of `reward_amount` reward units expressed in base currency.
///
/// Weighted pool spot price: (B_base / W_base) / (B_reward / W_reward).
pub fn reward_value_in_base<M: ManagedTypeApi>(
    reward_amount: &BigUint<M>,
    pool: &PoolSnapshot<M>,
) -> BigUint<M> {
    let denominator = &pool.reward_balance * &pool.base_weight;
    if denominator == 0u64 || pool.reward_weight == 0u64 {
        return BigUint::zero();
    }
    reward_amount * &pool.base_balance * &pool.reward_weight / denominator
}

/// Spot value of `base_amount` base currency expressed in reward units.
pub fn base_value_in_reward<M: ManagedTypeApi>(
    base_amount: &BigUint<M>,
    pool: &PoolSnapshot<M>,
) -> BigUint<M> {
    let denominator = &pool.base_balance * &pool.reward_weight;
    if denominator == 0u64 || pool.base_weight == 0u64 {
        return BigUint::zero();
    }
    base_amount * &pool.reward_balance * &pool.base_weight / denominator
}

/// Elapsed time as basis points of the epoch length, capped at 100%.
pub fn progress_bps(elapsed: u64, length: u64) -> u64 {
    if length == 0 {
        return BPS_DENOMINATOR;
    }
    let capped = core::cmp::min(elapsed, length) as u128;
    (capped * BPS_DENOMINATOR as u128 / length as u128) as u64
}
