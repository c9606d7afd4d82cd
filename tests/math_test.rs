use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

use donation_rewards::math;
use donation_rewards::types::PoolSnapshot;

const HALF_WEIGHT: u64 = 500_000_000_000_000_000;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn pool(
    base_balance: u64,
    base_weight: u64,
    reward_balance: u64,
    reward_weight: u64,
) -> PoolSnapshot<StaticApi> {
    PoolSnapshot {
        base_balance: big(base_balance),
        base_weight: big(base_weight),
        reward_balance: big(reward_balance),
        reward_weight: big(reward_weight),
    }
}

#[test]
fn share_is_zero_without_donations() {
    assert_eq!(math::share_of(&big(10), &big(0)), big(0));
    assert_eq!(math::share_of(&big(1), &big(4)), big(math::SHARE_PRECISION / 4));
}

#[test]
fn entitlements_never_exceed_the_pool() {
    let amounts = [7u64, 13, 29, 1, 50];
    let total: u64 = amounts.iter().sum();
    let reward_pool = big(1_000_003);

    let mut distributed = big(0);
    for amount in amounts {
        distributed += math::entitlement(&big(amount), &reward_pool, &big(total));
    }

    assert!(distributed <= reward_pool);
    // flooring loses strictly less than one unit per donor
    assert!(&reward_pool - &distributed < big(amounts.len() as u64));
}

#[test]
fn entitlement_splits_one_third_two_thirds() {
    let reward_pool = big(900);
    assert_eq!(math::entitlement(&big(1), &reward_pool, &big(3)), big(300));
    assert_eq!(math::entitlement(&big(2), &reward_pool, &big(3)), big(600));
    assert_eq!(math::entitlement(&big(2), &reward_pool, &big(0)), big(0));
}

#[test]
fn apply_share_floors() {
    let share = math::share_of(&big(2), &big(3));
    assert_eq!(math::apply_share(&big(900_000), &share), big(599_999));
}

#[test]
fn weighted_pool_valuation() {
    // 80/20 pool: 1_000 base at weight 0.8, 500 reward at weight 0.2
    // spot price of one reward unit = (1000 / 0.8) / (500 / 0.2) = 0.5 base
    let snapshot = pool(1_000, 800_000_000_000_000_000, 500, 200_000_000_000_000_000);

    assert_eq!(math::reward_value_in_base(&big(100), &snapshot), big(50));
    assert_eq!(math::base_value_in_reward(&big(50), &snapshot), big(100));
}

#[test]
fn valuation_with_empty_pool_is_zero() {
    let empty = pool(0, HALF_WEIGHT, 0, HALF_WEIGHT);
    assert_eq!(math::reward_value_in_base(&big(100), &empty), big(0));
    assert_eq!(math::base_value_in_reward(&big(100), &empty), big(0));

    let unweighted = pool(1_000, 0, 1_000, 0);
    assert_eq!(math::reward_value_in_base(&big(100), &unweighted), big(0));
}

#[test]
fn progress_is_capped_and_monotonic() {
    assert_eq!(math::progress_bps(0, 100), 0);
    assert_eq!(math::progress_bps(25, 100), 2_500);
    assert_eq!(math::progress_bps(100, 100), 10_000);
    assert_eq!(math::progress_bps(1_000, 100), 10_000);
    assert_eq!(math::progress_bps(5, 0), 10_000);

    let mut previous = 0;
    for elapsed in 0..=120 {
        let progress = math::progress_bps(elapsed, 97);
        assert!(progress >= previous);
        previous = progress;
    }
}
