#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod donation_rewards_proxy;
pub mod epoch;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod math;
pub mod oracle;
pub mod params;
pub mod rewards;
pub mod staking;
pub mod storage;
pub mod types;
pub mod weighted_pool_proxy;

use errors::{ERROR_INVALID_REWARD_TOKEN, ERROR_ZERO_ADDRESS};
use params::DEFAULT_MAX_DONORS_PER_EPOCH;
use types::{EpochParams, PoolConfig};

/// First epoch index. Epoch 1 opens at deploy time.
const FIRST_EPOCH: u64 = 1;

// ============================================================
// Contract
// Donors give EGLD during fixed-length epochs and share that
// epoch's reward-token pool pro rata once it is finalized.
// ============================================================

#[multiversx_sc::contract]
pub trait DonationRewards:
    storage::StorageModule
    + events::EventsModule
    + access::AccessControlModule
    + params::ParamsModule
    + oracle::OracleModule
    + ledger::LedgerModule
    + staking::StakingModule
    + rewards::RewardsModule
    + epoch::EpochModule
{
    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        reward_token_id: TokenIdentifier,
        pool_address: ManagedAddress,
        assets_in_pool: u32,
        base_token_index: u32,
        reward_token_index: u32,
        available_rewards: BigUint,
        epoch_length: u64,
        max_checkpoint_delay: u64,
        min_donation: BigUint,
    ) {
        require!(!owner.is_zero(), ERROR_ZERO_ADDRESS);
        require!(reward_token_id.is_valid_esdt_identifier(), ERROR_INVALID_REWARD_TOKEN);

        let params = EpochParams {
            available_rewards,
            epoch_length,
            max_checkpoint_delay,
            min_donation,
        };
        self.require_valid_params(&params);

        self.owner().set(&owner);
        self.reward_token_id().set(&reward_token_id);
        self.store_pool_config(&PoolConfig {
            pool_address,
            assets_in_pool,
            base_token_index,
            reward_token_index,
        });
        self.pending_params().set(&params);
        self.max_donors_per_epoch().set(DEFAULT_MAX_DONORS_PER_EPOCH);

        self.incentive_balance().set(BigUint::zero());
        self.total_unclaimed().set(BigUint::zero());
        self.total_carried_over().set(BigUint::zero());

        let now = self.blockchain().get_block_timestamp();
        self.open_epoch(FIRST_EPOCH, now, &params);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
