multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Epoch Phase — derived lifecycle state of the current epoch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum EpochPhase {
    /// Reward pool is not funded or not worth a minimum donation.
    /// Donations are rejected.
    AwaitingEligibility,
    /// Accepting donations, epoch length not yet elapsed.
    Open,
    /// Epoch length elapsed. Still accepting donations until
    /// someone calls endEpoch.
    Closeable,
}

// ============================================================
// Epoch Params — pending configuration for the next epoch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EpochParams<M: ManagedTypeApi> {
    pub available_rewards: BigUint<M>,
    pub epoch_length: u64,
    pub max_checkpoint_delay: u64,
    pub min_donation: BigUint<M>,
}

// ============================================================
// Epoch — one accounting window
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Epoch<M: ManagedTypeApi> {
    pub index: u64,
    pub start_timestamp: u64,
    pub length: u64,
    pub max_checkpoint_delay: u64,
    pub min_donation: BigUint<M>,
    pub available_rewards: BigUint<M>,
    pub total_donations: BigUint<M>,
    pub donor_count: u64,
    /// Rewards actually backing this epoch's entitlements (0 until finalized)
    pub reward_pool: BigUint<M>,
    /// Sum of floored entitlements (0 until finalized)
    pub distributed: BigUint<M>,
    /// available_rewards - distributed, left in the free incentive balance
    pub carried_over: BigUint<M>,
    pub finalized_at: u64,
    pub finalized: bool,
}

impl<M: ManagedTypeApi> Epoch<M> {
    pub fn open(index: u64, start_timestamp: u64, params: &EpochParams<M>) -> Self {
        Epoch {
            index,
            start_timestamp,
            length: params.epoch_length,
            max_checkpoint_delay: params.max_checkpoint_delay,
            min_donation: params.min_donation.clone(),
            available_rewards: params.available_rewards.clone(),
            total_donations: BigUint::zero(),
            donor_count: 0,
            reward_pool: BigUint::zero(),
            distributed: BigUint::zero(),
            carried_over: BigUint::zero(),
            finalized_at: 0,
            finalized: false,
        }
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.start_timestamp)
    }

    pub fn nominal_end(&self) -> u64 {
        self.start_timestamp.saturating_add(self.length)
    }

    pub fn is_over(&self, now: u64) -> bool {
        self.elapsed(now) >= self.length
    }
}

// ============================================================
// Donation Record — one per (epoch, donor)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DonationRecord<M: ManagedTypeApi> {
    pub epoch: u64,
    pub donor: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub claimed: bool,
}

// ============================================================
// Pool Config — where the price oracle reads from
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PoolConfig<M: ManagedTypeApi> {
    pub pool_address: ManagedAddress<M>,
    pub assets_in_pool: u32,
    pub base_token_index: u32,
    pub reward_token_index: u32,
}

/// Balances and normalized weights of the two pool assets we price against.
pub struct PoolSnapshot<M: ManagedTypeApi> {
    pub base_balance: BigUint<M>,
    pub base_weight: BigUint<M>,
    pub reward_balance: BigUint<M>,
    pub reward_weight: BigUint<M>,
}
