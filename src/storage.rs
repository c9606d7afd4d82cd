multiversx_sc::imports!();

use crate::types::{DonationRecord, Epoch, EpochParams, PoolConfig};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Access control ──

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Configuration ──

    /// Parameters the next epoch will snapshot when it opens.
    #[view(getParams)]
    #[storage_mapper("pendingParams")]
    fn pending_params(&self) -> SingleValueMapper<EpochParams<Self::Api>>;

    #[view(getRewardTokenId)]
    #[storage_mapper("rewardTokenId")]
    fn reward_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPoolConfig)]
    #[storage_mapper("poolConfig")]
    fn pool_config(&self) -> SingleValueMapper<PoolConfig<Self::Api>>;

    /// Upper bound on donors per epoch, so endEpoch settles in one call.
    #[view(getMaxDonorsPerEpoch)]
    #[storage_mapper("maxDonorsPerEpoch")]
    fn max_donors_per_epoch(&self) -> SingleValueMapper<u32>;

    /// Receiver of donated EGLD. Empty until the owner sets one.
    #[view(getStakingInstance)]
    #[storage_mapper("stakingInstance")]
    fn staking_instance(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Epochs ──

    #[view(currentEpoch)]
    #[storage_mapper("currentEpoch")]
    fn current_epoch(&self) -> SingleValueMapper<u64>;

    #[view(epochPoints)]
    #[storage_mapper("epochs")]
    fn epochs(&self, index: u64) -> SingleValueMapper<Epoch<Self::Api>>;

    // ── Donation ledger ──

    #[storage_mapper("donations")]
    fn donations(
        &self,
        epoch: u64,
        donor: &ManagedAddress,
    ) -> SingleValueMapper<DonationRecord<Self::Api>>;

    /// Donors of an epoch in donation order, iterated once at settlement.
    #[storage_mapper("epochDonors")]
    fn epoch_donors(&self, epoch: u64) -> VecMapper<ManagedAddress>;

    /// Epochs in which a donor still holds an unclaimed record.
    #[storage_mapper("pendingEpochs")]
    fn pending_epochs(&self, donor: &ManagedAddress) -> UnorderedSetMapper<u64>;

    // ── Incentive accounting ──

    #[view(incentiveBalance)]
    #[storage_mapper("incentiveBalance")]
    fn incentive_balance(&self) -> SingleValueMapper<BigUint>;

    /// Entitlements of finalized epochs not yet claimed.
    #[view(getTotalUnclaimed)]
    #[storage_mapper("totalUnclaimed")]
    fn total_unclaimed(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalCarriedOver)]
    #[storage_mapper("totalCarriedOver")]
    fn total_carried_over(&self) -> SingleValueMapper<BigUint>;

    // ── Helpers ──

    fn current_epoch_record(&self) -> Epoch<Self::Api> {
        self.epochs(self.current_epoch().get()).get()
    }

    /// Part of the incentive balance not owed to anyone yet.
    fn free_incentive_balance(&self) -> BigUint {
        let balance = self.incentive_balance().get();
        let unclaimed = self.total_unclaimed().get();
        if balance > unclaimed {
            balance - unclaimed
        } else {
            BigUint::zero()
        }
    }
}
