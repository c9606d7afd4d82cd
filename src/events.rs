multiversx_sc::imports!();

use crate::types::EpochParams;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("donation")]
    fn donation_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] epoch: u64,
        amount: &BigUint,
    );

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] epochs_claimed: u64,
        amount: &BigUint,
    );

    #[event("epochEnded")]
    fn epoch_ended_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] total_donations: &BigUint,
        #[indexed] distributed: &BigUint,
        finalized_at: u64,
    );

    #[event("epochOpened")]
    fn epoch_opened_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] start_timestamp: u64,
        available_rewards: &BigUint,
    );

    /// The next epoch starts at finalize time rather than the nominal end.
    #[event("epochCheckpointLate")]
    fn epoch_checkpoint_late_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] nominal_end: u64,
        finalized_at: u64,
    );

    #[event("rewardsCarriedOver")]
    fn rewards_carried_over_event(&self, #[indexed] epoch: u64, amount: &BigUint);

    #[event("incentiveTopUp")]
    fn incentive_top_up_event(&self, #[indexed] caller: &ManagedAddress, amount: &BigUint);

    #[event("paramsChanged")]
    fn params_changed_event(
        &self,
        #[indexed] changed_by: &ManagedAddress,
        params: &EpochParams<Self::Api>,
    );

    #[event("ownerChanged")]
    fn owner_changed_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("maxDonorsChanged")]
    fn max_donors_changed_event(
        &self,
        #[indexed] changed_by: &ManagedAddress,
        #[indexed] max_donors: u32,
    );

    #[event("stakingInstanceChanged")]
    fn staking_instance_changed_event(
        &self,
        #[indexed] changed_by: &ManagedAddress,
        #[indexed] staking_instance: &ManagedAddress,
    );

    #[event("donationsForwarded")]
    fn donations_forwarded_event(
        &self,
        #[indexed] staking_instance: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("poolConfigChanged")]
    fn pool_config_changed_event(
        &self,
        #[indexed] pool_address: &ManagedAddress,
        #[indexed] base_token_index: u32,
        #[indexed] reward_token_index: u32,
    );
}
