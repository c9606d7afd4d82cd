multiversx_sc::imports!();

use crate::errors::ERROR_INVALID_PARAMS;
use crate::types::EpochParams;

/// Donor cap applied at deploy time.
pub const DEFAULT_MAX_DONORS_PER_EPOCH: u32 = 100;

/// Highest cap the owner may set. Settlement reads two storage entries per
/// donor inside a single endEpoch call.
pub const MAX_DONORS_PER_EPOCH_LIMIT: u32 = 300;

#[multiversx_sc::module]
pub trait ParamsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
{
    /// Staged for the next epoch opened by endEpoch. The current epoch keeps
    /// the values it was opened with.
    #[endpoint(changeParams)]
    fn change_params(
        &self,
        available_rewards: BigUint,
        epoch_length: u64,
        max_checkpoint_delay: u64,
        min_donation: BigUint,
    ) {
        let caller = self.require_owner();

        let params = EpochParams {
            available_rewards,
            epoch_length,
            max_checkpoint_delay,
            min_donation,
        };
        self.require_valid_params(&params);

        self.pending_params().set(&params);
        self.params_changed_event(&caller, &params);
    }

    #[endpoint(setMaxDonorsPerEpoch)]
    fn set_max_donors_per_epoch(&self, max_donors: u32) {
        let caller = self.require_owner();
        require!(
            max_donors > 0 && max_donors <= MAX_DONORS_PER_EPOCH_LIMIT,
            ERROR_INVALID_PARAMS
        );

        self.max_donors_per_epoch().set(max_donors);
        self.max_donors_changed_event(&caller, max_donors);
    }

    /// Minimum donation of the epoch currently accepting donations.
    #[view(minimumDonation)]
    fn minimum_donation(&self) -> BigUint {
        self.current_epoch_record().min_donation
    }

    fn require_valid_params(&self, params: &EpochParams<Self::Api>) {
        require!(params.epoch_length > 0, ERROR_INVALID_PARAMS);
        require!(params.min_donation > 0u64, ERROR_INVALID_PARAMS);
    }
}
