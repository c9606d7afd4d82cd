multiversx_sc::imports!();

use crate::errors::{
    ERROR_DUPLICATE_DONATION, ERROR_EPOCH_FULL, ERROR_GAME_NOT_READY, ERROR_INSUFFICIENT_DONATION,
};
use crate::math;
use crate::types::DonationRecord;

#[multiversx_sc::module]
pub trait LedgerModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
    + crate::oracle::OracleModule
    + crate::staking::StakingModule
{
    // ========================================================
    // ENDPOINT: donate
    // One EGLD donation per donor per epoch, forwarded to the
    // staking instance when one is set.
    // ========================================================

    #[endpoint(donate)]
    #[payable("EGLD")]
    fn donate(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        let epoch_index = self.current_epoch().get();
        let mut epoch = self.epochs(epoch_index).get();

        require!(amount >= epoch.min_donation, ERROR_INSUFFICIENT_DONATION);
        require!(self.can_play_game(), ERROR_GAME_NOT_READY);

        let record_mapper = self.donations(epoch_index, &caller);
        require!(record_mapper.is_empty(), ERROR_DUPLICATE_DONATION);
        require!(
            epoch.donor_count < u64::from(self.max_donors_per_epoch().get()),
            ERROR_EPOCH_FULL
        );

        record_mapper.set(DonationRecord {
            epoch: epoch_index,
            donor: caller.clone(),
            amount: amount.clone(),
            claimed: false,
        });
        self.epoch_donors(epoch_index).push(&caller);
        self.pending_epochs(&caller).insert(epoch_index);

        epoch.total_donations += &amount;
        epoch.donor_count += 1;
        self.epochs(epoch_index).set(&epoch);

        self.donation_event(&caller, epoch_index, &amount);
        self.forward_donation(&amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Live share of the open epoch, scaled by 10^18. Moves as other
    /// donors join; fixed only once the epoch is finalized.
    #[view(getCurrentShare)]
    fn get_current_share(&self, donor: ManagedAddress) -> BigUint {
        let epoch_index = self.current_epoch().get();
        let record_mapper = self.donations(epoch_index, &donor);
        if record_mapper.is_empty() {
            return BigUint::zero();
        }

        let epoch = self.epochs(epoch_index).get();
        math::share_of(&record_mapper.get().amount, &epoch.total_donations)
    }

    /// Ticket percentage for a hypothetical donation of `amount` joining the
    /// open epoch now. The first value is the percentage itself, as a share
    /// scaled by 10^18. It is followed by the projected reward units and the
    /// donation's value in reward units at the pool spot price.
    #[view(estimateTicketPercentage)]
    fn estimate_ticket_percentage(&self, amount: BigUint) -> MultiValue3<BigUint, BigUint, BigUint> {
        require!(self.can_play_game(), ERROR_GAME_NOT_READY);

        let epoch = self.current_epoch_record();
        let total_after = &epoch.total_donations + &amount;
        let share = math::share_of(&amount, &total_after);
        let projected_reward = math::apply_share(&epoch.available_rewards, &share);

        let pool = self.pool_snapshot();
        let donation_value = math::base_value_in_reward(&amount, &pool);

        (share, projected_reward, donation_value).into()
    }

    #[view(epochToDonations)]
    fn epoch_to_donations(&self, epoch: u64, donor: ManagedAddress) -> BigUint {
        let record_mapper = self.donations(epoch, &donor);
        if record_mapper.is_empty() {
            return BigUint::zero();
        }
        record_mapper.get().amount
    }

    #[view(getDonationRecord)]
    fn get_donation_record(
        &self,
        epoch: u64,
        donor: ManagedAddress,
    ) -> OptionalValue<DonationRecord<Self::Api>> {
        let record_mapper = self.donations(epoch, &donor);
        if record_mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(record_mapper.get())
    }

    #[view(getEpochDonors)]
    fn get_epoch_donors(&self, epoch: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for donor in self.epoch_donors(epoch).iter() {
            result.push(donor);
        }
        result
    }
}
