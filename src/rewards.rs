multiversx_sc::imports!();

use crate::errors::{ERROR_ALREADY_CLAIMED, ERROR_INVALID_REWARD_TOKEN, ERROR_ZERO_AMOUNT};
use crate::math;
use crate::types::Epoch;

#[multiversx_sc::module]
pub trait RewardsModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: claim
    // Settles every finalized epoch the caller has an unclaimed
    // record in, in a single transfer.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) {
        let caller = self.blockchain().get_caller();

        let mut total = BigUint::zero();
        let mut settled: ManagedVec<u64> = ManagedVec::new();
        for epoch_index in self.pending_epochs(&caller).iter() {
            let epoch = self.epochs(epoch_index).get();
            if !epoch.finalized {
                continue;
            }
            let mut record = self.donations(epoch_index, &caller).get();
            if record.claimed {
                continue;
            }

            total += math::entitlement(&record.amount, &epoch.reward_pool, &epoch.total_donations);
            record.claimed = true;
            self.donations(epoch_index, &caller).set(&record);
            settled.push(epoch_index);
        }

        require!(total > 0u64, ERROR_ALREADY_CLAIMED);

        for epoch_index in settled.iter() {
            self.pending_epochs(&caller).swap_remove(&epoch_index);
        }
        self.incentive_balance().update(|balance| *balance -= &total);
        self.total_unclaimed().update(|unclaimed| *unclaimed -= &total);
        self.claim_event(&caller, settled.len() as u64, &total);

        let token_id = self.reward_token_id().get();
        self.send().direct_esdt(&caller, &token_id, 0, &total);
    }

    // ========================================================
    // ENDPOINT: topUpIncentiveBalance
    // Anyone may fund the reward pool with the reward token.
    // ========================================================

    #[endpoint(topUpIncentiveBalance)]
    #[payable("*")]
    fn top_up_incentive_balance(&self) {
        let (token_id, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(
            token_id == EgldOrEsdtTokenIdentifier::esdt(self.reward_token_id().get()),
            ERROR_INVALID_REWARD_TOKEN
        );

        let caller = self.blockchain().get_caller();
        self.incentive_balance().update(|balance| *balance += &amount);
        self.incentive_top_up_event(&caller, &amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Sum of the donor's entitlements over finalized, unclaimed epochs.
    #[view(claimable)]
    fn claimable(&self, donor: ManagedAddress) -> BigUint {
        let mut total = BigUint::zero();
        for epoch_index in self.pending_epochs(&donor).iter() {
            let epoch = self.epochs(epoch_index).get();
            if !epoch.finalized {
                continue;
            }
            let record = self.donations(epoch_index, &donor).get();
            if record.claimed {
                continue;
            }
            total += math::entitlement(&record.amount, &epoch.reward_pool, &epoch.total_donations);
        }
        total
    }

    #[view(getFreeIncentiveBalance)]
    fn get_free_incentive_balance(&self) -> BigUint {
        self.free_incentive_balance()
    }

    // ========================================================
    // INTERNAL: settlement at finalize
    // Commits floored entitlements against the free balance.
    // Whatever is not committed stays free for later epochs.
    // ========================================================

    fn settle_epoch(&self, epoch: &mut Epoch<Self::Api>) {
        let free = self.free_incentive_balance();
        epoch.reward_pool = if epoch.total_donations == 0u64 {
            BigUint::zero()
        } else if free < epoch.available_rewards {
            free
        } else {
            epoch.available_rewards.clone()
        };

        let mut distributed = BigUint::zero();
        for donor in self.epoch_donors(epoch.index).iter() {
            let record = self.donations(epoch.index, &donor).get();
            distributed +=
                math::entitlement(&record.amount, &epoch.reward_pool, &epoch.total_donations);
        }

        epoch.carried_over = &epoch.available_rewards - &distributed;
        epoch.distributed = distributed;

        self.total_unclaimed()
            .update(|unclaimed| *unclaimed += &epoch.distributed);
        self.total_carried_over()
            .update(|carried| *carried += &epoch.carried_over);

        if epoch.carried_over > 0u64 {
            self.rewards_carried_over_event(epoch.index, &epoch.carried_over);
        }
    }
}
