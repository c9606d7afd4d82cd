multiversx_sc::imports!();

use crate::errors::ERROR_ZERO_ADDRESS;

// ============================================================
// Staking instance — destination of donated EGLD.
// Donations are forwarded as they arrive once an instance is
// set; anything received before that is held and swept over
// when the owner sets it.
// ============================================================

#[multiversx_sc::module]
pub trait StakingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
{
    #[endpoint(setStakingInstance)]
    fn set_staking_instance(&self, staking_instance: ManagedAddress) {
        let caller = self.require_owner();
        require!(!staking_instance.is_zero(), ERROR_ZERO_ADDRESS);

        self.staking_instance().set(&staking_instance);
        self.staking_instance_changed_event(&caller, &staking_instance);

        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if held > 0u64 {
            self.send().direct_egld(&staking_instance, &held);
            self.donations_forwarded_event(&staking_instance, &held);
        }
    }

    /// Sends `amount` EGLD on to the staking instance, if one is set.
    fn forward_donation(&self, amount: &BigUint) {
        if self.staking_instance().is_empty() {
            return;
        }

        let staking_instance = self.staking_instance().get();
        self.send().direct_egld(&staking_instance, amount);
        self.donations_forwarded_event(&staking_instance, amount);
    }
}
