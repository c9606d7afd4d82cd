multiversx_sc::imports!();

use crate::errors::{ERROR_UNAUTHORIZED, ERROR_ZERO_ADDRESS};

/// Single-owner gate. The owner lives in contract storage and is checked
/// explicitly at the top of every administrative endpoint; it is independent
/// of the protocol-level contract owner.
#[multiversx_sc::module]
pub trait AccessControlModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    #[endpoint(changeOwner)]
    fn change_owner(&self, new_owner: ManagedAddress) {
        let caller = self.require_owner();
        require!(!new_owner.is_zero(), ERROR_ZERO_ADDRESS);

        self.owner().set(&new_owner);
        self.owner_changed_event(&caller, &new_owner);
    }

    /// Returns the caller so endpoints can reuse it.
    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERROR_UNAUTHORIZED);
        caller
    }
}
