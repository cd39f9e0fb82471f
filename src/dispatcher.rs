multiversx_sc::imports!();

use crate::errors::{ERR_ADMIN_NOT_OWNER, ERR_INVALID_IMPLEMENTATION, ERR_UNAUTHORIZED};

/// Admin and implementation pointer. Both live under the `dispatcher:`
/// key prefix, which no business module writes to.
#[multiversx_sc::module]
pub trait DispatcherModule {
    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);
    }

    fn require_admin_is_owner(&self, admin: &ManagedAddress) {
        require!(
            *admin == self.blockchain().get_owner_address(),
            ERR_ADMIN_NOT_OWNER
        );
    }

    fn require_valid_implementation(&self, implementation: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(implementation)
                && *implementation != self.blockchain().get_sc_address(),
            ERR_INVALID_IMPLEMENTATION
        );
    }

    fn install_implementation(&self, implementation: &ManagedAddress) {
        let previous = self.get_implementation();
        self.implementation().set(implementation);
        self.upgraded_event(&previous, implementation);
    }

    /// The source contract the admin named in the last deploy or upgrade.
    /// This is the admin's record, not a reading of the installed code.
    /// Zero address on template instances, which never point anywhere.
    #[view(getImplementation)]
    fn get_implementation(&self) -> ManagedAddress {
        if self.implementation().is_empty() {
            return ManagedAddress::zero();
        }
        self.implementation().get()
    }

    #[event("upgraded")]
    fn upgraded_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] implementation: &ManagedAddress,
    );

    #[view(getAdmin)]
    #[storage_mapper("dispatcher:admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("dispatcher:implementation")]
    fn implementation(&self) -> SingleValueMapper<ManagedAddress>;
}
