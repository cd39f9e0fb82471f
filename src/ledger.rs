multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_TRANSFER_LOCKED};

// ============================================================
// Ledger: balances, supply and fee counters
//
// Invariant: sum of every balance, the contract's own fee
// balance included, equals `totalSupply`.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::lock::TransferLockModule {
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            self.balance(&caller).get() >= amount,
            ERR_INSUFFICIENT_BALANCE
        );
        require!(!self.is_transfer_locked(&caller), ERR_TRANSFER_LOCKED);

        self.move_balance(&caller, &to, &amount);
    }

    // ========================================================
    // INTERNAL: balance movements, each one logged as `transfer`
    // ========================================================

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        self.balance(from).update(|b| *b -= amount);
        self.balance(to).update(|b| *b += amount);
        self.transfer_event(from, to, amount);
    }

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balance(to).update(|b| *b += amount);
        self.total_supply().update(|supply| *supply += amount);
        self.transfer_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn(&self, from: &ManagedAddress, amount: &BigUint) {
        self.balance(from).update(|b| *b -= amount);
        self.total_supply().update(|supply| *supply -= amount);
        self.transfer_event(from, &ManagedAddress::zero(), amount);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    /// Zero address as `from` is a mint, as `to` a burn.
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(balanceOf)]
    #[storage_mapper("ledger:balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("ledger:totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Fee tokens held by the contract's own account
    #[view(accumulatedFees)]
    #[storage_mapper("ledger:accumulatedFees")]
    fn accumulated_fees(&self) -> SingleValueMapper<BigUint>;
}
