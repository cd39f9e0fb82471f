multiversx_sc::imports!();

use crate::errors::{
    ERR_INSUFFICIENT_BALANCE, ERR_INSUFFICIENT_LIQUIDITY, ERR_INSUFFICIENT_PAYMENT,
    ERR_ZERO_AMOUNT,
};
use crate::{BPS_DENOMINATOR, TOKEN_SCALE};

// ============================================================
// Price and fee math. All divisions truncate toward zero.
// ============================================================

/// Atomic token units bought by `payment` at `token_price` per whole token.
pub fn tokens_for_payment<M: ManagedTypeApi>(
    payment: &BigUint<M>,
    token_price: &BigUint<M>,
) -> BigUint<M> {
    (payment * TOKEN_SCALE) / token_price
}

/// Native-currency refund for `tokens` atomic units.
pub fn payment_for_tokens<M: ManagedTypeApi>(
    tokens: &BigUint<M>,
    token_price: &BigUint<M>,
) -> BigUint<M> {
    (tokens * token_price) / TOKEN_SCALE
}

/// Returns `(net, fee)`. The fee is computed first and the net part is
/// the remainder, so `net + fee == amount` and neither goes negative.
pub fn split_fee<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    fee_bps: u64,
) -> (BigUint<M>, BigUint<M>) {
    let fee = (amount * fee_bps) / BPS_DENOMINATOR;
    let net = amount - &fee;
    (net, fee)
}

#[multiversx_sc::module]
pub trait ExchangeModule:
    crate::ledger::LedgerModule + crate::lock::TransferLockModule + crate::config::ConfigModule
{
    // ========================================================
    // ENDPOINT: buy
    // Mints at the configured price; the fee share is minted to
    // the contract's own account.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(buy)]
    fn buy(&self) {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        let gross_tokens = tokens_for_payment(&payment, &self.token_price().get());
        require!(gross_tokens > 0u64, ERR_INSUFFICIENT_PAYMENT);

        let (net_tokens, fee_tokens) = split_fee(&gross_tokens, self.buy_fee_bps().get());

        self.mint(&caller, &net_tokens);
        self.mint(&self.blockchain().get_sc_address(), &fee_tokens);
        self.accumulated_fees().update(|fees| *fees += &fee_tokens);

        self.buy_event(&caller, &payment, &net_tokens, &fee_tokens);
    }

    // ========================================================
    // ENDPOINT: sell
    // Burns the net part and keeps the fee part as contract-owned
    // balance, mirroring the buy side.
    // ========================================================

    #[endpoint(sell)]
    fn sell(&self, tokens: BigUint) {
        require!(tokens > 0u64, ERR_ZERO_AMOUNT);
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        require!(
            self.balance(&caller).get() >= tokens,
            ERR_INSUFFICIENT_BALANCE
        );

        let (net_tokens, fee_tokens) = split_fee(&tokens, self.sell_fee_bps().get());
        let refund = payment_for_tokens(&net_tokens, &self.token_price().get());

        let liquidity = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(liquidity >= refund, ERR_INSUFFICIENT_LIQUIDITY);

        self.move_balance(&caller, &self.blockchain().get_sc_address(), &fee_tokens);
        self.burn(&caller, &net_tokens);
        self.accumulated_fees().update(|fees| *fees += &fee_tokens);

        if refund > 0u64 {
            self.send().direct_egld(&caller, &refund);
        }

        self.sell_event(&caller, &tokens, &refund, &fee_tokens);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("buy")]
    fn buy_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] payment: &BigUint,
        #[indexed] net_tokens: &BigUint,
        fee_tokens: &BigUint,
    );

    #[event("sell")]
    fn sell_event(
        &self,
        #[indexed] seller: &ManagedAddress,
        #[indexed] tokens: &BigUint,
        #[indexed] refund: &BigUint,
        fee_tokens: &BigUint,
    );
}
