multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_INITIALIZED, ERR_INVALID_FEE, ERR_INVALID_TOKEN_PRICE, ERR_NOT_INITIALIZED,
};
use crate::types::ExchangeConfig;
use crate::BPS_DENOMINATOR;

/// Pricing and fee configuration, written exactly once through `initialize`.
#[multiversx_sc::module]
pub trait ConfigModule {
    #[endpoint(initialize)]
    fn initialize(&self, token_price: BigUint, buy_fee_bps: u64, sell_fee_bps: u64) {
        require!(!self.initialized().get(), ERR_ALREADY_INITIALIZED);
        require!(token_price > 0u64, ERR_INVALID_TOKEN_PRICE);
        require!(
            buy_fee_bps <= BPS_DENOMINATOR && sell_fee_bps <= BPS_DENOMINATOR,
            ERR_INVALID_FEE
        );

        self.token_price().set(&token_price);
        self.buy_fee_bps().set(buy_fee_bps);
        self.sell_fee_bps().set(sell_fee_bps);
        self.initialized().set(true);

        let caller = self.blockchain().get_caller();
        self.initialized_event(&caller, &token_price, buy_fee_bps, sell_fee_bps);
    }

    /// Template instances never hold live state, so their guard is set at deploy.
    fn disable_initializers(&self) {
        self.initialized().set(true);
        self.initializers_disabled_event(&self.blockchain().get_sc_address());
    }

    fn require_initialized(&self) {
        require!(self.initialized().get(), ERR_NOT_INITIALIZED);
    }

    #[view(getExchangeConfig)]
    fn get_exchange_config(&self) -> ExchangeConfig<Self::Api> {
        ExchangeConfig {
            token_price: self.token_price().get(),
            buy_fee_bps: self.buy_fee_bps().get(),
            sell_fee_bps: self.sell_fee_bps().get(),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initialized")]
    fn initialized_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token_price: &BigUint,
        #[indexed] buy_fee_bps: u64,
        sell_fee_bps: u64,
    );

    #[event("initializersDisabled")]
    fn initializers_disabled_event(&self, #[indexed] instance: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(isInitialized)]
    #[storage_mapper("init:initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    /// Native-currency units per whole token
    #[view(tokenPrice)]
    #[storage_mapper("exchange:tokenPrice")]
    fn token_price(&self) -> SingleValueMapper<BigUint>;

    #[view(buyFeeBps)]
    #[storage_mapper("exchange:buyFeeBps")]
    fn buy_fee_bps(&self) -> SingleValueMapper<u64>;

    #[view(sellFeeBps)]
    #[storage_mapper("exchange:sellFeeBps")]
    fn sell_fee_bps(&self) -> SingleValueMapper<u64>;
}
