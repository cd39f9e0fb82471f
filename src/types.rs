multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Voting State: derived from session flag and clock
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum VotingState {
    /// No session open. Transfers are unrestricted.
    Idle,
    /// Inside `[started_at, ends_at)`. Voting allowed, voters locked.
    Active,
    /// Window elapsed but `endVoting` not called yet. Voters stay locked.
    AwaitingEnd,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VotingSession {
    pub voting_number: u64,
    pub started_at: u64,
    pub ends_at: u64,
    pub state: VotingState,
}

// ============================================================
// Exchange Config: pricing snapshot for clients
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ExchangeConfig<M: ManagedTypeApi> {
    pub token_price: BigUint<M>,
    pub buy_fee_bps: u64,
    pub sell_fee_bps: u64,
}
