multiversx_sc::imports!();

use crate::errors::{
    ERR_INSUFFICIENT_TOKENS, ERR_NO_VOTING_SESSION, ERR_VOTING_ALREADY_ACTIVE,
    ERR_VOTING_NOT_ACTIVE, ERR_VOTING_STILL_ACTIVE,
};
use crate::{BPS_DENOMINATOR, MIN_PARTICIPATION_BPS};

#[multiversx_sc::module]
pub trait VotingModule: crate::ledger::LedgerModule + crate::lock::TransferLockModule {
    // ========================================================
    // ENDPOINT: startVoting
    // Opens a new session. Rejected while the previous one has
    // not been ended, so no voter is released without endVoting.
    // ========================================================

    #[endpoint(startVoting)]
    fn start_voting(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_eligible(&caller), ERR_INSUFFICIENT_TOKENS);
        require!(!self.session_open().get(), ERR_VOTING_ALREADY_ACTIVE);

        let voting_number = self.voting_number().get() + 1;
        let start_time = self.blockchain().get_block_timestamp();

        self.voting_number().set(voting_number);
        self.voting_started_time().set(start_time);
        self.session_open().set(true);

        self.voting_started_event(voting_number, start_time);
    }

    // ========================================================
    // ENDPOINT: vote
    // Records an opaque proposal value and locks the voter's
    // transfers until the session is ended. Voting again in the
    // same session overwrites the previous value.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_value: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(self.is_eligible(&caller), ERR_INSUFFICIENT_TOKENS);
        require!(self.is_voting_active(), ERR_VOTING_NOT_ACTIVE);

        let voting_number = self.voting_number().get();
        self.locked_session(&caller).set(voting_number);
        self.proposal(voting_number, &caller).set(&proposal_value);

        self.vote_event(voting_number, &caller, &proposal_value);
    }

    // ========================================================
    // ENDPOINT: endVoting
    // Anyone can close a session once its window has elapsed.
    // ========================================================

    #[endpoint(endVoting)]
    fn end_voting(&self) {
        require!(self.session_open().get(), ERR_NO_VOTING_SESSION);
        require!(!self.is_voting_active(), ERR_VOTING_STILL_ACTIVE);

        self.session_open().set(false);

        let now = self.blockchain().get_block_timestamp();
        self.voting_ended_event(self.voting_number().get(), now);
    }

    /// balance / totalSupply >= 5 bps, compared without division.
    #[view(isEligible)]
    fn is_eligible(&self, account: &ManagedAddress) -> bool {
        let balance = self.balance(account).get();
        let total_supply = self.total_supply().get();
        &balance * BPS_DENOMINATOR >= &total_supply * MIN_PARTICIPATION_BPS
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("votingStarted")]
    fn voting_started_event(&self, #[indexed] voting_number: u64, #[indexed] start_time: u64);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voting_number: u64,
        #[indexed] voter: &ManagedAddress,
        proposal_value: &BigUint,
    );

    #[event("votingEnded")]
    fn voting_ended_event(&self, #[indexed] voting_number: u64, #[indexed] end_time: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposal)]
    #[storage_mapper("voting:proposal")]
    fn proposal(&self, voting_number: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
