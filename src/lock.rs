multiversx_sc::imports!();

use crate::errors::ERR_TIMESTAMP_OVERFLOW;
use crate::types::{VotingSession, VotingState};
use crate::TIME_TO_VOTE;

/// Voting session state and the per-account transfer lock.
///
/// A vote stamps the voter with the current `votingNumber`. The lock is
/// evaluated lazily: it holds while that stamp equals the current session
/// number and the session has not been ended. Ending a session therefore
/// releases every voter at once without touching their entries.
#[multiversx_sc::module]
pub trait TransferLockModule {
    #[view(isTransferLocked)]
    fn is_transfer_locked(&self, account: &ManagedAddress) -> bool {
        self.session_open().get()
            && self.locked_session(account).get() == self.voting_number().get()
    }

    /// True only inside `[votingStartedTime, votingStartedTime + timeToVote)`
    /// of a session that has not been ended.
    #[view(isVotingActive)]
    fn is_voting_active(&self) -> bool {
        if !self.session_open().get() {
            return false;
        }
        self.blockchain().get_block_timestamp() < self.voting_deadline()
    }

    fn voting_deadline(&self) -> u64 {
        match self.voting_started_time().get().checked_add(TIME_TO_VOTE) {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_TIMESTAMP_OVERFLOW),
        }
    }

    #[view(getVotingSession)]
    fn get_voting_session(&self) -> VotingSession {
        let state = if self.is_voting_active() {
            VotingState::Active
        } else if self.session_open().get() {
            VotingState::AwaitingEnd
        } else {
            VotingState::Idle
        };

        VotingSession {
            voting_number: self.voting_number().get(),
            started_at: self.voting_started_time().get(),
            ends_at: self.voting_deadline(),
            state,
        }
    }

    #[view(timeToVote)]
    fn time_to_vote(&self) -> u64 {
        TIME_TO_VOTE
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Starts at 0, incremented by every `startVoting`
    #[view(votingNumber)]
    #[storage_mapper("voting:votingNumber")]
    fn voting_number(&self) -> SingleValueMapper<u64>;

    #[view(votingStartedTime)]
    #[storage_mapper("voting:votingStartedTime")]
    fn voting_started_time(&self) -> SingleValueMapper<u64>;

    #[view(isSessionOpen)]
    #[storage_mapper("voting:sessionOpen")]
    fn session_open(&self) -> SingleValueMapper<bool>;

    #[view(getLockedSession)]
    #[storage_mapper("voting:lockedSession")]
    fn locked_session(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
