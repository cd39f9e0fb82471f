#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod exchange;
pub mod ledger;
pub mod lock;
pub mod types;
pub mod voting;

// ============================================================
// Constants
// ============================================================

/// 1 whole token = 10^18 atomic units
pub const TOKEN_SCALE: u64 = 1_000_000_000_000_000_000;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// 0.05% of total supply (5 basis points) to start or join a voting session
pub const MIN_PARTICIPATION_BPS: u64 = 5;

/// Voting window: 24 hours in seconds
pub const TIME_TO_VOTE: u64 = 86_400;

// ============================================================
// Contract
// ============================================================

/// The deployed instance is the dispatcher: its address and storage stay
/// fixed while the code behind it is swapped through `upgrade`.
#[multiversx_sc::contract]
pub trait VotingToken:
    config::ConfigModule
    + dispatcher::DispatcherModule
    + lock::TransferLockModule
    + ledger::LedgerModule
    + exchange::ExchangeModule
    + voting::VotingModule
{
    // ========================================================
    // Deploy / Upgrade
    // ========================================================

    /// Without an `implementation` argument the instance is a bare
    /// implementation template and its initializer is locked for good.
    ///
    /// Only the owner can send an upgrade transaction, so the admin must be
    /// the owner or `upgrade` could never pass its admin check.
    #[init]
    fn init(&self, admin: ManagedAddress, implementation: OptionalValue<ManagedAddress>) {
        self.require_admin_is_owner(&admin);
        self.admin().set(&admin);

        match implementation {
            OptionalValue::Some(implementation) => {
                self.require_valid_implementation(&implementation);
                self.install_implementation(&implementation);
            },
            OptionalValue::None => self.disable_initializers(),
        }
    }

    /// Runs inside the freshly installed code. Panicking here aborts the
    /// whole upgrade and keeps the previous code in place.
    #[upgrade]
    fn upgrade(&self, new_implementation: ManagedAddress) {
        self.require_admin();
        self.require_valid_implementation(&new_implementation);
        self.install_implementation(&new_implementation);
    }
}
