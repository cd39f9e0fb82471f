#![allow(dead_code, deprecated)]

use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{Address, BigUint};
use multiversx_sc_scenario::{
    managed_address, num_bigint, rust_biguint, whitebox_legacy::*, DebugApi,
};
use voting_token::config::ConfigModule;
use voting_token::exchange::ExchangeModule;
use voting_token::ledger::LedgerModule;
use voting_token::{VotingToken, TOKEN_SCALE};

pub const WASM_PATH: &str = "output/voting-token.wasm";

/// 0.002 EGLD per whole token
pub const TOKEN_PRICE: u64 = 2_000_000_000_000_000;
pub const BUY_FEE_BPS: u64 = 500;
pub const SELL_FEE_BPS: u64 = 200;

pub const ONE_EGLD: u64 = 1_000_000_000_000_000_000;
pub const START_TIMESTAMP: u64 = 1_000_000;

pub type TokenContract = voting_token::ContractObj<DebugApi>;
pub type TokenBuilder = fn() -> TokenContract;
pub type TokenWrapper = ContractObjWrapper<TokenContract, TokenBuilder>;

/// `hundredths` of a whole token, in atomic units.
pub fn tokens(hundredths: u64) -> BigUint<DebugApi> {
    BigUint::from(hundredths) * BigUint::from(TOKEN_SCALE / 100)
}

/// Any `u64`, including values above `i64::MAX`.
pub fn managed_amount(amount: u64) -> BigUint<DebugApi> {
    BigUint::from_bytes_be(&amount.to_be_bytes())
}

pub fn egld(amount: u64) -> num_bigint::BigUint {
    rust_biguint!(ONE_EGLD) * amount
}

pub struct VotingTokenSetup {
    pub b_mock: BlockchainStateWrapper,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
    pub implementation: TokenWrapper,
    pub token: TokenWrapper,
}

impl VotingTokenSetup {
    /// Template plus dispatcher, not yet initialized.
    pub fn deploy() -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();
        b_mock.set_block_timestamp(START_TIMESTAMP);

        let admin = b_mock.create_user_account(&rust_zero);
        let alice = b_mock.create_user_account(&egld(100));
        let bob = b_mock.create_user_account(&egld(100));
        let carol = b_mock.create_user_account(&egld(100));

        let builder: TokenBuilder = voting_token::contract_obj;
        let implementation = b_mock.create_sc_account(&rust_zero, Some(&admin), builder, WASM_PATH);
        let token = b_mock.create_sc_account(&rust_zero, Some(&admin), builder, WASM_PATH);

        b_mock
            .execute_tx(&admin, &implementation, &rust_zero, |sc| {
                sc.init(managed_address!(&admin), OptionalValue::None);
            })
            .assert_ok();

        let implementation_address = implementation.address_ref().clone();
        b_mock
            .execute_tx(&admin, &token, &rust_zero, |sc| {
                sc.init(
                    managed_address!(&admin),
                    OptionalValue::Some(managed_address!(&implementation_address)),
                );
            })
            .assert_ok();

        VotingTokenSetup {
            b_mock,
            admin,
            alice,
            bob,
            carol,
            implementation,
            token,
        }
    }

    /// Dispatcher initialized with the default price and fees.
    pub fn new() -> Self {
        let mut setup = Self::deploy();
        setup
            .initialize(TOKEN_PRICE, BUY_FEE_BPS, SELL_FEE_BPS)
            .assert_ok();
        setup
    }

    pub fn initialize(
        &mut self,
        token_price: u64,
        buy_fee_bps: u64,
        sell_fee_bps: u64,
    ) -> TxResult {
        self.b_mock
            .execute_tx(&self.admin, &self.token, &rust_biguint!(0u64), |sc| {
                sc.initialize(managed_amount(token_price), buy_fee_bps, sell_fee_bps);
            })
    }

    /// Seeds supply and a balance directly, like a genesis allocation.
    /// Keeps the supply invariant only if `total_supply` covers every seeded balance.
    pub fn seed(&mut self, total_supply: u64, balances: &[(&Address, u64)]) {
        let balances: Vec<(Address, u64)> = balances
            .iter()
            .map(|(address, amount)| ((*address).clone(), *amount))
            .collect();
        self.b_mock
            .execute_tx(&self.admin, &self.token, &rust_biguint!(0u64), |sc| {
                sc.total_supply().set(managed_amount(total_supply));
                for (address, amount) in balances.iter() {
                    sc.balance(&managed_address!(address))
                        .set(managed_amount(*amount));
                }
            })
            .assert_ok();
    }

    pub fn buy(&mut self, buyer: &Address, payment: u64) -> TxResult {
        self.b_mock
            .execute_tx(buyer, &self.token, &rust_biguint!(payment), |sc| {
                sc.buy();
            })
    }

    pub fn sell(&mut self, seller: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(seller, &self.token, &rust_biguint!(0u64), |sc| {
                sc.sell(managed_amount(amount));
            })
    }

    pub fn transfer(&mut self, from: &Address, to: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(from, &self.token, &rust_biguint!(0u64), |sc| {
                sc.transfer(managed_address!(to), managed_amount(amount));
            })
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    /// totalSupply == sum of every known balance, contract included.
    pub fn check_supply_invariant(&mut self) {
        let holders = [
            self.admin.clone(),
            self.alice.clone(),
            self.bob.clone(),
            self.carol.clone(),
            self.token.address_ref().clone(),
        ];
        self.b_mock
            .execute_query(&self.token, |sc| {
                let mut sum = BigUint::<DebugApi>::zero();
                for holder in holders.iter() {
                    sum += sc.balance(&managed_address!(holder)).get();
                }
                assert_eq!(sc.total_supply().get(), sum);
                assert!(sc.accumulated_fees().get() <= sc.total_supply().get());
            })
            .assert_ok();
    }
}

/// Event identifiers of every log a transaction emitted, in order.
pub fn log_identifiers(result: &TxResult) -> Vec<Vec<u8>> {
    result
        .result_logs
        .iter()
        .map(|log| log.topics[0].clone())
        .collect()
}

/// Indexed topics of one log, identifier excluded.
pub fn log_topics(result: &TxResult, index: usize) -> Vec<Vec<u8>> {
    result.result_logs[index].topics[1..].to_vec()
}

pub fn address_topic(address: &Address) -> Vec<u8> {
    address.as_bytes().to_vec()
}

/// Top-encoded `u64`: big-endian, leading zero bytes stripped.
pub fn u64_topic(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[first..].to_vec()
}
