#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait LendingPool:
    positions::lend::PositionLendModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + views::ViewsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes the pool.
    ///
    /// # Arguments
    /// - `fee_receiver`: Address collecting protocol fees.
    /// - `governance_token`: Governance token of the pool, informational.
    /// - `lend_token`: Unit-of-account asset that is lent and borrowed.
    /// - `price_oracle_address`: Oracle pricing the collateral assets.
    #[init]
    fn init(
        &self,
        fee_receiver: ManagedAddress,
        governance_token: EgldOrEsdtTokenIdentifier,
        lend_token: EgldOrEsdtTokenIdentifier,
        price_oracle_address: ManagedAddress,
    ) {
        self.require_non_zero_address(&fee_receiver);
        self.require_non_zero_address(&price_oracle_address);
        require!(lend_token.is_valid(), ERROR_INVALID_ASSET);

        self.fee_receiver().set(&fee_receiver);
        self.governance_token().set(&governance_token);
        self.lend_token().set(&lend_token);
        self.price_oracle_address().set(&price_oracle_address);

        self.total_lend().set(BigUint::zero());
        self.total_borrow().set(BigUint::zero());
        self.interest_rate().set(BigUint::zero());
        self.liquidation_penalty_protocol().set(BigUint::zero());
        self.liquidation_penalty_cleaner().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
