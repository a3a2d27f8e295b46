multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BorrowPosition, CollateralConfig, LendPosition, TimestampedPrice};

/// On-chain state of the pool: parameters, ledgers and the collateral registry.
#[multiversx_sc::module]
pub trait Storage {
    /// Address collecting protocol fees.
    #[view(getFeeReceiver)]
    #[storage_mapper("fee_receiver")]
    fn fee_receiver(&self) -> SingleValueMapper<ManagedAddress>;

    /// Governance token of the pool, informational only.
    #[view(getAaveTokenAddress)]
    #[storage_mapper("governance_token")]
    fn governance_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// The unit-of-account asset that is lent, borrowed and repaid.
    #[view(getUsdcTokenAddress)]
    #[storage_mapper("lend_token")]
    fn lend_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Address of the price oracle contract.
    #[view(getChainlinkAddress)]
    #[storage_mapper("price_oracle_address")]
    fn price_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Yearly interest rate paid on lend principal, `RATIO_SCALE`-scaled.
    #[view(getInterestRate)]
    #[storage_mapper("interest_rate")]
    fn interest_rate(&self) -> SingleValueMapper<BigUint>;

    /// Share of the repaid value reserved for the protocol on liquidation.
    #[view(getLiquidationPenaltyFeeRate4Protocol)]
    #[storage_mapper("liquidation_penalty_protocol")]
    fn liquidation_penalty_protocol(&self) -> SingleValueMapper<BigUint>;

    /// Bonus paid to the liquidator on top of the repaid value.
    #[view(getLiquidationPenaltyFeeRate4Cleaner)]
    #[storage_mapper("liquidation_penalty_cleaner")]
    fn liquidation_penalty_cleaner(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalLend)]
    #[storage_mapper("total_lend")]
    fn total_lend(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalBorrow)]
    #[storage_mapper("total_borrow")]
    fn total_borrow(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lend_positions")]
    fn lend_positions(&self, user: &ManagedAddress) -> SingleValueMapper<LendPosition<Self::Api>>;

    /// Registered collateral assets and their risk parameters.
    #[storage_mapper("collateral_configs")]
    fn collateral_configs(
        &self,
    ) -> MapMapper<EgldOrEsdtTokenIdentifier, CollateralConfig<Self::Api>>;

    /// Sum of the outstanding debt backed by `asset`.
    #[storage_mapper("collateral_borrowed")]
    fn collateral_borrowed(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("borrow_positions")]
    fn borrow_positions(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BorrowPosition<Self::Api>>;

    /// Borrowers holding debt against `asset`.
    #[storage_mapper("borrowers")]
    fn borrowers(&self, asset: &EgldOrEsdtTokenIdentifier) -> UnorderedSetMapper<ManagedAddress>;

    /// Protocol share of liquidations against `asset`, in collateral units.
    #[view(getProtocolLiquidationFees)]
    #[storage_mapper("protocol_liquidation_fees")]
    fn protocol_liquidation_fees(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Price records of the oracle contract.
    #[storage_mapper_from_address("prices")]
    fn oracle_prices(
        &self,
        oracle_address: ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>, ManagedAddress>;

    /// Pause flag of the oracle contract.
    #[storage_mapper_from_address("pause_module:paused")]
    fn oracle_paused_state(
        &self,
        oracle_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
