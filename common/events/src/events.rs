#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit_lend")]
    fn deposit_lend_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_lend: &BigUint,
    );

    #[event("deposit_lend_withdraw")]
    fn deposit_lend_withdraw_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_lend: &BigUint,
    );

    // amount is the collateral deposited, granted the unit-of-account sent out
    #[event("deposit_borrow")]
    fn deposit_borrow_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] granted: &BigUint,
    );

    #[event("deposit_borrow_withdraw")]
    fn deposit_borrow_withdraw_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] collateral_released: &BigUint,
    );

    // protocol_fee is denominated in collateral units and stays in the pool
    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] seized: &BigUint,
        #[indexed] protocol_fee: &BigUint,
    );

    #[event("calculate_borrowable")]
    fn calculate_borrowable_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] borrowable: &BigUint,
    );

    #[event("status_changed")]
    fn status_changed_event(
        &self,
        #[indexed] utilization_rate: &BigUint,
        #[indexed] total_borrow: &BigUint,
        #[indexed] total_lend: &BigUint,
        #[indexed] interest_rate: &BigUint,
    );

    #[event("collateral_changed")]
    fn collateral_changed_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] utilization_rate: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] borrowable: &BigUint,
        #[indexed] config: &CollateralConfig<Self::Api>,
    );

    #[event("pool_params_changed")]
    fn pool_params_changed_event(
        &self,
        #[indexed] param: &ManagedBuffer,
        #[indexed] value: &BigUint,
    );
}
