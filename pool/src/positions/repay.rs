multiversx_sc::imports!();

use common_errors::{ERROR_DEBT_OUTSTANDING, ERROR_NO_COLLATERAL, ERROR_NO_DEBT};

use crate::{cache::PoolCache, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays debt backed by `asset` and releases collateral in proportion.
    ///
    /// A full repayment releases all remaining collateral. Any payment above
    /// the outstanding debt is refunded.
    ///
    /// # Arguments
    /// - `asset`: Collateral asset backing the debt.
    /// - `amount`: Amount repaid, must equal the attached payment.
    ///
    /// # Payment
    /// - Exactly `amount` of the unit-of-account asset.
    ///
    /// # Errors
    /// - `ERROR_NO_DEBT`: the caller has no debt against `asset`.
    #[payable]
    #[endpoint(depositBorrowWithdraw)]
    fn deposit_borrow_withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_amount_greater_than_zero(&amount);
        self.require_collateral(&asset);

        let mut cache = PoolCache::new(self);
        self.require_payment(&cache.lend_token, &amount);

        let caller = self.blockchain().get_caller();
        let mut position = self.get_borrow_position(&asset, &caller);
        require!(position.is_open(), ERROR_NO_DEBT);

        let repaid = self.get_min(amount.clone(), position.debt.clone());
        let released = if repaid == position.debt {
            position.collateral.clone()
        } else {
            self.mul_div_floor(&position.collateral, &repaid, &position.debt)
        };

        position.debt -= &repaid;
        position.collateral -= &released;
        self.store_borrow_position(&asset, &caller, &position);

        self.collateral_borrowed(&asset)
            .update(|borrowed| *borrowed -= &repaid);
        cache.total_borrow -= &repaid;

        self.deposit_borrow_withdraw_event(&caller, &asset, &repaid, &released);
        self.emit_borrowable(&asset, &cache);
        self.emit_status(&cache);

        let lend_token = cache.lend_token.clone();
        drop(cache);

        self.send_asset(&asset, &released, &caller);
        self.send_asset(&lend_token, &(amount - repaid), &caller);
    }

    /// Returns the collateral left on a position without debt, typically after a liquidation.
    ///
    /// # Errors
    /// - `ERROR_NO_COLLATERAL`: nothing to claim.
    /// - `ERROR_DEBT_OUTSTANDING`: the position still carries debt.
    #[endpoint(claimCollateral)]
    fn claim_collateral(&self, asset: EgldOrEsdtTokenIdentifier) {
        let caller = self.blockchain().get_caller();
        let mut position = self.get_borrow_position(&asset, &caller);
        require!(!position.is_open(), ERROR_DEBT_OUTSTANDING);
        require!(position.collateral > 0u64, ERROR_NO_COLLATERAL);

        let released = core::mem::replace(&mut position.collateral, BigUint::zero());
        self.store_borrow_position(&asset, &caller, &position);

        self.deposit_borrow_withdraw_event(&caller, &asset, &BigUint::zero(), &released);

        self.send_asset(&asset, &released, &caller);
    }
}
