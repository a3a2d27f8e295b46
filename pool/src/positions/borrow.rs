multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_CAPACITY;

use crate::{cache::PoolCache, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Deposits collateral and borrows the unit-of-account asset against it.
    ///
    /// The loan is the collateral value times the collateralization ratio,
    /// capped by the asset's share of idle pool liquidity.
    ///
    /// # Arguments
    /// - `asset`: Registered collateral asset.
    /// - `amount`: Collateral amount, must equal the attached payment.
    ///
    /// # Payment
    /// - Exactly `amount` of `asset`.
    ///
    /// # Errors
    /// - `ERROR_ASSET_NOT_SUPPORTED`: `asset` is not registered.
    /// - `ERROR_INSUFFICIENT_CAPACITY`: nothing can be granted.
    #[payable]
    #[endpoint(depositBorrow)]
    fn deposit_borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_amount_greater_than_zero(&amount);
        let config = self.require_collateral(&asset);
        self.require_payment(&asset, &amount);

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self);

        let price = self.get_asset_price(&asset);
        let max_borrow = self.max_borrow_for(&amount, &price, &config.collateralization_ratio);
        let capacity = self.borrowing_capacity(&cache.available_liquidity());
        let granted = self.get_min(max_borrow, capacity);
        require!(granted > 0u64, ERROR_INSUFFICIENT_CAPACITY);

        let mut position = self.get_borrow_position(&asset, &caller);
        position.collateral += &amount;
        position.debt += &granted;
        self.store_borrow_position(&asset, &caller, &position);

        self.collateral_borrowed(&asset)
            .update(|borrowed| *borrowed += &granted);
        cache.total_borrow += &granted;

        self.deposit_borrow_event(&caller, &asset, &amount, &granted);
        self.emit_borrowable(&asset, &cache);
        self.emit_status(&cache);

        let lend_token = cache.lend_token.clone();
        drop(cache);

        self.send_asset(&lend_token, &granted, &caller);
    }
}
