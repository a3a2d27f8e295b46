multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_DEPOSIT, ERROR_INSUFFICIENT_LIQUIDITY};
use common_structs::LendPosition;

use crate::{cache::PoolCache, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionLendModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Supplies the unit-of-account asset to the pool.
    ///
    /// Pending interest of an existing position is settled before the principal grows.
    ///
    /// # Arguments
    /// - `amount`: Amount supplied, must equal the attached payment.
    ///
    /// # Payment
    /// - Exactly `amount` of the unit-of-account asset.
    #[payable]
    #[endpoint(depositLend)]
    fn deposit_lend(&self, amount: BigUint) {
        self.require_amount_greater_than_zero(&amount);

        let mut cache = PoolCache::new(self);
        self.require_payment(&cache.lend_token, &amount);

        let caller = self.blockchain().get_caller();
        let lend_mapper = self.lend_positions(&caller);
        let mut position = if lend_mapper.is_empty() {
            LendPosition::new(cache.timestamp)
        } else {
            lend_mapper.get()
        };

        self.settle_lend_interest(&mut position, &cache);
        position.principal += &amount;
        cache.total_lend += &amount;

        lend_mapper.set(&position);

        self.deposit_lend_event(&caller, &amount, &cache.total_lend);
        self.emit_status(&cache);
    }

    /// Withdraws supplied principal.
    ///
    /// Only liquidity that is not lent out can leave the pool.
    ///
    /// # Arguments
    /// - `amount`: Principal to withdraw.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_DEPOSIT`: `amount` exceeds the caller's principal.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: the withdrawal would leave less lent than borrowed.
    #[endpoint(depositLendWithdraw)]
    fn deposit_lend_withdraw(&self, amount: BigUint) {
        self.require_amount_greater_than_zero(&amount);

        let caller = self.blockchain().get_caller();
        let lend_mapper = self.lend_positions(&caller);
        require!(!lend_mapper.is_empty(), ERROR_INSUFFICIENT_DEPOSIT);

        let mut position = lend_mapper.get();
        require!(amount <= position.principal, ERROR_INSUFFICIENT_DEPOSIT);

        let mut cache = PoolCache::new(self);
        require!(cache.can_withdraw(&amount), ERROR_INSUFFICIENT_LIQUIDITY);

        self.settle_lend_interest(&mut position, &cache);
        position.principal -= &amount;
        cache.total_lend -= &amount;

        lend_mapper.set(&position);

        self.deposit_lend_withdraw_event(&caller, &amount, &cache.total_lend);
        self.emit_status(&cache);

        let lend_token = cache.lend_token.clone();
        drop(cache);

        self.send_asset(&lend_token, &amount, &caller);
    }
}
