multiversx_sc::imports!();

use common_errors::{ERROR_HEALTH_FACTOR, ERROR_NO_DEBT};
use common_structs::LiquidationCandidate;

use crate::{cache::PoolCache, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists every borrower against `asset` whose health factor is below the asset's threshold.
    ///
    /// Prices are read at call time. The order of the result is not meaningful.
    #[view(checkLiquidate)]
    fn check_liquidate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> MultiValueEncoded<LiquidationCandidate<Self::Api>> {
        let config = self.require_collateral(&asset);

        let mut result = MultiValueEncoded::new();
        let borrowers = self.borrowers(&asset);
        if borrowers.is_empty() {
            return result;
        }

        let price = self.get_asset_price(&asset);
        for borrower in borrowers.iter() {
            let position = self.borrow_positions(&asset, &borrower).get();
            let health_factor = self.position_health_factor(&config, &position, &price);

            if health_factor < config.health_factor_threshold {
                result.push(LiquidationCandidate {
                    borrower,
                    health_factor,
                    collateral: position.collateral,
                    debt: position.debt,
                });
            }
        }

        result
    }

    /// Repays debt of an unhealthy position and seizes its collateral plus the liquidator bonus.
    ///
    /// Health is re-checked with the current price. Only the outstanding debt is
    /// taken; the rest of the payment is refunded. The seizure is capped at the
    /// collateral the position holds. The protocol share is then taken from
    /// what is left of the collateral, capped at that remainder, and stays in
    /// the pool as `protocolLiquidationFees`.
    ///
    /// # Arguments
    /// - `asset`: Collateral asset of the position.
    /// - `borrower`: Owner of the position.
    /// - `repay_amount`: Amount offered, must equal the attached payment.
    ///
    /// # Payment
    /// - Exactly `repay_amount` of the unit-of-account asset.
    ///
    /// # Errors
    /// - `ERROR_NO_DEBT`: `borrower` has no debt against `asset`.
    /// - `ERROR_HEALTH_FACTOR`: the position is healthy.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        borrower: ManagedAddress,
        repay_amount: BigUint,
    ) {
        self.require_amount_greater_than_zero(&repay_amount);
        let config = self.require_collateral(&asset);

        let mut cache = PoolCache::new(self);
        self.require_payment(&cache.lend_token, &repay_amount);

        let mut position = self.get_borrow_position(&asset, &borrower);
        require!(position.is_open(), ERROR_NO_DEBT);

        let price = self.get_asset_price(&asset);
        let health_factor = self.position_health_factor(&config, &position, &price);
        require!(
            health_factor < config.health_factor_threshold,
            ERROR_HEALTH_FACTOR
        );

        let repaid = self.get_min(repay_amount.clone(), position.debt.clone());

        let bonus = self.liquidation_penalty_cleaner().get();
        let seized = self.get_min(
            self.collateral_for_value(&repaid, &price, &bonus),
            position.collateral.clone(),
        );

        position.debt -= &repaid;
        position.collateral -= &seized;

        let protocol_rate = self.liquidation_penalty_protocol().get();
        let protocol_fee = self.get_min(
            self.collateral_fee_for_value(&repaid, &price, &protocol_rate),
            position.collateral.clone(),
        );
        position.collateral -= &protocol_fee;
        self.store_borrow_position(&asset, &borrower, &position);

        self.collateral_borrowed(&asset)
            .update(|borrowed| *borrowed -= &repaid);
        self.protocol_liquidation_fees(&asset)
            .update(|fees| *fees += &protocol_fee);
        cache.total_borrow -= &repaid;

        let caller = self.blockchain().get_caller();
        self.liquidate_event(&caller, &borrower, &asset, &repaid, &seized, &protocol_fee);
        self.emit_borrowable(&asset, &cache);
        self.emit_status(&cache);

        let lend_token = cache.lend_token.clone();
        drop(cache);

        self.send_asset(&asset, &seized, &caller);
        self.send_asset(&lend_token, &(repay_amount - repaid), &caller);
    }
}
