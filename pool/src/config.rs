multiversx_sc::imports!();

use common_constants::{PARAM_CLEANER_PENALTY, PARAM_INTEREST_RATE, PARAM_PROTOCOL_PENALTY};
use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_RATIO, ERROR_UNIT_ASSET_AS_COLLATERAL};
use common_structs::CollateralConfig;

use crate::{cache::PoolCache, storage, utils, validation};

/// Owner-only parameter management. Every setter checks the caller explicitly.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Sets the yearly interest rate credited to lenders, `RATIO_SCALE`-scaled.
    #[endpoint(setInterestRate)]
    fn set_interest_rate(&self, rate: BigUint) {
        self.require_owner(&self.blockchain().get_caller());
        self.require_valid_rate(&rate);

        self.interest_rate().set(&rate);
        self.pool_params_changed_event(&ManagedBuffer::from(PARAM_INTEREST_RATE), &rate);

        let cache = PoolCache::new(self);
        self.emit_status(&cache);
    }

    /// Sets the share of repaid value reserved for the protocol on liquidation.
    #[endpoint(setLiquidationPenaltyFeeRateForProtocol)]
    fn set_liquidation_penalty_fee_rate_for_protocol(&self, rate: BigUint) {
        self.require_owner(&self.blockchain().get_caller());
        self.require_valid_rate(&rate);

        self.liquidation_penalty_protocol().set(&rate);
        self.pool_params_changed_event(&ManagedBuffer::from(PARAM_PROTOCOL_PENALTY), &rate);
    }

    /// Sets the liquidator bonus applied to the seized collateral.
    #[endpoint(setLiquidationPenaltyFeeRateForCleaner)]
    fn set_liquidation_penalty_fee_rate_for_cleaner(&self, rate: BigUint) {
        self.require_owner(&self.blockchain().get_caller());
        self.require_valid_rate(&rate);

        self.liquidation_penalty_cleaner().set(&rate);
        self.pool_params_changed_event(&ManagedBuffer::from(PARAM_CLEANER_PENALTY), &rate);
    }

    /// Registers a collateral asset or overwrites its risk parameters.
    ///
    /// # Arguments
    /// - `asset`: Collateral asset identifier.
    /// - `health_factor_threshold`: Health factor under which positions can be liquidated.
    /// - `liquidation_threshold`: Discount applied to collateral value in the health factor.
    /// - `collateralization_ratio`: Share of collateral value granted as a loan.
    ///
    /// All ratios are `RATIO_SCALE`-scaled and must be in `(0, RATIO_SCALE]`.
    #[endpoint(setCollateral)]
    fn set_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        health_factor_threshold: BigUint,
        liquidation_threshold: BigUint,
        collateralization_ratio: BigUint,
    ) {
        self.require_owner(&self.blockchain().get_caller());
        require!(asset.is_valid(), ERROR_INVALID_ASSET);

        let cache = PoolCache::new(self);
        require!(!cache.is_lend_token(&asset), ERROR_UNIT_ASSET_AS_COLLATERAL);

        let config = CollateralConfig::new(
            health_factor_threshold,
            liquidation_threshold,
            collateralization_ratio,
        );
        require!(
            config.has_valid_ratios(&self.ratio_scale()),
            ERROR_INVALID_RATIO
        );

        self.collateral_configs().insert(asset.clone(), config.clone());

        self.collateral_changed_event(
            &asset,
            &cache.get_utilization(),
            &self.collateral_borrowed(&asset).get(),
            &self.borrowing_capacity(&cache.available_liquidity()),
            &config,
        );
        self.emit_borrowable(&asset, &cache);
    }

    #[endpoint(setFeeReceiver)]
    fn set_fee_receiver(&self, fee_receiver: ManagedAddress) {
        self.require_owner(&self.blockchain().get_caller());
        self.require_non_zero_address(&fee_receiver);

        self.fee_receiver().set(&fee_receiver);
    }

    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, oracle_address: ManagedAddress) {
        self.require_owner(&self.blockchain().get_caller());
        self.require_non_zero_address(&oracle_address);

        self.price_oracle_address().set(&oracle_address);
    }
}
