multiversx_sc::imports!();

use common_constants::HEALTH_FACTOR_INFINITE;
use common_structs::CollateralView;

use crate::{oracle, storage, utils, validation};

/// Read accessors. Derived figures are recomputed on every call.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Borrowed share of the lent liquidity, `RATIO_SCALE`-scaled. Zero for an empty pool.
    #[view(getUtilizationRate)]
    fn get_utilization_rate(&self) -> BigUint {
        self.ratio_of(&self.total_borrow().get(), &self.total_lend().get())
    }

    /// Principal supplied by `user`.
    #[view(getUserLend)]
    fn get_user_lend(&self, user: ManagedAddress) -> BigUint {
        let mapper = self.lend_positions(&user);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        mapper.get().principal
    }

    /// Timestamp of the last deposit or withdrawal of `user`, zero if none.
    #[view(getUserLendLastTime)]
    fn get_user_lend_last_time(&self, user: ManagedAddress) -> u64 {
        let mapper = self.lend_positions(&user);
        if mapper.is_empty() {
            return 0;
        }

        mapper.get().last_update_timestamp
    }

    /// Interest earned by `user` so far, settled plus pending at the current rate.
    ///
    /// Informational only: no endpoint pays it out and `depositLendWithdraw`
    /// returns principal alone.
    #[view(getUserLendInterest)]
    fn get_user_lend_interest(&self, user: ManagedAddress) -> BigUint {
        let mapper = self.lend_positions(&user);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let position = mapper.get();
        let pending = self.pending_lend_interest(
            &position,
            self.blockchain().get_block_timestamp(),
            &self.interest_rate().get(),
        );

        position.interest_accrued + pending
    }

    /// Risk parameters of `asset` along with its live borrowed total, capacity and the pool utilization.
    #[view(getCollateral)]
    fn get_collateral(&self, asset: EgldOrEsdtTokenIdentifier) -> CollateralView<Self::Api> {
        let config = self.require_collateral(&asset);

        CollateralView {
            borrowed: self.collateral_borrowed(&asset).get(),
            borrowable: self.borrowing_capacity(&self.idle_liquidity()),
            utilization_rate: self.get_utilization_rate(),
            asset,
            config,
        }
    }

    #[view(getCollateralAssets)]
    fn get_collateral_assets(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for asset in self.collateral_configs().keys() {
            result.push(asset);
        }

        result
    }

    /// Share of idle liquidity `asset` borrowers can still take, zero for unregistered assets.
    #[view(getBorrowable)]
    fn get_borrowable(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.asset_borrowing_capacity(&asset, &self.idle_liquidity())
    }

    /// Collateral `user` holds against `asset`.
    #[view(getUserDepositedBorrow)]
    fn get_user_deposited_borrow(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        self.get_borrow_position(&asset, &user).collateral
    }

    /// Debt `user` owes against `asset`.
    #[view(getUserDepositedBorrowAmount)]
    fn get_user_deposited_borrow_amount(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        self.get_borrow_position(&asset, &user).debt
    }

    /// Health factor of `user` against `asset` at the current price, `u64::MAX` without debt.
    #[view(getHealthFactor)]
    fn get_health_factor(&self, asset: EgldOrEsdtTokenIdentifier, user: ManagedAddress) -> BigUint {
        let config = self.require_collateral(&asset);
        let position = self.get_borrow_position(&asset, &user);
        if !position.is_open() {
            return BigUint::from(HEALTH_FACTOR_INFINITE);
        }

        let price = self.get_asset_price(&asset);
        self.position_health_factor(&config, &position, &price)
    }
}
