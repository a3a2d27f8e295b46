multiversx_sc::imports!();

use common_structs::{BorrowPosition, CollateralConfig, LendPosition};

use crate::{cache::PoolCache, storage};

/// Helpers shared by the position modules: transfers, derived figures and event emission.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Sends `amount` of `asset` to `to`; zero amounts are skipped.
    fn send_asset(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint, to: &ManagedAddress) {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    /// Idle liquidity divided evenly across the registered collateral assets.
    ///
    /// Zero when no collateral asset is registered.
    fn borrowing_capacity(&self, available: &BigUint) -> BigUint {
        let registered = self.collateral_configs().len();
        if registered == 0 {
            return BigUint::zero();
        }

        available / &BigUint::from(registered)
    }

    /// Capacity of a single asset; unregistered assets get no share.
    fn asset_borrowing_capacity(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        available: &BigUint,
    ) -> BigUint {
        if !self.collateral_configs().contains_key(asset) {
            return BigUint::zero();
        }

        self.borrowing_capacity(available)
    }

    /// Lent liquidity not currently borrowed, read straight from storage.
    fn idle_liquidity(&self) -> BigUint {
        let total_lend = self.total_lend().get();
        let total_borrow = self.total_borrow().get();
        if total_lend > total_borrow {
            total_lend - total_borrow
        } else {
            BigUint::zero()
        }
    }

    /// Interest earned by `position` since its last update at `rate`.
    fn pending_lend_interest(
        &self,
        position: &LendPosition<Self::Api>,
        timestamp: u64,
        rate: &BigUint,
    ) -> BigUint {
        let elapsed = timestamp.saturating_sub(position.last_update_timestamp);

        self.linear_interest(&position.principal, rate, elapsed)
    }

    /// Moves pending interest into `interest_accrued` and restarts the clock.
    fn settle_lend_interest(&self, position: &mut LendPosition<Self::Api>, cache: &PoolCache<Self>) {
        let pending = self.pending_lend_interest(position, cache.timestamp, &cache.interest_rate);

        position.interest_accrued += pending;
        position.last_update_timestamp = cache.timestamp;
    }

    fn position_health_factor(
        &self,
        config: &CollateralConfig<Self::Api>,
        position: &BorrowPosition<Self::Api>,
        price: &BigUint,
    ) -> BigUint {
        self.compute_health_factor(
            &position.collateral,
            price,
            &config.liquidation_threshold,
            &position.debt,
        )
    }

    fn get_borrow_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BorrowPosition<Self::Api> {
        let mapper = self.borrow_positions(asset, user);
        if mapper.is_empty() {
            BorrowPosition::default()
        } else {
            mapper.get()
        }
    }

    /// Persists `position` and keeps the borrower index of `asset` in sync.
    ///
    /// Only positions with debt stay in the index. Fully empty records are removed.
    fn store_borrow_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        position: &BorrowPosition<Self::Api>,
    ) {
        let mut borrowers = self.borrowers(asset);
        if position.is_open() {
            borrowers.insert(user.clone());
        } else {
            borrowers.swap_remove(user);
        }

        if position.is_empty() {
            self.borrow_positions(asset, user).clear();
        } else {
            self.borrow_positions(asset, user).set(position);
        }
    }

    fn emit_status(&self, cache: &PoolCache<Self>) {
        self.status_changed_event(
            &cache.get_utilization(),
            &cache.total_borrow,
            &cache.total_lend,
            &cache.interest_rate,
        );
    }

    fn emit_borrowable(&self, asset: &EgldOrEsdtTokenIdentifier, cache: &PoolCache<Self>) {
        let available = cache.available_liquidity();
        self.calculate_borrowable_event(asset, &self.asset_borrowing_capacity(asset, &available));
    }
}
