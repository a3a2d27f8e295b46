multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_NOT_SUPPORTED, ERROR_INVALID_ASSET,
    ERROR_INVALID_PARAMETER, ERROR_INVALID_PAYMENT_AMOUNT, ERROR_INVALID_RATE, ERROR_UNAUTHORIZED,
};
use common_structs::CollateralConfig;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Rejects every caller except the contract owner.
    fn require_owner(&self, caller: &ManagedAddress) {
        let owner = self.blockchain().get_owner_address();
        require!(*caller == owner, ERROR_UNAUTHORIZED);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_INVALID_PARAMETER);
    }

    /// Rates are `RATIO_SCALE`-scaled and may not exceed 100%.
    fn require_valid_rate(&self, rate: &BigUint) {
        require!(*rate <= self.ratio_scale(), ERROR_INVALID_RATE);
    }

    /// Returns the configuration of a registered collateral asset.
    ///
    /// # Errors
    /// - `ERROR_ASSET_NOT_SUPPORTED`: `asset` was never registered.
    fn require_collateral(&self, asset: &EgldOrEsdtTokenIdentifier) -> CollateralConfig<Self::Api> {
        match self.collateral_configs().get(asset) {
            Some(config) => config,
            None => sc_panic!(ERROR_ASSET_NOT_SUPPORTED),
        }
    }

    /// Checks the single payment attached to the call against the expected asset and amount.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ASSET`: Wrong token or no payment.
    /// - `ERROR_INVALID_PAYMENT_AMOUNT`: Paid amount differs from `expected_amount`.
    fn require_payment(&self, expected_asset: &EgldOrEsdtTokenIdentifier, expected_amount: &BigUint) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(asset == *expected_asset, ERROR_INVALID_ASSET);
        require!(amount == *expected_amount, ERROR_INVALID_PAYMENT_AMOUNT);
    }
}
