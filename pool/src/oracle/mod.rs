multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_PRICE, ERROR_ORACLE_PAUSED, ERROR_PRICE_NOT_FOUND, ERROR_PRICE_ORACLE_NOT_SET,
};

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Current price of `asset` read from the oracle contract storage.
    ///
    /// # Arguments
    /// - `asset`: Collateral asset to price.
    ///
    /// # Returns
    /// - `BigUint`: Price scaled by `PRICE_SCALE`.
    ///
    /// # Errors
    /// - `ERROR_PRICE_ORACLE_NOT_SET`: No oracle address configured.
    /// - `ERROR_ORACLE_PAUSED`: The oracle is paused.
    /// - `ERROR_PRICE_NOT_FOUND`: The oracle never priced `asset`.
    fn get_asset_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let oracle_mapper = self.price_oracle_address();
        require!(!oracle_mapper.is_empty(), ERROR_PRICE_ORACLE_NOT_SET);

        let oracle_address = oracle_mapper.get();
        require!(
            !self.oracle_paused_state(oracle_address.clone()).get(),
            ERROR_ORACLE_PAUSED
        );

        let record = self.oracle_prices(oracle_address, asset);
        require!(!record.is_empty(), ERROR_PRICE_NOT_FOUND);

        let price = record.get().price;
        require!(price > 0u64, ERROR_INVALID_PRICE);

        price
    }
}
