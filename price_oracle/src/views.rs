use common_errors::{ERROR_ORACLE_PAUSED, ERROR_PRICE_NOT_FOUND};
use common_structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Latest price of `asset`, two decimal digits.
    /// Fails while paused or if the asset was never priced.
    #[view(getPrice)]
    fn get_price(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.get_price_feed(asset).price
    }

    /// Latest price of `asset` together with the block timestamp it was set at.
    #[view(getPriceFeed)]
    fn get_price_feed(&self, asset: EgldOrEsdtTokenIdentifier) -> TimestampedPrice<Self::Api> {
        require!(self.not_paused(), ERROR_ORACLE_PAUSED);

        let record = self.prices(&asset);
        require!(!record.is_empty(), ERROR_PRICE_NOT_FOUND);

        record.get()
    }
}
