use common_errors::ERROR_INVALID_PRICE;
use common_structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::events::EventsModule
{
    /// Deploys paused; the owner unpauses once the first prices are in.
    #[init]
    fn init(&self) {
        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    /// Records a new price for `asset`, replacing the previous one.
    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        require!(price > 0u64, ERROR_INVALID_PRICE);

        let timestamp = self.blockchain().get_block_timestamp();
        let record = TimestampedPrice { price, timestamp };

        self.new_price_event(&asset, &record);
        self.prices(&asset).set(record);
    }
}
