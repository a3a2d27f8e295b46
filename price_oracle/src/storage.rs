use common_structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[storage_mapper("prices")]
    fn prices(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
