use common_structs::TimestampedPrice;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("new_price")]
    fn new_price_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        record: &TimestampedPrice<Self::Api>,
    );
}
