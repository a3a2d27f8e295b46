multiversx_sc::imports!();

/// In-memory snapshot of the pool totals for the duration of one call.
///
/// The totals are written back when the cache is dropped. Callers drop it
/// explicitly before any outgoing transfer, so storage is final by the time
/// tokens leave the contract.
pub struct PoolCache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub total_lend: BigUint<C::Api>,
    pub total_borrow: BigUint<C::Api>,
    pub interest_rate: BigUint<C::Api>,
    pub lend_token: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Current block timestamp in seconds.
    pub timestamp: u64,
}

impl<'a, C> PoolCache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        PoolCache {
            total_lend: sc_ref.total_lend().get(),
            total_borrow: sc_ref.total_borrow().get(),
            interest_rate: sc_ref.interest_rate().get(),
            lend_token: sc_ref.lend_token().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }

    /// Liquidity not currently lent out.
    pub fn available_liquidity(&self) -> BigUint<C::Api> {
        if self.total_lend > self.total_borrow {
            &self.total_lend - &self.total_borrow
        } else {
            BigUint::zero()
        }
    }

    /// True if `amount` can leave the lend side without dropping below the borrowed total.
    pub fn can_withdraw(&self, amount: &BigUint<C::Api>) -> bool {
        *amount <= self.available_liquidity()
    }

    pub fn is_lend_token(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.lend_token == *asset
    }
}

impl<C> PoolCache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// `totalBorrow / totalLend` scaled by `RATIO_SCALE`, zero for an empty pool.
    pub fn get_utilization(&self) -> BigUint<C::Api> {
        self.sc_ref.ratio_of(&self.total_borrow, &self.total_lend)
    }
}

impl<C> Drop for PoolCache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_lend().set(&self.total_lend);
        self.sc_ref.total_borrow().set(&self.total_borrow);
    }
}
