#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Risk parameters of a registered collateral asset, all scaled by `RATIO_SCALE`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct CollateralConfig<M: ManagedTypeApi> {
    /// Positions whose health factor falls below this value can be liquidated.
    pub health_factor_threshold: BigUint<M>,
    /// Discount applied to collateral value when computing the health factor.
    pub liquidation_threshold: BigUint<M>,
    /// Maximum share of the deposited collateral value granted as a loan.
    pub collateralization_ratio: BigUint<M>,
}

impl<M: ManagedTypeApi> CollateralConfig<M> {
    pub fn new(
        health_factor_threshold: BigUint<M>,
        liquidation_threshold: BigUint<M>,
        collateralization_ratio: BigUint<M>,
    ) -> Self {
        CollateralConfig {
            health_factor_threshold,
            liquidation_threshold,
            collateralization_ratio,
        }
    }

    /// Every ratio must be in `(0, scale]`.
    pub fn has_valid_ratios(&self, scale: &BigUint<M>) -> bool {
        [
            &self.health_factor_threshold,
            &self.liquidation_threshold,
            &self.collateralization_ratio,
        ]
        .iter()
        .all(|ratio| **ratio > 0u64 && *ratio <= scale)
    }
}

/// A depositor's share of the lend side.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct LendPosition<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    /// Interest settled at the last touch, not part of `principal` and never paid out.
    pub interest_accrued: BigUint<M>,
    pub last_update_timestamp: u64,
}

impl<M: ManagedTypeApi> LendPosition<M> {
    pub fn new(timestamp: u64) -> Self {
        LendPosition {
            principal: BigUint::zero(),
            interest_accrued: BigUint::zero(),
            last_update_timestamp: timestamp,
        }
    }
}

/// Collateral and debt of one borrower against one collateral asset.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct BorrowPosition<M: ManagedTypeApi> {
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for BorrowPosition<M> {
    fn default() -> Self {
        BorrowPosition {
            collateral: BigUint::zero(),
            debt: BigUint::zero(),
        }
    }
}

impl<M: ManagedTypeApi> BorrowPosition<M> {
    pub fn is_open(&self) -> bool {
        self.debt > 0u64
    }

    pub fn is_empty(&self) -> bool {
        self.debt == 0u64 && self.collateral == 0u64
    }
}

/// Snapshot returned by `getCollateral`: the stored configuration plus live figures.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct CollateralView<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub config: CollateralConfig<M>,
    pub borrowed: BigUint<M>,
    pub borrowable: BigUint<M>,
    pub utilization_rate: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct LiquidationCandidate<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    pub health_factor: BigUint<M>,
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
}

/// Price record kept by the oracle, decoded by the pool straight from oracle storage.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}
