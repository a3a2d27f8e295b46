#![no_std]

use common_constants::{HEALTH_FACTOR_INFINITE, PRICE_SCALE, RATIO_SCALE, SECONDS_PER_YEAR};

multiversx_sc::imports!();

/// Fixed-point helpers shared by the contracts.
///
/// Every operation multiplies before it divides and rounds down, so a rounding
/// error can only ever under-grant.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn ratio_scale(&self) -> BigUint {
        BigUint::from(RATIO_SCALE)
    }

    fn price_scale(&self) -> BigUint {
        BigUint::from(PRICE_SCALE)
    }

    /// `a * b / denominator`, floored.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        (a * b) / denominator
    }

    /// `amount * ratio / RATIO_SCALE`.
    fn apply_ratio(&self, amount: &BigUint, ratio: &BigUint) -> BigUint {
        self.mul_div_floor(amount, ratio, &self.ratio_scale())
    }

    /// `part * RATIO_SCALE / whole`, zero when `whole` is zero.
    fn ratio_of(&self, part: &BigUint, whole: &BigUint) -> BigUint {
        if *whole == 0u64 {
            return BigUint::zero();
        }

        self.mul_div_floor(part, &self.ratio_scale(), whole)
    }

    /// Value of `amount` collateral units in unit-of-account at `price`.
    fn value_at_price(&self, amount: &BigUint, price: &BigUint) -> BigUint {
        self.mul_div_floor(amount, price, &self.price_scale())
    }

    /// Largest loan a deposit of `amount` at `price` supports under `collateralization_ratio`.
    ///
    /// `amount * price * ratio / (PRICE_SCALE * RATIO_SCALE)` with a single division.
    fn max_borrow_for(
        &self,
        amount: &BigUint,
        price: &BigUint,
        collateralization_ratio: &BigUint,
    ) -> BigUint {
        let numerator = amount * price * collateralization_ratio;
        numerator / (self.price_scale() * self.ratio_scale())
    }

    /// Ratio of discounted collateral value to debt, `RATIO_SCALE` being 1.0.
    ///
    /// Positions without debt report `HEALTH_FACTOR_INFINITE`.
    fn compute_health_factor(
        &self,
        collateral: &BigUint,
        price: &BigUint,
        liquidation_threshold: &BigUint,
        debt: &BigUint,
    ) -> BigUint {
        if *debt == 0u64 {
            return BigUint::from(HEALTH_FACTOR_INFINITE);
        }

        let collateral_value = self.value_at_price(collateral, price);
        let discounted = self.apply_ratio(&collateral_value, liquidation_threshold);

        self.mul_div_floor(&discounted, &self.ratio_scale(), debt)
    }

    /// Collateral units worth `value` at `price`, scaled up by `bonus`.
    ///
    /// `value * PRICE_SCALE * (RATIO_SCALE + bonus) / (price * RATIO_SCALE)`.
    fn collateral_for_value(&self, value: &BigUint, price: &BigUint, bonus: &BigUint) -> BigUint {
        let numerator = value * &self.price_scale() * &(self.ratio_scale() + bonus);
        numerator / (price * &self.ratio_scale())
    }

    /// Collateral units worth `rate` of `value` at `price`.
    fn collateral_fee_for_value(&self, value: &BigUint, price: &BigUint, rate: &BigUint) -> BigUint {
        let numerator = value * &self.price_scale() * rate;
        numerator / (price * &self.ratio_scale())
    }

    /// Simple interest on `principal` at a yearly `rate` over `elapsed` seconds.
    fn linear_interest(&self, principal: &BigUint, rate: &BigUint, elapsed: u64) -> BigUint {
        let numerator = principal * rate * &BigUint::from(elapsed);
        numerator / (self.ratio_scale() * BigUint::from(SECONDS_PER_YEAR))
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
