#![no_std]

/// Fixed-point scale for every ratio the pool stores (rates, thresholds, utilization).
pub const RATIO_SCALE: u64 = 1_000_000; // 100%

/// Fixed-point scale of oracle prices, two decimal digits.
pub const PRICE_SCALE: u64 = 100; // 1.00

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Health factor reported for positions without debt.
pub const HEALTH_FACTOR_INFINITE: u64 = u64::MAX;

// Parameter names carried by the pool_params_changed event.
pub const PARAM_INTEREST_RATE: &[u8] = b"interest_rate";
pub const PARAM_PROTOCOL_PENALTY: &[u8] = b"liquidation_penalty_protocol";
pub const PARAM_CLEANER_PENALTY: &[u8] = b"liquidation_penalty_cleaner";
