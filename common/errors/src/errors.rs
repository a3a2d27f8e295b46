#![no_std]

pub static ERROR_UNAUTHORIZED: &[u8] = b"Endpoint can only be called by owner.";

pub static ERROR_INVALID_PARAMETER: &[u8] = b"Invalid parameter.";

pub static ERROR_INVALID_RATIO: &[u8] = b"Ratio must be greater than zero and at most 100%.";

pub static ERROR_INVALID_RATE: &[u8] = b"Rate must be at most 100%.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INSUFFICIENT_DEPOSIT: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_NO_DEBT: &[u8] = b"Position has no outstanding debt.";

pub static ERROR_DEBT_OUTSTANDING: &[u8] = b"Position still has outstanding debt.";

pub static ERROR_NO_COLLATERAL: &[u8] = b"No collateral to claim.";

pub static ERROR_HEALTH_FACTOR: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_UNIT_ASSET_AS_COLLATERAL: &[u8] =
    b"Lend asset can not be registered as collateral.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_INSUFFICIENT_CAPACITY: &[u8] = b"Insufficient borrowing capacity.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_INVALID_PAYMENT_AMOUNT: &[u8] = b"Payment amount does not match the requested amount.";

pub static ERROR_PRICE_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_ORACLE_PAUSED: &[u8] = b"Price oracle is paused.";

pub static ERROR_PRICE_NOT_FOUND: &[u8] = b"No price found for this asset.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price must be greater than zero.";
