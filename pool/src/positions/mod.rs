pub mod borrow;
pub mod lend;
pub mod liquidation;
pub mod repay;
