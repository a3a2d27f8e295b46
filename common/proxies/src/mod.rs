#![no_std]

pub mod proxy_pool;
pub mod proxy_price_oracle;
