#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod storage;
pub mod views;

/// Owner-fed price source consumed by the lending pool.
///
/// Prices use two decimal digits (`100` is 1.00) and are keyed by asset identifier.
#[multiversx_sc::contract]
pub trait PriceOracle:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
}
