//! Storefront core: catalog, cart and checkout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod mapping;
