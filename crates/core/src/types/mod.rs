//! Core types for Order Gate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod country;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use address::ResolvedAddress;
pub use country::{Country, CountryError};
pub use id::*;
pub use order::{Acknowledgement, Customer, LineItem, Order, ShippingAddress};
pub use price::{CurrencyCode, Price};
pub use product::Product;
