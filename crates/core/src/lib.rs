//! Order Gate Core - Shared types library.
//!
//! This crate provides the types shared by the Order Gate components:
//! - `server` - Order creation service (validation pipeline, HTTP surface)
//! - `integration-tests` - End-to-end scenarios against the server router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! repositories, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, orders, products, prices, addresses and countries
//! - [`text`] - Diacritic stripping for accent-insensitive queries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod text;
pub mod types;

pub use types::*;
