//! Order Gate server library.
//!
//! This crate provides the order service as a library, allowing it to be
//! tested and reused. The binary in `main.rs` only wires configuration,
//! logging and the listener around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod geocoder;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
