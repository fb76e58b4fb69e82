//! Address geocoding against the French national address service.
//!
//! This module provides:
//! - [`AddressResolver`] for resolving free-text addresses to canonical ones
//! - Response types for the service's GeoJSON feature collections
//!
//! # Flow
//!
//! 1. Street and city are stripped of diacritics
//! 2. A single `GET /search/` is issued with `q`, `city` and `postcode`
//! 3. The first (highest ranked) feature is projected to a [`ResolvedAddress`]
//!
//! [`ResolvedAddress`]: order_gate_core::ResolvedAddress

mod client;
mod error;
mod types;

pub use client::AddressResolver;
pub use error::GeocoderError;
pub use types::{Feature, FeatureCollection, FeatureProperties, Geometry};
