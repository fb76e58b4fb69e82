//! Business logic services.

pub mod orders;

pub use orders::{OrderError, OrderService, OrderValidator};
