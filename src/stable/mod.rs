//! Allocating sorts. They return a new vector and keep equal elements in input order.

pub(crate) mod filter;

pub mod rust_filter_mid;
pub mod rust_filter_random;
