//! Domain types shared by the retail backend crates.
//!
//! This crate performs no I/O: it holds the error taxonomy, the primitive
//! type aliases and the field rules for brands and products.

pub mod catalog;
pub mod error;
pub mod types;
