//! Core types and trait definitions for the Tally outcomes store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod average;
pub mod bucket;
pub mod error;
pub mod kitchen;
pub mod organization;
pub mod program;
pub mod record;
pub mod store;
pub mod survey;
pub mod year;

pub use error::{Error, Result};
