//! Discrete Gaussian CDF table generation.
//!
//! Computes the unnormalized one-sided weight table used to build a
//! two-sided discrete Gaussian sampler, and renders it as a source-code
//! literal ready to paste into a downstream program.

pub mod emit;
pub mod error;
pub mod params;
pub mod table;

pub use error::CdfError;
pub use params::{Params, TAU};
pub use table::generate;
