//! Table generation for discrete Gaussian CDF sampling.
//!
//! The table holds unnormalized one-sided weights `exp(-x^2 / (2 sigma^2))`
//! for `x = 0, skip, 2*skip, …` up to `TAU` standard deviations. A sampler
//! mirrors these weights to cover the negative side; the entry at `x = 0` is
//! pre-halved so the mirrored center point is not counted twice.

use crate::Params;

/// Generate the weight table for `params`.
///
/// Entries are in ascending order of `x` and non-increasing from index 1
/// onward. Every exponent fed to `exp` is non-positive, so entries lie in
/// `[0, 1]`; underflow to exactly 0.0 in the far tail is kept, not an error.
pub fn generate(params: &Params) -> Vec<f64> {
    let upper_bound = params.upper_bound();
    let f = params.exp_coefficient();

    let mut table = Vec::with_capacity(params.table_len());
    for x in (0..upper_bound).step_by(params.skip) {
        let x = x as f64;
        table.push((x * x * f).exp());
    }
    table[0] /= 2.0;

    table
}
