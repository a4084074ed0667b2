use crate::CdfError;

/// Tail cutoff in standard deviations. Density beyond `TAU * sigma` is
/// numerically negligible at double precision, so the table stops there.
pub const TAU: f64 = 20.0;

/// Validated inputs for table generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Standard deviation of the discrete Gaussian.
    pub sigma: f64,
    /// Stride between stored sample points.
    pub skip: usize,
}

impl Params {
    /// Build a parameter set, rejecting values the generator is undefined for.
    pub fn new(sigma: f64, skip: usize) -> Result<Self, CdfError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(CdfError::InvalidParameter(format!(
                "sigma must be a positive real, got {sigma}"
            )));
        }
        if skip == 0 {
            return Err(CdfError::InvalidParameter(
                "skip must be at least 1".into(),
            ));
        }
        Ok(Self { sigma, skip })
    }

    /// Exclusive upper limit of the sample range: `ceil(sigma * TAU) + 1`.
    pub fn upper_bound(&self) -> u64 {
        (self.sigma * TAU).ceil() as u64 + 1
    }

    /// Coefficient of `x^2` in the Gaussian exponent, always negative.
    pub fn exp_coefficient(&self) -> f64 {
        -1.0 / (2.0 * self.sigma * self.sigma)
    }

    /// Number of multiples of `skip` in `[0, upper_bound)`, i.e. the table length.
    pub fn table_len(&self) -> usize {
        self.upper_bound().div_ceil(self.skip as u64) as usize
    }
}
