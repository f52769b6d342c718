use crate::domain::error::DomainError;

/// Warp strength used when nothing else is configured.
pub const DEFAULT_SHRINK: f64 = 2.75;

/// Parameters of the spherical warp.
///
/// `shrink` divides π in the remapped-radius formula, so it has to be finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereifyParams {
    shrink: f64,
}

impl SphereifyParams {
    pub fn new(shrink: f64) -> Result<Self, DomainError> {
        if !shrink.is_finite() || shrink <= 0.0 {
            return Err(DomainError::InvalidShrink(shrink));
        }
        Ok(Self { shrink })
    }

    pub fn shrink(&self) -> f64 {
        self.shrink
    }
}

impl Default for SphereifyParams {
    fn default() -> Self {
        Self {
            shrink: DEFAULT_SHRINK,
        }
    }
}
