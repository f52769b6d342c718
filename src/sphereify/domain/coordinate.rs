/// Pixel position relative to the image center, each axis scaled independently to `[-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCoordinate {
    pub u: f64,
    pub v: f64,
}

impl NormalizedCoordinate {
    pub fn radius(&self) -> f64 {
        (self.u * self.u + self.v * self.v).sqrt()
    }
}

/// Continuous sampling position in source pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceCoordinate {
    pub x: f64,
    pub y: f64,
}

impl SourceCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
