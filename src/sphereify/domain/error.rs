use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Shrink factor must be a finite number greater than zero, got {0}")]
    InvalidShrink(f64),

    #[error("Pixel buffer holds {actual} pixels but a {width}x{height} image needs {expected}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}
