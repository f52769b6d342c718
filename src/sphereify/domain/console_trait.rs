use crate::infrastructure::error::InfrastructureError;

/// Interactive text channel with the user.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Shows `question` and returns the next line of input without its line terminator.
    fn prompt(&mut self, question: &str) -> Result<String, InfrastructureError>;

    fn announce(&mut self, message: &str) -> Result<(), InfrastructureError>;
}
