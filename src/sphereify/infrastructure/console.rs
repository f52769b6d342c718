use crate::domain::console_trait::Console;
use super::error::InfrastructureError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// [`Console`] over any line reader and writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console for TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn prompt(&mut self, question: &str) -> Result<String, InfrastructureError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InfrastructureError::ConsoleClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn announce(&mut self, message: &str) -> Result<(), InfrastructureError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
