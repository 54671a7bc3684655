//! Console seam between the game and its players.
//!
//! The game never touches stdin or stdout directly. Everything goes
//! through a [`Console`], so tests can script input and capture output.

use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Line-oriented text console.
pub trait Console {
    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line of input.
    ///
    /// Returns `Ok(None)` once the input is exhausted. The returned line
    /// has its trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console backed by any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\r', '\n']).to_string();
        trace!(input = %line, "Read line");
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline() {
        let mut console = IoConsole::new(Cursor::new("1\r\n2\n"), Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), Some("1".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), Some("2".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_and_lines_are_written() {
        let mut console = IoConsole::new(Cursor::new("x\n"), Vec::new());
        console.write_line("hello").unwrap();
        console.read_line("name: ").unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "hello\nname: ");
    }
}
