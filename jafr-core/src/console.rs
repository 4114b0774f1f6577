//! Line-oriented terminal I/O over any reader/writer pair.
//!
//! Every interactive flow talks to a [`Console`], so the same code runs against
//! stdin/stdout in the binary and against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Stdin, Stdout, Write};

use crate::error::{JafrError, JafrResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Console::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> JafrResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `prompt` as-is (no newline added) and read the answer.
    pub fn ask(&mut self, prompt: &str) -> JafrResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. End of input is [`JafrError::InputClosed`].
    pub fn read_line(&mut self) -> JafrResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(JafrError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Read lines until `parse` accepts one, printing `complaint` after each
    /// rejected line. Only end of input stops the loop early.
    pub fn retry_until<T>(
        &mut self,
        complaint: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> JafrResult<T> {
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Some(value) => return Ok(value),
                None => self.say(complaint)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_writes_prompt_and_strips_terminator() {
        let mut console = console("hello\r\n");
        assert_eq!(console.ask("Name?\n").unwrap(), "hello");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Name?\n");
    }

    #[test]
    fn retry_until_complains_per_rejected_line() {
        let mut console = console("x\n-1\n7\n");
        let n = console
            .retry_until("nope", |s| s.parse::<u32>().ok())
            .unwrap();
        assert_eq!(n, 7);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "nope\nnope\n");
    }

    #[test]
    fn end_of_input_stops_retrying() {
        let mut console = console("x\n");
        let result = console.retry_until("nope", |s| s.parse::<u32>().ok());
        assert!(matches!(result, Err(JafrError::InputClosed)));
    }
}
