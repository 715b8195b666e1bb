//! Line-based prompt and read
//!
//! The console is generic over its reader and writer so the tools can run
//! against stdin/stdout and the tests against in-memory buffers.

use crate::error::ConsoleError;
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Input buffer for the current line
    buffer: String,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            buffer: String::new(),
        }
    }

    /// Print a prompt and read one line without its line ending.
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<&str>, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.buffer.clear();
        let bytes_read = self.input.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            debug!("EOF at prompt '{}'", prompt);
            return Ok(None);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        debug!("input received: '{}'", self.buffer);
        Ok(Some(&self.buffer))
    }

    /// Prompt for a base-10 integer. Surrounding whitespace and a sign are
    /// accepted; anything else is an error.
    pub fn read_number(&mut self, prompt: &str) -> Result<Option<i64>, ConsoleError> {
        let line = match self.read_line(prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        let text = line.trim();
        text.parse::<i64>().map(Some).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ConsoleError::OutOfRange(text.to_string())
            }
            _ => ConsoleError::InvalidNumber(text.to_string()),
        })
    }

    /// Prompt for a base-10 integer of any magnitude and keep only its low
    /// 16 bits, in two's complement for negative values.
    pub fn read_low_word(&mut self, prompt: &str) -> Result<Option<u16>, ConsoleError> {
        let line = match self.read_line(prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        let text = line.trim();
        low_word(text)
            .map(Some)
            .ok_or_else(|| ConsoleError::InvalidNumber(text.to_string()))
    }

    pub fn println(&mut self, value: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", value)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Reduce a signed decimal literal modulo 2^16
fn low_word(text: &str) -> Option<u16> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return None;
    }

    let mut word: u16 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(10)? as u16;
        word = word.wrapping_mul(10).wrapping_add(digit);
    }
    Some(if negative { word.wrapping_neg() } else { word })
}
