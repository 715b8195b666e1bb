//! Interactive read-decode-print loops behind the command-line tools

use crate::config::{Config, ErrorPolicy};
use crate::console::Console;
use crate::error::SessionError;
use crate::token::{decode_word, encode_word};
use crate::verb::parse_number;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Apply the error policy to a failed decode or encode
fn handle_failure<R, W, E>(
    console: &mut Console<R, W>,
    policy: ErrorPolicy,
    error: E,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    E: Into<SessionError> + std::fmt::Display,
{
    match policy {
        ErrorPolicy::Stop => Err(error.into()),
        ErrorPolicy::Continue => {
            warn!("{}", error);
            console.println(format_args!("error: {}", error))?;
            Ok(())
        }
    }
}

/// Read token pairs and print the word they spell until input runs out
pub fn run_token_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), SessionError> {
    loop {
        let first = match console.read_number("Token 1:")? {
            Some(token) => token,
            None => break,
        };
        let second = match console.read_number("Token 2:")? {
            Some(token) => token,
            None => break,
        };

        match decode_word(first, second) {
            Ok(word) => console.println(format_args!("word: {}", word))?,
            Err(e) => handle_failure(console, config.tokens.on_error, e)?,
        }
    }
    debug!("token session finished");
    Ok(())
}

/// Read encoded numbers and print their bit reports until input runs out.
/// Numbers of any size are accepted; only their low 16 bits are reported.
pub fn run_verb_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), SessionError> {
    let kind = config.verbs.annotate.slot_kind();
    while let Some(word) = console.read_low_word("Encoded number: ")? {
        let report = parse_number(i64::from(word));
        match kind {
            Some(kind) => console.println(report.annotated(kind))?,
            None => console.println(&report)?,
        }
    }
    debug!("verb session finished");
    Ok(())
}

/// Read words and print the token pair for each until input runs out
pub fn run_encode_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<(), SessionError> {
    loop {
        let word = match console.read_line("Word: ")? {
            Some(line) => line.trim().to_string(),
            None => break,
        };

        match encode_word(&word) {
            Ok((first, second)) => console.println(format_args!("tokens: {} {}", first, second))?,
            Err(e) => handle_failure(console, config.tokens.on_error, e)?,
        }
    }
    debug!("encode session finished");
    Ok(())
}
