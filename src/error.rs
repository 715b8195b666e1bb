// Error types for the decoding tools

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A character code that has no printable mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    InvalidCharCode(i64),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharCode(code) => write!(f, "Can't convert number: {}", code),
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    UnencodableChar(char),
    ChunkTooLong(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnencodableChar(ch) => write!(f, "Can't encode character: '{}'", ch),
            EncodeError::ChunkTooLong(chunk) => {
                write!(f, "Token chunk '{}' is longer than 3 characters", chunk)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Failures of the interactive read loop
#[derive(Debug)]
pub enum ConsoleError {
    Io(io::Error),
    InvalidNumber(String),
    OutOfRange(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "I/O error: {}", e),
            ConsoleError::InvalidNumber(text) => {
                write!(f, "invalid literal for a base-10 integer: '{}'", text)
            }
            ConsoleError::OutOfRange(text) => write!(f, "number out of range: '{}'", text),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::InvalidNumber(_) | ConsoleError::OutOfRange(_) => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(error: io::Error) -> Self {
        ConsoleError::Io(error)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    MissingValue(String),
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Cannot read config file '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Invalid config file '{}': {}", path.display(), source)
            }
            ConfigError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ConfigError::UnknownArgument(arg) => write!(f, "Unknown argument: {}", arg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Anything that ends an interactive session early
#[derive(Debug)]
pub enum SessionError {
    Console(ConsoleError),
    Decode(DecodeError),
    Encode(EncodeError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Console(e) => write!(f, "{}", e),
            SessionError::Decode(e) => write!(f, "{}", e),
            SessionError::Encode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Console(e) => Some(e),
            SessionError::Decode(e) => Some(e),
            SessionError::Encode(e) => Some(e),
        }
    }
}

impl From<ConsoleError> for SessionError {
    fn from(error: ConsoleError) -> Self {
        SessionError::Console(error)
    }
}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::Console(ConsoleError::Io(error))
    }
}

impl From<DecodeError> for SessionError {
    fn from(error: DecodeError) -> Self {
        SessionError::Decode(error)
    }
}

impl From<EncodeError> for SessionError {
    fn from(error: EncodeError) -> Self {
        SessionError::Encode(error)
    }
}
