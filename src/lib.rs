#![crate_name = "zvocab"]

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod console;
pub mod error;
pub mod session;
pub mod token;
pub mod tool;
pub mod verb;

pub use crate::error::{ConfigError, ConsoleError, DecodeError, EncodeError, SessionError};
