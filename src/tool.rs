//! Shared driver for the command-line tools

use crate::config::{CommandLine, Config};
use crate::console::Console;
use crate::error::SessionError;
use log::debug;
use std::env;
use std::io;

pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout>;

/// An interactive loop run against stdin and stdout
pub type Session = fn(&mut StdConsole, &Config) -> Result<(), SessionError>;

/// Initialise logging, parse the command line, load the config and run the
/// session. Exits with status 2 on a bad command line and 1 on any error.
pub fn run_tool(usage: &str, session: Session) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cmd = match CommandLine::parse(env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if cmd.help {
        println!("{}", usage);
        return;
    }

    let result = cmd
        .config()
        .map_err(|e| e.to_string())
        .and_then(|config| {
            debug!("config: {:?}", config);
            let mut console = Console::stdio();
            session(&mut console, &config).map_err(|e| e.to_string())
        });

    if let Err(e) = result {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}
