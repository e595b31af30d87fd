//! faxc - the driver binary for the fax compiler front end.
//!
//! Wires the four stage crates together: reads the source file named on
//! the command line, runs it through `fax-lex` → `fax-par` → `fax-sem` →
//! `fax-gen` in strict forward order, and writes the emitted program to
//! the output path. See [`pipeline::run`] for the orchestration itself.

mod config;
mod error;
mod pipeline;

pub use config::{Config, ConfigError, DEFAULT_OUTPUT_PATH};
pub use error::FaxError;

pub fn main() -> Result<(), FaxError> {
    env_logger::init();
    let config = Config::from_args(std::env::args().skip(1))?;
    pipeline::run(&config)
}
