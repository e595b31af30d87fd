//! CLI configuration (spec §6): `<input-path> [output-path]`, built by hand
//! from `std::env::args` rather than a CLI-parsing crate — the teacher's
//! own `faxc-drv::Config` is a plain struct populated the same way, and the
//! workspace never depends on `clap`.

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "./out.py";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("usage: faxc <input-path> [output-path]")]
    MissingInputPath,
    #[error("too many arguments: faxc <input-path> [output-path]")]
    TooManyArguments,
}

impl Config {
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self, ConfigError> {
        let input_path = args.next().ok_or(ConfigError::MissingInputPath)?;
        let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        if args.next().is_some() {
            return Err(ConfigError::TooManyArguments);
        }
        Ok(Config {
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(output_path),
        })
    }
}
