//! Configuration file support.
//!
//! This module provides:
//! - Reading the config file (`.replit` by default)
//! - Parsing TOML into an ordered value tree or a concrete type
//! - Template generation with `--init`

mod file;
mod init;
mod parse;

pub use file::{read_config, ConfigError};
pub use init::{generate_init_file, generate_init_file_in, REPLIT_TEMPLATE};
pub use parse::{parse_config, parse_config_as};
