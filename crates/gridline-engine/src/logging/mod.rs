//! Logging setup.
//!
//! Everything logs through the `log` facade; `init_logging` installs
//! `env_logger` once, early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
