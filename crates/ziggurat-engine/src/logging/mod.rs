//! Logging setup.
//!
//! Library code only talks to the `log` facade. Binaries call [`init_logging`]
//! to install `env_logger`, optionally turning up the sorter on its own.

mod init;

pub use init::{LoggingConfig, init_logging};
