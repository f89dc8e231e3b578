//! Logging setup.
//!
//! The library logs through the `log` facade only; binaries pick the backend
//! by calling [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
