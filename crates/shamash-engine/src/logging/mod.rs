//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade; the
//! engine itself only ever logs through `log::...!` macros.

mod init;

pub use init::init_logging;
