//! Unified error types for the ZoneGuard firmware.
//!
//! Register access itself is infallible on this hardware: once the control
//! word is mapped, a read or write cannot fail in software terms.  The only
//! failure class that exists is a register-access fault at initialisation
//! (bad address, simulated hardware unavailable), and it is fatal — there is
//! no retry or degraded-mode path to fall back to.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The control register could not be mapped or validated at startup.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
