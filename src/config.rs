//! System configuration parameters
//!
//! All tunable parameters for the ZoneGuard panel.  The register layout
//! itself is fixed by the board (see [`crate::regmap`]); configuration only
//! covers where the control word lives and how chatty telemetry is.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::regmap;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Address of the memory-mapped control word.
    pub control_reg_addr: usize,
    /// Emit a telemetry event every N poll passes (0 disables telemetry).
    pub telemetry_every_n_polls: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            control_reg_addr: regmap::CONTROL_REG_ADDR,
            // The loop free-runs with no sleep, so telemetry is rate-limited
            // by pass count rather than wall time.
            telemetry_every_n_polls: 100_000,
        }
    }
}

impl PanelConfig {
    /// Reject configurations the firmware cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.control_reg_addr == 0 {
            return Err(Error::Config("control register address is null"));
        }
        Ok(())
    }
}
