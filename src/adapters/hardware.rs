//! Hardware adapter — the panel's control word behind [`RegisterPort`].
//!
//! This is the only module in the system that touches the real register.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: volatile loads/stores through a raw pointer at the CPLD's
//! memory-mapped address.  On host/test: an in-memory word stands in, so
//! the adapter itself stays exercised by the host test suite.

use crate::app::ports::RegisterPort;
use crate::error::{Error, Result};

/// The memory-mapped panel control word.
#[derive(Debug)]
pub struct MmioRegister {
    #[cfg(target_os = "espidf")]
    reg: *mut u32,
    #[cfg(not(target_os = "espidf"))]
    word: u32,
}

impl MmioRegister {
    /// Map the control word at `addr`.
    ///
    /// A null address is the one register-access fault this platform can
    /// detect in software; it is fatal to the caller — there is no
    /// recovery path once the loop would have started.
    pub fn new(addr: usize) -> Result<Self> {
        if addr == 0 {
            return Err(Error::Init("control register address is null"));
        }
        #[cfg(target_os = "espidf")]
        {
            Ok(Self { reg: addr as *mut u32 })
        }
        #[cfg(not(target_os = "espidf"))]
        {
            Ok(Self { word: 0 })
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&self) -> u32 {
        // SAFETY: `reg` points at the CPLD control word, validated non-null
        // in `new()` and mapped for the lifetime of the program.  Reading
        // the sensor bits is non-destructive on this hardware.
        unsafe { self.reg.read_volatile() }
    }

    #[cfg(target_os = "espidf")]
    fn write_raw(&mut self, value: u32) {
        // SAFETY: same pointer contract as `read_raw`; this loop is the
        // only software writer to the word.
        unsafe { self.reg.write_volatile(value) }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self) -> u32 {
        self.word
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_raw(&mut self, value: u32) {
        self.word = value;
    }
}

impl RegisterPort for MmioRegister {
    fn read(&mut self) -> u32 {
        self.read_raw()
    }

    fn write_masked(&mut self, clear_mask: u32, set_bits: u32) {
        // One read + one write.  A sensor transition between the two is
        // possible; the next pass re-samples and corrects it.
        let value = self.read_raw();
        self.write_raw((value & clear_mask) | set_bits);
    }
}
