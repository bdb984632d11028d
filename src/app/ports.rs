//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService (domain)
//! ```
//!
//! Driven adapters (the real control register, the log sink, the test
//! mock) implement these traits.  The
//! [`AlarmService`](super::service::AlarmService) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Register port (driven adapter: hardware ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Access to the panel's single memory-mapped control word.
///
/// Implementations make `read` a single hardware transaction and
/// `write_masked` one read plus one write — the hardware can change the
/// sensor bits between the two, and that hazard is accepted: the caller
/// re-samples every pass and corrects a missed transition on the next one.
///
/// No operation returns a `Result`.  On this hardware a register access
/// cannot fail in software terms; a platform where mapping the register
/// can fail must surface that at adapter construction, before the loop
/// starts.
pub trait RegisterPort {
    /// Read the current control-word value.  Non-destructive.
    fn read(&mut self) -> u32;

    /// Read-modify-write: store `(read() & clear_mask) | set_bits`.
    ///
    /// Every bit that is kept by `clear_mask` and absent from `set_bits`
    /// retains its prior value.
    fn write_masked(&mut self, clear_mask: u32, set_bits: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`PanelEvent`](super::events::PanelEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a future reporting channel would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::PanelEvent);
}
