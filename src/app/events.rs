//! Outbound application events.
//!
//! The [`AlarmService`](super::service::AlarmService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  All events are
//! edge-triggered — emitted once on the transition, never repeated while
//! the condition persists — so the sink stays quiet even though the poll
//! loop free-runs.

use crate::regmap::ZONE_COUNT;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The service has started polling.
    Started,

    /// A zone's reed switch went from closed to open.
    ZoneOpened(usize),

    /// A zone's reed switch went from open to closed.  The zone's LED
    /// stays lit until the global all-clear.
    ZoneClosed(usize),

    /// The buzzer went active (first zone to open).
    AlarmRaised,

    /// All three zones read closed in one snapshot; LEDs and buzzer
    /// were cleared.
    AllClear,

    /// Periodic status snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time status snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    /// Current reed-switch state per zone (true = open).
    pub zones_open: [bool; ZONE_COUNT],
    /// LED state per zone as last commanded (true = lit).
    pub leds_lit: [bool; ZONE_COUNT],
    /// Buzzer state as last commanded.
    pub buzzer_on: bool,
    /// Poll passes since startup.
    pub polls: u64,
}
