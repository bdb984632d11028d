//! Application service — the hexagonal core.
//!
//! [`AlarmService`] runs the panel's entire control flow, one pass per
//! call: read the control word, sample the zones, apply the latch policy
//! through masked register writes, emit edge-triggered events.  All I/O
//! flows through port traits injected at call sites, making the service
//! testable with a mock register.
//!
//! ```text
//!                  ┌────────────────────────┐
//! RegisterPort ◀──▶│      AlarmService      │──▶ EventSink
//!                  │  sample · latch · RMW  │
//!                  └────────────────────────┘
//! ```

use log::info;

use crate::alarm;
use crate::config::PanelConfig;
use crate::regmap::{BUZZER, ZONES};
use crate::sampler::{self, ZoneSample};

use super::events::{PanelEvent, TelemetryData};
use super::ports::{EventSink, RegisterPort};

// ───────────────────────────────────────────────────────────────
// AlarmService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
///
/// No alarm state machine lives here: LEDs and buzzer are fully determined
/// by the register contents and the current sample.  The fields below only
/// detect transitions for event emission and count passes for telemetry —
/// they never feed back into an actuator decision.
pub struct AlarmService {
    telemetry_every_n_polls: u32,
    /// Previous pass's sample, for zone open/close edge detection.
    prev_zones: Option<ZoneSample>,
    /// Whether the buzzer was commanded on as of the last pass.
    alarm_active: bool,
    polls: u64,
}

impl AlarmService {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            telemetry_every_n_polls: config.telemetry_every_n_polls,
            prev_zones: None,
            alarm_active: false,
            polls: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup.  Call once before the first [`poll_once`].
    ///
    /// [`poll_once`]: Self::poll_once
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&PanelEvent::Started);
        info!("AlarmService started ({} zones)", ZONES.len());
    }

    /// Poll forever.  The loop is a busy-poll with no sleep and no exit
    /// condition; it runs until power-off.
    pub fn run(mut self, mut port: impl RegisterPort, mut sink: impl EventSink) -> ! {
        loop {
            self.poll_once(&mut port, &mut sink);
        }
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// Run one full sampling pass: read → sample → masked writes → events.
    ///
    /// The write sequence is exact and order matters:
    ///
    /// 1. For each open zone, two separate read-modify-writes: buzzer on,
    ///    then that zone's LED on.  A zone that reads closed writes
    ///    nothing — there is no per-zone clear.
    /// 2. If all three zones read closed, four separate read-modify-writes
    ///    clear the buzzer and every LED, whether or not they were set.
    pub fn poll_once(&mut self, port: &mut impl RegisterPort, sink: &mut impl EventSink) {
        let word = port.read();
        let zones = sampler::sample(word);

        for (open, zone) in zones.iter().zip(&ZONES) {
            if *open {
                port.write_masked(!BUZZER, BUZZER);
                port.write_masked(!zone.led_mask, zone.led_mask);
            }
        }

        if sampler::all_closed(&zones) {
            port.write_masked(!BUZZER, 0);
            for zone in &ZONES {
                port.write_masked(!zone.led_mask, 0);
            }
        }

        self.polls += 1;
        self.emit_transitions(zones, word, sink);
        self.prev_zones = Some(zones);
    }

    /// Poll passes executed since startup.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    // ── Internal ──────────────────────────────────────────────

    /// Emit edge-triggered events for this pass.  Observes only; the
    /// actuator writes above never depend on anything computed here.
    fn emit_transitions(&mut self, zones: ZoneSample, word: u32, sink: &mut impl EventSink) {
        let prev = self.prev_zones.unwrap_or([false; 3]);
        for (i, (&now, &before)) in zones.iter().zip(&prev).enumerate() {
            if now && !before {
                sink.emit(&PanelEvent::ZoneOpened(i));
            } else if !now && before {
                sink.emit(&PanelEvent::ZoneClosed(i));
            }
        }

        let actuators = alarm::next_actuator_state(zones, word);
        let buzzing = actuators & BUZZER != 0;
        if buzzing && !self.alarm_active {
            sink.emit(&PanelEvent::AlarmRaised);
        } else if !buzzing && self.alarm_active {
            sink.emit(&PanelEvent::AllClear);
        }
        self.alarm_active = buzzing;

        if self.telemetry_every_n_polls > 0
            && self.polls % u64::from(self.telemetry_every_n_polls) == 0
        {
            let mut leds_lit = [false; 3];
            for (lit, zone) in leds_lit.iter_mut().zip(&ZONES) {
                *lit = actuators & zone.led_mask != 0;
            }
            sink.emit(&PanelEvent::Telemetry(TelemetryData {
                zones_open: zones,
                leds_lit,
                buzzer_on: buzzing,
                polls: self.polls,
            }));
        }
    }
}
