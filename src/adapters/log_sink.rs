//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured panel events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).  A future
//! reporting channel would implement the same trait.

use log::{error, info, warn};

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PanelEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::Started => {
                info!("START | polling armed zones");
            }
            PanelEvent::ZoneOpened(i) => {
                warn!("ZONE  | zone {} open", i);
            }
            PanelEvent::ZoneClosed(i) => {
                info!("ZONE  | zone {} closed (LED latched until all-clear)", i);
            }
            PanelEvent::AlarmRaised => {
                error!("ALARM | intrusion — buzzer on");
            }
            PanelEvent::AllClear => {
                info!("ALARM | all zones closed — buzzer and LEDs cleared");
            }
            PanelEvent::Telemetry(t) => {
                info!(
                    "TELEM | zones={}{}{} | leds={}{}{} | buzzer={} | polls={}",
                    u8::from(t.zones_open[0]),
                    u8::from(t.zones_open[1]),
                    u8::from(t.zones_open[2]),
                    u8::from(t.leds_lit[0]),
                    u8::from(t.leds_lit[1]),
                    u8::from(t.leds_lit[2]),
                    if t.buzzer_on { "ON" } else { "off" },
                    t.polls,
                );
            }
        }
    }
}
