//! ZoneGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single busy-poll loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │   MmioRegister            LogEventSink               │
//! │   (RegisterPort)          (EventSink)                │
//! │                                                      │
//! │  ────────────── Port Trait Boundary ───────────      │
//! │                                                      │
//! │  ┌────────────────────────────────────────────┐      │
//! │  │         AlarmService (pure logic)          │      │
//! │  │  Zone Sampler · Latch Policy · RMW writes  │      │
//! │  └────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The loop never returns: the panel polls until power-off.

#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use zoneguard::adapters::hardware::MmioRegister;
use zoneguard::adapters::log_sink::LogEventSink;
use zoneguard::app::service::AlarmService;
use zoneguard::config::PanelConfig;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ZoneGuard v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = PanelConfig::default();
    if let Err(e) = config.validate() {
        // No recovery path exists below this line; halt and let the
        // operator power-cycle.
        error!("config invalid: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Map the control register ───────────────────────────
    let port = match MmioRegister::new(config.control_reg_addr) {
        Ok(p) => p,
        Err(e) => {
            // Register-access fault is the one fatal condition this
            // system has.  Nothing to retry, nothing to degrade to.
            error!("control register init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 4. Construct the service and poll forever ─────────────
    let mut sink = LogEventSink::new();
    let mut service = AlarmService::new(&config);
    service.start(&mut sink);

    info!("System ready. Entering poll loop.");
    service.run(port, sink)
}
