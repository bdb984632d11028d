//! Zone sampler — extracts reed-switch state from the control word.
//!
//! Stateless: every pass re-derives zone state from the hardware read, so
//! alarm decisions always act on the current instant, never cached history.

use crate::regmap::{ZONE_COUNT, ZONES};

/// A point-in-time reading of all three zones.
/// `true` = circuit open (intrusion), `false` = closed (secure).
pub type ZoneSample = [bool; ZONE_COUNT];

/// Decode one control-word read into per-zone open/closed state.
pub fn sample(word: u32) -> ZoneSample {
    let mut zones = [false; ZONE_COUNT];
    for (open, zone) in zones.iter_mut().zip(&ZONES) {
        *open = word & zone.sensor_mask != 0;
    }
    zones
}

/// True when every zone reads closed in the same sampling instant.
pub fn all_closed(zones: &ZoneSample) -> bool {
    zones.iter().all(|&open| !open)
}
