//! Alarm policy — the latch/clear rules, independent of any hardware.
//!
//! The policy is level-triggered and latched-until-all-clear:
//!
//! - An open zone forces its LED and the shared buzzer on, immediately.
//! - A zone closing on its own clears nothing.  There is no per-zone clear
//!   path: while any other zone stays open, an already-lit LED stays lit.
//! - Only a snapshot with all three zones closed clears the buzzer and all
//!   three LEDs, together.
//!
//! One consequence worth spelling out: of three lit LEDs, exactly one can
//! never turn off while the other two remain lit — they all clear together
//! or not at all.  This asymmetry is the panel's specified behaviour, not a
//! bug.

use crate::regmap::{ACTUATOR_ALL, BUZZER, ZONES};
use crate::sampler::{self, ZoneSample};

/// Compute the actuator bits after one sampling pass.
///
/// `actuators` carries the current LED/buzzer bits (other bits are ignored);
/// the return value is the full actuator group after applying the latch
/// policy to `zones`.  Pure — the runtime loop and the tests share this as
/// the single statement of the policy.
pub fn next_actuator_state(zones: ZoneSample, actuators: u32) -> u32 {
    let mut out = actuators & ACTUATOR_ALL;
    for (open, zone) in zones.iter().zip(&ZONES) {
        if *open {
            out |= BUZZER | zone.led_mask;
        }
    }
    if sampler::all_closed(&zones) {
        out = 0;
    }
    out
}
