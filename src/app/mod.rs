//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the ZoneGuard panel:
//! per-pass orchestration and edge-triggered event emission.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without a real register.

pub mod events;
pub mod ports;
pub mod service;
