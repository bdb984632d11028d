//! Host-side integration test harness.
//!
//! Compiled as one test binary so the mock-hardware module is shared.
