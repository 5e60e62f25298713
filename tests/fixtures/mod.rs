//! Test fixtures for delivery-sequencer.
//!
//! Provides realistic test data:
//! - Valencia depot and drop-off locations
//! - Stop builders with common preference mixes

pub mod valencia_locations;

pub use valencia_locations::*;
