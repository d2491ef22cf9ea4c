//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - Construction, validation, equality, serde
//! - `metrics.rs` - Hamming and Manhattan distances, goal detection
//! - `moves.rs` - Slide, neighbor, and twin generation
//! - `parse.rs` - Text format round-trips and failures
//! - `proptest.rs` - Property-based tests

mod metrics;
mod state;
