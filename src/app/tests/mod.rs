//! Tests for the app module.
//!
//! - `helpers` - Shared test utilities
//! - `events` - Source event and key handling
//! - `ui` - Header and scrollback rendering

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
