//! Device-information dashboard engine.
//!
//! Samples read-only platform telemetry and presents it as paginated
//! label/value listings in a two-pane menu UI driven by four buttons.
//!
//! The platform plugs in through the traits in [`platform`] (drawing,
//! input, lifecycle) and [`telemetry`] (data sources); [`dashboard`]
//! runs the frame loop over them.
//!
//! Usage: `cargo test` for the host tests,
//! `cargo run --features simulator --bin devident-sim` for the desktop
//! simulator.
//!
//! Note: the library is `no_std` and allocation-free; only tests and the
//! simulator binary link `std`.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to later modules.
#[macro_use]
mod fmt;

pub mod config;
pub mod dashboard;
pub mod error;
pub mod platform;
pub mod telemetry;
pub mod ui;

pub use dashboard::{run, Dashboard, DashboardState, DevicePresence, FrameOutcome};
pub use error::TelemetryError;
pub use platform::{Asset, Canvas, Input, Lifecycle};
pub use telemetry::Telemetry;
pub use ui::buttons::{Button, ButtonEdges};
pub use ui::Page;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
