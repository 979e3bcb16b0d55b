//! Hardware abstraction layer for the signer UI
//!
//! This crate provides trait-based abstractions for the two pieces of
//! hardware the UI core talks to, enabling development and testing without
//! the physical device.
//!
//! # Architecture Layers
//!
//! ```text
//! Screens (ui crate)
//!         ↓
//! Components + canvas (gui-components, gui-system)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! GPIO buttons / SPI display driver
//! ```
//!
//! # Abstractions
//!
//! - [`InputSource`] - blocking wait for the next logical [`Key`]
//! - [`DisplaySink`] - push a finished RGB frame to the panel
//!
//! # Implementations
//!
//! - [`gpio_input::PinInput`] - polls one `embedded-hal` input pin per key
//! - [`mocks::ScriptedInput`] / [`mocks::RecordingDisplay`] - test doubles
//!
//! # Example
//!
//! ```no_run
//! use platform::{InputSource, Key};
//!
//! fn wait_for_confirm<I: InputSource>(input: &mut I) -> Result<(), platform::InputError> {
//!     input.wait_for(&[Key::Confirm], true, &[Key::Confirm])?;
//!     Ok(())
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![allow(clippy::module_name_repetitions)]

pub mod display;
pub mod gpio_input;
pub mod input;
pub mod mocks;

// Re-export main high-level traits
pub use display::{DisplaySink, Frame};
pub use input::{InputError, InputSource, Key};
