// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the ports in `application::port`, plus
//! process-level setup.
//!
//! # Available Adapters
//!
//! - [`console`]: A [`Host`] that renders the mounted dashboard as text
//! - [`log`]: Tracing subscriber installation
//!
//! [`Host`]: crate::application::port::Host

pub mod console;
pub mod log;

pub use console::ConsoleHost;
