// SPDX-License-Identifier: MPL-2.0
//! Application layer: the seams the dashboard core talks through.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The i18n store, plugins and bootstrap depend only on these traits
//! - Infrastructure implements them (console host, file-backed preferences)
//!
//! # Example
//!
//! ```ignore
//! use og_dashboard::application::port::{Host, PreferenceStore};
//!
//! struct BrowserHost { /* ... */ }
//! impl Host for BrowserHost { /* ... */ }
//! ```

pub mod port;
