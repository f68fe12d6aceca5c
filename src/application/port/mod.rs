// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The dashboard core never touches a concrete UI framework or storage
//! backend. It consumes these interfaces instead.
//!
//! # Available Ports
//!
//! - [`host`]: The UI framework and router the dashboard is mounted into
//! - [`preferences`]: Durable key-value storage for user preferences
//!
//! # Design Notes
//!
//! - Calls are synchronous; bootstrap runs in one pass on the main thread
//! - Preference reads cannot fail, an unreadable value is simply absent

pub mod host;
pub mod preferences;

pub use host::{Host, ViewRef};
pub use preferences::{MemoryPreferences, PreferenceStore};
