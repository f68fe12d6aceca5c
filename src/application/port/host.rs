// SPDX-License-Identifier: MPL-2.0
//! Host port: the UI framework and router the dashboard mounts into.

use crate::error::Result;
use crate::i18n::I18n;
use crate::routes::RouteDescriptor;
use std::fmt;

/// Opaque reference to a renderable view (component name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewRef(&'static str);

impl ViewRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// Operations the dashboard needs from its hosting environment.
///
/// The bootstrap calls them in a fixed order: components, then routes,
/// then a single `mount`.
pub trait Host {
    /// Makes a shared component available under `name` (e.g. a layout).
    fn register_component(&mut self, name: &str, view: ViewRef) -> Result<()>;

    /// Hands the aggregated route list to the router.
    fn register_routes(&mut self, routes: &[RouteDescriptor]) -> Result<()>;

    /// Mounts the root view at `target` with the initialized locale store.
    fn mount(&mut self, root: ViewRef, target: &str, i18n: &I18n) -> Result<()>;
}
