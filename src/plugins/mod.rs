// SPDX-License-Identifier: MPL-2.0
//! Feature plugins and their aggregation.
//!
//! Each plugin contributes an ordered route list and, optionally, shared
//! components. A [`PluginSet`] keeps plugins in registration order and
//! produces the single route list handed to the router.

pub mod nut;

pub use nut::Nut;

use crate::application::port::ViewRef;
use crate::error::RouteError;
use crate::routes::{self, RouteDescriptor};

/// Layout shared by every page.
pub const APPLICATION_LAYOUT: Component = Component {
    name: "application-layout",
    view: ViewRef::new("Application"),
};

/// A named view registered globally with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub view: ViewRef,
}

/// A feature area contributing pages.
pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Routes owned by this plugin, in declaration order.
    fn routes(&self) -> Vec<RouteDescriptor>;

    /// Components this plugin registers globally.
    fn components(&self) -> Vec<Component> {
        Vec::new()
    }
}

pub struct PluginSet {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Default for PluginSet {
    /// The dashboard's built-in plugins.
    fn default() -> Self {
        Self::new().with(Nut)
    }
}

impl PluginSet {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.push(plugin);
        self
    }

    pub fn push(&mut self, plugin: impl Plugin + 'static) {
        self.plugins.push(Box::new(plugin));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Every plugin's routes, concatenated in plugin order. No checks.
    pub fn concat_routes(&self) -> Vec<RouteDescriptor> {
        routes::concat(self.plugins.iter().map(|plugin| plugin.routes()))
    }

    /// Every plugin's routes, concatenated and validated.
    pub fn routes(&self) -> Result<Vec<RouteDescriptor>, RouteError> {
        routes::aggregate(self.plugins.iter().map(|plugin| plugin.routes()))
    }

    /// The application layout followed by plugin components in plugin order.
    pub fn components(&self) -> Vec<Component> {
        std::iter::once(APPLICATION_LAYOUT)
            .chain(self.plugins.iter().flat_map(|plugin| plugin.components()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        routes: Vec<(&'static str, &'static str)>,
    }

    impl Plugin for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn routes(&self) -> Vec<RouteDescriptor> {
            self.routes
                .iter()
                .map(|(path, name)| RouteDescriptor::new(*path, *name, ViewRef::new("Page")))
                .collect()
        }

        fn components(&self) -> Vec<Component> {
            vec![Component {
                name: self.name,
                view: ViewRef::new("Widget"),
            }]
        }
    }

    fn module_a() -> Fixed {
        Fixed {
            name: "a",
            routes: vec![("/r1", "r1"), ("/r2", "r2")],
        }
    }

    fn module_b() -> Fixed {
        Fixed {
            name: "b",
            routes: vec![("/r3", "r3")],
        }
    }

    #[test]
    fn concatenation_preserves_module_order() {
        let set = PluginSet::new().with(module_a()).with(module_b());
        let names: Vec<String> = set.concat_routes().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["r1", "r2", "r3"]);
    }

    #[test]
    fn concatenation_keeps_duplicate_names() {
        let clash = Fixed {
            name: "c",
            routes: vec![("/other", "r1")],
        };
        let set = PluginSet::new().with(module_a()).with(clash);
        let names: Vec<String> = set.concat_routes().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["r1", "r2", "r1"]);
        assert!(matches!(set.routes(), Err(RouteError::DuplicateName { .. })));
    }

    #[test]
    fn default_set_contains_nut_routes() {
        let set = PluginSet::default();
        assert_eq!(set.names(), ["nut"]);
        let routes = set.routes().expect("nut routes are valid");
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/", "/users/sign-in"]);
    }

    #[test]
    fn components_start_with_application_layout() {
        let set = PluginSet::new().with(module_b()).with(module_a());
        let names: Vec<&str> = set.components().iter().map(|c| c.name).collect();
        assert_eq!(names, ["application-layout", "b", "a"]);
    }
}
