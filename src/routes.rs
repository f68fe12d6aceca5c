// SPDX-License-Identifier: MPL-2.0
//! Route descriptors and route-list aggregation.
//!
//! [`concat`] is the plain order-preserving concatenation. [`aggregate`]
//! adds validation and is what the application bootstrap uses: a route name
//! declared twice, or a path that is not absolute, aborts startup.

use crate::application::port::ViewRef;
use crate::error::RouteError;
use std::collections::HashMap;

/// One navigable page: `(path, name, view)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub view: ViewRef,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Translation key of the page title, `routes.<name>`.
    pub fn title_key(&self) -> String {
        format!("routes.{}", self.name)
    }
}

/// Concatenates route lists in order. No deduplication.
pub fn concat<I>(lists: I) -> Vec<RouteDescriptor>
where
    I: IntoIterator<Item = Vec<RouteDescriptor>>,
{
    lists.into_iter().flatten().collect()
}

/// [`concat`] followed by [`validate`].
pub fn aggregate<I>(lists: I) -> Result<Vec<RouteDescriptor>, RouteError>
where
    I: IntoIterator<Item = Vec<RouteDescriptor>>,
{
    let routes = concat(lists);
    validate(&routes)?;
    Ok(routes)
}

/// Fails on the first route with a non-absolute path or a repeated name.
pub fn validate(routes: &[RouteDescriptor]) -> Result<(), RouteError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(routes.len());
    for route in routes {
        if !route.path.starts_with('/') {
            return Err(RouteError::InvalidPath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
        if let Some(first_path) = seen.insert(&route.name, &route.path) {
            return Err(RouteError::DuplicateName {
                name: route.name.clone(),
                first_path: first_path.to_string(),
                second_path: route.path.clone(),
            });
        }
    }
    Ok(())
}
