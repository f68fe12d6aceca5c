// SPDX-License-Identifier: MPL-2.0
//! The "nut" feature area: home page and sign-in.

use super::Plugin;
use crate::application::port::ViewRef;
use crate::routes::RouteDescriptor;

pub const HOME_VIEW: ViewRef = ViewRef::new("Home");
pub const USERS_SIGN_IN_VIEW: ViewRef = ViewRef::new("UsersSignIn");

#[derive(Debug, Clone, Copy, Default)]
pub struct Nut;

impl Plugin for Nut {
    fn name(&self) -> &'static str {
        "nut"
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new("/", "home", HOME_VIEW),
            RouteDescriptor::new("/users/sign-in", "users.sign-in", USERS_SIGN_IN_VIEW),
        ]
    }
}
