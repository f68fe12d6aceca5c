// SPDX-License-Identifier: MPL-2.0
//! `og_dashboard` bootstraps the administrative dashboard front-end.
//!
//! It loads the bundled locale dictionaries into an i18n store, selects the
//! user's language from persisted preferences, aggregates the routes of the
//! feature plugins and mounts the result into a host UI framework.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod plugins;
pub mod routes;
