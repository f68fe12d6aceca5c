// SPDX-License-Identifier: MPL-2.0
//! Application root: composes the locale store, the plugin routes and the
//! root view, then mounts them into a [`Host`].
//!
//! Construction and mounting are separate steps. [`App::bootstrap`] builds
//! everything and fails if any part is broken; [`App::mount`] only talks to
//! the host, so the locale store and the route list always exist before the
//! host sees the application.

pub mod paths;
pub mod preferences;

pub use preferences::FilePreferences;

use crate::application::port::{Host, PreferenceStore, ViewRef};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::{I18n, LocaleDictionary, LocaleTag};
use crate::plugins::PluginSet;
use crate::routes::RouteDescriptor;
use std::collections::BTreeMap;

/// Root view mounted at the configured target.
pub const ROOT_VIEW: ViewRef = ViewRef::new("App");

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale to switch to (and persist) before mounting.
    pub lang: Option<String>,
    /// Takes precedence over `OG_DASHBOARD_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `OG_DASHBOARD_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

pub struct App {
    config: Config,
    i18n: I18n,
    plugins: PluginSet,
    routes: Vec<RouteDescriptor>,
}

impl App {
    /// Builds the application from the bundled dictionaries.
    pub fn bootstrap(config: Config, preferences: &dyn PreferenceStore, plugins: PluginSet) -> Result<Self> {
        let dictionaries = LocaleDictionary::bundled()?;
        Self::bootstrap_with_dictionaries(config, dictionaries, preferences, plugins)
    }

    /// Builds the application from explicit dictionaries.
    ///
    /// Configured overrides are merged into the dictionaries before they
    /// are registered.
    pub fn bootstrap_with_dictionaries(
        config: Config,
        dictionaries: Vec<(LocaleTag, LocaleDictionary)>,
        preferences: &dyn PreferenceStore,
        plugins: PluginSet,
    ) -> Result<Self> {
        let dictionaries = apply_overrides(dictionaries, &config.i18n.overrides);
        let i18n = I18n::bootstrap(dictionaries, preferences, &config.i18n.bootstrap_options())?;
        let routes = plugins.routes()?;
        tracing::debug!(plugins = ?plugins.names(), routes = routes.len(), "routes aggregated");

        Ok(Self {
            config,
            i18n,
            plugins,
            routes,
        })
    }

    /// Registers components and routes with the host, then mounts the root view.
    pub fn mount(&self, host: &mut dyn Host) -> Result<()> {
        for component in self.plugins.components() {
            host.register_component(component.name, component.view)?;
        }
        host.register_routes(&self.routes)?;
        host.mount(ROOT_VIEW, &self.config.general.mount_target, &self.i18n)?;
        tracing::info!(
            mount_target = %self.config.general.mount_target,
            locale = ?self.i18n.current_locale(),
            "dashboard mounted"
        );
        Ok(())
    }

    /// Selects `tag` and persists it as the user's language preference.
    pub fn switch_locale(&mut self, tag: LocaleTag, preferences: &mut dyn PreferenceStore) -> Result<()> {
        self.i18n.select(tag)?;
        preferences.set(&self.config.i18n.preference_key, tag.as_str())?;
        tracing::info!(locale = %tag, "locale switched");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn route_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// First route declared for `path`.
    pub fn route_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }
}

fn apply_overrides(
    dictionaries: Vec<(LocaleTag, LocaleDictionary)>,
    overrides: &BTreeMap<String, BTreeMap<String, String>>,
) -> Vec<(LocaleTag, LocaleDictionary)> {
    let mut by_tag: BTreeMap<LocaleTag, BTreeMap<String, String>> = BTreeMap::new();
    for (raw, entries) in overrides {
        match raw.parse::<LocaleTag>() {
            Ok(tag) => {
                let merged = by_tag.entry(tag).or_default();
                if !merged.is_empty() {
                    tracing::warn!(locale = %tag, section = %raw, "merging translation overrides declared twice");
                }
                merged.extend(entries.iter().map(|(key, value)| (key.clone(), value.clone())));
            }
            Err(err) => tracing::warn!(%err, "ignoring translation overrides"),
        }
    }

    dictionaries
        .into_iter()
        .map(|(tag, dictionary)| match by_tag.get(&tag) {
            Some(entries) => (tag, dictionary.with_overrides(entries)),
            None => (tag, dictionary),
        })
        .collect()
}
