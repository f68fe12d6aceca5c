// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! The store holds one immutable [`LocaleDictionary`] per registered
//! [`LocaleTag`] and the currently active locale. It is an owned value: the
//! application keeps it and hands out references, there is no global state.
//!
//! # Bootstrap
//!
//! [`I18n::bootstrap`] registers every dictionary first and only then selects
//! the active locale:
//!
//! 1. Persisted preference (stored under `LOCALE` by default), when it names
//!    a registered tag
//! 2. The configured default locale (`en-US`)
//!
//! Any registration failure aborts the bootstrap.
//!
//! # Missing keys
//!
//! Lookups never fail. A key absent from the active dictionary resolves
//! through the configured [`MissingKeyPolicy`].

pub mod dictionary;

pub use dictionary::LocaleDictionary;

use crate::application::port::PreferenceStore;
use crate::error::{Error, LocaleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Storage key the language preference is persisted under.
pub const DEFAULT_PREFERENCE_KEY: &str = "LOCALE";

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LocaleTag {
    EnUs,
    ZhHans,
    ZhHant,
}

impl LocaleTag {
    pub const ALL: [LocaleTag; 3] = [LocaleTag::EnUs, LocaleTag::ZhHans, LocaleTag::ZhHant];

    pub const DEFAULT: LocaleTag = LocaleTag::EnUs;

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleTag::EnUs => "en-US",
            LocaleTag::ZhHans => "zh-Hans",
            LocaleTag::ZhHant => "zh-Hant",
        }
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    /// Parses a BCP 47 tag, accepting any casing or `_` separators.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let langid: LanguageIdentifier = raw
            .trim()
            .parse()
            .map_err(|_| LocaleError::UnknownTag(raw.to_string()))?;
        let canonical = langid.to_string();
        LocaleTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == canonical)
            .ok_or_else(|| LocaleError::UnknownTag(raw.to_string()))
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.as_str().to_string()
    }
}

/// What a lookup returns when the active dictionary lacks the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Return the key itself.
    Key,
    /// Render the template, substituting `{key}`.
    Placeholder(String),
    /// Try the default locale's dictionary, then return the key.
    DefaultLocale,
}

impl Default for MissingKeyPolicy {
    fn default() -> Self {
        Self::Key
    }
}

/// Inputs to [`I18n::bootstrap`] besides the dictionaries themselves.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub preference_key: String,
    pub default_locale: LocaleTag,
    pub missing_key: MissingKeyPolicy,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            default_locale: LocaleTag::DEFAULT,
            missing_key: MissingKeyPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct I18n {
    dictionaries: BTreeMap<LocaleTag, LocaleDictionary>,
    current_locale: Option<LocaleTag>,
    default_locale: LocaleTag,
    missing_key: MissingKeyPolicy,
}

impl I18n {
    pub fn new(missing_key: MissingKeyPolicy) -> Self {
        Self {
            missing_key,
            ..Self::default()
        }
    }

    /// Registers every dictionary, then selects the active locale from the
    /// persisted preference, falling back to `options.default_locale`.
    pub fn bootstrap<I>(
        dictionaries: I,
        preferences: &dyn PreferenceStore,
        options: &BootstrapOptions,
    ) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = (LocaleTag, LocaleDictionary)>,
    {
        let mut i18n = Self::new(options.missing_key.clone());
        i18n.default_locale = options.default_locale;

        for (tag, dictionary) in dictionaries {
            i18n.register(tag, dictionary)?;
        }
        if !i18n.is_registered(options.default_locale) {
            return Err(LocaleError::Unregistered(options.default_locale));
        }

        let preference = preferences.get(&options.preference_key);
        let locale = resolve_locale(
            preference.as_deref(),
            &i18n.available_locales(),
            options.default_locale,
        );
        i18n.select(locale)?;
        tracing::info!(locale = %locale, preference = ?preference, "active locale selected");
        Ok(i18n)
    }

    /// Adds a dictionary under `tag`. A tag can be registered once.
    pub fn register(&mut self, tag: LocaleTag, dictionary: LocaleDictionary) -> Result<(), LocaleError> {
        if self.dictionaries.contains_key(&tag) {
            return Err(LocaleError::AlreadyRegistered(tag));
        }
        if dictionary.is_empty() {
            return Err(LocaleError::Empty(tag));
        }
        tracing::debug!(locale = %tag, entries = dictionary.len(), "registered locale dictionary");
        self.dictionaries.insert(tag, dictionary);
        Ok(())
    }

    /// Makes `tag` the active locale. Unregistered tags leave the state untouched.
    pub fn select(&mut self, tag: LocaleTag) -> Result<(), LocaleError> {
        if !self.is_registered(tag) {
            return Err(LocaleError::Unregistered(tag));
        }
        self.current_locale = Some(tag);
        Ok(())
    }

    pub fn current_locale(&self) -> Option<LocaleTag> {
        self.current_locale
    }

    pub fn is_registered(&self, tag: LocaleTag) -> bool {
        self.dictionaries.contains_key(&tag)
    }

    /// Registered tags in [`LocaleTag::ALL`] order.
    pub fn available_locales(&self) -> Vec<LocaleTag> {
        self.dictionaries.keys().copied().collect()
    }

    pub fn dictionary(&self, tag: LocaleTag) -> Option<&LocaleDictionary> {
        self.dictionaries.get(&tag)
    }

    /// Looks `key` up in the active dictionary only.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.current_locale
            .and_then(|tag| self.dictionaries.get(&tag))
            .and_then(|dictionary| dictionary.get(key))
    }

    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(message) => message.to_string(),
            None => self.missing(key),
        }
    }

    /// Translates `key` and substitutes `{name}` placeholders from `args`.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(message) => interpolate(message, args),
            None => match self.fallback_message(key) {
                Some(message) => interpolate(message, args),
                None => self.missing(key),
            },
        }
    }

    /// Localized summary of `err` followed by its technical detail.
    pub fn describe_error(&self, err: &Error) -> String {
        format!("{}: {err}", self.translate(err.i18n_key()))
    }

    /// Display name of `tag` in the active locale (`languages.<tag>`).
    pub fn language_name(&self, tag: LocaleTag) -> String {
        self.translate(&format!("languages.{tag}"))
    }

    /// Keys present in the default locale's dictionary but absent from `tag`'s.
    pub fn missing_keys(&self, tag: LocaleTag) -> Vec<&str> {
        let (Some(reference), Some(target)) = (
            self.dictionaries.get(&self.default_locale),
            self.dictionaries.get(&tag),
        ) else {
            return Vec::new();
        };
        reference
            .keys()
            .filter(|key| target.get(key).is_none())
            .collect()
    }

    fn fallback_message(&self, key: &str) -> Option<&str> {
        match self.missing_key {
            MissingKeyPolicy::DefaultLocale => self
                .dictionaries
                .get(&self.default_locale)
                .and_then(|dictionary| dictionary.get(key)),
            _ => None,
        }
    }

    fn missing(&self, key: &str) -> String {
        if let Some(message) = self.fallback_message(key) {
            return message.to_string();
        }
        match &self.missing_key {
            MissingKeyPolicy::Placeholder(template) => interpolate(template, &[("key", key)]),
            MissingKeyPolicy::Key | MissingKeyPolicy::DefaultLocale => key.to_string(),
        }
    }
}

/// Picks the locale named by `preference` if it is available, else `default`.
pub fn resolve_locale(preference: Option<&str>, available: &[LocaleTag], default: LocaleTag) -> LocaleTag {
    let Some(raw) = preference else {
        return default;
    };
    match raw.parse::<LocaleTag>() {
        Ok(tag) if available.contains(&tag) => tag,
        Ok(tag) => {
            tracing::warn!(locale = %tag, "preferred locale is not registered, using default");
            default
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring persisted locale preference");
            default
        }
    }
}

/// Substitutes `{name}` placeholders in one pass. Argument values are copied
/// verbatim; unknown placeholders are left in place.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        let name = &after[..end];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => {
                result.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}
