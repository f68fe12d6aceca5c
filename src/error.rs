// SPDX-License-Identifier: MPL-2.0
use crate::i18n::LocaleTag;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preferences(String),
    Locale(LocaleError),
    Route(RouteError),
    Mount(String),
}

/// Failures while building or driving the locale store.
///
/// Registration failures are fatal at startup; selection failures are
/// guarded by the bootstrap, which falls back to the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// Dictionary source could not be parsed or contains a non-string entry.
    Malformed { tag: LocaleTag, reason: String },

    /// Dictionary parsed but holds no entries.
    Empty(LocaleTag),

    /// No embedded dictionary source exists for the tag.
    MissingResource(LocaleTag),

    /// A dictionary was already registered under the tag.
    AlreadyRegistered(LocaleTag),

    /// Selection of a tag with no registered dictionary.
    Unregistered(LocaleTag),

    /// Text that does not name one of the supported tags.
    UnknownTag(String),
}

impl LocaleError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LocaleError::Malformed { .. } => "errors.locale.malformed",
            LocaleError::Empty(_) => "errors.locale.empty",
            LocaleError::MissingResource(_) => "errors.locale.missing-resource",
            LocaleError::AlreadyRegistered(_) => "errors.locale.already-registered",
            LocaleError::Unregistered(_) => "errors.locale.unregistered",
            LocaleError::UnknownTag(_) => "errors.locale.unknown-tag",
        }
    }
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Malformed { tag, reason } => {
                write!(f, "Malformed dictionary for {tag}: {reason}")
            }
            LocaleError::Empty(tag) => write!(f, "Dictionary for {tag} is empty"),
            LocaleError::MissingResource(tag) => write!(f, "No dictionary bundled for {tag}"),
            LocaleError::AlreadyRegistered(tag) => write!(f, "Locale {tag} is already registered"),
            LocaleError::Unregistered(tag) => write!(f, "Locale {tag} is not registered"),
            LocaleError::UnknownTag(raw) => write!(f, "Unknown locale tag: {raw}"),
        }
    }
}

impl std::error::Error for LocaleError {}

/// Failures while aggregating plugin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Two routes share a name.
    DuplicateName {
        name: String,
        first_path: String,
        second_path: String,
    },

    /// Route path is empty or not absolute.
    InvalidPath { name: String, path: String },
}

impl RouteError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RouteError::DuplicateName { .. } => "errors.routes.duplicate-name",
            RouteError::InvalidPath { .. } => "errors.routes.invalid-path",
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DuplicateName {
                name,
                first_path,
                second_path,
            } => write!(
                f,
                "Route name '{name}' declared twice ({first_path} and {second_path})"
            ),
            RouteError::InvalidPath { name, path } => {
                write!(f, "Route '{name}' has invalid path '{path}'")
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl Error {
    /// Returns the i18n message key describing this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "errors.io",
            Error::Config(_) => "errors.config",
            Error::Preferences(_) => "errors.preferences",
            Error::Locale(e) => e.i18n_key(),
            Error::Route(e) => e.i18n_key(),
            Error::Mount(_) => "errors.mount",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preferences(e) => write!(f, "Preferences Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
            Error::Route(e) => write!(f, "Route Error: {}", e),
            Error::Mount(e) => write!(f, "Mount Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LocaleError> for Error {
    fn from(err: LocaleError) -> Self {
        Error::Locale(err)
    }
}

impl From<RouteError> for Error {
    fn from(err: RouteError) -> Self {
        Error::Route(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
