// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **General**: Mount target of the root view
//! - **I18n**: Locale selection and missing-key rendering
//! - **Log**: Default tracing filter

use crate::i18n::{LocaleTag, DEFAULT_PREFERENCE_KEY};

// ==========================================================================
// General Defaults
// ==========================================================================

/// Presentation target the root view is mounted at.
pub const DEFAULT_MOUNT_TARGET: &str = "#app";

// ==========================================================================
// I18n Defaults
// ==========================================================================

/// Locale selected when no usable preference is stored.
pub const DEFAULT_LOCALE: LocaleTag = LocaleTag::DEFAULT;

/// Template rendered for missing keys under the placeholder policy.
pub const DEFAULT_MISSING_PLACEHOLDER: &str = "MISSING: {key}";

// ==========================================================================
// Log Defaults
// ==========================================================================

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) fn default_mount_target() -> String {
    DEFAULT_MOUNT_TARGET.to_string()
}

pub(crate) fn default_locale() -> LocaleTag {
    DEFAULT_LOCALE
}

pub(crate) fn default_preference_key() -> String {
    DEFAULT_PREFERENCE_KEY.to_string()
}

pub(crate) fn default_missing_placeholder() -> String {
    DEFAULT_MISSING_PLACEHOLDER.to_string()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
