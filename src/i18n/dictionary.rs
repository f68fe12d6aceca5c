// SPDX-License-Identifier: MPL-2.0
//! Locale dictionaries and the bundled translation tables.
//!
//! Tables are authored as nested TOML and flattened into dot-separated keys:
//!
//! ```toml
//! [vux.alert]
//! button_text = "OK"
//! ```
//!
//! yields the key `vux.alert.button_text`.

use super::LocaleTag;
use crate::error::LocaleError;
use rust_embed::RustEmbed;
use std::collections::BTreeMap;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Immutable mapping from translation key to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    entries: BTreeMap<String, String>,
}

impl LocaleDictionary {
    /// Parses a TOML translation table. Every leaf must be a string.
    pub fn parse(tag: LocaleTag, source: &str) -> Result<Self, LocaleError> {
        let table: toml::Table = toml::from_str(source).map_err(|err| LocaleError::Malformed {
            tag,
            reason: err.to_string(),
        })?;

        let mut entries = BTreeMap::new();
        flatten(tag, "", &table, &mut entries)?;
        if entries.is_empty() {
            return Err(LocaleError::Empty(tag));
        }
        Ok(Self { entries })
    }

    /// Loads the table bundled into the binary for `tag`.
    pub fn embedded(tag: LocaleTag) -> Result<Self, LocaleError> {
        let file = Asset::get(&format!("{tag}.toml")).ok_or(LocaleError::MissingResource(tag))?;
        let source = std::str::from_utf8(file.data.as_ref()).map_err(|err| LocaleError::Malformed {
            tag,
            reason: err.to_string(),
        })?;
        Self::parse(tag, source)
    }

    /// Loads every bundled table, in [`LocaleTag::ALL`] order.
    pub fn bundled() -> Result<Vec<(LocaleTag, LocaleDictionary)>, LocaleError> {
        LocaleTag::ALL
            .into_iter()
            .map(|tag| Self::embedded(tag).map(|dictionary| (tag, dictionary)))
            .collect()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Returns a copy with `overrides` replacing or adding entries.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, value) in overrides {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    tag: LocaleTag,
    prefix: &str,
    table: &toml::Table,
    entries: &mut BTreeMap<String, String>,
) -> Result<(), LocaleError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(message) => {
                if entries.insert(key.clone(), message.clone()).is_some() {
                    return Err(LocaleError::Malformed {
                        tag,
                        reason: format!("duplicate key '{key}'"),
                    });
                }
            }
            toml::Value::Table(nested) => flatten(tag, &key, nested, entries)?,
            other => {
                return Err(LocaleError::Malformed {
                    tag,
                    reason: format!("'{key}' is a {}, expected a string", other.type_str()),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let source = r#"
            [vux.alert]
            button_text = "OK"

            [languages]
            zh-Hans = "简体中文"
        "#;
        let dictionary = LocaleDictionary::parse(LocaleTag::EnUs, source).expect("parse");
        assert_eq!(dictionary.get("vux.alert.button_text"), Some("OK"));
        assert_eq!(dictionary.get("languages.zh-Hans"), Some("简体中文"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn quoted_dotted_key_collides_with_nested_key() {
        let source = r#"
            "a.b" = "flat"
            [a]
            b = "nested"
        "#;
        let err = LocaleDictionary::parse(LocaleTag::EnUs, source).unwrap_err();
        assert!(matches!(err, LocaleError::Malformed { reason, .. } if reason.contains("a.b")));
    }

    #[test]
    fn non_string_leaf_is_malformed() {
        let err = LocaleDictionary::parse(LocaleTag::ZhHant, "count = 3").unwrap_err();
        match err {
            LocaleError::Malformed { tag, reason } => {
                assert_eq!(tag, LocaleTag::ZhHant);
                assert!(reason.contains("count"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_malformed() {
        let err = LocaleDictionary::parse(LocaleTag::EnUs, "not = valid = toml").unwrap_err();
        assert!(matches!(err, LocaleError::Malformed { tag: LocaleTag::EnUs, .. }));
    }

    #[test]
    fn empty_source_is_rejected() {
        assert_eq!(
            LocaleDictionary::parse(LocaleTag::ZhHans, "[empty]\n").unwrap_err(),
            LocaleError::Empty(LocaleTag::ZhHans)
        );
    }

    #[test]
    fn bundled_tables_load_for_every_tag() {
        let bundled = LocaleDictionary::bundled().expect("bundled dictionaries");
        let tags: Vec<LocaleTag> = bundled.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, LocaleTag::ALL.to_vec());

        let (_, en) = &bundled[0];
        assert_eq!(en.get("buttons.submit"), Some("Submit"));
        assert_eq!(en.get("vux.alert.button_text"), Some("OK"));
        assert_eq!(en.get("languages.zh-Hant"), Some("繁體中文"));
    }

    #[test]
    fn bundled_chinese_tables_cover_english_keys() {
        let bundled = LocaleDictionary::bundled().expect("bundled dictionaries");
        let (_, en) = &bundled[0];
        for (tag, dictionary) in &bundled[1..] {
            for key in en.keys() {
                assert!(dictionary.get(key).is_some(), "{tag} lacks {key}");
            }
        }
    }

    #[test]
    fn overrides_replace_and_extend_entries() {
        let dictionary = LocaleDictionary::from_entries([("buttons.submit", "Submit")]);
        let overrides = BTreeMap::from([
            ("buttons.submit".to_string(), "Send".to_string()),
            ("buttons.cancel".to_string(), "Cancel".to_string()),
        ]);
        let dictionary = dictionary.with_overrides(&overrides);
        assert_eq!(dictionary.get("buttons.submit"), Some("Send"));
        assert_eq!(dictionary.get("buttons.cancel"), Some("Cancel"));
    }
}
