//! Flattened, read-only view of a parsed `appsettings.json`.
//!
//! Nested objects are stored as dotted keys, so
//! `{"AppSettings": {"Version": "1.0"}}` becomes `AppSettings.Version = "1.0"`.
//! Keys compare case-insensitively and accept `:` in place of `.`.
//!
//! `//` and `/* */` comments and trailing commas are allowed. Scalars keep
//! their source text: numbers are never reinterpreted, booleans read
//! `True`/`False` and `null` reads as an empty string.

use super::ConfigError;
use json_comments::{CommentSettings, strip_comments_in_place};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

const SEPARATOR: char = '.';
const ALT_SEPARATOR: char = ':';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// One flattened configuration value, keyed by its folded path.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Setting {
    path: String,
    value: String,
}

/// In-memory configuration built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    entries: BTreeMap<String, Setting>,
}

impl ConfigSnapshot {
    /// Parse a JSON document whose root is an object.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let mut text = content
            .strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(content)
            .to_owned();
        strip_comments_in_place(&mut text, CommentSettings::c_style(), true)
            .map_err(serde_json::Error::io)?;

        let root: Members = serde_json::from_str(&text)?;

        let mut entries = BTreeMap::new();
        flatten_members("", root, &mut entries)?;
        Ok(Self { entries })
    }

    /// Look up a value by dotted path. Unset paths yield `None`.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.entries
            .get(&fold(path))
            .map(|setting| setting.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths as written in the document, ordered case-insensitively.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|setting| setting.path.as_str())
    }
}

fn fold(path: &str) -> String {
    path.replace(ALT_SEPARATOR, ".").to_lowercase()
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{key}")
    }
}

fn flatten_members(
    prefix: &str,
    members: Members<'_>,
    entries: &mut BTreeMap<String, Setting>,
) -> Result<(), ConfigError> {
    for (key, raw) in members.0 {
        flatten(join(prefix, &key), raw, entries)?;
    }
    Ok(())
}

/// Flattens one JSON value found at `path` into `entries`.
fn flatten(
    path: String,
    raw: &RawValue,
    entries: &mut BTreeMap<String, Setting>,
) -> Result<(), ConfigError> {
    let text = raw.get().trim();

    let value = match text.as_bytes().first() {
        Some(b'{') => return flatten_members(&path, serde_json::from_str(text)?, entries),
        Some(b'[') => {
            let items: Vec<&RawValue> = serde_json::from_str(text)?;
            for (index, item) in items.into_iter().enumerate() {
                flatten(join(&path, &index.to_string()), item, entries)?;
            }
            return Ok(());
        }
        Some(b'"') => serde_json::from_str::<String>(text)?,
        _ => match text {
            "true" => "True".to_string(),
            "false" => "False".to_string(),
            "null" => String::new(),
            number => number.to_string(),
        },
    };

    match entries.entry(fold(&path)) {
        Entry::Occupied(_) => Err(ConfigError::DuplicateKey(path)),
        Entry::Vacant(slot) => {
            slot.insert(Setting { path, value });
            Ok(())
        }
    }
}

/// Members of one JSON object in document order, duplicates included.
struct Members<'de>(Vec<(String, &'de RawValue)>);

impl<'de> Deserialize<'de> for Members<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MembersVisitor)
    }
}

struct MembersVisitor;

impl<'de> Visitor<'de> for MembersVisitor {
    type Value = Members<'de>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Members<'de>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::new();
        while let Some((key, raw)) = map.next_entry::<String, &'de RawValue>()? {
            members.push((key, raw));
        }
        Ok(Members(members))
    }
}
