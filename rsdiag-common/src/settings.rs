//! Configuration records from the game's INI files
//!
//! **Purpose:** Hold already-parsed `Rocksmith.ini` and `RS_ASIO.ini` entries in
//! load order, with a typed lookup used by the red flag rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which configuration file a record was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// The game's own settings file
    Rocksmith,
    /// The RS_ASIO audio driver settings file
    Asio,
}

impl ConfigSource {
    /// File name as it appears in the install folder
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigSource::Rocksmith => "Rocksmith.ini",
            ConfigSource::Asio => "RS_ASIO.ini",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Scalar value of a configuration entry
///
/// Booleans are stored by the game as `0`/`1`; JSON `true`/`false` is folded
/// into `Int` on load. Non-integer numbers and empty values are kept so they
/// can still be dumped, but never satisfy an integer lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawSettingValue")]
pub enum SettingValue {
    Int(i64),
    /// Non-integer number, rendered exactly as loaded
    Number(serde_json::Number),
    Text(String),
    /// Key present with no value
    Empty,
}

/// Every scalar shape a snapshot may carry
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSettingValue {
    Int(i64),
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Null,
}

impl From<RawSettingValue> for SettingValue {
    fn from(raw: RawSettingValue) -> Self {
        match raw {
            RawSettingValue::Int(v) => SettingValue::Int(v),
            RawSettingValue::Bool(v) => SettingValue::Int(i64::from(v)),
            RawSettingValue::Number(n) => SettingValue::Number(n),
            RawSettingValue::Text(s) => SettingValue::Text(s),
            RawSettingValue::Null => SettingValue::Empty,
        }
    }
}

impl SettingValue {
    /// Integer view of the value, `None` for anything else
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Number(n) => write!(f, "{}", n),
            SettingValue::Text(s) => f.write_str(s),
            SettingValue::Empty => Ok(()),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(i64::from(v))
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Int(i64::from(v))
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

/// One parsed configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// File the entry was read from
    pub source: ConfigSource,

    /// INI section name (without brackets)
    pub section: String,

    /// Setting name, unique within `(source, section)`
    pub key: String,

    pub value: SettingValue,
}

impl ConfigRecord {
    pub fn new(
        source: ConfigSource,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Self {
        Self {
            source,
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered records of a single configuration source
///
/// Iteration order is load order and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsTable {
    source: ConfigSource,
    records: Vec<ConfigRecord>,
}

impl SettingsTable {
    /// Empty table for `source` (file missing or not loaded)
    pub fn empty(source: ConfigSource) -> Self {
        Self {
            source,
            records: Vec::new(),
        }
    }

    /// Build a table from records that must all belong to `source`
    pub fn from_records(source: ConfigSource, records: Vec<ConfigRecord>) -> crate::Result<Self> {
        if let Some(stray) = records.iter().find(|r| r.source != source) {
            return Err(crate::Error::InvalidInput(format!(
                "record {}/{} belongs to {}, not {}",
                stray.section, stray.key, stray.source, source
            )));
        }
        Ok(Self { source, records })
    }

    /// Keep the `source` records of a mixed sequence, preserving their order
    pub fn select(source: ConfigSource, records: &[ConfigRecord]) -> Self {
        Self {
            source,
            records: records
                .iter()
                .filter(|r| r.source == source)
                .cloned()
                .collect(),
        }
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    pub fn records(&self) -> &[ConfigRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record named `key` in load order, regardless of section
    pub fn lookup(&self, key: &str) -> Option<&ConfigRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    /// Integer value of `key`
    ///
    /// Returns `None` both when the key is absent and when it holds a
    /// non-integer value.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.lookup(key).and_then(|r| r.value.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocksmith(section: &str, key: &str, value: impl Into<SettingValue>) -> ConfigRecord {
        ConfigRecord::new(ConfigSource::Rocksmith, section, key, value)
    }

    #[test]
    fn test_value_display() {
        assert_eq!(SettingValue::Int(1).to_string(), "1");
        assert_eq!(SettingValue::Int(-48).to_string(), "-48");
        assert_eq!(SettingValue::from("Driver").to_string(), "Driver");
        assert_eq!(SettingValue::from(true), SettingValue::Int(1));
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let v: SettingValue = serde_json::from_str("0").unwrap();
        assert_eq!(v, SettingValue::Int(0));

        let v: SettingValue = serde_json::from_str("\"0\"").unwrap();
        assert_eq!(v, SettingValue::Text("0".to_string()));
    }

    #[test]
    fn test_value_accepts_bool_float_and_null() {
        let v: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, SettingValue::Int(1));

        let v: SettingValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, SettingValue::Int(0));

        let v: SettingValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(v.as_int(), None);
        assert_eq!(v.to_string(), "1.5");

        let v: SettingValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, SettingValue::Empty);
        assert_eq!(v.as_int(), None);
        assert_eq!(v.to_string(), "");
    }

    #[test]
    fn test_value_serialization_round_trips() {
        let values = vec![
            SettingValue::Int(-3),
            SettingValue::Number(serde_json::Number::from_f64(0.25).unwrap()),
            SettingValue::from("ASIO4ALL v2"),
            SettingValue::Empty,
        ];

        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<SettingValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_get_int_absent_and_mismatch() {
        let table = SettingsTable::from_records(
            ConfigSource::Rocksmith,
            vec![
                rocksmith("Audio", "ForceWDM", 1),
                rocksmith("Audio", "Win32UltraLowLatencyMode", "yes"),
            ],
        )
        .unwrap();

        assert_eq!(table.get_int("ForceWDM"), Some(1));
        assert_eq!(table.get_int("Win32UltraLowLatencyMode"), None);
        assert_eq!(table.get_int("DumpAudioLog"), None);
    }

    #[test]
    fn test_lookup_returns_first_in_load_order() {
        let table = SettingsTable::from_records(
            ConfigSource::Rocksmith,
            vec![rocksmith("Audio", "Volume", 1), rocksmith("Net", "Volume", 2)],
        )
        .unwrap();

        assert_eq!(table.lookup("Volume").map(|r| r.section.as_str()), Some("Audio"));
    }

    #[test]
    fn test_from_records_rejects_foreign_source() {
        let result = SettingsTable::from_records(
            ConfigSource::Rocksmith,
            vec![ConfigRecord::new(ConfigSource::Asio, "Asio", "BufferSizeMode", "driver")],
        );
        assert!(matches!(result, Err(crate::Error::InvalidInput(_))));
    }

    #[test]
    fn test_select_preserves_order() {
        let mixed = vec![
            rocksmith("Audio", "a", 1),
            ConfigRecord::new(ConfigSource::Asio, "Config", "b", 2),
            rocksmith("Audio", "c", 3),
        ];

        let table = SettingsTable::select(ConfigSource::Rocksmith, &mixed);
        let keys: Vec<&str> = table.records().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);

        let asio = SettingsTable::select(ConfigSource::Asio, &mixed);
        assert_eq!(asio.len(), 1);
        assert_eq!(asio.source(), ConfigSource::Asio);
    }
}
