//! Known-bad configuration values
//!
//! **Purpose:** Flag settings that volunteers have seen break audio or input
//! before the user has to describe the symptom.

use rsdiag_common::{ConfigSource, SettingsTable};
use tracing::debug;

/// One static check against a loaded setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedFlagRule {
    pub source: ConfigSource,
    pub key: &'static str,
    /// Integer value that triggers the flag
    pub bad_value: i64,
    pub message: &'static str,
}

/// Rocksmith.ini checks, in report order
pub const ROCKSMITH_RED_FLAGS: &[RedFlagRule] = &[
    RedFlagRule {
        source: ConfigSource::Rocksmith,
        key: "Win32UltraLowLatencyMode",
        bad_value: 0,
        message: "Win32UltraLowLatencyMode: OFF",
    },
    RedFlagRule {
        source: ConfigSource::Rocksmith,
        key: "ForceWDM",
        bad_value: 1,
        message: "ForceWDM: ON",
    },
    RedFlagRule {
        source: ConfigSource::Rocksmith,
        key: "ForceDirectXSink",
        bad_value: 1,
        message: "ForceDirectXSink: ON",
    },
    RedFlagRule {
        source: ConfigSource::Rocksmith,
        key: "DumpAudioLog",
        bad_value: 1,
        message: "DumpAudioLog: ON",
    },
];

/// Ordered, read-only collection of red flag rules
#[derive(Debug, Clone, Copy)]
pub struct RedFlagRuleSet {
    rules: &'static [RedFlagRule],
}

impl Default for RedFlagRuleSet {
    fn default() -> Self {
        Self::rocksmith()
    }
}

impl RedFlagRuleSet {
    pub const fn new(rules: &'static [RedFlagRule]) -> Self {
        Self { rules }
    }

    /// The standard Rocksmith.ini rule table
    pub const fn rocksmith() -> Self {
        Self::new(ROCKSMITH_RED_FLAGS)
    }

    /// Messages of every triggered rule, in declaration order
    ///
    /// A rule whose source has no table in `tables`, whose key is absent, or
    /// whose value is not an integer produces nothing.
    pub fn evaluate(&self, tables: &[&SettingsTable]) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| self.is_triggered(rule, tables))
            .map(|rule| rule.message)
            .collect()
    }

    fn is_triggered(&self, rule: &RedFlagRule, tables: &[&SettingsTable]) -> bool {
        let Some(table) = tables.iter().find(|t| t.source() == rule.source) else {
            return false;
        };

        match table.get_int(rule.key) {
            Some(value) => value == rule.bad_value,
            None => {
                if table.lookup(rule.key).is_some() {
                    debug!(
                        "Skipping red flag check for {} in {}: value is not an integer",
                        rule.key, rule.source
                    );
                }
                false
            }
        }
    }
}
