//! # RSDiag Report Library
//!
//! Assembles the shareable `output.log` support report for a Rocksmith install.
//!
//! **Architecture:** Pure aggregation steps (red flag rules, section dumps, song
//! summary) feed one [`ReportBuilder`], which produces an in-memory
//! [`DiagnosticReport`] that is written to disk in a single step.

pub mod report;

pub use report::{DiagnosticReport, RedFlagRule, RedFlagRuleSet, ReportBuilder, SongSummary};
