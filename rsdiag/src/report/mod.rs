//! # Support Report Module
//!
//! Builds the diagnostic report volunteers ask users to paste.
//!
//! **Sections, in fixed order:**
//! 1. Install identity
//! 2. Potential red flags in Rocksmith.ini
//! 3. Rocksmith.ini dump
//! 4. RS_ASIO.ini dump
//! 5. Song library summary

pub mod builder;
pub mod dumper;
pub mod red_flags;
pub mod song_summary;

pub use builder::{DiagnosticReport, ReportBlock, ReportBuilder};
pub use dumper::dump_sections;
pub use red_flags::{RedFlagRule, RedFlagRuleSet, ROCKSMITH_RED_FLAGS};
pub use song_summary::SongSummary;
