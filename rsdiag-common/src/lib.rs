//! # RSDiag Common Library
//!
//! Shared code for the Rocksmith diagnostics tools including:
//! - Configuration records loaded from Rocksmith.ini and RS_ASIO.ini
//! - Install identity facts (game location, CDLC loader DLL)
//! - Song catalog entries
//! - Diagnostic snapshot import/export
//! - Bootstrap configuration loading

pub mod config;
pub mod error;
pub mod identity;
pub mod settings;
pub mod snapshot;
pub mod songs;

pub use error::{Error, Result};
pub use identity::InstallIdentity;
pub use settings::{ConfigRecord, ConfigSource, SettingValue, SettingsTable};
pub use snapshot::DiagnosticSnapshot;
pub use songs::{SongCatalog, SongEntry};
