//! Diagnostic snapshot import/export
//!
//! **Purpose:** Hand-off format between the install scanners (INI loader, DLL
//! inspector, song loader) and the report generator. The snapshot carries
//! already-parsed data only.

use crate::{
    ConfigRecord, ConfigSource, InstallIdentity, Result, SettingsTable, SongCatalog,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Everything the collaborators produced for one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSnapshot {
    pub identity: InstallIdentity,

    /// Records of both configuration files; per-file order is load order
    #[serde(default)]
    pub settings: Vec<ConfigRecord>,

    #[serde(default)]
    pub songs: SongCatalog,
}

impl DiagnosticSnapshot {
    /// Ordered records of one configuration file
    pub fn settings_for(&self, source: ConfigSource) -> SettingsTable {
        SettingsTable::select(source, &self.settings)
    }

    /// Export snapshot to JSON file
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Import snapshot from JSON file
    pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let snapshot: DiagnosticSnapshot = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded snapshot {}: {} settings, {} songs",
            path.display(),
            snapshot.settings.len(),
            snapshot.songs.len()
        );
        Ok(snapshot)
    }
}
