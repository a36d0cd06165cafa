//! Report assembly and output
//!
//! **Purpose:** Run every aggregation step in fixed order and write the result
//! as one plain-text artifact. The section order and literal headings are part
//! of the format: volunteers diff reports between runs and point users at
//! specific lines.

use crate::report::{dump_sections, RedFlagRuleSet, SongSummary};
use rsdiag_common::{
    ConfigSource, DiagnosticSnapshot, InstallIdentity, Result, SettingsTable, SongCatalog,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const RED_FLAGS_HEADER: &str = "Potential Red Flags:";
const RED_FLAGS_FOOTER: &str = "End Potential Red Flags!";

/// One contiguous group of report lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBlock {
    lines: Vec<String>,
}

impl ReportBlock {
    fn new() -> Self {
        Self::default()
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn extend<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Fully assembled support report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    blocks: Vec<ReportBlock>,
}

impl DiagnosticReport {
    /// Build the report straight from a collaborator snapshot
    pub fn from_snapshot(snapshot: &DiagnosticSnapshot) -> Self {
        let rocksmith = snapshot.settings_for(ConfigSource::Rocksmith);
        let asio = snapshot.settings_for(ConfigSource::Asio);

        ReportBuilder::new(&snapshot.identity, &rocksmith, &asio, &snapshot.songs).build()
    }

    pub fn blocks(&self) -> &[ReportBlock] {
        &self.blocks
    }

    /// Report text; blocks separated by one blank line, `\n` line endings
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            for line in &block.lines {
                output.push_str(line);
                output.push('\n');
            }
        }

        output
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    /// Write the report to `path`, replacing any previous report
    ///
    /// The text goes to a sibling `.tmp` file which is synced and then renamed
    /// over `path`. On failure the temporary file is removed and `path` is
    /// left as it was.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let temp_path = temp_path_for(path);

        let result = self
            .write_file(&temp_path)
            .and_then(|_| fs::rename(&temp_path, path));

        if let Err(e) = result {
            if temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    warn!(
                        "Could not remove temporary report {}: {}",
                        temp_path.display(),
                        cleanup
                    );
                }
            }
            return Err(e.into());
        }

        info!("Report written to {}", path.display());
        Ok(())
    }

    fn write_file(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.log".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Assembles a [`DiagnosticReport`] from injected collaborator data
pub struct ReportBuilder<'a> {
    identity: &'a InstallIdentity,
    rocksmith: &'a SettingsTable,
    asio: &'a SettingsTable,
    songs: &'a SongCatalog,
    rules: RedFlagRuleSet,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(
        identity: &'a InstallIdentity,
        rocksmith: &'a SettingsTable,
        asio: &'a SettingsTable,
        songs: &'a SongCatalog,
    ) -> Self {
        Self {
            identity,
            rocksmith,
            asio,
            songs,
            rules: RedFlagRuleSet::rocksmith(),
        }
    }

    /// Replace the standard rule table
    pub fn with_rules(mut self, rules: RedFlagRuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Run every step; all five blocks are always present
    pub fn build(&self) -> DiagnosticReport {
        let blocks = vec![
            self.identity_block(),
            self.red_flags_block(),
            Self::dump_block(ConfigSource::Rocksmith, self.rocksmith),
            Self::dump_block(ConfigSource::Asio, self.asio),
            self.songs_block(),
        ];

        DiagnosticReport { blocks }
    }

    fn identity_block(&self) -> ReportBlock {
        ReportBlock::new()
            .line(format!("Rocksmith Location: {}", self.identity.install_path))
            .line(format!(
                "Valid CDLC DLL: {}",
                bool_label(self.identity.cdlc_dll_valid)
            ))
            .line(format!("DLL Type: {}", self.identity.dll_type))
            .line(format!("Valid Game: {}", bool_label(self.identity.game_valid)))
    }

    fn red_flags_block(&self) -> ReportBlock {
        let flags = self.rules.evaluate(&[self.rocksmith, self.asio]);
        debug!("{} red flag(s) raised", flags.len());

        ReportBlock::new()
            .line(RED_FLAGS_HEADER)
            .extend(flags)
            .line(RED_FLAGS_FOOTER)
    }

    fn dump_block(source: ConfigSource, table: &SettingsTable) -> ReportBlock {
        if table.source() != source {
            warn!(
                "{} dump was given {} records",
                source.file_name(),
                table.source().file_name()
            );
        }

        ReportBlock::new()
            .line(format!("{} is as follows", source.file_name()))
            .extend(dump_sections(table.records()))
    }

    fn songs_block(&self) -> ReportBlock {
        let summary = SongSummary::from_catalog(self.songs);

        ReportBlock::new()
            .line(format!("Total Songs: {}", summary.total))
            .line(format!("Non-Authentic ODLC: {}", summary.non_authentic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsdiag_common::{ConfigRecord, SongEntry};

    fn identity() -> InstallIdentity {
        InstallIdentity {
            install_path: "D:\\Rocksmith2014".to_string(),
            cdlc_dll_valid: true,
            dll_type: "RSMods".to_string(),
            game_valid: false,
        }
    }

    #[test]
    fn test_render_full_layout() {
        let rocksmith = SettingsTable::from_records(
            ConfigSource::Rocksmith,
            vec![
                ConfigRecord::new(ConfigSource::Rocksmith, "Audio", "Win32UltraLowLatencyMode", 0),
                ConfigRecord::new(ConfigSource::Rocksmith, "Audio", "ForceWDM", 0),
                ConfigRecord::new(ConfigSource::Rocksmith, "Net", "UseProxy", 1),
            ],
        )
        .unwrap();
        let asio = SettingsTable::from_records(
            ConfigSource::Asio,
            vec![ConfigRecord::new(ConfigSource::Asio, "Config", "EnableWasapiOutputs", 0)],
        )
        .unwrap();
        let mut songs = SongCatalog::new();
        songs.insert(
            "FakeSong".to_string(),
            SongEntry {
                is_downloadable_content: true,
                original_app_id: 0,
            },
        );

        let report = ReportBuilder::new(&identity(), &rocksmith, &asio, &songs).build();

        let expected = "\
Rocksmith Location: D:\\Rocksmith2014
Valid CDLC DLL: True
DLL Type: RSMods
Valid Game: False

Potential Red Flags:
Win32UltraLowLatencyMode: OFF
End Potential Red Flags!

Rocksmith.ini is as follows
  [Audio]
  Win32UltraLowLatencyMode=0
  ForceWDM=0
  [Net]
  UseProxy=1

RS_ASIO.ini is as follows
  [Config]
  EnableWasapiOutputs=0

Total Songs: 1
Non-Authentic ODLC: 1
";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_empty_inputs_still_emit_every_block() {
        let rocksmith = SettingsTable::empty(ConfigSource::Rocksmith);
        let asio = SettingsTable::empty(ConfigSource::Asio);
        let songs = SongCatalog::new();

        let report = ReportBuilder::new(&identity(), &rocksmith, &asio, &songs).build();

        assert_eq!(report.blocks().len(), 5);
        assert_eq!(
            report.blocks()[1].lines(),
            &[RED_FLAGS_HEADER.to_string(), RED_FLAGS_FOOTER.to_string()]
        );
        assert!(report
            .render()
            .ends_with("RS_ASIO.ini is as follows\n\nTotal Songs: 0\nNon-Authentic ODLC: 0\n"));
    }

    #[test]
    fn test_custom_rules_replace_standard_table() {
        let rocksmith = SettingsTable::from_records(
            ConfigSource::Rocksmith,
            vec![ConfigRecord::new(ConfigSource::Rocksmith, "Audio", "ForceWDM", 1)],
        )
        .unwrap();
        let asio = SettingsTable::empty(ConfigSource::Asio);
        let songs = SongCatalog::new();

        let report = ReportBuilder::new(&identity(), &rocksmith, &asio, &songs)
            .with_rules(RedFlagRuleSet::new(&[]))
            .build();

        assert_eq!(report.blocks()[1].lines().len(), 2);
    }

    #[test]
    fn test_write_to_matches_render() {
        let rocksmith = SettingsTable::empty(ConfigSource::Rocksmith);
        let asio = SettingsTable::empty(ConfigSource::Asio);
        let songs = SongCatalog::new();
        let report = ReportBuilder::new(&identity(), &rocksmith, &asio, &songs).build();

        let mut buffer = Vec::new();
        report.write_to(&mut buffer).unwrap();
        assert_eq!(buffer, report.render().into_bytes());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path_for(Path::new("reports/output.log")),
            PathBuf::from("reports/output.log.tmp")
        );
    }
}
