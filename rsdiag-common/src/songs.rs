//! Song catalog entries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Song library keyed by song identifier
///
/// Ordered so any walk over the catalog is repeatable.
pub type SongCatalog = BTreeMap<String, SongEntry>;

/// The parts of a loaded song the diagnostics look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    /// Marked as official downloadable content (ODLC)
    pub is_downloadable_content: bool,

    /// Rocksmith 1 app id; `0` means the song is not from the legacy catalog
    #[serde(default)]
    pub original_app_id: u32,
}

impl SongEntry {
    /// Claims to be ODLC but has no legacy catalog id
    pub fn is_non_authentic_dlc(&self) -> bool {
        self.is_downloadable_content && self.original_app_id == 0
    }
}
