//! Song library authenticity summary

use rsdiag_common::SongCatalog;

/// Aggregate counts over the song catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SongSummary {
    /// Every song in the catalog
    pub total: usize,

    /// Songs marked as ODLC that have no legacy catalog id
    pub non_authentic: usize,
}

impl SongSummary {
    pub fn from_catalog(catalog: &SongCatalog) -> Self {
        Self {
            total: catalog.len(),
            non_authentic: catalog
                .values()
                .filter(|song| song.is_non_authentic_dlc())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsdiag_common::SongEntry;

    fn catalog(entries: &[(bool, u32)]) -> SongCatalog {
        entries
            .iter()
            .enumerate()
            .map(|(i, &(is_downloadable_content, original_app_id))| {
                (
                    format!("song{:02}", i),
                    SongEntry {
                        is_downloadable_content,
                        original_app_id,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(
            SongSummary::from_catalog(&SongCatalog::new()),
            SongSummary {
                total: 0,
                non_authentic: 0
            }
        );
    }

    #[test]
    fn test_mixed_catalog() {
        // 3 non-authentic, 2 authentic ODLC, 5 custom songs
        let mut entries = vec![(true, 0); 3];
        entries.extend([(true, 5); 2]);
        entries.extend([(false, 0); 5]);

        let summary = SongSummary::from_catalog(&catalog(&entries));
        assert_eq!(summary.total, 10);
        assert_eq!(summary.non_authentic, 3);
    }

    #[test]
    fn test_custom_songs_never_count() {
        let summary = SongSummary::from_catalog(&catalog(&[(false, 0), (false, 221680)]));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.non_authentic, 0);
    }
}
