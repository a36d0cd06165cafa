//! Install identity facts
//!
//! **Purpose:** Carry the already-resolved facts about the game install that
//! head every diagnostic report.

use serde::{Deserialize, Serialize};

/// Resolved identity of the user's Rocksmith installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallIdentity {
    /// Game install folder as detected on the user's machine
    pub install_path: String,

    /// Whether a usable CDLC loader DLL was found
    pub cdlc_dll_valid: bool,

    /// Kind of CDLC loader DLL (free-form label from the DLL inspector)
    pub dll_type: String,

    /// Whether the game executable looks like a supported build
    pub game_valid: bool,
}
