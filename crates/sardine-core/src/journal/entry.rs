//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tin::{FishId, TinId};

/// A single entry in the reading journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The consultation began.
    Started {
        /// When the user started.
        timestamp: DateTime<Utc>,
    },
    /// A tin was opened.
    TinOpened {
        /// The tin.
        tin: TinId,
        /// When it was opened.
        timestamp: DateTime<Utc>,
    },
    /// A fish gave its fortune.
    FortuneDrawn {
        /// Tin the fish was in when the draw began.
        tin: TinId,
        /// The fish that spoke.
        fish: FishId,
        /// The fortune text.
        fortune: String,
        /// When the draw resolved.
        timestamp: DateTime<Utc>,
    },
    /// The displayed fortune was accepted.
    FortuneAccepted {
        /// The fortune text.
        fortune: String,
        /// When it was accepted.
        timestamp: DateTime<Utc>,
    },
    /// The tins were closed for another round.
    Reset {
        /// How many fish had spoken before the reset.
        fish_consulted: usize,
        /// When the reset happened.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When this entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Started { timestamp }
            | Self::TinOpened { timestamp, .. }
            | Self::FortuneDrawn { timestamp, .. }
            | Self::FortuneAccepted { timestamp, .. }
            | Self::Reset { timestamp, .. } => *timestamp,
        }
    }
}
