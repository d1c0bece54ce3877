//! Semantic cues for the presentation layer.
//!
//! The session pushes a cue whenever something audible or visible should
//! happen. Shells drain the queue after each intent and decide what effect
//! plays; the core never knows.

use serde::{Deserialize, Serialize};

use crate::almanac::AlmanacTab;
use crate::tin::{FishId, TinId};

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// The experience began.
    Started,
    /// A tin was chosen and its lid peels back.
    TinOpened {
        /// The chosen tin.
        tin: TinId,
    },
    /// A fish started consulting.
    DrawStarted {
        /// Tin the fish belongs to.
        tin: TinId,
        /// The consulting fish.
        fish: FishId,
    },
    /// A fortune resolved and is now on display.
    DrawResolved {
        /// The fish that spoke.
        fish: FishId,
        /// Index into the fortune list.
        fortune: usize,
    },
    /// The displayed fortune was accepted and dismissed.
    FortuneAccepted,
    /// The tins were closed for another round.
    Reset,
    /// The almanac was opened.
    AlmanacOpened,
    /// The almanac flipped to another tab.
    AlmanacPageTurned {
        /// The tab now showing.
        tab: AlmanacTab,
    },
    /// The almanac was closed.
    AlmanacClosed,
}

/// Queue of cues waiting for the presentation layer.
#[derive(Debug, Default)]
pub struct CueQueue {
    queue: Vec<Cue>,
}

impl CueQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a cue.
    pub fn push(&mut self, cue: Cue) {
        self.queue.push(cue);
    }

    /// Take every pending cue in emission order.
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.queue)
    }

    /// Pending cues without consuming them.
    pub fn pending(&self) -> &[Cue] {
        &self.queue
    }

    /// Number of pending cues.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no cues are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
