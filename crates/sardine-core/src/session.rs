//! The oracle session: one sitting at the table of tins.
//!
//! `Oracle` owns every piece of mutable state (mode, open tin, consulted
//! fish, the in-flight draw, the fortune pool and its RNG) and exposes the
//! user's intents as methods. Each intent either applies or is ignored; the
//! presentation layer reads state back and drains cues afterwards.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::almanac::{Almanac, AlmanacTab};
use crate::config::OracleConfig;
use crate::cue::{Cue, CueQueue};
use crate::draw::{ActiveFortune, Anchor, PendingDraw};
use crate::fortunes::FortuneList;
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::outcome::{IgnoreReason, Outcome};
use crate::pool::FortunePool;
use crate::tin::{FishId, TinId, TinRack};

/// High-level mode of the experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Splash screen; nothing has started.
    #[default]
    Idle,
    /// Running. Browsing closed tins, or a tin is open and its fish wait.
    ContainerChosen,
    /// A fish is consulting; the in-flight gate is closed.
    ItemRevealing,
    /// A fortune is on display.
    ItemRevealed,
}

/// An interactive fortune-telling session.
pub struct Oracle {
    mode: Mode,
    rack: TinRack,
    pending: Option<PendingDraw>,
    active: Option<ActiveFortune>,
    pool: FortunePool,
    almanac: Almanac,
    cues: CueQueue,
    journal: Journal,
    config: OracleConfig,
    rng: StdRng,
}

impl Oracle {
    /// Create a session over a validated fortune list.
    pub fn new(fortunes: FortuneList, config: OracleConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            mode: Mode::Idle,
            rack: TinRack::default(),
            pending: None,
            active: None,
            pool: FortunePool::new(fortunes),
            almanac: Almanac::default(),
            cues: CueQueue::new(),
            journal: Journal::new(),
            config,
            rng,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the experience is running with no tin open.
    pub fn is_browsing(&self) -> bool {
        self.mode != Mode::Idle && self.rack.selected().is_none()
    }

    /// The open tin, if any.
    pub fn selected_tin(&self) -> Option<TinId> {
        self.rack.selected()
    }

    /// Whether a fish in the open tin has spoken.
    pub fn is_consulted(&self, fish: FishId) -> bool {
        self.rack.is_consulted(fish)
    }

    /// Fish in the open tin that have spoken.
    pub fn consulted_fish(&self) -> Vec<FishId> {
        self.rack.consulted()
    }

    /// Whether a draw is in flight.
    pub fn is_consulting(&self) -> bool {
        self.pending.is_some()
    }

    /// The draw waiting to resolve, if any.
    pub fn pending_draw(&self) -> Option<&PendingDraw> {
        self.pending.as_ref()
    }

    /// The fortune on display, if any.
    pub fn active_fortune(&self) -> Option<&ActiveFortune> {
        self.active.as_ref()
    }

    /// The fortune pool.
    pub fn pool(&self) -> &FortunePool {
        &self.pool
    }

    /// The fortune list.
    pub fn fortunes(&self) -> &FortuneList {
        self.pool.fortunes()
    }

    /// The almanac view state.
    pub fn almanac(&self) -> &Almanac {
        &self.almanac
    }

    /// The reading journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The session configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Cues waiting to be drained.
    pub fn pending_cues(&self) -> &[Cue] {
        self.cues.pending()
    }

    /// Take every cue emitted since the last drain.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.cues.drain()
    }

    /// Leave the splash screen and start browsing tins.
    pub fn start(&mut self) -> Outcome {
        if self.mode != Mode::Idle {
            return ignore("start", IgnoreReason::AlreadyStarted);
        }
        self.mode = Mode::ContainerChosen;
        self.cues.push(Cue::Started);
        self.journal.append(JournalEntry::Started {
            timestamp: Utc::now(),
        });
        Outcome::Applied
    }

    /// Open a tin by 0-based index.
    ///
    /// Ignored while another tin is open; reset first.
    pub fn select_tin(&mut self, index: usize) -> Outcome {
        if self.mode == Mode::Idle {
            return ignore("select_tin", IgnoreReason::NotStarted);
        }
        if self.almanac.is_open() {
            return ignore("select_tin", IgnoreReason::AlmanacOpen);
        }
        let Some(tin) = TinId::new(index) else {
            return ignore("select_tin", IgnoreReason::UnknownTin(index));
        };
        if !self.rack.select(tin) {
            return ignore("select_tin", IgnoreReason::TinAlreadyOpen);
        }
        debug!(%tin, "tin opened");
        self.cues.push(Cue::TinOpened { tin });
        self.journal.append(JournalEntry::TinOpened {
            tin,
            timestamp: Utc::now(),
        });
        Outcome::Applied
    }

    /// Ask a fish in the open tin for its fortune.
    ///
    /// The fish is marked consulted immediately and the in-flight gate
    /// closes; the fortune itself is drawn by [`Oracle::complete_draw`].
    /// Dropped if the fish has already spoken or another draw is pending.
    pub fn begin_draw(&mut self, index: usize, anchor: Anchor) -> Outcome {
        if self.mode == Mode::Idle {
            return ignore("begin_draw", IgnoreReason::NotStarted);
        }
        let Some(tin) = self.rack.selected() else {
            return ignore("begin_draw", IgnoreReason::NoTinOpen);
        };
        let Some(fish) = FishId::new(index) else {
            return ignore("begin_draw", IgnoreReason::UnknownFish(index));
        };
        if self.pending.is_some() {
            return ignore("begin_draw", IgnoreReason::DrawInFlight);
        }
        if !self.rack.consult(fish) {
            return ignore("begin_draw", IgnoreReason::FishConsulted(fish));
        }

        self.active = None;
        self.pending = Some(PendingDraw { tin, fish, anchor });
        self.mode = Mode::ItemRevealing;
        debug!(%tin, %fish, "draw started");
        self.cues.push(Cue::DrawStarted { tin, fish });
        Outcome::Applied
    }

    /// Resolve the pending draw once its delay has elapsed.
    ///
    /// Draws from the pool and puts the fortune on display. A draw always
    /// resolves, even if the tins were reset while it was pending.
    pub fn complete_draw(&mut self) -> Outcome {
        let Some(pending) = self.pending.take() else {
            return ignore("complete_draw", IgnoreReason::NothingPending);
        };

        let index = self.pool.draw(&mut self.rng);
        let text = self.pool.fortunes().text(index).to_string();
        info!(
            fish = %pending.fish,
            fortune = index,
            remaining = self.pool.remaining(),
            "draw resolved"
        );

        self.journal.append(JournalEntry::FortuneDrawn {
            tin: pending.tin,
            fish: pending.fish,
            fortune: text.clone(),
            timestamp: Utc::now(),
        });
        self.cues.push(Cue::DrawResolved {
            fish: pending.fish,
            fortune: index,
        });
        self.active = Some(ActiveFortune {
            text,
            index,
            fish: pending.fish,
            anchor: pending.anchor,
        });
        self.mode = Mode::ItemRevealed;
        Outcome::Applied
    }

    /// Accept the fortune on display and put it away.
    pub fn dismiss_fortune(&mut self) -> Outcome {
        let Some(fortune) = self.active.take() else {
            return ignore("dismiss_fortune", IgnoreReason::NoActiveFortune);
        };
        self.mode = Mode::ContainerChosen;
        self.cues.push(Cue::FortuneAccepted);
        self.journal.append(JournalEntry::FortuneAccepted {
            fortune: fortune.text,
            timestamp: Utc::now(),
        });
        Outcome::Applied
    }

    /// Close the tins for another round.
    ///
    /// Clears the open tin, every consulted flag and any fortune on display.
    /// The fortune pool keeps its place. A pending draw is not cancelled; it
    /// still resolves on the next [`Oracle::complete_draw`].
    pub fn reset(&mut self) -> Outcome {
        if self.mode == Mode::Idle {
            return ignore("reset", IgnoreReason::NotStarted);
        }
        let fish_consulted = self.rack.consulted().len();
        self.rack.clear();
        self.active = None;
        self.mode = if self.pending.is_some() {
            Mode::ItemRevealing
        } else {
            Mode::ContainerChosen
        };
        debug!(fish_consulted, "tins reset");
        self.cues.push(Cue::Reset);
        self.journal.append(JournalEntry::Reset {
            fish_consulted,
            timestamp: Utc::now(),
        });
        Outcome::Applied
    }

    /// Take the almanac off the shelf. Only possible while browsing.
    pub fn open_almanac(&mut self) -> Outcome {
        if self.mode == Mode::Idle {
            return ignore("open_almanac", IgnoreReason::NotStarted);
        }
        if !self.is_browsing() || self.pending.is_some() || self.active.is_some() {
            return ignore("open_almanac", IgnoreReason::AlmanacUnavailable);
        }
        if !self.almanac.open() {
            return ignore("open_almanac", IgnoreReason::AlmanacOpen);
        }
        self.cues.push(Cue::AlmanacOpened);
        Outcome::Applied
    }

    /// Flip the almanac to another tab.
    pub fn switch_almanac_tab(&mut self, tab: AlmanacTab) -> Outcome {
        if !self.almanac.is_open() {
            return ignore("switch_almanac_tab", IgnoreReason::AlmanacClosed);
        }
        if !self.almanac.switch(tab) {
            return ignore("switch_almanac_tab", IgnoreReason::SameTab);
        }
        self.cues.push(Cue::AlmanacPageTurned { tab });
        Outcome::Applied
    }

    /// Put the almanac back.
    pub fn close_almanac(&mut self) -> Outcome {
        if !self.almanac.close() {
            return ignore("close_almanac", IgnoreReason::AlmanacClosed);
        }
        self.cues.push(Cue::AlmanacClosed);
        Outcome::Applied
    }
}

fn ignore(intent: &'static str, reason: IgnoreReason) -> Outcome {
    debug!(intent, %reason, "intent ignored");
    Outcome::Ignored(reason)
}
