//! Fortune-telling sardine tins.
//!
//! Provides the session state machine (tins, fish and their consulted
//! flags), a non-repeating fortune pool, the single in-flight draw
//! coordinator, semantic cues for the presentation layer, a reading
//! journal, and the sardine almanac.

pub mod almanac;
pub mod config;
pub mod cue;
pub mod draw;
pub mod error;
pub mod fortunes;
pub mod journal;
pub mod outcome;
pub mod pool;
pub mod session;
pub mod tin;

pub use almanac::{Almanac, AlmanacTab};
pub use config::{OracleConfig, Timings};
pub use cue::{Cue, CueQueue};
pub use draw::{ActiveFortune, Anchor, PendingDraw};
pub use error::{OracleError, OracleResult};
pub use fortunes::FortuneList;
pub use outcome::{IgnoreReason, Outcome};
pub use pool::FortunePool;
pub use session::{Mode, Oracle};
pub use tin::{FISH_PER_TIN, FishId, TIN_COUNT, TinId};
