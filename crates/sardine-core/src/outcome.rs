//! Results of user intents.
//!
//! An intent that arrives at the wrong moment (a second tin, a fish that has
//! already spoken, a click during a pending draw) is a UI race, not a fault.
//! It is dropped and reported as [`Outcome::Ignored`] so shells can react if
//! they want to, but nothing is raised as an error.

use std::fmt;

use crate::tin::FishId;

/// What happened to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The intent changed the session.
    Applied,
    /// The intent was dropped without side effects.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Whether the intent took effect.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The reason the intent was dropped, if it was.
    pub fn ignored(self) -> Option<IgnoreReason> {
        match self {
            Self::Applied => None,
            Self::Ignored(reason) => Some(reason),
        }
    }
}

/// Why an intent was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The experience has not been started.
    NotStarted,
    /// The experience is already running.
    AlreadyStarted,
    /// No tin with that index exists.
    UnknownTin(usize),
    /// No fish with that index exists.
    UnknownFish(usize),
    /// A tin is already open; reset first.
    TinAlreadyOpen,
    /// No tin is open.
    NoTinOpen,
    /// This fish has already given its fortune.
    FishConsulted(FishId),
    /// Another draw is still resolving.
    DrawInFlight,
    /// No draw is waiting to resolve.
    NothingPending,
    /// No fortune is on display.
    NoActiveFortune,
    /// The almanac covers the table.
    AlmanacOpen,
    /// The almanac can only be opened while browsing closed tins.
    AlmanacUnavailable,
    /// The almanac is not open.
    AlmanacClosed,
    /// That almanac tab is already showing.
    SameTab,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "the fish are still asleep"),
            Self::AlreadyStarted => write!(f, "the consultation has already begun"),
            Self::UnknownTin(index) => write!(f, "there is no tin #{}", index.saturating_add(1)),
            Self::UnknownFish(index) => write!(f, "there is no fish #{}", index.saturating_add(1)),
            Self::TinAlreadyOpen => write!(f, "a tin is already open"),
            Self::NoTinOpen => write!(f, "no tin is open"),
            Self::FishConsulted(fish) => write!(f, "{fish} has already spoken"),
            Self::DrawInFlight => write!(f, "a fish is still consulting"),
            Self::NothingPending => write!(f, "no fish is consulting"),
            Self::NoActiveFortune => write!(f, "no fortune is showing"),
            Self::AlmanacOpen => write!(f, "the almanac is open"),
            Self::AlmanacUnavailable => {
                write!(f, "the almanac is only on the shelf while the tins are closed")
            }
            Self::AlmanacClosed => write!(f, "the almanac is closed"),
            Self::SameTab => write!(f, "already on that page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_helpers() {
        assert!(Outcome::Applied.is_applied());
        assert!(Outcome::Applied.ignored().is_none());
        let ignored = Outcome::Ignored(IgnoreReason::DrawInFlight);
        assert!(!ignored.is_applied());
        assert_eq!(ignored.ignored(), Some(IgnoreReason::DrawInFlight));
    }

    #[test]
    fn reason_display() {
        let fish = FishId::new(0).unwrap();
        assert_eq!(
            IgnoreReason::FishConsulted(fish).to_string(),
            "Fish 1 has already spoken"
        );
        assert_eq!(IgnoreReason::UnknownTin(4).to_string(), "there is no tin #5");
        assert_eq!(
            IgnoreReason::AlmanacUnavailable.to_string(),
            "the almanac is only on the shelf while the tins are closed"
        );
    }
}
