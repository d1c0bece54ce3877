//! Tins and the fish packed inside them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Number of tins on the table.
pub const TIN_COUNT: usize = 3;

/// Number of fish in each tin.
pub const FISH_PER_TIN: usize = 3;

/// Identifies one of the [`TIN_COUNT`] tins (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct TinId(usize);

impl TinId {
    /// Validate a 0-based tin index.
    pub fn new(index: usize) -> Option<Self> {
        (index < TIN_COUNT).then_some(Self(index))
    }

    /// The 0-based index.
    pub fn index(self) -> usize {
        self.0
    }

    /// All tins in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TIN_COUNT).map(Self)
    }
}

impl fmt::Display for TinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tin {}", self.0 + 1)
    }
}

impl TryFrom<usize> for TinId {
    type Error = OracleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(OracleError::OutOfRange {
            kind: "tin",
            index,
        })
    }
}

/// Identifies one of the [`FISH_PER_TIN`] fish in the open tin (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct FishId(usize);

impl FishId {
    /// Validate a 0-based fish index.
    pub fn new(index: usize) -> Option<Self> {
        (index < FISH_PER_TIN).then_some(Self(index))
    }

    /// The 0-based index.
    pub fn index(self) -> usize {
        self.0
    }

    /// All fish in packing order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FISH_PER_TIN).map(Self)
    }
}

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fish {}", self.0 + 1)
    }
}

impl TryFrom<usize> for FishId {
    type Error = OracleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(OracleError::OutOfRange {
            kind: "fish",
            index,
        })
    }
}

/// Which tin is open and which of its fish have spoken.
#[derive(Debug, Clone, Default)]
pub(crate) struct TinRack {
    selected: Option<TinId>,
    consulted: [bool; FISH_PER_TIN],
}

impl TinRack {
    pub(crate) fn selected(&self) -> Option<TinId> {
        self.selected
    }

    /// Open a tin. Returns false if one is already open.
    pub(crate) fn select(&mut self, tin: TinId) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.selected = Some(tin);
        true
    }

    pub(crate) fn is_consulted(&self, fish: FishId) -> bool {
        self.consulted[fish.0]
    }

    /// Mark a fish consulted. Returns false if it already was.
    pub(crate) fn consult(&mut self, fish: FishId) -> bool {
        let flag = &mut self.consulted[fish.0];
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub(crate) fn consulted(&self) -> Vec<FishId> {
        FishId::all().filter(|f| self.is_consulted(*f)).collect()
    }

    /// Close the tin and forget every consulted flag.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_bounded() {
        assert!(TinId::new(2).is_some());
        assert!(TinId::new(3).is_none());
        assert!(FishId::new(0).is_some());
        assert!(FishId::new(FISH_PER_TIN).is_none());
        assert_eq!(TinId::all().count(), TIN_COUNT);
    }

    #[test]
    fn ids_display_one_based() {
        assert_eq!(TinId::new(0).unwrap().to_string(), "Tin 1");
        assert_eq!(FishId::new(2).unwrap().to_string(), "Fish 3");
    }

    #[test]
    fn ids_reject_out_of_range_on_deserialize() {
        let fish: FishId = serde_json::from_str("2").unwrap();
        assert_eq!(fish, FishId::new(2).unwrap());
        assert!(serde_json::from_str::<FishId>("7").is_err());
        let err = serde_json::from_str::<TinId>("3").unwrap_err();
        assert!(err.to_string().contains("tin index 3 is out of range"));
        assert_eq!(serde_json::to_string(&TinId::new(1).unwrap()).unwrap(), "1");
    }

    #[test]
    fn only_one_tin_selected() {
        let mut rack = TinRack::default();
        assert!(rack.select(TinId::new(1).unwrap()));
        assert!(!rack.select(TinId::new(2).unwrap()));
        assert_eq!(rack.selected(), TinId::new(1));
    }

    #[test]
    fn consult_is_once_per_fish() {
        let mut rack = TinRack::default();
        let fish = FishId::new(1).unwrap();
        assert!(rack.consult(fish));
        assert!(!rack.consult(fish));
        assert_eq!(rack.consulted(), vec![fish]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut rack = TinRack::default();
        rack.select(TinId::new(0).unwrap());
        rack.consult(FishId::new(0).unwrap());
        rack.clear();
        assert!(rack.selected().is_none());
        assert!(rack.consulted().is_empty());
    }
}
