//! The sardine almanac: facts and stories about the residents of the tins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sardine fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    /// Short heading.
    pub title: &'static str,
    /// The fact itself.
    pub text: &'static str,
}

/// The life story of a particular canned sardine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    /// The sardine's name.
    pub name: &'static str,
    /// Date printed on the lid.
    pub canned_date: &'static str,
    /// What they believe.
    pub story: &'static str,
}

/// Facts shown on the first almanac tab.
pub const FACTS: &[Fact] = &[
    Fact {
        title: "The Name Origin",
        text: "The term 'sardine' was first used in English during the early 15th century and may come from the Mediterranean island of Sardinia, where they were once abundant.",
    },
    Fact {
        title: "The Bait Ball",
        text: "When threatened, sardines instinctively group together into a tight sphere known as a 'bait ball'. This mesmerizing formation can be up to 20 meters wide and protects single fish from predators.",
    },
    Fact {
        title: "A Broad Family",
        text: "'Sardine' isn't actually a single species. It is a common name used to refer to various small, oily forage fish in the herring family, Clupeidae.",
    },
    Fact {
        title: "Clean Eaters",
        text: "Sardines feed almost exclusively on zooplankton by filtering water as they swim. Because they are low on the food chain, they contain very low levels of mercury compared to other fish.",
    },
];

/// Stories shown on the second almanac tab.
pub const STORIES: &[Story] = &[
    Story {
        name: "Percival the Preserved",
        canned_date: "Nov 14, 1923",
        story: "Percival firmly believes the olive oil surrounding him is actually an expensive anti-aging serum. He plans to emerge in 2050 looking younger than when he was caught.",
    },
    Story {
        name: "Captain Salt",
        canned_date: "Feb 29, 1984",
        story: "Captain Salt believes the brine will eventually dissolve all meaning. He constantly wonders if the pull-tab is a sign of liberation or just the mechanism of doom.",
    },
    Story {
        name: "Barnaby 'Big Gulp'",
        canned_date: "Aug 12, 2021",
        story: "Barnaby spent his days debating whether the ocean was infinite or if it just had really clear walls. He concluded that the tin is actually a cozy studio apartment in a trendy neighborhood.",
    },
    Story {
        name: "Lady Glimmer",
        canned_date: "Dec 31, 1899",
        story: "She claims to be royalty from the Atlantic Ridge. She insists on being packed 'head-to-tail' only with fish of noble lineage. The quality control inspector disagreed.",
    },
];

/// Almanac tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlmanacTab {
    /// Sardine facts.
    #[default]
    Facts,
    /// Sardine stories.
    Stories,
}

impl AlmanacTab {
    /// Parse a tab name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "facts" | "fact" => Some(Self::Facts),
            "stories" | "story" => Some(Self::Stories),
            _ => None,
        }
    }
}

impl fmt::Display for AlmanacTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facts => write!(f, "Facts"),
            Self::Stories => write!(f, "Stories"),
        }
    }
}

/// Whether the almanac is open and which tab is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Almanac {
    open: bool,
    tab: AlmanacTab,
}

impl Almanac {
    /// Whether the almanac is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The tab showing (or that will show when opened).
    pub fn tab(&self) -> AlmanacTab {
        self.tab
    }

    /// Open on the facts tab. Returns false if already open.
    pub(crate) fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.tab = AlmanacTab::Facts;
        true
    }

    /// Switch tab. Returns false if closed or already on that tab.
    pub(crate) fn switch(&mut self, tab: AlmanacTab) -> bool {
        if !self.open || self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Close. Returns false if already closed.
    pub(crate) fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
