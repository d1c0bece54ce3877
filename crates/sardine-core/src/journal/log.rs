//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of a reading session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every fortune drawn so far, in order.
    pub fn fortunes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                JournalEntry::FortuneDrawn { fortune, .. } => Some(fortune.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Sardine Reading Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Started { timestamp } => {
                    out.push_str(&format!(
                        "*Consultation began {}*\n\n",
                        timestamp.format("%Y-%m-%d %H:%M")
                    ));
                }
                JournalEntry::TinOpened { tin, .. } => {
                    out.push_str(&format!("## {tin}\n\n"));
                }
                JournalEntry::FortuneDrawn { fish, fortune, .. } => {
                    out.push_str(&format!("**{fish}** spoke: \"{fortune}\"\n\n"));
                }
                JournalEntry::FortuneAccepted { .. } => {
                    out.push_str("*Fate accepted.*\n\n");
                }
                JournalEntry::Reset { fish_consulted, .. } => {
                    out.push_str(&format!(
                        "---\n*The tins were closed ({fish_consulted} consulted).*\n\n"
                    ));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Sardine Reading Journal\n=======================\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Started { timestamp } => {
                    out.push_str(&format!(
                        "Consultation began {}\n\n",
                        timestamp.format("%Y-%m-%d %H:%M")
                    ));
                }
                JournalEntry::TinOpened { tin, .. } => {
                    out.push_str(&format!("--- {tin} ---\n"));
                }
                JournalEntry::FortuneDrawn { fish, fortune, .. } => {
                    out.push_str(&format!("{fish}: \"{fortune}\"\n"));
                }
                JournalEntry::FortuneAccepted { .. } => {
                    out.push_str("  (accepted)\n");
                }
                JournalEntry::Reset { fish_consulted, .. } => {
                    out.push_str(&format!("Tins closed, {fish_consulted} consulted.\n\n"));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tin::{FishId, TinId};
    use chrono::Utc;

    fn drawn(text: &str) -> JournalEntry {
        JournalEntry::FortuneDrawn {
            tin: TinId::new(0).unwrap(),
            fish: FishId::new(1).unwrap(),
            fortune: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
        assert!(j.fortunes().is_empty());
    }

    #[test]
    fn fortunes_in_order() {
        let mut j = Journal::new();
        j.append(drawn("first"));
        j.append(JournalEntry::FortuneAccepted {
            fortune: "first".to_string(),
            timestamp: Utc::now(),
        });
        j.append(drawn("second"));
        assert_eq!(j.fortunes(), vec!["first", "second"]);
    }

    #[test]
    fn export_markdown_reading() {
        let mut j = Journal::new();
        j.append(JournalEntry::TinOpened {
            tin: TinId::new(1).unwrap(),
            timestamp: Utc::now(),
        });
        j.append(drawn("Do not fear the brine."));
        j.append(JournalEntry::Reset {
            fish_consulted: 1,
            timestamp: Utc::now(),
        });
        let md = j.export_markdown();
        assert!(md.starts_with("# Sardine Reading Journal"));
        assert!(md.contains("## Tin 2"));
        assert!(md.contains("**Fish 2** spoke: \"Do not fear the brine.\""));
        assert!(md.contains("(1 consulted)"));
    }

    #[test]
    fn export_text_reading() {
        let mut j = Journal::new();
        j.append(drawn("Beware the pull-tab."));
        j.append(JournalEntry::FortuneAccepted {
            fortune: "Beware the pull-tab.".to_string(),
            timestamp: Utc::now(),
        });
        let txt = j.export_text();
        assert!(txt.contains("Fish 2: \"Beware the pull-tab.\""));
        assert!(txt.contains("(accepted)"));
    }

    #[test]
    fn entries_are_chronological() {
        let mut j = Journal::new();
        j.append(JournalEntry::Started {
            timestamp: Utc::now(),
        });
        j.append(drawn("later"));
        let stamps: Vec<_> = j.entries().iter().map(JournalEntry::timestamp).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn journal_serde_roundtrip() {
        let mut j = Journal::new();
        j.append(drawn("test"));
        let json = serde_json::to_string(&j).unwrap();
        let j2: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(j2.len(), 1);
        assert_eq!(j2.fortunes(), vec!["test"]);
    }
}
