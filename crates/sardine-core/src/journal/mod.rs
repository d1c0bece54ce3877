//! Reading journal: a chronological record of one sitting with the tins.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
