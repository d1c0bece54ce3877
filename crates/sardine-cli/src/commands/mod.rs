pub mod almanac;
pub mod draw;
pub mod fortunes;
pub mod play;

use std::path::Path;

use sardine_core::FortuneList;

/// Load a custom fortune list, or the built-in one.
fn load_fortunes(path: Option<&Path>) -> Result<FortuneList, String> {
    match path {
        Some(path) => FortuneList::from_path(path).map_err(|e| e.to_string()),
        None => Ok(FortuneList::builtin()),
    }
}

/// Use the given seed, or pick one at random.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
