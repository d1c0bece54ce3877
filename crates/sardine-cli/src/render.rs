//! Plain-text rendering of the table, fortunes, cues and almanac.

use sardine_core::almanac::{FACTS, STORIES};
use sardine_core::{ActiveFortune, AlmanacTab, Cue, FishId, Oracle, TinId};

/// Draw the tins on the table, or the fish in the open tin.
pub fn table(oracle: &Oracle) -> String {
    let Some(tin) = oracle.selected_tin() else {
        return TinId::all()
            .map(|t| format!("[ {t} ]"))
            .collect::<Vec<_>>()
            .join("  ");
    };

    let mut out = format!("{tin} (open)\n");
    for fish in FishId::all() {
        let line = if oracle.is_consulted(fish) {
            format!("  {}. ><(((x>  spoken\n", fish.index() + 1)
        } else {
            format!("  {}. ><(((o>\n", fish.index() + 1)
        };
        out.push_str(&line);
    }
    out.trim_end().to_string()
}

/// The speech bubble for a fortune on display.
pub fn fortune(active: &ActiveFortune) -> String {
    format!(
        "  \"{}\"\n\n      THE SARDINE HAS SPOKEN\n  (type 'accept' to accept your fate)",
        active.text
    )
}

/// The textual stand-in for the effect a cue triggers.
pub fn cue_effect(cue: &Cue) -> String {
    match cue {
        Cue::Started => "~ the tide draws in ~".to_string(),
        Cue::TinOpened { tin } => format!("*krrrk... CLANK* {tin} peels open."),
        Cue::DrawStarted { fish, .. } => format!("{fish} stirs in the oil..."),
        Cue::DrawResolved { .. } => "~ a shimmering chime ~".to_string(),
        Cue::FortuneAccepted => "*ting*".to_string(),
        Cue::Reset => "~ whoosh ~ the lids roll shut.".to_string(),
        Cue::AlmanacOpened | Cue::AlmanacPageTurned { .. } => "*page rustle*".to_string(),
        Cue::AlmanacClosed => "*click*".to_string(),
    }
}

/// One page of the almanac.
pub fn almanac_page(tab: AlmanacTab) -> String {
    let mut out = format!("About the Sardines: {tab}\n\n");
    match tab {
        AlmanacTab::Facts => {
            for fact in FACTS {
                out.push_str(&format!("{}\n  {}\n\n", fact.title, fact.text));
            }
        }
        AlmanacTab::Stories => {
            for story in STORIES {
                out.push_str(&format!(
                    "{} (canned {})\n  {}\n\n",
                    story.name, story.canned_date, story.story
                ));
            }
        }
    }
    out.trim_end().to_string()
}
