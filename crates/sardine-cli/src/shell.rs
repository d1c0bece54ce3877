//! Interactive command interpreter around an [`Oracle`].
//!
//! Turns typed commands into oracle intents, waits out the cosmetic delays,
//! and renders the resulting cues and state as text.

use std::thread;
use std::time::Duration;

use sardine_core::{AlmanacTab, Anchor, FISH_PER_TIN, Oracle, Outcome, Timings};
use tracing::trace;

use crate::error::{ShellError, ShellResult};
use crate::render;

/// A terminal session at the table of tins.
pub struct Shell {
    oracle: Oracle,
    timings: Timings,
    finished: bool,
}

impl Shell {
    /// Wrap an oracle, pacing with its configured timings.
    pub fn new(oracle: Oracle) -> Self {
        let timings = oracle.config().timings;
        Self {
            oracle,
            timings,
            finished: false,
        }
    }

    /// The underlying oracle.
    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    /// Whether the user has left the table.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> ShellResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "start" => self.do_start(),
            "open" | "tin" => self.do_open(rest),
            "fish" | "ask" => self.do_fish(rest),
            "accept" => self.do_accept(),
            "reset" | "again" => self.do_reset(),
            "tins" | "look" => Ok(render::table(&self.oracle)),
            "almanac" | "about" => self.do_almanac(rest),
            "close" => self.do_close(),
            "journal" => Ok(self.do_journal()),
            "export" => self.do_export(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.finished = true;
                Ok("Goodbye!".to_string())
            }
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }

    fn do_start(&mut self) -> ShellResult<String> {
        let outcome = self.oracle.start();
        Ok(self.respond(outcome, |oracle| {
            format!(
                "Choose a tin to reveal your fate.\n{}",
                render::table(oracle)
            )
        }))
    }

    fn do_open(&mut self, rest: &str) -> ShellResult<String> {
        let index = parse_number(rest, "usage: open <tin 1-3>")?;
        let outcome = self.oracle.select_tin(index);
        if outcome.is_applied() {
            pause(self.timings.open_delay);
        }
        Ok(self.respond(outcome, render::table))
    }

    fn do_fish(&mut self, rest: &str) -> ShellResult<String> {
        let index = parse_number(rest, "usage: fish <1-3>")?;
        // Fish are drawn one per row, heads on the left.
        let anchor = Anchor::at_mouth(2.0, index.saturating_mul(2) as f32, 1.0);
        let started = self.oracle.begin_draw(index, anchor);
        if let Some(reason) = started.ignored() {
            return Ok(format!("({reason})"));
        }

        let mut out = self.effects();
        pause(self.timings.consult_delay);
        let resolved = self.oracle.complete_draw();
        out.push_str(&self.respond(resolved, |oracle| {
            oracle
                .active_fortune()
                .map(render::fortune)
                .unwrap_or_default()
        }));
        Ok(out)
    }

    fn do_accept(&mut self) -> ShellResult<String> {
        let outcome = self.oracle.dismiss_fortune();
        Ok(self.respond(outcome, render::table))
    }

    fn do_reset(&mut self) -> ShellResult<String> {
        let outcome = self.oracle.reset();
        Ok(self.respond(outcome, |oracle| {
            format!("Consult the fates again.\n{}", render::table(oracle))
        }))
    }

    fn do_almanac(&mut self, rest: &str) -> ShellResult<String> {
        let tab = if rest.is_empty() {
            None
        } else {
            Some(AlmanacTab::parse(rest).ok_or_else(|| {
                ShellError::InvalidChoice(format!("unknown page '{rest}', use: facts, stories"))
            })?)
        };

        if !self.oracle.almanac().is_open() {
            let opened = self.oracle.open_almanac();
            if let Some(reason) = opened.ignored() {
                return Ok(format!("({reason})"));
            }
        }
        if let Some(tab) = tab
            && tab != self.oracle.almanac().tab()
        {
            self.oracle.switch_almanac_tab(tab);
        }

        let page = render::almanac_page(self.oracle.almanac().tab());
        Ok(format!("{}{page}\n(type 'close' to put it back)", self.effects()))
    }

    fn do_close(&mut self) -> ShellResult<String> {
        let outcome = self.oracle.close_almanac();
        Ok(self.respond(outcome, render::table))
    }

    fn do_journal(&self) -> String {
        if self.oracle.journal().is_empty() {
            return "Journal is empty.".to_string();
        }
        self.oracle.journal().export_text().trim_end().to_string()
    }

    fn do_export(&self, format: &str) -> ShellResult<String> {
        let journal = self.oracle.journal();
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(journal.export_markdown()),
            "text" | "txt" => Ok(journal.export_text()),
            other => Err(ShellError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> String {
        let oracle = &self.oracle;
        let mut out = format!("Mode: {:?}\n", oracle.mode());
        match oracle.selected_tin() {
            Some(tin) => out.push_str(&format!(
                "Open tin: {tin} ({} of {FISH_PER_TIN} fish spoken)\n",
                oracle.consulted_fish().len()
            )),
            None => out.push_str("No tin open.\n"),
        }
        out.push_str(&format!(
            "Fortunes left this cycle: {}/{}\n",
            oracle.pool().remaining(),
            oracle.fortunes().len()
        ));
        out.push_str(&format!("Journal: {} entries", oracle.journal().len()));
        out
    }

    /// Render drained cues followed by `body`, or the ignore reason.
    fn respond(&mut self, outcome: Outcome, body: impl FnOnce(&Oracle) -> String) -> String {
        match outcome {
            Outcome::Applied => format!("{}{}", self.effects(), body(&self.oracle)),
            Outcome::Ignored(reason) => format!("({reason})"),
        }
    }

    fn effects(&mut self) -> String {
        self.oracle
            .drain_cues()
            .iter()
            .map(|cue| format!("{}\n", render::cue_effect(cue)))
            .collect()
    }
}

const HELP: &str = "\
Commands:
  start                         Wake the fish
  open <1-3>                    Open a tin
  fish <1-3>                    Ask a fish in the open tin for its fortune
  accept                        Accept your fate
  reset                         Close the tins and consult again
  tins                          Look at the table
  almanac [facts|stories]       Read about the sardines (tins must be closed)
  close                         Put the almanac back
  journal                       Show this sitting's readings
  export [markdown|text]        Export the journal
  status                        Show session status
  help                          Show this help
  quit                          Leave the table";

/// Parse a 1-based number into a 0-based index.
fn parse_number(input: &str, usage: &str) -> ShellResult<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ShellError::InvalidChoice(usage.to_string())),
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        trace!(?delay, "pausing");
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sardine_core::{FortuneList, Mode, OracleConfig};

    fn shell() -> Shell {
        let config = OracleConfig::default().instant();
        Shell::new(Oracle::new(FortuneList::builtin(), config))
    }

    fn started() -> Shell {
        let mut s = shell();
        s.process("start").unwrap();
        s
    }

    #[test]
    fn paced_shell_still_opens_tins() {
        let timings = Timings {
            open_delay: Duration::from_millis(1),
            consult_delay: Duration::from_millis(1),
        };
        let config = OracleConfig::default().with_timings(timings);
        let mut s = Shell::new(Oracle::new(FortuneList::builtin(), config));
        s.process("start").unwrap();
        assert!(s.process("open 1").unwrap().contains("Tin 1 peels open"));
        assert!(s.process("fish 1").unwrap().contains("THE SARDINE HAS SPOKEN"));
    }

    #[test]
    fn start_shows_tins() {
        let mut s = shell();
        let out = s.process("start").unwrap();
        assert!(out.contains("the tide draws in"));
        assert!(out.contains("[ Tin 1 ]  [ Tin 2 ]  [ Tin 3 ]"));
        assert_eq!(s.process("start").unwrap(), "(the consultation has already begun)");
    }

    #[test]
    fn open_tin() {
        let mut s = started();
        let out = s.process("open 2").unwrap();
        assert!(out.contains("Tin 2 peels open"));
        assert!(out.contains("Tin 2 (open)"));
        assert_eq!(s.process("open 3").unwrap(), "(a tin is already open)");
    }

    #[test]
    fn open_rejects_bad_numbers() {
        let mut s = started();
        assert!(matches!(s.process("open"), Err(ShellError::InvalidChoice(_))));
        assert!(matches!(s.process("open 0"), Err(ShellError::InvalidChoice(_))));
        assert!(matches!(s.process("open two"), Err(ShellError::InvalidChoice(_))));
        assert_eq!(s.process("open 4").unwrap(), "(there is no tin #4)");
    }

    #[test]
    fn fish_reveals_fortune() {
        let mut s = started();
        s.process("open 1").unwrap();
        let out = s.process("fish 3").unwrap();
        assert!(out.contains("Fish 3 stirs in the oil"));
        assert!(out.contains("THE SARDINE HAS SPOKEN"));
        let text = s.oracle().active_fortune().unwrap().text.clone();
        assert!(out.contains(&text));
        assert_eq!(s.oracle().mode(), Mode::ItemRevealed);

        assert_eq!(s.process("fish 3").unwrap(), "(Fish 3 has already spoken)");
        assert_eq!(s.oracle().pool().remaining(), 11);
    }

    #[test]
    fn fish_before_opening_tin() {
        let mut s = started();
        assert_eq!(s.process("fish 1").unwrap(), "(no tin is open)");
    }

    #[test]
    fn accept_and_reset() {
        let mut s = started();
        s.process("open 1").unwrap();
        s.process("fish 1").unwrap();
        let out = s.process("accept").unwrap();
        assert!(out.contains("*ting*"));
        assert!(s.oracle().active_fortune().is_none());
        assert_eq!(s.process("accept").unwrap(), "(no fortune is showing)");

        let out = s.process("reset").unwrap();
        assert!(out.contains("Consult the fates again."));
        assert!(s.oracle().selected_tin().is_none());
        assert_eq!(s.oracle().pool().remaining(), 11);
    }

    #[test]
    fn almanac_pages() {
        let mut s = started();
        let out = s.process("almanac").unwrap();
        assert!(out.contains("*page rustle*"));
        assert!(out.contains("About the Sardines: Facts"));

        let out = s.process("almanac stories").unwrap();
        assert!(out.contains("Lady Glimmer"));

        assert!(matches!(
            s.process("almanac recipes"),
            Err(ShellError::InvalidChoice(_))
        ));

        let out = s.process("close").unwrap();
        assert!(out.contains("*click*"));
        assert!(!s.oracle().almanac().is_open());
    }

    #[test]
    fn almanac_unavailable_with_open_tin() {
        let mut s = started();
        s.process("open 1").unwrap();
        let out = s.process("almanac").unwrap();
        assert!(out.contains("only on the shelf"));
    }

    #[test]
    fn journal_and_export() {
        let mut s = shell();
        assert_eq!(s.process("journal").unwrap(), "Journal is empty.");
        s.process("start").unwrap();
        s.process("open 1").unwrap();
        s.process("fish 1").unwrap();

        let journal = s.process("journal").unwrap();
        assert!(journal.contains("--- Tin 1 ---"));

        let md = s.process("export").unwrap();
        assert!(md.contains("# Sardine Reading Journal"));
        let txt = s.process("export text").unwrap();
        assert!(txt.contains("Sardine Reading Journal"));
        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn status() {
        let mut s = started();
        s.process("open 2").unwrap();
        s.process("fish 1").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Mode: ItemRevealed"));
        assert!(status.contains("Open tin: Tin 2 (1 of 3 fish spoken)"));
        assert!(status.contains("Fortunes left this cycle: 11/12"));
    }

    #[test]
    fn help_quit_and_unknown() {
        let mut s = shell();
        assert!(s.process("help").unwrap().contains("open <1-3>"));
        assert!(!s.is_finished());
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.is_finished());
        assert_eq!(s.process("   ").unwrap(), "");
        assert!(matches!(
            s.process("dance"),
            Err(ShellError::UnknownCommand(cmd)) if cmd == "dance"
        ));
    }
}
