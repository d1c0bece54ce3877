use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sardine_core::{Oracle, OracleConfig};

use crate::shell::Shell;

pub fn run(fortunes: Option<&Path>, seed: Option<u64>, fast: bool) -> Result<(), String> {
    let fortunes = super::load_fortunes(fortunes)?;
    let seed = super::resolve_seed(seed);
    let mut config = OracleConfig::default().with_seed(seed);
    if fast {
        config = config.instant();
    }

    let mut shell = Shell::new(Oracle::new(fortunes, config));

    println!("  {}", "The Sardine's Secret".bold());
    println!(
        "  {} fortunes in the brine | Seed: {seed}",
        shell.oracle().fortunes().len()
    );
    println!("  Type 'start' to consult the fish, 'help' for commands.\n");

    let mut lines = io::stdin().lock().lines();
    while !shell.is_finished() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        match shell.process(&line.map_err(|e| e.to_string())?) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}
