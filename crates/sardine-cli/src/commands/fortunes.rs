use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(fortunes: Option<&Path>) -> Result<(), String> {
    let fortunes = super::load_fortunes(fortunes)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Fortune"]);

    for (i, text) in fortunes.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), text.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} fortunes", fortunes.len());

    Ok(())
}
