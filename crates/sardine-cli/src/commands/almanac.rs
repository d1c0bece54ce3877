use sardine_core::AlmanacTab;

use crate::render;

pub fn run(stories: bool) -> Result<(), String> {
    let tab = if stories {
        AlmanacTab::Stories
    } else {
        AlmanacTab::Facts
    };
    println!("{}", render::almanac_page(tab));
    Ok(())
}
