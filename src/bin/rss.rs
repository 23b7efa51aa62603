use std::{error::Error, fs::File};

use portfolio_site::{blog::POSTS, rss::build_channel};

fn main() -> Result<(), Box<dyn Error>> {
    let channel = build_channel(POSTS)?;
    let file = File::create("public/rss.xml")?;
    channel.pretty_write_to(file, b' ', 2)?;
    Ok(())
}
