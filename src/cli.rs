// src/cli.rs

use std::{env, error::Error};

use crate::runner;

const USAGE: &str = "Usage: jar_scrape
Fetches the CASE-31 jar page and updates data/case31.json.
Takes no arguments.";

pub fn run() -> Result<(), Box<dyn Error>> {
    parse_cli()?;
    let summary = runner::run()?;
    runner::report(&summary);
    Ok(())
}

// No flags by design; one invocation is one refresh. Reject anything
// unexpected instead of silently ignoring it.
fn parse_cli() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    if let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
