// src/scrape/jar.rs

use std::error::Error;

use regex::Regex;

use crate::config::consts::{JAR_ID, JAR_URL};
use crate::core::html::{flatten, title_text};
use crate::core::net;
use crate::core::sanitize::parse_amount;

// Ukrainian page copy: "Зібрано <balance> ... з <goal>".
// Matched against the flattened, lowercased document text. The first
// letter also accepts the look-alike Latin "z"; the page has shipped
// with it at least once.
const AMOUNTS_PATTERN: &str = r"[зz]ібрано\s+([\d\s\u{a0}]+)[^\d]+з\s+([\d\s\u{a0}]+)";

/// One observation of the jar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarSnapshot {
    pub balance: u64,
    pub goal: u64,
    pub title: String,
}

/// Extract balance, goal and title from raw page HTML.
///
/// Deliberately tolerant of surrounding markup (the whole document is
/// flattened to text first) but strict about the two-number pattern:
/// if the page copy changes, the run must fail rather than write a
/// bogus balance.
pub fn extract(html: &str) -> Result<JarSnapshot, Box<dyn Error>> {
    let text = flatten(html);

    let re = Regex::new(AMOUNTS_PATTERN)?;
    let caps = re
        .captures(&text)
        .ok_or("Could not find jar amounts in HTML")?;

    let balance = parse_amount(&caps[1]);
    let goal = parse_amount(&caps[2]);

    let title = title_text(html).unwrap_or_else(|| format!("CASE-31 ({JAR_ID})"));

    Ok(JarSnapshot { balance, goal, title })
}

/// Fetch the jar page and extract a snapshot from it.
pub fn fetch_and_extract() -> Result<JarSnapshot, Box<dyn Error>> {
    logd!("GET {JAR_URL}");
    let html = net::http_get(JAR_URL)?;
    logd!("Fetched {} bytes", html.len());
    extract(&html)
}
