// src/runner.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::record::{JarRecord, utc_now};
use crate::scrape::{self, JarSnapshot};
use crate::store;

/// What a completed run produced, for the caller to report on.
pub struct RunSummary {
    pub record: JarRecord,
    pub path: PathBuf,
}

/// Full pipeline: fetch → extract → merge → persist.
/// Any failure before `store::save` leaves the data file untouched.
pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    let snap = scrape::fetch_and_extract()?;
    logf!(
        "Scraped balance={} goal={} title={:?}",
        snap.balance, snap.goal, snap.title
    );

    let path = store::data_path();
    let summary = update(&path, &snap)?;
    Ok(summary)
}

/// Read-modify-write against one record file. Split out from [`run`]
/// so tests can drive it with a canned snapshot and scratch path.
pub fn update(path: &Path, snap: &JarSnapshot) -> Result<RunSummary, Box<dyn Error>> {
    let mut record = store::load(path)?;
    let before = record.history.len();

    record.apply(snap, &utc_now());

    if record.history.len() > before {
        logf!("History grew to {} entries", record.history.len());
    }

    store::save(path, &record)?;
    Ok(RunSummary { record, path: path.to_path_buf() })
}

/// The two human-readable lines the tool prints on success.
pub fn report(summary: &RunSummary) {
    let r = &summary.record;
    println!(
        "Updated: {} / {} {} ({}%)",
        thousands(r.balance),
        thousands(r.goal),
        r.currency,
        r.progress_percent
    );
    println!("Saved to: {}", summary.path.display());
}

/// 1234567 → "1,234,567"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
