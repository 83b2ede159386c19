// src/record.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::consts::{
    AUTHOR, BENEFICIARY, BRIGADE, CASE_ID, CURRENCY, DEFAULT_GOAL, DEFAULT_TITLE, JAR_ID, JAR_URL,
};
use crate::scrape::JarSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub balance: u64,
    pub timestamp: String,
}

/// Static descriptive block. Written once with the default record and
/// carried through every rewrite untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub case_id: String,
    pub brigade: String,
    pub beneficiary: String,
    pub author: String,
}

/// The persisted state of one jar. Field order here is the field order
/// in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JarRecord {
    pub jar_id: String,
    pub title: String,
    pub balance: u64,
    pub goal: u64,
    pub remaining: u64,
    pub progress_percent: f64,
    pub currency: String,
    pub updated_at: Option<String>,
    pub url: String,
    pub history: Vec<HistoryEntry>,
    pub metadata: Metadata,
}

impl Default for JarRecord {
    fn default() -> Self {
        Self {
            jar_id: JAR_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            balance: 0,
            goal: DEFAULT_GOAL,
            remaining: DEFAULT_GOAL,
            progress_percent: 0.0,
            currency: CURRENCY.to_string(),
            updated_at: None,
            url: JAR_URL.to_string(),
            history: Vec::new(),
            metadata: Metadata {
                case_id: CASE_ID.to_string(),
                brigade: BRIGADE.to_string(),
                beneficiary: BENEFICIARY.to_string(),
                author: AUTHOR.to_string(),
            },
        }
    }
}

impl JarRecord {
    /// Fold a fresh snapshot into the record.
    ///
    /// Title and goal keep their previous values when the scrape came
    /// back empty/zero; balance always wins. `remaining` and
    /// `progress_percent` are recomputed, never carried over. A history
    /// entry is appended only when the balance actually moved.
    pub fn apply(&mut self, snap: &JarSnapshot, now: &str) {
        if !snap.title.is_empty() {
            self.title = snap.title.clone();
        } else if self.title.is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if snap.goal != 0 {
            self.goal = snap.goal;
        }
        self.balance = snap.balance;

        self.remaining = self.goal.saturating_sub(self.balance);
        self.progress_percent = progress_percent(self.balance, self.goal);
        self.updated_at = Some(now.to_string());

        let moved = match self.history.last() {
            Some(last) => last.balance != snap.balance,
            None => true,
        };
        if moved {
            self.history.push(HistoryEntry {
                balance: snap.balance,
                timestamp: now.to_string(),
            });
        }
    }
}

/// balance/goal as a percentage, rounded to two decimals. Zero goal
/// reads as 0.0 rather than dividing by it.
pub fn progress_percent(balance: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (balance as f64 / goal as f64 * 10_000.0).round() / 100.0
}

/// Current UTC time, second precision, literal `Z` suffix.
pub fn utc_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
