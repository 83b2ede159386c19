// src/store.rs

use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::config::consts::{DATA_DIR, DATA_FILE};
use crate::record::JarRecord;

pub fn data_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(DATA_FILE)
}

/// Load the persisted record, or start from the default one when no
/// file exists yet. A file that exists but does not parse is an error;
/// silently resetting it would throw away the history.
pub fn load(path: &Path) -> Result<JarRecord, Box<dyn Error>> {
    if !path.exists() {
        logd!("No data file at {}, starting fresh", path.display());
        return Ok(JarRecord::default());
    }
    let text = fs::read_to_string(path)?;
    let record = serde_json::from_str(&text)?;
    Ok(record)
}

/// Overwrite the record file with indented JSON. Parent directories
/// are created as needed. Not atomic; single writer assumed.
pub fn save(path: &Path, record: &JarRecord) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
