// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::config::consts::{CLUBS_FILE, PLAYER_FILE_PREFIX, ROSTER_FILE_PREFIX};
use crate::core::sanitize::filename_stem;
use crate::records::Record;

/// Write a (projected) record: 2-space indent, declared key order,
/// non-ASCII characters intact.
pub fn write_json(path: &Path, value: &Value) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    fs::write(path, body)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Default output filename per record kind.
pub fn default_filename(record: &Record) -> PathBuf {
    let name = match record {
        Record::ClubList(_) => s!(CLUBS_FILE),
        Record::Roster(roster) => {
            format!("{ROSTER_FILE_PREFIX}_{}.json", filename_stem(&roster.club_name))
        }
        Record::Player(player) => {
            let who = player.full_name.as_deref().unwrap_or("jugador");
            format!("{PLAYER_FILE_PREFIX}_{}.json", filename_stem(who))
        }
    };
    PathBuf::from(name)
}
