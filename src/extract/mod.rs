// src/extract/mod.rs

//! Extraction core: (document text, source URL) → typed records.
//!
//! Pure functions of their input; no I/O, no session state, safe to call
//! concurrently on independent documents. Malformed markup degrades to
//! missing fields, never to an error; only a URL matching no known page
//! shape is a failure.

pub mod clubs;
pub mod fields;
pub mod player;
pub mod ranges;
pub mod roster;

use scraper::Html;
use thiserror::Error;

use crate::config::options::PageKind;
use crate::records::{Club, PlayerFull, Record, Roster};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unrecognized page url: {0}")]
    UnrecognizedUrl(String),
}

/// League listing page → clubs in row order.
pub fn club_list(document: &str) -> Vec<Club> {
    clubs::assemble(&Html::parse_document(document))
}

/// Squad page → roster. Players carry roster-level data only; profile
/// data is folded in by the caller via the merger.
pub fn roster_page(document: &str, url: &str) -> Roster {
    roster::assemble(&Html::parse_document(document), url)
}

/// Player page → full profile record.
pub fn player_page(document: &str, url: &str) -> PlayerFull {
    player::assemble(&Html::parse_document(document), url)
}

/// Kind-dispatched entry point.
pub fn extract(document: &str, url: &str, kind: PageKind) -> Record {
    match kind {
        PageKind::ClubList => Record::ClubList(club_list(document)),
        PageKind::Roster => Record::Roster(roster_page(document, url)),
        PageKind::PlayerProfile => Record::Player(player_page(document, url)),
    }
}

/// Detect the page kind from the URL shape, then extract.
pub fn extract_auto(document: &str, url: &str) -> Result<Record, ExtractError> {
    let kind = PageKind::detect(url).ok_or_else(|| ExtractError::UnrecognizedUrl(s!(url)))?;
    Ok(extract(document, url, kind))
}
