// src/config/options.rs
use std::path::PathBuf;

use super::consts::BASE_URL;

/// The three page shapes the extractor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    ClubList,
    Roster,
    PlayerProfile,
}

impl PageKind {
    /// Detect the page kind from the URL shape. Unknown shapes return None;
    /// the caller turns that into the typed unrecognized-input error.
    pub fn detect(url: &str) -> Option<PageKind> {
        if url.contains("country.php") {
            Some(PageKind::ClubList)
        } else if url.contains("squad.php") {
            Some(PageKind::Roster)
        } else if url.contains("player.php") {
            Some(PageKind::PlayerProfile)
        } else {
            None
        }
    }
}

/// CLI parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub url: Option<String>,
    pub out: Option<PathBuf>,
    /// Skip the output projection and keep internal-only fields.
    pub keep_internal: bool,
    /// Roster only: skip the per-player profile fetch+merge pass.
    pub basic_only: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            url: None,
            out: None,
            keep_internal: false,
            basic_only: false,
        }
    }
}

impl Params {
    pub fn country_url(code: &str) -> String {
        format!("{BASE_URL}country.php?countryId={code}")
    }
    pub fn club_url(id: &str) -> String {
        format!("{BASE_URL}squad.php?clubid={id}")
    }
    pub fn player_url(id: &str) -> String {
        format!("{BASE_URL}player.php?pid={id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_known_page_kinds() {
        let u = "https://es.soccerwiki.org/country.php?countryId=ARG";
        assert_eq!(PageKind::detect(u), Some(PageKind::ClubList));
        let u = "https://es.soccerwiki.org/squad.php?clubid=20";
        assert_eq!(PageKind::detect(u), Some(PageKind::Roster));
        let u = "https://es.soccerwiki.org/player.php?pid=1234";
        assert_eq!(PageKind::detect(u), Some(PageKind::PlayerProfile));
    }

    #[test]
    fn detect_rejects_unknown_shapes() {
        assert_eq!(PageKind::detect("https://es.soccerwiki.org/index.php"), None);
        assert_eq!(PageKind::detect(""), None);
    }
}
