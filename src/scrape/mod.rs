// src/scrape/mod.rs

//! Fetch + extract workflows. The extraction core stays pure; everything
//! stateful (HTTP, worker threads, progress) lives here.

use std::{
    error::Error,
    sync::{
        Arc, mpsc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, PROFILE_TIMEOUT_SECS, REQUEST_PAUSE_MS, WORKERS},
    config::options::{PageKind, Params},
    core::net,
    extract::{self, ExtractError},
    progress::Progress,
    records::{Club, PlayerFull, Record, Roster},
};

/// Fetch one page and extract whatever record its URL shape implies.
pub fn collect(
    url: &str,
    with_profiles: bool,
    progress: Option<&mut dyn Progress>,
) -> Result<Record, Box<dyn Error>> {
    match PageKind::detect(url) {
        Some(PageKind::ClubList) => Ok(Record::ClubList(collect_clubs(url, progress)?)),
        Some(PageKind::Roster) => {
            Ok(Record::Roster(collect_roster(url, with_profiles, progress)?))
        }
        Some(PageKind::PlayerProfile) => Ok(Record::Player(collect_player(url, progress)?)),
        None => Err(Box::new(ExtractError::UnrecognizedUrl(s!(url)))),
    }
}

pub fn collect_clubs(
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Club>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching club list…");
    }
    let html = net::http_get(url)?;
    Ok(extract::club_list(&html))
}

pub fn collect_player(
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PlayerFull, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching player page…");
    }
    let html = net::http_get(url)?;
    Ok(extract::player_page(&html, url))
}

/// Roster workflow: fetch the squad page, then every player's own page,
/// folding profile data back in by stable player index so roster order is
/// preserved regardless of completion order.
pub fn collect_roster(
    url: &str,
    with_profiles: bool,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Roster, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching squad page…");
    }
    let html = net::http_get(url)?;
    let mut roster = extract::roster_page(&html, url);

    if !with_profiles || roster.players.is_empty() {
        return Ok(roster);
    }

    let total = roster.players.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    // (roster index, player id, display name)
    let work: Vec<(usize, String, String)> = roster
        .players
        .iter()
        .enumerate()
        .map(|(i, pl)| (i, pl.player_id.clone(), pl.name.clone()))
        .collect();

    type FetchOk = (usize, PlayerFull);
    type FetchErr = (usize, String);

    let work = Arc::new(work);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(total).max(1);

    // Spawn workers

    for _ in 0..workers {
        let work = Arc::clone(&work);
        let cursor = Arc::clone(&cursor);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= work.len() {
                    break;
                }
                let (index, pid, _) = &work[i];
                let result = match fetch_profile(pid) {
                    Ok(full) => Ok((*index, full)),
                    Err(e) => Err((*index, e.to_string())),
                };
                let _ = tx.send(result);
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Fold results back in by roster index
    for seq in 1..=total {
        match res_rx.recv() {
            Ok(Ok((index, full))) => {
                roster.players[index].absorb(&full);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(seq, &work[index].2);
                }
            }
            Ok(Err((index, msg))) => {
                // Keep the roster-derived record for this player
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(seq, &work[index].2);
                }
                loge!("player {}: {msg}", work[index].1);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(roster)
}

fn fetch_profile(pid: &str) -> Result<PlayerFull, Box<dyn Error>> {
    let url = Params::player_url(pid);
    let html = net::http_get_with_timeout(&url, PROFILE_TIMEOUT_SECS)?;
    Ok(extract::player_page(&html, &url))
}
