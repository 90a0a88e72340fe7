// src/extract/roster.rs

//! Roster Assembler: squad page → club header, best-effort club info and
//! one record per detected player.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::{dom, urls};
use crate::records::{ClubInfo, MergedPlayer, PlayerBasic, Roster};
use super::{fields, ranges};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROSTER_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.table-roster").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static PLAYER_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="player.php"]"#).unwrap());
static INFO_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("p, dd, li").unwrap());

static SQUAD_TABLE_ID: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)squad|roster").unwrap());

pub fn assemble(doc: &Html, url: &str) -> Roster {
    let club_name = doc
        .select(&H1)
        .next()
        .map(dom::text_of)
        .unwrap_or_else(|| s!("Club"));
    let club_id = urls::query_param(url, "clubid").unwrap_or_default();

    let mut players: Vec<PlayerBasic> = Vec::new();
    if let Some(table) = find_roster_table(doc) {
        players.extend(table.select(&ROW).filter_map(player_from_row));
    }
    if players.is_empty() {
        players = players_from_links(doc);
    }

    let total_players = players.len();
    Roster {
        club_name,
        club_id,
        club_info: club_info(doc),
        players: players.iter().map(MergedPlayer::from_basic).collect(),
        total_players,
    }
}

/* ---------- table discovery ---------- */

/// Discovery chain for the squad table. The row-count heuristic is a
/// known-fragile last resort: the first table with more than 5 rows wins,
/// whether or not it is actually the roster.
fn find_roster_table(doc: &Html) -> Option<ElementRef<'_>> {
    by_roster_class(doc)
        .or_else(|| by_squad_id(doc))
        .or_else(|| by_row_count(doc))
}

fn by_roster_class(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&ROSTER_TABLE).next()
}

fn by_squad_id(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).find(|t| {
        t.value()
            .attr("id")
            .is_some_and(|id| SQUAD_TABLE_ID.is_match(id))
    })
}

fn by_row_count(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).find(|t| t.select(&ROW).count() > 5)
}

/* ---------- row extraction ---------- */

/// A row qualifies only if it links to a player page; the link supplies
/// the two required fields.
fn player_from_row(row: ElementRef) -> Option<PlayerBasic> {
    let link = row.select(&PLAYER_LINK).next()?;
    let href = link.value().attr("href").unwrap_or_default();

    let mut p = PlayerBasic {
        name: dom::text_of(link),
        player_id: urls::query_param(href, "pid").unwrap_or_default(),
        ..Default::default()
    };

    for cell in row.select(&CELL) {
        scan_cell(cell, &mut p);
    }

    if p.name.is_empty() || p.player_id.is_empty() {
        return None;
    }
    Some(p)
}

/// Probe one cell for every still-missing field. Cells are not mutually
/// exclusive per field, and a field set by an earlier cell is never
/// overwritten by a later one.
fn scan_cell(cell: ElementRef, p: &mut PlayerBasic) {
    let b = ranges::ROSTER;
    let text = dom::text_of(cell);

    if p.squad_number.is_none() {
        p.squad_number = fields::squad_badge(cell);
    }
    if p.photo.is_none() {
        p.photo = fields::player_photo(cell);
    }
    if p.nationality.is_none() {
        p.nationality = fields::flag_code(cell);
    }
    if p.position.is_none() {
        p.position = fields::first_hit(cell, &[position_title, position_attr]);
    }
    if p.age.is_none() {
        p.age = fields::digits_text(cell).and_then(|v| b.age.accept(v));
    }
    if p.height.is_none() {
        p.height = fields::height_cm(&text, b.height);
    }
    if p.weight.is_none() {
        p.weight = fields::weight_kg(&text, b.weight);
    }
    if p.foot.is_none() {
        p.foot = fields::foot_keyword(&text);
    }
    if p.birth_date.is_none() {
        p.birth_date = fields::slash_date(&text);
    }
    if p.rating.is_none() {
        p.rating = fields::small_int(&text, b.rating);
    }
}

fn position_title(cell: ElementRef) -> Option<String> {
    let span = fields::position_titled_span(cell)?;
    span.value().attr("title").map(|t| s!(t.trim()))
}

fn position_attr(cell: ElementRef) -> Option<String> {
    cell.value().attr("data-position").map(|v| s!(v))
}

/* ---------- link-scan fallback ---------- */

/// Last resort for pages without a usable table: scan the whole document
/// for player links and use each link's nearest block/row/list-item
/// ancestor as the scope. Only a reduced field set is attempted here.
fn players_from_links(doc: &Html) -> Vec<PlayerBasic> {
    let mut out = Vec::new();

    for link in doc.select(&PLAYER_LINK) {
        let name = dom::text_of(link);
        if name.chars().count() < 3 {
            continue;
        }
        let href = link.value().attr("href").unwrap_or_default();
        let Some(player_id) = urls::query_param(href, "pid") else { continue };
        let Some(scope) = dom::nearest_ancestor(link, &["div", "tr", "li"]) else { continue };

        out.push(PlayerBasic {
            name,
            player_id,
            squad_number: fields::squad_badge_any(scope),
            photo: fields::player_photo(scope),
            nationality: fields::flag_code(scope),
            ..Default::default()
        });
    }

    out
}

/* ---------- club info ---------- */

/// Best-effort club metadata from labeled text blocks anywhere on the
/// page. Undetected labels stay empty.
fn club_info(doc: &Html) -> ClubInfo {
    let mut info = ClubInfo::default();

    for block in doc.select(&INFO_BLOCK) {
        let text = dom::text_of(block);
        if info.stadium.is_none() {
            info.stadium = fields::labeled(&text, "Estadio");
        }
        if info.capacity.is_none() {
            info.capacity = fields::labeled(&text, "Capacidad");
        }
        if info.coach.is_none() {
            info.coach = fields::labeled(&text, "Entrenador");
        }
        if info.location.is_none() {
            info.location = fields::labeled(&text, "Ubicación");
        }
    }

    info
}
