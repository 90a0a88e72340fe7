// src/extract/player.rs

//! Player-Profile Assembler: a player's own page → PlayerFull.
//!
//! Primary pass works a ranked content container and its "Label : value"
//! subtitle blocks; a document-wide second pass fills whatever is still
//! missing, never overwriting the primary pass.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{non_empty, normalize_ws};
use crate::core::{dom, urls};
use crate::records::PlayerFull;
use super::{fields, ranges};

static CORPORATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.player-info-corporate").unwrap());
static MAIN_INFO: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.player-info-main").unwrap());
static MAIN: Lazy<Selector> = Lazy::new(|| Selector::parse("main").unwrap());
static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static CONTAINER: Lazy<Selector> = Lazy::new(|| Selector::parse("div.container").unwrap());

static SUBTITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.player-info-subtitle").unwrap());
static BLOCK_NUMBER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.block-number span").unwrap());
static PLAYER_IMG: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.player-img img").unwrap());
static FIGURE_IMG: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.player-info-figure img").unwrap());
static IMG_CLASS_PLAYER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.player-img").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static SQUAD_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="squad.php"]"#).unwrap());
static FLAG: Lazy<Selector> = Lazy::new(|| Selector::parse(".flag-icon").unwrap());
static TITLED_SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span[title]").unwrap());
static SQUAD_BADGES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "span.squad-number-footer, span.squad-number, div.squad-number-footer, div.squad-number",
    )
    .unwrap()
});

pub fn assemble(doc: &Html, url: &str) -> PlayerFull {
    let mut p = PlayerFull {
        player_id: urls::query_param(url, "pid").unwrap_or_default(),
        url: s!(url),
        ..Default::default()
    };

    if let Some(scope) = content_scope(doc) {
        labeled_pass(scope, &mut p);
        badge_and_photos(scope, &mut p);
    }

    if p.full_name.is_none() {
        p.full_name = title_name(doc);
    }

    document_pass(doc, &mut p);
    p
}

/// Ranked content containers; the first present wins.
fn content_scope(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&CORPORATE)
        .next()
        .or_else(|| doc.select(&MAIN_INFO).next())
        .or_else(|| doc.select(&MAIN).next())
        .or_else(|| doc.select(&ARTICLE).next())
        .or_else(|| doc.select(&CONTAINER).next())
}

/* ---------- primary pass ---------- */

/// Dispatch every subtitle block against the label catalogue. Each label
/// owns its own small parsing rule.
fn labeled_pass(scope: ElementRef, p: &mut PlayerFull) {
    let b = ranges::PROFILE;

    for block in scope.select(&SUBTITLE) {
        let text = dom::text_of(block);

        if let Some(v) = fields::labeled(&text, "Nombre completo") {
            p.full_name = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Nombre de la camisa") {
            p.shirt_name = Some(v);
        } else if text.contains("Posición") && text.contains(':') {
            if let Some(span) = block.select(&TITLED_SPAN).next() {
                p.position_code = non_empty(dom::text_of(span));
                p.position = span
                    .value()
                    .attr("title")
                    .and_then(|t| non_empty(s!(t.trim())));
            } else {
                p.position = fields::labeled(&text, "Posición");
            }
        } else if let Some(v) = fields::labeled(&text, "Valoración") {
            p.rating = fields::int_up_to_3(&v).and_then(|r| b.rating.accept(r));
        } else if let Some(v) = fields::labeled(&text, "Edad") {
            // Compound value: "36 (Jun 25, 1989)"
            p.age = fields::leading_int(&v).and_then(|a| b.age.accept(a));
            p.birth_date = fields::parenthesized(&v);
        } else if (text.contains("Nación") || text.contains("Nacionalidad"))
            && text.contains(':')
        {
            if let Some(flag) = block.select(&FLAG).next() {
                p.nationality_code = dom::flag_code(flag);
            }
            let mut nation = fields::labeled(&text, "Nación")
                .or_else(|| fields::labeled(&text, "Nacionalidad"))
                .unwrap_or_default();
            if let Some(link) = block.select(&LINK).next() {
                nation = nation.replace(&dom::text_of(link), "");
            }
            p.nationality = non_empty(normalize_ws(&nation));
        } else if let Some(v) = fields::labeled(&text, "Altura") {
            p.height = fields::int_up_to_3(&v).and_then(|h| b.height.accept(h));
        } else if let Some(v) = fields::labeled(&text, "Peso") {
            p.weight = fields::int_up_to_3(&v).and_then(|w| b.weight.accept(w));
        } else if text.contains("Club") && text.contains(':') {
            if let Some(link) = block.select(&SQUAD_LINK).next() {
                p.current_club = non_empty(dom::text_of(link));
                p.current_club_id =
                    urls::query_param(link.value().attr("href").unwrap_or_default(), "clubid");
            } else {
                p.current_club = fields::labeled(&text, "Club");
            }
        } else if let Some(v) = fields::labeled(&text, "Squad Number") {
            p.squad_number = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Lugar de nacimiento") {
            p.birth_place = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Pie preferido") {
            p.preferred_foot = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Hair Colour") {
            p.hair_colour = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Hairstyle") {
            p.hairstyle = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Skin Colour") {
            p.skin_colour = Some(v);
        } else if let Some(v) = fields::labeled(&text, "Facial Hair") {
            p.facial_hair = Some(v);
        }
    }
}

/// Structural markers inside the content scope: the number badge outranks
/// a label-derived squad number; photos come from dedicated containers.
fn badge_and_photos(scope: ElementRef, p: &mut PlayerFull) {
    if let Some(span) = scope.select(&BLOCK_NUMBER).next() {
        let num = dom::text_of(span);
        if !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()) {
            p.squad_number = Some(num);
        }
    }

    if let Some(img) = scope.select(&PLAYER_IMG).next() {
        p.photo = non_empty(dom::img_src(img));
    }

    for img in scope.select(&FIGURE_IMG) {
        let src = dom::img_src(img);
        let low = src.to_lowercase();
        if low.contains("action") {
            p.action_photo = Some(src);
        } else if low.contains("peak") {
            p.peak_photo = Some(src);
        } else if low.contains("youth") && !low.contains("profile") {
            p.youth_photo = Some(src);
        } else if low.contains("profile") {
            // combined youth+profile beats plain profile
            if low.contains("youth") {
                p.youth_profile_photo = Some(src);
            } else {
                p.profile_photo = Some(src);
            }
        }
    }
}

/// Page title "John Doe - Soccer Wiki: Profile" → "John Doe".
fn title_name(doc: &Html) -> Option<String> {
    let title = doc.select(&TITLE).next().map(dom::text_of)?;
    let (name, _) = title.split_once(" - ")?;
    non_empty(s!(name.trim()))
}

/* ---------- document-wide fallback ---------- */

/// Second pass over the whole document for fields the primary pass left
/// empty. Never overwrites.
fn document_pass(doc: &Html, p: &mut PlayerFull) {
    let b = ranges::PROFILE;

    if p.squad_number.is_none() {
        p.squad_number = doc
            .select(&SQUAD_BADGES)
            .map(dom::text_of)
            .find(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()));
    }

    if p.nationality_code.is_none() {
        // Only the first flag marker in the document is consulted.
        if let Some(flag) = doc.select(&FLAG).next() {
            p.nationality_code = dom::flag_code(flag);
        }
    }

    if p.position.is_none() || p.position_code.is_none() {
        if let Some(span) = fields::position_titled_span(doc.root_element()) {
            if p.position.is_none() {
                p.position = span
                    .value()
                    .attr("title")
                    .and_then(|t| non_empty(s!(t.trim())));
            }
            if p.position_code.is_none() {
                p.position_code = non_empty(dom::text_of(span));
            }
        }
    }

    let all_text = dom::text_of(doc.root_element());

    if p.height.is_none() {
        p.height = fields::height_cm(&all_text, b.height);
    }
    if p.weight.is_none() {
        p.weight = fields::weight_kg(&all_text, b.weight);
    }
    if p.age.is_none() {
        p.age = fields::age_years(&all_text, b.age);
    }
    if p.birth_date.is_none() {
        p.birth_date = fields::long_date(&all_text);
    }
    if p.preferred_foot.is_none() {
        p.preferred_foot = fields::foot_mention(&all_text);
    }

    if p.photo.is_none() {
        p.photo = doc
            .select(&IMG_CLASS_PLAYER)
            .next()
            .and_then(|img| non_empty(dom::img_src(img)));
    }
    if p.photo.is_none() && !p.player_id.is_empty() {
        let needle = format!("/player/{}", p.player_id);
        p.photo = doc
            .select(&IMG)
            .map(dom::img_src)
            .find(|src| src.contains(&needle));
    }

    if p.current_club.is_none() {
        for link in doc.select(&SQUAD_LINK) {
            let text = dom::text_of(link);
            if text.chars().count() > 2 {
                p.current_club = Some(text);
                p.current_club_id =
                    urls::query_param(link.value().attr("href").unwrap_or_default(), "clubid");
                break;
            }
        }
    }
}
