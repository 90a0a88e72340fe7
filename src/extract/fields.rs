// src/extract/fields.rs

//! Per-field detection strategies. Each strategy probes one signal in a
//! scope (a table cell, a link's container, a content block) and returns
//! the value if that signal is present; assemblers compose them into
//! priority chains via `first_hit`.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::core::dom;
use super::ranges::Bounds;

/// One detection strategy with the uniform scope signature.
pub type Strategy<T> = fn(ElementRef) -> Option<T>;

/// First-success-wins composition of an ordered strategy chain.
pub fn first_hit<T>(scope: ElementRef, strategies: &[Strategy<T>]) -> Option<T> {
    strategies.iter().find_map(|probe| probe(scope))
}

static SQUAD_BADGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".squad-number-footer, .squad-number").unwrap());
static FLAG: Lazy<Selector> = Lazy::new(|| Selector::parse(".flag-icon").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static TITLED_SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span[title]").unwrap());

static HEIGHT_CM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{2,3})\s*cm").unwrap());
static WEIGHT_KG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{2,3})\s*kg").unwrap());
static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})").unwrap());
static SMALL_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\b").unwrap());
static INT_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,3})").unwrap());
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)").unwrap());
static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());
static AGE_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s*años?").unwrap());
static LONG_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s+(\d{1,2}),?\s+(\d{4})").unwrap());

/// Long-form position names the site uses as `title` attributes.
pub const POSITION_TITLES: &[&str] = &[
    "Portero",
    "Defensa",
    "Centrocampista",
    "Delantero",
    "Goalkeeper",
    "Defender",
    "Midfielder",
    "Forward",
];

/* ---------- structural markers ---------- */

/// Digits-only squad number badge.
pub fn squad_badge(scope: ElementRef) -> Option<String> {
    let text = dom::text_of(scope.select(&SQUAD_BADGE).next()?);
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        Some(text)
    } else {
        None
    }
}

/// Squad number badge text as-is (link-scan fallback path).
pub fn squad_badge_any(scope: ElementRef) -> Option<String> {
    let text = dom::text_of(scope.select(&SQUAD_BADGE).next()?);
    if text.is_empty() { None } else { Some(text) }
}

/// Nationality code from a flag marker's class suffix.
pub fn flag_code(scope: ElementRef) -> Option<String> {
    scope.select(&FLAG).next().and_then(dom::flag_code)
}

/// First image whose source path mentions players.
pub fn player_photo(scope: ElementRef) -> Option<String> {
    scope
        .select(&IMG)
        .map(dom::img_src)
        .find(|src| src.contains("player"))
}

/// First `span[title]` whose title is a known position name.
pub fn position_titled_span(scope: ElementRef) -> Option<ElementRef<'_>> {
    scope.select(&TITLED_SPAN).find(|span| {
        span.value()
            .attr("title")
            .map(str::trim)
            .is_some_and(|t| POSITION_TITLES.contains(&t))
    })
}

/* ---------- labeled text blocks ---------- */

/// "Label : value" block: the label substring must appear, and the value
/// is whatever follows the first separator. Empty values count as absent.
pub fn labeled(text: &str, label: &str) -> Option<String> {
    if !text.contains(label) {
        return None;
    }
    let (_, value) = text.split_once(':')?;
    let value = value.trim();
    if value.is_empty() { None } else { Some(s!(value)) }
}

/* ---------- free-text patterns ---------- */

/// All-digits scope text (squad tables carry bare ages this way).
pub fn digits_text(scope: ElementRef) -> Option<u32> {
    let text = dom::text_of(scope);
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

pub fn height_cm(text: &str, bounds: Bounds) -> Option<u32> {
    let m = HEIGHT_CM.captures(text)?;
    bounds.accept(m[1].parse().ok()?)
}

pub fn weight_kg(text: &str, bounds: Bounds) -> Option<u32> {
    let m = WEIGHT_KG.captures(text)?;
    bounds.accept(m[1].parse().ok()?)
}

/// Bare 1-2 digit integer anywhere in the text (roster ratings).
pub fn small_int(text: &str, bounds: Bounds) -> Option<u32> {
    let m = SMALL_INT.captures(text)?;
    bounds.accept(m[1].parse().ok()?)
}

/// First 1-3 digit integer (profile label values).
pub fn int_up_to_3(text: &str) -> Option<u32> {
    INT_3.captures(text)?[1].parse().ok()
}

/// Leading integer of a compound value like "36 (Jun 25, 1989)".
pub fn leading_int(text: &str) -> Option<u32> {
    LEADING_INT.captures(text)?[1].parse().ok()
}

/// Parenthesized tail of a compound value.
pub fn parenthesized(text: &str) -> Option<String> {
    Some(s!(PARENTHESIZED.captures(text)?[1].trim()))
}

/// "d/m/yyyy" (or dash-separated) date, normalized to slashes.
pub fn slash_date(text: &str) -> Option<String> {
    let m = SLASH_DATE.captures(text)?;
    Some(format!("{}/{}/{}", &m[1], &m[2], &m[3]))
}

/// "Month D, YYYY" style date.
pub fn long_date(text: &str) -> Option<String> {
    let m = LONG_DATE.captures(text)?;
    Some(format!("{} {}, {}", &m[1], &m[2], &m[3]))
}

/// "NN años" age mention.
pub fn age_years(text: &str, bounds: Bounds) -> Option<u32> {
    let m = AGE_YEARS.captures(text)?;
    bounds.accept(m[1].parse().ok()?)
}

/// Foot keywords as squad cells spell them.
pub fn foot_keyword(text: &str) -> Option<String> {
    let low = text.to_lowercase();
    if low.contains("derecho") || low.contains("right") {
        Some(s!("Derecho"))
    } else if low.contains("izquierdo") || low.contains("left") {
        Some(s!("Izquierdo"))
    } else if low.contains("ambos") || low.contains("both") {
        Some(s!("Ambos"))
    } else {
        None
    }
}

/// Foot mention in running page text (capitalized forms only, to avoid
/// matching arbitrary prose).
pub fn foot_mention(text: &str) -> Option<String> {
    if text.contains("Izquierdo") || text.contains("Left") {
        Some(s!("Izquierdo"))
    } else if text.contains("Derecho") || text.contains("Right") {
        Some(s!("Derecho"))
    } else if text.contains("Ambos") || text.contains("Both") {
        Some(s!("Ambos"))
    } else {
        None
    }
}
