// src/core/dom.rs

use scraper::{CaseSensitivity, ElementRef};

use super::sanitize::normalize_ws;

/// Concatenated text of a subtree, whitespace-collapsed and trimmed.
pub fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef, class: &str) -> bool {
    el.value()
        .has_class(class, CaseSensitivity::AsciiCaseInsensitive)
}

/// Image source. The site lazy-loads images, so `data-src` holds the real
/// path and `src` a placeholder; prefer the former.
pub fn img_src(img: ElementRef) -> String {
    img.value()
        .attr("data-src")
        .or_else(|| img.value().attr("src"))
        .unwrap_or_default()
        .to_string()
}

/// Country code carried as a `flag-icon-xx` class suffix, uppercased.
pub fn flag_code(el: ElementRef) -> Option<String> {
    el.value()
        .classes()
        .find(|c| c.starts_with("flag-icon-"))
        .map(|c| c.trim_start_matches("flag-icon-").to_uppercase())
}

/// Nearest enclosing element with one of the given tag names.
pub fn nearest_ancestor<'a>(el: ElementRef<'a>, tags: &[&str]) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| tags.contains(&e.value().name()))
}
