// src/extract/clubs.rs

//! Club-List Assembler: league listing page → one Club per table row.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::{dom, urls};
use crate::records::Club;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

const UNKNOWN_LEAGUE: &str = "Unknown";

/// Walk the document once in order, pairing every roster-style table with
/// the league heading (`article.post-classic`) that most recently preceded
/// it. Tables before any heading get the "Unknown" league.
pub fn assemble(doc: &Html) -> Vec<Club> {
    let mut clubs = Vec::new();
    let mut league = s!(UNKNOWN_LEAGUE);

    for node in doc.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };

        if el.value().name() == "article" && dom::has_class(el, "post-classic") {
            league = el
                .select(&LINK)
                .next()
                .map(dom::text_of)
                .unwrap_or_else(|| s!(UNKNOWN_LEAGUE));
        } else if el.value().name() == "table" && dom::has_class(el, "table-roster") {
            collect_rows(el, &league, &mut clubs);
        }
    }

    clubs
}

fn collect_rows(table: ElementRef, league: &str, out: &mut Vec<Club>) {
    for (idx, row) in table.select(&ROW).enumerate() {
        if idx == 0 {
            continue; // header row
        }
        let cells: Vec<ElementRef> = row.select(&CELL).collect();
        if cells.len() < 3 {
            continue;
        }

        let Some(link) = cells[1].select(&LINK).next() else { continue };
        let href = link.value().attr("href").unwrap_or_default();

        out.push(Club {
            id: urls::query_param(href, "clubid").unwrap_or_default(),
            name: dom::text_of(link),
            logo: cells[0].select(&IMG).next().map(dom::img_src).unwrap_or_default(),
            foundation_year: dom::text_of(cells[2]),
            location: cells.get(3).map(|c| dom::text_of(*c)).unwrap_or_default(),
            league: s!(league),
            url: urls::absolutize(href),
        });
    }
}
