// tests/club_list.rs
//
// Club-List Assembler over handcrafted league listing markup.
//
use sw_scrape::extract::club_list;

const LISTING: &str = r#"
<html><body>
  <article class="post-classic"><h2><a href="league.php?l=1">Liga Profesional</a></h2></article>
  <table class="table-roster">
    <tr><th>Logo</th><th>Club</th><th>Fundado</th><th>Ciudad</th></tr>
    <tr>
      <td><img data-src="/img/logo/river.png" src="ph.gif"></td>
      <td><a href="squad.php?clubid=20">River Plate</a></td>
      <td>1901</td>
      <td>Buenos Aires</td>
    </tr>
    <tr>
      <td><img src="/img/logo/boca.png"></td>
      <td><a href="squad.php?clubid=21&s=x">Boca Juniors</a></td>
      <td>1905</td>
      <td>Buenos Aires</td>
    </tr>
    <tr>
      <td><img src="/img/logo/racing.png"></td>
      <td><a href="squad.php?clubid=22">Racing Club</a></td>
      <td>1903</td>
    </tr>
  </table>
</body></html>
"#;

#[test]
fn header_plus_three_rows_yield_three_clubs_in_order() {
    let clubs = club_list(LISTING);
    assert_eq!(clubs.len(), 3);

    let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["River Plate", "Boca Juniors", "Racing Club"]);

    let first = &clubs[0];
    assert_eq!(first.id, "20");
    assert_eq!(first.logo, "/img/logo/river.png"); // data-src preferred
    assert_eq!(first.foundation_year, "1901");
    assert_eq!(first.location, "Buenos Aires");
    assert_eq!(first.league, "Liga Profesional");
    assert_eq!(first.url, "https://es.soccerwiki.org/squad.php?clubid=20");

    // id stops at the next query parameter
    assert_eq!(clubs[1].id, "21");

    // 3-cell row: no location cell
    assert_eq!(clubs[2].location, "");
}

#[test]
fn league_defaults_to_unknown_without_a_preceding_heading() {
    let html = r#"
      <table class="table-roster">
        <tr><th>h</th></tr>
        <tr><td><img src="l.png"></td><td><a href="squad.php?clubid=1">Alpha</a></td><td>1900</td></tr>
      </table>
    "#;
    let clubs = club_list(html);
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].league, "Unknown");
}

#[test]
fn each_table_takes_the_nearest_preceding_heading() {
    let html = r#"
      <article class="post-classic"><a>Primera</a></article>
      <table class="table-roster">
        <tr><th>h</th></tr>
        <tr><td><img src="a.png"></td><td><a href="squad.php?clubid=1">Alpha</a></td><td>1900</td></tr>
      </table>
      <article class="post-classic"><a>Segunda</a></article>
      <table class="table-roster">
        <tr><th>h</th></tr>
        <tr><td><img src="b.png"></td><td><a href="squad.php?clubid=2">Beta</a></td><td>1910</td></tr>
      </table>
    "#;
    let clubs = club_list(html);
    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].league, "Primera");
    assert_eq!(clubs[1].league, "Segunda");
}

#[test]
fn rows_with_fewer_than_three_cells_are_skipped() {
    let html = r#"
      <table class="table-roster">
        <tr><th>h</th></tr>
        <tr><td colspan="3">Relegation line</td></tr>
        <tr><td><img src="a.png"></td><td><a href="squad.php?clubid=5">Gamma</a></td><td>1920</td></tr>
      </table>
    "#;
    let clubs = club_list(html);
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].name, "Gamma");
}

#[test]
fn rows_without_a_club_link_are_skipped() {
    let html = r#"
      <table class="table-roster">
        <tr><th>h</th></tr>
        <tr><td><img src="a.png"></td><td>No link here</td><td>1920</td></tr>
      </table>
    "#;
    assert!(club_list(html).is_empty());
}

#[test]
fn non_roster_tables_are_ignored() {
    let html = r#"
      <table class="stats">
        <tr><th>h</th></tr>
        <tr><td>x</td><td><a href="squad.php?clubid=9">Nope</a></td><td>1930</td></tr>
      </table>
    "#;
    assert!(club_list(html).is_empty());
}
