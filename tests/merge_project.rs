// tests/merge_project.rs
//
// Record Merger and Output Projector invariants.
//
use serde_json::{Value, json};
use sw_scrape::merge::merge_player;
use sw_scrape::project::{EXCLUDED_KEYS, project};
use sw_scrape::records::{MergedPlayer, PlayerBasic, PlayerFull};

fn basic() -> PlayerBasic {
    PlayerBasic {
        squad_number: Some("10".into()),
        name: "Juan Pérez".into(),
        position: Some("Delantero".into()),
        nationality: Some("AR".into()),
        age: Some(28),
        height: Some(185),
        weight: Some(78),
        foot: Some("Derecho".into()),
        birth_date: Some("25/6/1989".into()),
        rating: Some(85),
        photo: Some("/img/player/7.png".into()),
        player_id: "7".into(),
    }
}

fn full() -> PlayerFull {
    PlayerFull {
        player_id: "7".into(),
        full_name: Some("Juan Alberto Pérez".into()),
        position: Some("Delantero centro".into()),
        position_code: Some("A".into()),
        rating: Some(87),
        age: Some(29),
        nationality: Some("Argentina".into()),
        nationality_code: Some("AR".into()),
        current_club: Some("River Plate".into()),
        current_club_id: Some("20".into()),
        preferred_foot: Some("Derecho".into()),
        url: "https://es.soccerwiki.org/player.php?pid=7".into(),
        ..Default::default()
    }
}

#[test]
fn profile_values_override_roster_values() {
    let merged = merge_player(&basic(), &full());

    assert_eq!(merged.position.as_deref(), Some("Delantero centro"));
    assert_eq!(merged.rating, Some(87));
    assert_eq!(merged.age, Some(29));
    assert_eq!(merged.full_name.as_deref(), Some("Juan Alberto Pérez"));
    assert_eq!(
        merged.url.as_deref(),
        Some("https://es.soccerwiki.org/player.php?pid=7")
    );
}

#[test]
fn empty_profile_fields_never_erase_roster_data() {
    let merged = merge_player(&basic(), &full());

    // absent from the profile record entirely
    assert_eq!(merged.name, "Juan Pérez");
    assert_eq!(merged.foot.as_deref(), Some("Derecho"));
    // present in the profile schema but empty here
    assert_eq!(merged.height, Some(185));
    assert_eq!(merged.weight, Some(78));
    assert_eq!(merged.photo.as_deref(), Some("/img/player/7.png"));
    assert_eq!(merged.birth_date.as_deref(), Some("25/6/1989"));
    assert_eq!(merged.squad_number.as_deref(), Some("10"));
}

#[test]
fn merge_is_idempotent() {
    let f = full();
    let once = merge_player(&basic(), &f);

    let mut twice = once.clone();
    twice.absorb(&f);
    assert_eq!(twice, once);
}

#[test]
fn roster_and_profile_foot_fields_are_distinct() {
    let mut f = full();
    f.preferred_foot = Some("Izquierdo".into());
    let merged = merge_player(&basic(), &f);

    assert_eq!(merged.foot.as_deref(), Some("Derecho"));
    assert_eq!(merged.preferred_foot.as_deref(), Some("Izquierdo"));
}

#[test]
fn merge_without_profile_keeps_roster_record_intact() {
    let from_roster = MergedPlayer::from_basic(&basic());
    assert_eq!(from_roster.name, "Juan Pérez");
    assert_eq!(from_roster.player_id, "7");
    assert_eq!(from_roster.full_name, None);
    assert_eq!(from_roster.url, None);
}

#[test]
fn projection_strips_exactly_the_internal_keys() {
    let merged = merge_player(&basic(), &full());
    let value = serde_json::to_value(&merged).unwrap();
    let projected = project(&value);

    let obj = projected.as_object().unwrap();
    for key in EXCLUDED_KEYS {
        assert!(!obj.contains_key(*key), "{key} should be stripped");
    }
    assert_eq!(obj["name"], "Juan Pérez");
    assert_eq!(obj["fullName"], "Juan Alberto Pérez");
    // empty strings survive projection untouched
    assert_eq!(obj["shirtName"], "");
    assert_eq!(obj["foot"], "Derecho");
}

#[test]
fn projection_recurses_through_player_lists() {
    let roster = json!({
        "clubName": "River Plate",
        "clubId": "20",
        "players": [
            { "name": "A", "playerId": "1", "url": "x" },
            { "name": "B", "playerId": "2", "preferredFoot": "Derecho" }
        ],
        "totalPlayers": 2
    });
    let projected = project(&roster);

    // only player-level internal keys are in the exclusion set
    assert_eq!(projected["clubId"], "20");
    let players = projected["players"].as_array().unwrap();
    assert_eq!(players[0], json!({ "name": "A" }));
    assert_eq!(players[1], json!({ "name": "B" }));
    assert_eq!(projected["totalPlayers"], 2);
}

#[test]
fn projection_is_idempotent() {
    let merged = merge_player(&basic(), &full());
    let value = serde_json::to_value(&merged).unwrap();
    let once = project(&value);
    assert_eq!(project(&once), once);
}

#[test]
fn projection_leaves_scalars_alone() {
    assert_eq!(project(&Value::Null), Value::Null);
    assert_eq!(project(&json!("x")), json!("x"));
    assert_eq!(project(&json!(3)), json!(3));
}
