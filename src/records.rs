// src/records.rs

//! Entity records produced by the extraction core.
//!
//! Absence is carried as `None` in memory; the serialized form renders it
//! as an empty string (and numerics as their decimal string) so exported
//! JSON keeps the shape downstream consumers already read.

use serde::{Serialize, Serializer};

fn str_or_empty<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(v.as_deref().unwrap_or(""))
}

fn num_or_empty<S: Serializer>(v: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(n) => s.serialize_str(&n.to_string()),
        None => s.serialize_str(""),
    }
}

/// One club row from a league listing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub foundation_year: String,
    pub location: String,
    pub league: String,
    pub url: String,
}

/// Best-effort club metadata found on a squad page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    #[serde(serialize_with = "str_or_empty")]
    pub stadium: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub capacity: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub coach: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub location: Option<String>,
}

/// Player data as far as a squad-table row carries it. `name` and
/// `player_id` are the acceptance gate; everything else is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBasic {
    #[serde(serialize_with = "str_or_empty")]
    pub squad_number: Option<String>,
    pub name: String,
    #[serde(serialize_with = "str_or_empty")]
    pub position: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub nationality: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub age: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub height: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub weight: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub foot: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub birth_date: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub rating: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub photo: Option<String>,
    pub player_id: String,
}

/// Everything a player's own page yields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFull {
    pub player_id: String,
    #[serde(serialize_with = "str_or_empty")]
    pub full_name: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub shirt_name: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub position: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub position_code: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub rating: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub age: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub birth_date: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub birth_place: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub nationality: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub nationality_code: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub height: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub weight: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub current_club: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub current_club_id: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub squad_number: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub preferred_foot: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub hair_colour: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub hairstyle: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub skin_colour: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub facial_hair: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub action_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub peak_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub youth_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub profile_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub youth_profile_photo: Option<String>,
    pub url: String,
}

/// Canonical player entity: roster fields first, profile-only fields
/// after, matching the merge's field-addition order. Note the roster's
/// `foot` and the profile's `preferredFoot` are distinct keys and both
/// survive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPlayer {
    #[serde(serialize_with = "str_or_empty")]
    pub squad_number: Option<String>,
    pub name: String,
    #[serde(serialize_with = "str_or_empty")]
    pub position: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub nationality: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub age: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub height: Option<u32>,
    #[serde(serialize_with = "num_or_empty")]
    pub weight: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub foot: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub birth_date: Option<String>,
    #[serde(serialize_with = "num_or_empty")]
    pub rating: Option<u32>,
    #[serde(serialize_with = "str_or_empty")]
    pub photo: Option<String>,
    pub player_id: String,
    #[serde(serialize_with = "str_or_empty")]
    pub full_name: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub shirt_name: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub position_code: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub birth_place: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub nationality_code: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub current_club: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub current_club_id: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub preferred_foot: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub hair_colour: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub hairstyle: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub skin_colour: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub facial_hair: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub action_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub peak_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub youth_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub profile_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub youth_profile_photo: Option<String>,
    #[serde(serialize_with = "str_or_empty")]
    pub url: Option<String>,
}

/// A full squad. Rebuilt wholesale on each fetch, never patched in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub club_name: String,
    pub club_id: String,
    pub club_info: ClubInfo,
    pub players: Vec<MergedPlayer>,
    pub total_players: usize,
}

/// What `extract` hands back, per page kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    ClubList(Vec<Club>),
    Roster(Roster),
    Player(PlayerFull),
}
