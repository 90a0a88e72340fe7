// src/merge.rs

//! Record Merger: folds a player's own page into the roster-derived
//! record. Flat field-by-field override, profile data winning wherever it
//! is present.

use crate::records::{MergedPlayer, PlayerBasic, PlayerFull};

impl MergedPlayer {
    /// A canonical record carrying roster data only.
    pub fn from_basic(basic: &PlayerBasic) -> MergedPlayer {
        MergedPlayer {
            squad_number: basic.squad_number.clone(),
            name: basic.name.clone(),
            position: basic.position.clone(),
            nationality: basic.nationality.clone(),
            age: basic.age,
            height: basic.height,
            weight: basic.weight,
            foot: basic.foot.clone(),
            birth_date: basic.birth_date.clone(),
            rating: basic.rating,
            photo: basic.photo.clone(),
            player_id: basic.player_id.clone(),
            ..Default::default()
        }
    }

    /// Overlay profile-page data. Non-empty profile fields win; empty ones
    /// leave the existing value untouched, so applying the same profile
    /// twice is a no-op.
    pub fn absorb(&mut self, full: &PlayerFull) {
        if !full.player_id.is_empty() {
            self.player_id = full.player_id.clone();
        }

        take(&mut self.squad_number, &full.squad_number);
        take(&mut self.position, &full.position);
        take(&mut self.nationality, &full.nationality);
        take_num(&mut self.age, full.age);
        take_num(&mut self.height, full.height);
        take_num(&mut self.weight, full.weight);
        take(&mut self.birth_date, &full.birth_date);
        take_num(&mut self.rating, full.rating);
        take(&mut self.photo, &full.photo);

        take(&mut self.full_name, &full.full_name);
        take(&mut self.shirt_name, &full.shirt_name);
        take(&mut self.position_code, &full.position_code);
        take(&mut self.birth_place, &full.birth_place);
        take(&mut self.nationality_code, &full.nationality_code);
        take(&mut self.current_club, &full.current_club);
        take(&mut self.current_club_id, &full.current_club_id);
        take(&mut self.preferred_foot, &full.preferred_foot);
        take(&mut self.hair_colour, &full.hair_colour);
        take(&mut self.hairstyle, &full.hairstyle);
        take(&mut self.skin_colour, &full.skin_colour);
        take(&mut self.facial_hair, &full.facial_hair);
        take(&mut self.action_photo, &full.action_photo);
        take(&mut self.peak_photo, &full.peak_photo);
        take(&mut self.youth_photo, &full.youth_photo);
        take(&mut self.profile_photo, &full.profile_photo);
        take(&mut self.youth_profile_photo, &full.youth_profile_photo);

        if !full.url.is_empty() {
            self.url = Some(full.url.clone());
        }
    }
}

/// Merge boundary: one roster record + its profile counterpart.
pub fn merge_player(basic: &PlayerBasic, full: &PlayerFull) -> MergedPlayer {
    let mut merged = MergedPlayer::from_basic(basic);
    merged.absorb(full);
    merged
}

fn take(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            *slot = Some(v.clone());
        }
    }
}

fn take_num(slot: &mut Option<u32>, value: Option<u32>) {
    if value.is_some() {
        *slot = value;
    }
}
