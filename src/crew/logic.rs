//! Crew lookups and recruit generation.

use super::types::{Gangster, GangsterProfile};
use crate::cards::CardKind;
use crate::core::constants::RECRUIT_MAX_STARTING_STAT;
use crate::core::game_state::GameState;
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: [&str; 16] = [
    "Vinnie", "Sal", "Frankie", "Lou", "Carmine", "Nicky", "Tommy", "Rocco", "Mickey", "Benny",
    "Dutch", "Lucky", "Mae", "Rosie", "Dot", "Gus",
];

const NICKNAMES: [&str; 12] = [
    "the Knife",
    "Two-Times",
    "the Brain",
    "Ice",
    "the Saint",
    "Slim",
    "Big Shoes",
    "the Dentist",
    "Quiet",
    "Lefty",
    "the Accountant",
    "Sunshine",
];

/// Find a gangster by id
pub fn find_gangster(state: &GameState, id: u64) -> Option<&Gangster> {
    state.gangsters.iter().find(|g| g.id == id)
}

pub fn find_gangster_mut(state: &mut GameState, id: u64) -> Option<&mut Gangster> {
    state.gangsters.iter_mut().find(|g| g.id == id)
}

/// Number of gangsters with nothing in flight
pub fn idle_count(state: &GameState) -> usize {
    state.gangsters.iter().filter(|g| !g.is_busy()).count()
}

/// Roll a street-level recruit
pub fn generate_candidate<R: Rng>(rng: &mut R) -> GangsterProfile {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Joe");
    let nick = NICKNAMES.choose(rng).copied().unwrap_or("Nobody");
    GangsterProfile::new(
        format!("{} {}", first, nick),
        rng.gen_range(1..=RECRUIT_MAX_STARTING_STAT),
        rng.gen_range(1..=RECRUIT_MAX_STARTING_STAT),
        rng.gen_range(1..=RECRUIT_MAX_STARTING_STAT),
    )
}

pub fn generate_candidates<R: Rng>(count: usize, rng: &mut R) -> Vec<GangsterProfile> {
    (0..count).map(|_| generate_candidate(rng)).collect()
}

/// Add a gangster and its card to the table. Capacity is the caller's check.
pub fn add_gangster(state: &mut GameState, profile: GangsterProfile) -> u64 {
    let uid = state.place_card(CardKind::Gangster);
    state.gangsters.push(Gangster::new(uid, profile));
    state.totals.gangsters_recruited += 1;
    uid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_STAT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_candidate_stats_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for candidate in generate_candidates(50, &mut rng) {
            for stat in [candidate.muscle, candidate.brains, candidate.charm] {
                assert!((1..=RECRUIT_MAX_STARTING_STAT).contains(&stat));
            }
            assert!(candidate.name.contains(' '));
        }
    }

    #[test]
    fn test_profile_clamps_stats() {
        let profile = GangsterProfile::new("Big Al", 99, 0, 3);
        assert_eq!(profile.muscle, MAX_STAT);
        assert_eq!(profile.brains, 0);
    }

    #[test]
    fn test_add_gangster_places_card() {
        let mut state = GameState::new(0);
        let before = state.gangsters.len();
        let uid = add_gangster(&mut state, GangsterProfile::new("Sal", 1, 1, 1));
        assert_eq!(state.gangsters.len(), before + 1);
        assert_eq!(state.card(uid).map(|c| c.kind), Some(CardKind::Gangster));
        assert_eq!(find_gangster(&state, uid).map(|g| g.name()), Some("Sal"));
    }
}
