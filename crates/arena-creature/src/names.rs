//! Random name pools, one per kind.

use arena_core::{ArenaRng, Kind};

const ORC_NAMES: [&str; 10] = [
    "Grom", "Mog", "Thrak", "Gul'dan", "Kargath",
    "Nazgrim", "Garrosh", "Durotan", "Blackhand", "Kilrogg",
];

const KNIGHT_NAMES: [&str; 10] = [
    "Arthur", "Lancelot", "Galahad", "Percival", "Gawain",
    "Bedivere", "Tristan", "Gareth", "Bors", "Mordred",
];

const BEAR_NAMES: [&str; 10] = [
    "Baloo", "Winnie", "Yogi", "Smokey", "Paddington",
    "Fozzie", "Boo-Boo", "Gentle", "Grizzly", "Kodiak",
];

/// The name pool for `kind`.
pub fn pool(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Orc    => &ORC_NAMES,
        Kind::Knight => &KNIGHT_NAMES,
        Kind::Bear   => &BEAR_NAMES,
    }
}

/// Draw a random name for `kind`.  Names are not unique.
pub fn random_name(kind: Kind, rng: &mut ArenaRng) -> &'static str {
    rng.choose(pool(kind)).copied().unwrap_or("Unknown")
}
