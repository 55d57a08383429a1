//! Built-in opening repertoire with personality-weighted selection.
//!
//! Lines are fixed UCI move sequences; there is no file I/O here. A probe
//! matches the game's move history against every line and proposes the next
//! move of one matching line, leaning towards the active personality's
//! preferred openings. Callers must still verify legality before playing a
//! book move; the repertoire knows sequences, not rules.

use rand::Rng;

use crate::personality::PersonalityProfile;

/// Chance of picking from the personality's preferred openings when both
/// preferred and other lines match the current position.
pub const PREFERRED_WEIGHT: f64 = 0.8;

/// A repertoire hit: the opening's name and the move to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMove {
    pub opening: &'static str,
    pub uci: String,
}

/// Named opening lines as UCI move sequences, white's move first.
static REPERTOIRE: &[(&str, &[&str])] = &[
    // d4 openings
    ("Queen's Gambit", &["d2d4", "d7d5", "c2c4"]),
    ("Queen's Gambit Declined", &["d2d4", "d7d5", "c2c4", "e7e6"]),
    ("Slav Defense", &["d2d4", "d7d5", "c2c4", "c7c6"]),
    ("Semi-Slav", &["d2d4", "d7d5", "c2c4", "c7c6", "g1f3", "e7e6"]),
    ("London System", &["d2d4", "g8f6", "c1f4"]),
    ("Catalan Opening", &["d2d4", "g8f6", "c2c4", "e7e6", "g2g3"]),
    // e4 openings
    ("Italian Game", &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"]),
    (
        "Evans Gambit",
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "b2b4"],
    ),
    ("Ruy Lopez", &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"]),
    ("Berlin Defense", &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "g8f6"]),
    ("Scotch Game", &["e2e4", "e7e5", "g1f3", "b8c6", "d2d4"]),
    (
        "Scotch Gambit",
        &["e2e4", "e7e5", "g1f3", "b8c6", "d2d4", "e5d4", "f1c4"],
    ),
    ("Vienna Gambit", &["e2e4", "e7e5", "b1c3", "g8f6", "f2f4"]),
    ("King's Gambit", &["e2e4", "e7e5", "f2f4"]),
    ("Closed Sicilian", &["e2e4", "c7c5", "b1c3", "b8c6", "g2g3"]),
    // Flank openings
    ("English Opening", &["c2c4", "e7e5", "b1c3"]),
    ("Reti Opening", &["g1f3", "d7d5", "c2c4"]),
    // Black against e4
    (
        "Sicilian Dragon",
        &[
            "e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6", "b1c3", "g7g6",
        ],
    ),
    (
        "Sicilian Najdorf",
        &[
            "e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6", "b1c3", "a7a6",
        ],
    ),
    ("French Defense", &["e2e4", "e7e6", "d2d4", "d7d5"]),
    ("Caro-Kann", &["e2e4", "c7c6", "d2d4", "d7d5"]),
    ("Modern Defense", &["e2e4", "g7g6", "d2d4", "f8g7"]),
    ("Petroff Defense", &["e2e4", "e7e5", "g1f3", "g8f6"]),
    // Black against d4
    (
        "Queen's Indian Defense",
        &["d2d4", "g8f6", "c2c4", "e7e6", "g1f3", "b7b6"],
    ),
    (
        "King's Indian",
        &["d2d4", "g8f6", "c2c4", "g7g6", "b1c3", "f8g7", "e2e4", "d7d6"],
    ),
    (
        "Nimzo-Indian",
        &["d2d4", "g8f6", "c2c4", "e7e6", "b1c3", "f8b4"],
    ),
    (
        "Benko Gambit",
        &["d2d4", "g8f6", "c2c4", "c7c5", "d4d5", "b7b5"],
    ),
    ("Budapest Gambit", &["d2d4", "g8f6", "c2c4", "e7e5"]),
];

/// The compiled-in repertoire.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningBook;

impl OpeningBook {
    pub fn new() -> Self {
        OpeningBook
    }

    /// Find the next move of a repertoire line matching `moves` (the game's
    /// full UCI history from the starting position).
    ///
    /// When several lines match, a personality-preferred line is chosen with
    /// probability [`PREFERRED_WEIGHT`]; within either set the pick is a
    /// uniform draw from the injected `rng`, so probes are reproducible
    /// under a fixed seed. Returns `None` once the game has left book.
    pub fn probe<R: Rng>(
        &self,
        moves: &[String],
        personality: &PersonalityProfile,
        rng: &mut R,
    ) -> Option<BookMove> {
        let mut preferred = Vec::new();
        let mut other = Vec::new();

        for &(opening, line) in REPERTOIRE {
            if line.len() <= moves.len() {
                continue;
            }
            let matches = line
                .iter()
                .zip(moves.iter())
                .all(|(book_mv, played)| *book_mv == played.as_str());
            if !matches {
                continue;
            }
            let hit = BookMove {
                opening,
                uci: line[moves.len()].to_string(),
            };
            if personality.prefers_opening(opening) {
                preferred.push(hit);
            } else {
                other.push(hit);
            }
        }

        let pool = if !preferred.is_empty() && (other.is_empty() || rng.gen::<f64>() < PREFERRED_WEIGHT)
        {
            preferred
        } else if !other.is_empty() {
            other
        } else {
            return None;
        };
        let idx = rng.gen_range(0..pool.len());
        Some(pool[idx].clone())
    }

    /// Number of lines in the repertoire.
    pub fn len(&self) -> usize {
        REPERTOIRE.len()
    }

    pub fn is_empty(&self) -> bool {
        REPERTOIRE.is_empty()
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
