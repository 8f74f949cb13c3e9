//! Dice faces, face sets, and hands.
//!
//! ## Face
//!
//! One of the six die faces, addressed by slot index `0..6`. Slot 0 is the
//! face with one pip, slot 5 the face with six. The integer surface of the
//! engine (bids, wild configuration) uses slot indices throughout.
//!
//! ## FaceSet
//!
//! A set of faces stored as a bitmask. Used for wild faces and for the set
//! of faces counted when a bid is challenged.
//!
//! ## Hand
//!
//! The dice under one player's cup, stored as a count per face. The sum of
//! the counts is the number of dice the player holds.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::rng::IndexSource;

/// Number of faces on a die.
pub const FACES: usize = 6;

/// A die face, by slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const ONE: Face = Face(0);
    pub const TWO: Face = Face(1);
    pub const THREE: Face = Face(2);
    pub const FOUR: Face = Face(3);
    pub const FIVE: Face = Face(4);
    pub const SIX: Face = Face(5);

    /// Validate a raw slot index.
    ///
    /// Returns `None` for anything outside `0..6`.
    #[must_use]
    pub const fn new(index: u32) -> Option<Self> {
        if (index as usize) < FACES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Build a face from a slot index known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < FACES, "Face index must be below {FACES}");
        Self(index as u8)
    }

    /// Slot index (`0..6`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Pip value shown on the die (`1..=6`).
    #[must_use]
    pub const fn pips(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all six faces in slot order.
    pub fn all() -> impl Iterator<Item = Face> {
        (0..FACES as u8).map(Face)
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(u32::from(value)).ok_or_else(|| format!("face slot {value} out of range 0..{FACES}"))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pips())
    }
}

/// A set of faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Face>", into = "Vec<Face>")]
pub struct FaceSet(u8);

impl FaceSet {
    /// The empty set.
    pub const EMPTY: FaceSet = FaceSet(0);

    /// A set holding a single face.
    #[must_use]
    pub const fn single(face: Face) -> Self {
        Self(1 << face.0)
    }

    /// Return this set with `face` added.
    #[must_use]
    pub const fn with(self, face: Face) -> Self {
        Self(self.0 | (1 << face.0))
    }

    /// Union of two sets.
    #[must_use]
    pub const fn union(self, other: FaceSet) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.0) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over member faces in slot order.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::all().filter(move |&face| self.contains(face))
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        iter.into_iter().fold(FaceSet::EMPTY, FaceSet::with)
    }
}

impl From<Vec<Face>> for FaceSet {
    fn from(faces: Vec<Face>) -> Self {
        faces.into_iter().collect()
    }
}

impl From<FaceSet> for Vec<Face> {
    fn from(set: FaceSet) -> Self {
        set.iter().collect()
    }
}

/// Dice under one player's cup, as a count per face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([u32; FACES]);

impl Hand {
    /// A hand with no dice.
    pub const EMPTY: Hand = Hand([0; FACES]);

    /// Build a hand from explicit per-face counts.
    #[must_use]
    pub const fn from_counts(counts: [u32; FACES]) -> Self {
        Self(counts)
    }

    /// Roll `dice` dice, drawing each face from `rng`.
    pub fn roll(dice: u32, rng: &mut dyn IndexSource) -> Self {
        let mut counts = [0; FACES];
        for _ in 0..dice {
            counts[rng.next_index(FACES)] += 1;
        }
        Self(counts)
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub const fn count(&self, face: Face) -> u32 {
        self.0[face.index()]
    }

    /// Number of dice showing any face in `faces`.
    #[must_use]
    pub fn count_any(&self, faces: FaceSet) -> u32 {
        faces.iter().map(|face| self.count(face)).sum()
    }

    /// Total number of dice in the hand.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Per-face counts in slot order.
    #[must_use]
    pub const fn counts(&self) -> &[u32; FACES] {
        &self.0
    }
}

impl Index<Face> for Hand {
    type Output = u32;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.index()]
    }
}
