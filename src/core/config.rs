//! Game rules.
//!
//! Rules are fixed for the lifetime of a session:
//! - `dice`: how many dice each player starts with
//! - `wilds`: faces that count toward every bid's face when a bid is
//!   challenged
//!
//! Callers either build rules in code or load them from JSON:
//!
//! ```
//! use liars_dice::core::{Face, Rules};
//!
//! let rules = Rules::new(6).with_wild(Face::ONE).with_wild(Face::SIX);
//! assert_eq!(rules.dice, 6);
//!
//! let loaded = Rules::from_json(r#"{ "dice": 6, "wilds": [0, 5] }"#).unwrap();
//! assert_eq!(loaded, rules);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dice::{Face, FaceSet};

/// Dice each player starts with under [`Rules::default`].
pub const DEFAULT_DICE: u32 = 5;

/// Upper bound on starting dice per player.
pub const MAX_DICE: u32 = 1_000;

/// Failure to load a rules document.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("malformed rules document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("players must start with at least one die")]
    NoDice,
    #[error("players may start with at most {max} dice, got {dice}")]
    TooManyDice { dice: u32, max: u32 },
}

/// Rules of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Number of dice each player starts with.
    pub dice: u32,

    /// Faces that count toward every bid.
    #[serde(default)]
    pub wilds: FaceSet,
}

impl Default for Rules {
    /// Five dice each, ones wild.
    fn default() -> Self {
        Self {
            dice: DEFAULT_DICE,
            wilds: FaceSet::single(Face::ONE),
        }
    }
}

impl Rules {
    /// Create rules with `dice` starting dice and no wild faces.
    #[must_use]
    pub fn new(dice: u32) -> Self {
        assert!(dice > 0, "Players must start with at least 1 die");
        assert!(dice <= MAX_DICE, "Players may start with at most {MAX_DICE} dice");

        Self {
            dice,
            wilds: FaceSet::EMPTY,
        }
    }

    /// Set the starting dice count.
    #[must_use]
    pub fn with_dice(mut self, dice: u32) -> Self {
        assert!(dice > 0, "Players must start with at least 1 die");
        assert!(dice <= MAX_DICE, "Players may start with at most {MAX_DICE} dice");
        self.dice = dice;
        self
    }

    /// Add a wild face.
    #[must_use]
    pub fn with_wild(mut self, face: Face) -> Self {
        self.wilds = self.wilds.with(face);
        self
    }

    /// Remove all wild faces.
    #[must_use]
    pub fn without_wilds(mut self) -> Self {
        self.wilds = FaceSet::EMPTY;
        self
    }

    /// Check whether a face is wild.
    #[must_use]
    pub fn is_wild(&self, face: Face) -> bool {
        self.wilds.contains(face)
    }

    /// Check values that deserialization cannot rule out.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.dice == 0 {
            return Err(RulesError::NoDice);
        }
        if self.dice > MAX_DICE {
            return Err(RulesError::TooManyDice {
                dice: self.dice,
                max: MAX_DICE,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON rules document.
    ///
    /// `wilds` is optional and defaults to no wild faces.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }
}
