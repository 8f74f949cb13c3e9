//! Bid encoding.
//!
//! A bid claims "at least `quantity` dice show `face` across all hands".
//! The two components are packed into one integer, `quantity * 6 + face`,
//! which increases with quantity first and face second. Comparing encoded
//! values is therefore the whole of "is this bid higher".
//!
//! ```
//! use liars_dice::core::bid::{decode, encode};
//!
//! assert_eq!(encode(3, 4), 22);
//! assert_eq!(decode(22), (3, 4));
//! assert!(encode(3, 4) < encode(4, 1));
//! ```

use serde::{Deserialize, Serialize};

use super::dice::{Face, FACES};

const BASE: u32 = FACES as u32;

/// Pack a `(quantity, face)` pair into its ordered integer form.
///
/// Performs no validation. `face` must be a face slot (`0..6`) for the
/// encoding to round-trip.
#[inline]
#[must_use]
pub const fn encode(quantity: u32, face: u32) -> u32 {
    quantity * BASE + face
}

/// [`encode`], or `None` if the packed value does not fit in a `u32`.
#[inline]
#[must_use]
pub const fn checked_encode(quantity: u32, face: u32) -> Option<u32> {
    match quantity.checked_mul(BASE) {
        Some(packed) => packed.checked_add(face),
        None => None,
    }
}

/// Split an encoded bid back into `(quantity, face)`.
#[inline]
#[must_use]
pub const fn decode(bid: u32) -> (u32, u32) {
    (bid / BASE, bid % BASE)
}

/// A bid in encoded form.
///
/// Ordering follows the encoded value, so `a < b` means `b` is a strictly
/// higher bid than `a`. `Bid::NONE` (encoded 0) stands for "no bid yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid(u32);

impl Bid {
    /// The "no bid this round" sentinel.
    pub const NONE: Bid = Bid(0);

    /// Create a bid of `quantity` dice showing `face`.
    #[must_use]
    pub const fn new(quantity: u32, face: Face) -> Self {
        Self(encode(quantity, face.index() as u32))
    }

    /// Wrap an already encoded value.
    #[must_use]
    pub const fn from_encoded(value: u32) -> Self {
        Self(value)
    }

    /// The encoded value.
    #[must_use]
    pub const fn encoded(self) -> u32 {
        self.0
    }

    /// Claimed number of dice.
    #[must_use]
    pub const fn quantity(self) -> u32 {
        decode(self.0).0
    }

    /// Claimed face.
    #[must_use]
    pub fn face(self) -> Face {
        Face::from_index(decode(self.0).1 as usize)
    }

    /// True for the "no bid" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "no bid")
        } else {
            write!(f, "{} × {}s", self.quantity(), self.face().pips())
        }
    }
}
