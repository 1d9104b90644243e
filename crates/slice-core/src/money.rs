//! # Money Module
//!
//! Provides the `Money` type used for every price on the menu.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Topping price $1.50, three paid toppings:                              │
//! │                                                                         │
//! │    floats:   1.5 + 1.5 + 1.5 + 0.1 (crust) = 4.6000000000000005  ❌     │
//! │    cents:    150 + 150 + 150 + 10          = 460               ✅     │
//! │                                                                         │
//! │  The UI only converts to dollars when it renders the number.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use slice_core::money::Money;
//!
//! let large = Money::from_cents(1499);
//! let stuffed = Money::from_cents(200);
//!
//! let total = large + stuffed;
//! assert_eq!(total.cents(), 1699);
//! assert_eq!(total.to_string(), "$16.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Size.price ─────┐
/// Crust.price ────┼──► PriceBreakdown.total ──► shown as "$17.99"
/// topping price ──┘         (live price)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Returns this amount as a fraction of `max`.
    ///
    /// Used for the comparative size bars: a $9 small next to a $15 large
    /// renders at 0.6 of the full width. A zero or negative `max` yields 0.0.
    ///
    /// ```rust
    /// use slice_core::money::Money;
    ///
    /// let small = Money::from_cents(900);
    /// let large = Money::from_cents(1500);
    /// assert!((small.fraction_of(large) - 0.6).abs() < f64::EPSILON);
    /// assert_eq!(small.fraction_of(Money::zero()), 0.0);
    /// ```
    pub fn fraction_of(&self, max: Money) -> f64 {
        if max.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 / max.0 as f64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$12.34` rendering. Localized formatting belongs to the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
