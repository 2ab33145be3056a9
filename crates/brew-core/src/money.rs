//! # Money Module
//!
//! Provides the `Money` type for handling prices and running totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    3.5 + 0.5 + 0.4 + 0.5 = 4.8999999999999995  ❌                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    350 + 50 + 40 + 50 = 490 cents = $4.90       ✅                      │
//! │                                                                         │
//! │  Sums are exact. Only rate-based adjustments can produce sub-cent      │
//! │  values, and those round half-to-even back to whole cents.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! let latte = Money::from_cents(350); // $3.50
//! let total = latte + Money::from_cents(50) + Money::from_cents(90);
//! assert_eq!(total.to_string(), "$4.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Basis points in one whole (100%).
pub const BPS_PER_WHOLE: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: modifiers may apply discounts, so intermediate totals
///   can move down as well as up
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Always 2 decimal places**: every `Money` is already "rounded to cents"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let espresso = Money::from_cents(250);
    /// assert_eq!(espresso.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales this amount by a rate in basis points, rounding half-to-even.
    ///
    /// `bps` may be negative. 1000 bps = 10%.
    ///
    /// ## Bankers Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  exact result   │  rounded                                          │
    /// │  ──────────────────────────                                         │
    /// │   1.25 cents    │   1   (below half)                                │
    /// │   1.50 cents    │   2   (half, 1 is odd → up to even)               │
    /// │   2.50 cents    │   2   (half, 2 is even → stay)                    │
    /// │  -1.50 cents    │  -2   (symmetric for negatives)                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// // 10% of $4.90 = 49 cents
    /// assert_eq!(Money::from_cents(490).apply_rate_bps(1000).cents(), 49);
    /// // 5% of $0.50 = 2.5 cents → 2 (even)
    /// assert_eq!(Money::from_cents(50).apply_rate_bps(500).cents(), 2);
    /// ```
    pub fn apply_rate_bps(&self, bps: i64) -> Money {
        // i128 so large totals times large rates cannot overflow
        let product = self.0 as i128 * bps as i128;
        let divisor = BPS_PER_WHOLE as i128;
        let quotient = product / divisor;
        let remainder = (product % divisor).abs();
        let half = divisor / 2;

        let rounded = if remainder > half || (remainder == half && quotient % 2 != 0) {
            quotient + product.signum()
        } else {
            quotient
        };

        // saturate rather than wrap when the scaled value leaves i64
        let saturated = if rounded < 0 { i64::MIN } else { i64::MAX };
        Money(i64::try_from(rounded).unwrap_or(saturated))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$4.90` / `-$0.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summing surcharges (e.g. every recognised extra on an order).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
