//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Tax on an $18.00 subtotal at 8.75%:                                    │
//! │    18.00 * 0.0875 = 1.5750000000000002  → which cent is that?          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1800 cents * 875 bps = 1,575,000 → rounds to exactly 158 cents      │
//! │    Every amount on a receipt is an exact number of cents               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shipos_core::money::Money;
//!
//! // Create from cents (preferred)
//! let storage_rate = Money::from_cents(100); // $1.00 per day
//!
//! // Arithmetic operations
//! let five_days = storage_rate * 5;                   // $5.00
//! let with_receiving = five_days + Money::from_cents(300); // $8.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// FeeConfig.storage_rate ──► PackageFeeBreakdown.storage_fee ──┐
/// FeeConfig.receiving_fee_rate ──► .receiving_fee ─────────────┼──► subtotal
/// FeeConfig.package_quota_overage ──► .quota_fee ──────────────┘       │
///                                                                      ▼
///                                            tax_amount ──► total ──► receipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shipos_core::money::Money;
    ///
    /// let receiving_fee = Money::from_cents(300); // Represents $3.00
    /// assert_eq!(receiving_fee.cents(), 300);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounded to the nearest cent.
    ///
    /// ## Rounding
    /// Half-cent results round away from zero: a tax of 82.5 cents becomes
    /// 83 cents. Fee amounts in this engine are never negative, so this is
    /// plain half-up rounding at the cent.
    ///
    /// ## Implementation
    /// Integer math only: `(amount_cents * bps + 5000) / 10000`.
    /// The +5000 provides the rounding (5000/10000 = half a cent).
    /// i128 intermediate prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use shipos_core::money::Money;
    /// use shipos_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(1800); // $18.00
    /// let rate = TaxRate::from_bps(875);      // 8.75%
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // $18.00 × 8.75% = $1.575 → rounds to $1.58 (158 cents)
    /// assert_eq!(tax.cents(), 158);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Receipt rendering applies its own
/// currency formatting with thousands separators.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for per-day and per-package fee calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (for fee totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
