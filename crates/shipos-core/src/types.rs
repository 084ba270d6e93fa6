//! # Domain Types
//!
//! Core domain types for the checkout fee engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fee Engine Types                                │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │    FeeConfig     │   │  PackageForFees  │   │     TaxRate      │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  storage_rate    │   │  id              │   │  bps (u32)       │    │
//! │  │  free days       │ + │  checked_in_at   │   │  875 = 8.75%     │    │
//! │  │  receiving rate  │   │  carrier         │   └──────────────────┘    │
//! │  │  quota policy    │   │  tracking/type   │                           │
//! │  │  tax_rate        │   └──────────────────┘                           │
//! │  └──────────────────┘            │                                     │
//! │           │                      │                                     │
//! │           └──────────┬───────────┘                                     │
//! │                      ▼                                                 │
//! │          ┌─────────────────────────┐    ┌──────────────────────────┐   │
//! │          │  PackageFeeBreakdown    │───►│  FeeCalculationResult    │   │
//! │          │  (one per package)      │    │  (aggregate + quota      │   │
//! │          └─────────────────────────┘    │   bookkeeping)           │   │
//! │                                         └──────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 875 bps = 8.75% (a typical combined state + local sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Fee Configuration
// =============================================================================

/// Tenant-level fee policy.
///
/// Loaded from tenant settings by the caller and treated as immutable for
/// the duration of a calculation. Per-tenant overrides construct a new
/// value; nothing ever patches a shared config in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeConfig {
    /// Per-day storage rate charged after the free period.
    pub storage_rate: Money,

    /// Number of free storage days before fees kick in.
    pub storage_free_days: i64,

    /// Whether Sat/Sun count toward billable storage days.
    /// The customer-facing "days held" number always counts weekends;
    /// only the billable count is conditional.
    pub storage_count_weekends: bool,

    /// Flat per-package receiving/handling fee.
    pub receiving_fee_rate: Money,

    /// Monthly package quota. 0 means unlimited.
    pub package_quota: u32,

    /// Per-package fee for each package beyond the quota.
    pub package_quota_overage: Money,

    /// Sales tax rate applied to the subtotal.
    pub tax_rate: TaxRate,
}

/// Fallback policy used when a tenant has no fee configuration:
/// $1.00/day storage after 30 free days (weekends counted), $3.00
/// receiving, unlimited quota, $2.00 overage, 8.75% tax.
impl Default for FeeConfig {
    fn default() -> Self {
        FeeConfig {
            storage_rate: Money::from_cents(100),
            storage_free_days: 30,
            storage_count_weekends: true,
            receiving_fee_rate: Money::from_cents(300),
            package_quota: 0,
            package_quota_overage: Money::from_cents(200),
            tax_rate: TaxRate::from_bps(875),
        }
    }
}

// =============================================================================
// Package Input
// =============================================================================

/// A package selected for checkout, as the fee engine sees it.
///
/// Only `id` and `checked_in_at` feed the calculation. Carrier, tracking
/// number, and package type are carried through for receipt display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackageForFees {
    /// Package identifier.
    pub id: String,

    /// When the package was checked in at the counter.
    #[ts(as = "String")]
    pub checked_in_at: DateTime<Utc>,

    /// Carrier code (ups, fedex, usps, ...).
    pub carrier: String,

    /// Carrier tracking number, when one was captured at intake.
    pub tracking_number: Option<String>,

    /// Package type (box, envelope, tube, ...).
    pub package_type: String,
}

// =============================================================================
// Per-Package Breakdown
// =============================================================================

/// Fees assessed for a single package.
///
/// Invariant: `total` is exactly `storage_fee + receiving_fee + quota_fee`.
/// All three components are exact cent amounts, so there is no per-package
/// rounding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackageFeeBreakdown {
    /// Package identifier.
    pub package_id: String,

    /// Calendar days since check-in, weekends always included.
    /// This is the customer-facing "age" of the package.
    pub days_held: i64,

    /// Days since check-in per the weekend policy. Used for storage billing.
    pub billable_days: i64,

    /// Storage fee for days beyond the free period.
    pub storage_fee: Money,

    /// Flat receiving/handling fee.
    pub receiving_fee: Money,

    /// Monthly quota overage fee, when this package exceeded the quota.
    pub quota_fee: Money,

    /// Sum of the three fees for this package.
    pub total: Money,
}

// =============================================================================
// Aggregate Result
// =============================================================================

/// The full output of a fee calculation for one checkout batch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeCalculationResult {
    /// Per-package breakdowns, in input order.
    pub packages: Vec<PackageFeeBreakdown>,

    /// Sum of all storage fees.
    pub storage_fee_total: Money,

    /// Sum of all receiving fees.
    pub receiving_fee_total: Money,

    /// Sum of all quota overage fees.
    pub quota_fee_total: Money,

    /// Pre-summed add-on service charges supplied by the caller.
    pub add_on_total: Money,

    /// storage + receiving + quota + add-ons.
    pub subtotal: Money,

    /// Tax rate echoed from the config.
    pub tax_rate: TaxRate,

    /// Tax on the subtotal, rounded to the cent.
    pub tax_amount: Money,

    /// subtotal + tax_amount.
    pub total: Money,

    /// Running monthly package count after processing this batch.
    pub quota_used_this_month: u32,

    /// Monthly quota from the config. 0 means unlimited.
    pub quota_limit: u32,

    /// How many packages in this batch incurred an overage fee.
    pub quota_overage_count: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(875);
        assert_eq!(rate.bps(), 875);
        assert!((rate.percentage() - 8.75).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.75);
        assert_eq!(rate.bps(), 875);
    }

    #[test]
    fn test_default_fee_config() {
        let config = FeeConfig::default();
        assert_eq!(config.storage_rate.cents(), 100);
        assert_eq!(config.storage_free_days, 30);
        assert!(config.storage_count_weekends);
        assert_eq!(config.receiving_fee_rate.cents(), 300);
        assert_eq!(config.package_quota, 0);
        assert_eq!(config.package_quota_overage.cents(), 200);
        assert_eq!(config.tax_rate.bps(), 875);
    }

    #[test]
    fn test_fee_config_json_round_trip() {
        // Money serializes as bare cents, TaxRate as bare basis points
        let config = FeeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"storage_rate\":100"));
        assert!(json.contains("\"tax_rate\":875"));

        let back: FeeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
