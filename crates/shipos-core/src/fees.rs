//! # Fee Calculator
//!
//! Computes storage fees, receiving fees, quota overage fees, and totals
//! for the package checkout workflow.
//!
//! ## Fee Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_fees(batch)                                │
//! │                                                                         │
//! │  For each package, in input order:                                      │
//! │                                                                         │
//! │    days_held     = whole days since check-in (weekends always count)   │
//! │    billable_days = same, minus weekends when the policy excludes them  │
//! │                                                                         │
//! │    storage_fee   = max(0, billable_days - free_days) × storage_rate    │
//! │    receiving_fee = flat rate, every package, even same-day pickups     │
//! │    quota_fee     = overage rate once the monthly quota is exceeded     │
//! │                                                                         │
//! │  Then aggregate:                                                        │
//! │                                                                         │
//! │    subtotal   = storage + receiving + quota + add-ons   (exact cents)  │
//! │    tax_amount = subtotal × tax_rate                     (rounded)      │
//! │    total      = subtotal + tax_amount                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! The reference instant `now` and the prior monthly package count are
//! explicit parameters. Two calls with identical inputs produce identical
//! results; there is no ambient clock and no shared counter.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::money::Money;
use crate::types::{FeeCalculationResult, FeeConfig, PackageFeeBreakdown, PackageForFees};

// =============================================================================
// Day Counting
// =============================================================================

/// Counts the number of days between two instants, optionally excluding
/// weekends.
///
/// ## Behavior
/// - If `to` is not after `from`, the count is 0. Never negative.
/// - When weekends count, this is the floor of the elapsed time in whole
///   days: a package checked in 36 hours ago has been held 1 day.
/// - When weekends are excluded, the count walks the UTC calendar from the
///   check-in date up to (not including) the `to` date, counting only
///   Monday through Friday.
pub fn count_days(from: DateTime<Utc>, to: DateTime<Utc>, count_weekends: bool) -> i64 {
    if to <= from {
        return 0;
    }

    if count_weekends {
        return (to - from).num_days();
    }

    // Exclude Sat/Sun: midnight-to-midnight walk over calendar dates
    let mut days = 0;
    let mut cursor = from.date_naive();
    let end = to.date_naive();

    while cursor < end {
        if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
            days += 1;
        }
        let Some(next) = cursor.succ_opt() else {
            break;
        };
        cursor = next;
    }

    days
}

// =============================================================================
// Quota Ledger
// =============================================================================

/// Running quota state threaded through a batch, one package at a time.
///
/// The monthly counter starts at the number of packages the customer
/// already received this calendar month. Each package increments the
/// counter first; the packages that push it past the limit are the ones
/// that pay the overage fee. A limit of 0 means unlimited: the counter
/// still advances (it is reported back to the caller) but no package is
/// ever charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuotaLedger {
    used: u32,
    limit: u32,
    overage_count: u32,
}

impl QuotaLedger {
    fn new(monthly_count: u32, limit: u32) -> Self {
        QuotaLedger {
            used: monthly_count,
            limit,
            overage_count: 0,
        }
    }

    /// Records one more package and returns the overage fee it incurs,
    /// if any.
    fn assess(&mut self, overage_fee: Money) -> Money {
        self.used += 1;
        if self.limit > 0 && self.used > self.limit {
            self.overage_count += 1;
            overage_fee
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Fee Calculator
// =============================================================================

/// Calculates all fees for the selected packages.
///
/// Pure arithmetic over its inputs: no I/O, no clock reads, no errors.
/// Inputs are not validated here; callers wanting a strict contract run
/// [`crate::validation::validate_fee_config`] first. A package appearing
/// twice in the batch is billed twice.
///
/// ## Arguments
/// - `packages`      - the packages being checked out, in display order
/// - `config`        - store/tenant fee configuration
/// - `monthly_count` - packages already received this calendar month,
///   prior to this batch
/// - `add_on_total`  - pre-summed add-on service charges (notary,
///   insurance, ...) that bypass per-package fee logic
/// - `now`           - reference instant for all day counting
///
/// ## Example
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use shipos_core::fees::calculate_fees;
/// use shipos_core::money::Money;
/// use shipos_core::types::{FeeConfig, PackageForFees};
///
/// let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
/// let pkg = PackageForFees {
///     id: "pkg_01".to_string(),
///     checked_in_at: now - Duration::days(45),
///     carrier: "ups".to_string(),
///     tracking_number: None,
///     package_type: "box".to_string(),
/// };
///
/// let result = calculate_fees(&[pkg], &FeeConfig::default(), 0, Money::zero(), now);
/// // 15 billable days past the 30-day free period at $1/day, plus $3 receiving
/// assert_eq!(result.subtotal.cents(), 1800);
/// assert_eq!(result.total.cents(), 1958);
/// ```
pub fn calculate_fees(
    packages: &[PackageForFees],
    config: &FeeConfig,
    monthly_count: u32,
    add_on_total: Money,
    now: DateTime<Utc>,
) -> FeeCalculationResult {
    let mut ledger = QuotaLedger::new(monthly_count, config.package_quota);
    let mut breakdowns = Vec::with_capacity(packages.len());

    for pkg in packages {
        let days_held = count_days(pkg.checked_in_at, now, true);
        let billable_days = count_days(pkg.checked_in_at, now, config.storage_count_weekends);

        // Storage fee: days beyond free period × rate
        let storage_days = (billable_days - config.storage_free_days).max(0);
        let storage_fee = config.storage_rate * storage_days;

        // Receiving fee: per-package flat rate
        let receiving_fee = config.receiving_fee_rate;

        // Quota fee: charged once this package pushes past the monthly quota
        let quota_fee = ledger.assess(config.package_quota_overage);

        breakdowns.push(PackageFeeBreakdown {
            package_id: pkg.id.clone(),
            days_held,
            billable_days,
            storage_fee,
            receiving_fee,
            quota_fee,
            total: storage_fee + receiving_fee + quota_fee,
        });
    }

    let storage_fee_total: Money = breakdowns.iter().map(|p| p.storage_fee).sum();
    let receiving_fee_total: Money = breakdowns.iter().map(|p| p.receiving_fee).sum();
    let quota_fee_total: Money = breakdowns.iter().map(|p| p.quota_fee).sum();

    let subtotal = storage_fee_total + receiving_fee_total + quota_fee_total + add_on_total;
    let tax_amount = subtotal.calculate_tax(config.tax_rate);
    let total = subtotal + tax_amount;

    FeeCalculationResult {
        packages: breakdowns,
        storage_fee_total,
        receiving_fee_total,
        quota_fee_total,
        add_on_total,
        subtotal,
        tax_rate: config.tax_rate,
        tax_amount,
        total,
        quota_used_this_month: ledger.used,
        quota_limit: ledger.limit,
        quota_overage_count: ledger.overage_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
