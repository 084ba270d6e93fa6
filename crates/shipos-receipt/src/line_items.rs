//! # Line Item Generation
//!
//! Derives the itemized charge rows for invoices and receipts from a fee
//! calculation result. Construction is deterministic and order-sensitive:
//! storage rows come first (one per package, in batch order), then a single
//! aggregated row each for receiving fees, quota overage, and add-ons.
//!
//! Invariant: the line-item totals sum exactly to the result's subtotal.
//! Tax is never a line item; it is a separate receipt field.

use serde::{Deserialize, Serialize};
use shipos_core::{FeeCalculationResult, Money};

/// One itemized charge row destined for the printed/emailed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub qty: i64,
    pub unit_price: Money,
    pub total: Money,
}

/// Returns the last `n` characters of a string without splitting a
/// multi-byte character.
pub(crate) fn char_suffix(s: &str, n: usize) -> &str {
    let char_count = s.chars().count();
    if char_count <= n {
        return s;
    }
    let skip = char_count - n;
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Builds the line items for a fee calculation result.
pub fn build_line_items(result: &FeeCalculationResult) -> Vec<LineItem> {
    let mut items = Vec::new();

    // Storage fees: one row per package that accrued any
    for pkg in result.packages.iter().filter(|p| p.storage_fee.is_positive()) {
        items.push(LineItem {
            description: format!(
                "Storage fee - {} days held (Package {})",
                pkg.billable_days,
                char_suffix(&pkg.package_id, 6),
            ),
            qty: 1,
            unit_price: pkg.storage_fee,
            total: pkg.storage_fee,
        });
    }

    // Receiving fees: one aggregated row, flat rate shared by the batch
    if result.receiving_fee_total.is_positive() {
        items.push(LineItem {
            description: "Package receiving/handling fee".to_string(),
            qty: result.packages.len() as i64,
            unit_price: result
                .packages
                .first()
                .map(|p| p.receiving_fee)
                .unwrap_or_default(),
            total: result.receiving_fee_total,
        });
    }

    // Quota overage: one aggregated row
    if result.quota_fee_total.is_positive() {
        items.push(LineItem {
            description: format!(
                "Monthly quota overage ({} pkg(s) over limit of {})",
                result.quota_overage_count, result.quota_limit,
            ),
            qty: result.quota_overage_count as i64,
            unit_price: result
                .packages
                .iter()
                .find(|p| p.quota_fee.is_positive())
                .map(|p| p.quota_fee)
                .unwrap_or_default(),
            total: result.quota_fee_total,
        });
    }

    // Add-on services
    if result.add_on_total.is_positive() {
        items.push(LineItem {
            description: "Add-on services".to_string(),
            qty: 1,
            unit_price: result.add_on_total,
            total: result.add_on_total,
        });
    }

    items
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shipos_core::{calculate_fees, FeeConfig, PackageForFees};

    fn test_package(id: &str, checked_in_at: chrono::DateTime<Utc>) -> PackageForFees {
        PackageForFees {
            id: id.to_string(),
            checked_in_at,
            carrier: "usps".to_string(),
            tracking_number: None,
            package_type: "envelope".to_string(),
        }
    }

    fn result_for(
        packages: &[PackageForFees],
        config: &FeeConfig,
        monthly_count: u32,
        add_on_cents: i64,
    ) -> FeeCalculationResult {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        calculate_fees(
            packages,
            config,
            monthly_count,
            Money::from_cents(add_on_cents),
            now,
        )
    }

    #[test]
    fn test_char_suffix() {
        assert_eq!(char_suffix("pkg_cm4xyz123", 6), "xyz123");
        assert_eq!(char_suffix("abc", 6), "abc");
        assert_eq!(char_suffix("", 8), "");
    }

    #[test]
    fn test_storage_rows_in_batch_order() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let packages = vec![
            test_package("pkg_alpha1", now - Duration::days(45)),
            test_package("pkg_bravo2", now - Duration::days(40)),
            test_package("pkg_charlie", now - Duration::days(5)), // no storage fee
        ];
        let result = result_for(&packages, &FeeConfig::default(), 0, 0);

        let items = build_line_items(&result);

        assert!(items[0].description.contains("45 days held"));
        assert!(items[0].description.contains("alpha1"));
        assert_eq!(items[0].total.cents(), 1500);

        assert!(items[1].description.contains("40 days held"));
        assert!(items[1].description.contains("bravo2"));
        assert_eq!(items[1].total.cents(), 1000);

        // Third row is the aggregated receiving fee, not pkg_charlie
        assert_eq!(items[2].description, "Package receiving/handling fee");
        assert_eq!(items[2].qty, 3);
        assert_eq!(items[2].unit_price.cents(), 300);
        assert_eq!(items[2].total.cents(), 900);
    }

    #[test]
    fn test_quota_row_reports_overage_and_limit() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let packages = vec![
            test_package("pkg_1", now),
            test_package("pkg_2", now),
            test_package("pkg_3", now),
        ];
        let config = FeeConfig {
            package_quota: 2,
            ..FeeConfig::default()
        };
        let result = result_for(&packages, &config, 1, 0);

        let items = build_line_items(&result);
        let quota_row = items
            .iter()
            .find(|i| i.description.contains("quota overage"))
            .expect("quota row present");

        assert!(quota_row.description.contains("2 pkg(s) over limit of 2"));
        assert_eq!(quota_row.qty, 2);
        assert_eq!(quota_row.unit_price.cents(), 200);
        assert_eq!(quota_row.total.cents(), 400);
    }

    #[test]
    fn test_add_on_row() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let packages = vec![test_package("pkg_1", now)];
        let result = result_for(&packages, &FeeConfig::default(), 0, 2500);

        let items = build_line_items(&result);
        let add_on = items.last().expect("add-on row present");

        assert_eq!(add_on.description, "Add-on services");
        assert_eq!(add_on.qty, 1);
        assert_eq!(add_on.unit_price.cents(), 2500);
        assert_eq!(add_on.total.cents(), 2500);
    }

    #[test]
    fn test_line_item_totals_sum_to_subtotal() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let packages = vec![
            test_package("pkg_1", now - Duration::days(45)),
            test_package("pkg_2", now - Duration::days(31)),
            test_package("pkg_3", now),
        ];
        let config = FeeConfig {
            package_quota: 1,
            ..FeeConfig::default()
        };
        let result = result_for(&packages, &config, 1, 750);

        let items = build_line_items(&result);
        let sum: Money = items.iter().map(|i| i.total).sum();

        assert_eq!(sum, result.subtotal);
    }

    #[test]
    fn test_line_item_serializes_camel_case() {
        let item = LineItem {
            description: "Add-on services".to_string(),
            qty: 1,
            unit_price: Money::from_cents(2500),
            total: Money::from_cents(2500),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"unitPrice\":2500"));
        assert!(json.contains("\"qty\":1"));
    }

    #[test]
    fn test_zero_fee_result_has_no_rows() {
        let config = FeeConfig {
            receiving_fee_rate: Money::zero(),
            ..FeeConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let packages = vec![test_package("pkg_1", now)];
        let result = result_for(&packages, &config, 0, 0);

        assert!(build_line_items(&result).is_empty());
    }
}
