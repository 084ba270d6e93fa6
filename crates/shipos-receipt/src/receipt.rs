//! # Receipt Data Assembly
//!
//! Builds the display-only `ReceiptData` aggregate from a fee calculation
//! result and transaction context. `ReceiptData` is the immutable record
//! of what was charged; it is built once per checkout and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shipos_core::{FeeCalculationResult, Money, TaxRate};

use crate::line_items::{char_suffix, LineItem};

// =============================================================================
// Receipt Types
// =============================================================================

/// A released package as shown on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPackage {
    pub id: String,
    pub tracking_number: Option<String>,
    pub carrier: String,
    pub package_type: String,
}

impl ReceiptPackage {
    /// Carrier code upper-cased for display (ups -> UPS).
    pub fn carrier_display(&self) -> String {
        self.carrier.to_uppercase()
    }

    /// Last 8 characters of the tracking number, or a placeholder dash
    /// when none was captured at intake.
    pub fn tracking_suffix(&self) -> String {
        match &self.tracking_number {
            Some(tracking) => char_suffix(tracking, 8).to_string(),
            None => "—".to_string(),
        }
    }
}

/// Identifying context for a receipt, supplied by the checkout workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptContext {
    pub invoice_number: String,
    pub store_name: String,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub store_logo: Option<String>,
    pub customer_name: String,
    pub pmb_number: String,
    pub packages: Vec<ReceiptPackage>,
    pub payment_method: String,
    pub employee_name: String,
    pub signature_data_url: Option<String>,
}

/// Everything the receipt renderer needs, in one immutable value.
///
/// Financial fields are copied verbatim from the fee calculation result;
/// `date_time` records the instant the receipt was assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub invoice_number: String,
    pub store_name: String,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub store_logo: Option<String>,

    pub customer_name: String,
    pub pmb_number: String,

    pub packages: Vec<ReceiptPackage>,

    pub line_items: Vec<LineItem>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax_amount: Money,
    pub total: Money,

    pub payment_method: String,
    pub employee_name: String,
    pub date_time: DateTime<Utc>,

    pub signature_data_url: Option<String>,
}

impl ReceiptData {
    /// Human-readable payment method for display.
    pub fn payment_label(&self) -> &str {
        payment_method_label(&self.payment_method)
    }

    /// Tax rate as a percentage string with two decimals (8.75).
    pub fn tax_rate_percent(&self) -> String {
        format!("{:.2}", self.tax_rate.percentage())
    }

    /// Long human-readable timestamp (Thu, Aug 6, 2026, 3:05 PM).
    pub fn date_display(&self) -> String {
        self.date_time.format("%a, %b %-d, %Y, %-I:%M %p").to_string()
    }
}

// =============================================================================
// Payment Method Labels
// =============================================================================

/// Translates a payment method code to its display label.
///
/// Unmapped codes pass through verbatim so new tender types added by the
/// payments team render as-is instead of failing.
pub fn payment_method_label(code: &str) -> &str {
    match code {
        "post_to_account" => "Post to Account",
        "cash" => "Cash",
        "manual_card" => "Card (Manual)",
        "text2pay" => "Text 2 Pay",
        "tap_to_glass" => "Tap to Glass",
        "nfc_reader" => "NFC Card Reader",
        other => other,
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Assembles receipt data from a fee result, its line items, and the
/// transaction context.
///
/// Pure field copying plus a timestamp: the receipt records the moment it
/// was built, which is why `date_time` is stamped here rather than taken
/// as a parameter.
pub fn build_receipt_data(
    fee_result: &FeeCalculationResult,
    line_items: Vec<LineItem>,
    context: ReceiptContext,
) -> ReceiptData {
    ReceiptData {
        invoice_number: context.invoice_number,
        store_name: context.store_name,
        store_address: context.store_address,
        store_phone: context.store_phone,
        store_logo: context.store_logo,
        customer_name: context.customer_name,
        pmb_number: context.pmb_number,
        packages: context.packages,
        line_items,
        subtotal: fee_result.subtotal,
        tax_rate: fee_result.tax_rate,
        tax_amount: fee_result.tax_amount,
        total: fee_result.total,
        payment_method: context.payment_method,
        employee_name: context.employee_name,
        date_time: Utc::now(),
        signature_data_url: context.signature_data_url,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shipos_core::{calculate_fees, FeeConfig, PackageForFees};

    fn sample_context() -> ReceiptContext {
        ReceiptContext {
            invoice_number: "INV-20260806-3FA9C1".to_string(),
            store_name: "Postal Plus".to_string(),
            store_address: Some("12 Main St, Austin, TX, 78701".to_string()),
            store_phone: Some("(512) 555-0175".to_string()),
            store_logo: None,
            customer_name: "Jordan Reyes".to_string(),
            pmb_number: "1042".to_string(),
            packages: vec![ReceiptPackage {
                id: "pkg_1".to_string(),
                tracking_number: Some("1Z999AA10123456784".to_string()),
                carrier: "ups".to_string(),
                package_type: "box".to_string(),
            }],
            payment_method: "cash".to_string(),
            employee_name: "Sam".to_string(),
            signature_data_url: None,
        }
    }

    fn sample_fee_result() -> FeeCalculationResult {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let pkg = PackageForFees {
            id: "pkg_1".to_string(),
            checked_in_at: now - chrono::Duration::days(45),
            carrier: "ups".to_string(),
            tracking_number: Some("1Z999AA10123456784".to_string()),
            package_type: "box".to_string(),
        };
        calculate_fees(&[pkg], &FeeConfig::default(), 0, Money::zero(), now)
    }

    #[test]
    fn test_payment_method_label_known_codes() {
        assert_eq!(payment_method_label("post_to_account"), "Post to Account");
        assert_eq!(payment_method_label("cash"), "Cash");
        assert_eq!(payment_method_label("manual_card"), "Card (Manual)");
        assert_eq!(payment_method_label("text2pay"), "Text 2 Pay");
        assert_eq!(payment_method_label("tap_to_glass"), "Tap to Glass");
        assert_eq!(payment_method_label("nfc_reader"), "NFC Card Reader");
    }

    #[test]
    fn test_payment_method_label_passthrough() {
        assert_eq!(payment_method_label("crypto_wallet"), "crypto_wallet");
        assert_eq!(payment_method_label(""), "");
    }

    #[test]
    fn test_tracking_suffix() {
        let pkg = ReceiptPackage {
            id: "pkg_1".to_string(),
            tracking_number: Some("1Z999AA10123456784".to_string()),
            carrier: "ups".to_string(),
            package_type: "box".to_string(),
        };
        assert_eq!(pkg.tracking_suffix(), "23456784");
        assert_eq!(pkg.carrier_display(), "UPS");

        let no_tracking = ReceiptPackage {
            tracking_number: None,
            ..pkg
        };
        assert_eq!(no_tracking.tracking_suffix(), "—");
    }

    #[test]
    fn test_build_receipt_data_copies_financials_verbatim() {
        let fee_result = sample_fee_result();
        let line_items = crate::line_items::build_line_items(&fee_result);

        let data = build_receipt_data(&fee_result, line_items.clone(), sample_context());

        assert_eq!(data.subtotal, fee_result.subtotal);
        assert_eq!(data.tax_rate, fee_result.tax_rate);
        assert_eq!(data.tax_amount, fee_result.tax_amount);
        assert_eq!(data.total, fee_result.total);
        assert_eq!(data.line_items.len(), line_items.len());
        assert_eq!(data.invoice_number, "INV-20260806-3FA9C1");
        assert_eq!(data.tax_rate_percent(), "8.75");
    }
}
