//! # Receipt HTML Renderer
//!
//! Renders `ReceiptData` as a single self-contained HTML document suitable
//! for printing (thermal 80mm or standard paper) or embedding in an email
//! body. Inline styles only, for maximum print compatibility.
//!
//! ## Why a Template Engine?
//! Customer names, store names, tracking numbers, and line item
//! descriptions all originate from user-editable records. The template
//! engine escapes `&`, `<`, `>`, and `"` in every interpolated value, so a
//! customer named `<script>alert(1)</script>` cannot inject markup into a
//! printed or emailed receipt.

use askama::Template;

use crate::error::RenderError;
use crate::receipt::ReceiptData;

/// Currency and display filters available inside the receipt template.
mod filters {
    use shipos_core::Money;

    /// Groups an absolute dollar amount with thousands separators.
    fn group_thousands(dollars: i64) -> String {
        let digits = dollars.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
    }

    /// Formats money as en-US currency: `$1,234.56`.
    pub fn usd(amount: &Money) -> askama::Result<String> {
        let sign = if amount.is_negative() { "-" } else { "" };
        Ok(format!(
            "{sign}${}.{:02}",
            group_thousands(amount.dollars().abs()),
            amount.cents_part()
        ))
    }
}

#[derive(Template)]
#[template(path = "receipt.html")]
struct ReceiptTemplate<'a> {
    data: &'a ReceiptData,
}

/// Renders a printable HTML receipt.
///
/// Optional sections (store logo, address, phone, signature) are omitted
/// from the output entirely when absent, never rendered empty.
pub fn render_receipt(data: &ReceiptData) -> Result<String, RenderError> {
    let html = ReceiptTemplate { data }.render()?;
    Ok(html)
}

// =============================================================================
// Unit Tests
// =============================================================================
