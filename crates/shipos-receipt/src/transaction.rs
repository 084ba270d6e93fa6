//! # Checkout Transaction Workflow
//!
//! Orchestrates a package release: fee calculation, line items, receipt
//! assembly and rendering, and the immutable transaction record.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      process_checkout(request)                          │
//! │                                                                         │
//! │  validate config ──► calculate_fees ──► build_line_items               │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  CheckoutTransaction ◄── render_receipt ◄── build_receipt_data         │
//! │  (invoice number,                                                       │
//! │   payment status,                                                       │
//! │   fee totals)                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisting the transaction, updating package status, and delivering the
//! receipt (print/email/SMS) are the embedding application's concern. This
//! module only assembles the record of what was charged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use shipos_core::validation::validate_fee_config;
use shipos_core::{calculate_fees, FeeCalculationResult, FeeConfig, Money, PackageForFees, TaxRate};

use crate::error::CheckoutError;
use crate::line_items::{build_line_items, LineItem};
use crate::receipt::{build_receipt_data, ReceiptContext, ReceiptPackage};
use crate::render::render_receipt;

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement state of a checkout transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Charged to the customer's house account; settles on their invoice.
    Pending,
    /// Settled at the counter.
    Completed,
}

impl PaymentStatus {
    /// Derives the settlement state from the tender type. Posting to the
    /// customer's account is the only deferred method; every other tender
    /// settles immediately.
    pub fn for_method(payment_method: &str) -> Self {
        if payment_method == "post_to_account" {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Completed
        }
    }
}

// =============================================================================
// Receipt Delivery Method
// =============================================================================

/// How the customer asked to receive their receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptMethod {
    Email,
    Sms,
    Print,
    #[serde(rename = "sms+print")]
    SmsPrint,
    #[default]
    None,
}

// =============================================================================
// Request / Record Types
// =============================================================================

/// Store identity shown in the receipt header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}

/// Everything the checkout workflow needs for one release.
///
/// The caller has already loaded the packages and verified the customer
/// and employee; ids and display names arrive resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub pmb_number: String,
    pub employee_id: String,
    pub employee_name: String,
    pub store: StoreInfo,
    pub packages: Vec<PackageForFees>,
    pub payment_method: String,
    pub receipt_method: ReceiptMethod,
    pub add_on_total: Money,
    pub signature_data_url: Option<String>,
    /// Present when someone other than the box holder picked up.
    pub delegate_name: Option<String>,
    pub delegate_id_type: Option<String>,
}

/// Immutable record of what was charged for one release.
///
/// Built once per checkout and never mutated afterwards; the persistence
/// layer stores it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTransaction {
    pub id: String,
    pub invoice_number: String,
    pub customer_id: String,
    pub employee_id: String,

    pub storage_fees: Money,
    pub receiving_fees: Money,
    pub quota_fees: Money,
    pub add_on_fees: Money,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax_amount: Money,
    pub total: Money,

    pub payment_method: String,
    pub payment_status: PaymentStatus,

    pub package_ids: Vec<String>,
    pub package_count: usize,

    pub recipient_name: Option<String>,
    pub recipient_id_type: Option<String>,

    pub receipt_method: ReceiptMethod,
    pub line_items: Vec<LineItem>,

    pub created_at: DateTime<Utc>,
}

/// The full result of a processed checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOutcome {
    pub transaction: CheckoutTransaction,
    pub fee_result: FeeCalculationResult,
    pub line_items: Vec<LineItem>,
    pub receipt_html: String,
}

// =============================================================================
// Invoice Numbers
// =============================================================================

/// Generates an invoice number: `INV-YYYYMMDD-XXXXXX`.
///
/// The suffix is six characters of fresh UUID entropy, upper-cased.
/// Uniqueness is enforced downstream by the persistence layer; this only
/// needs to be collision-resistant within a store's day.
pub fn generate_invoice_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let uuid = Uuid::new_v4().simple().to_string();
    format!("INV-{}-{}", date, uuid[..6].to_uppercase())
}

// =============================================================================
// Workflow
// =============================================================================

/// Processes one checkout: fees, line items, receipt, transaction record.
///
/// ## Arguments
/// - `request`       - resolved customer/employee/store context + packages
/// - `config`        - tenant fee configuration (validated here)
/// - `monthly_count` - packages already received this calendar month,
///   prior to this batch
/// - `now`           - the checkout instant, used for day counting and the
///   transaction timestamp
///
/// ## Errors
/// - [`CheckoutError::EmptyCheckout`] when no packages were selected
/// - [`CheckoutError::Validation`] when the fee config is malformed
pub fn process_checkout(
    request: CheckoutRequest,
    config: &FeeConfig,
    monthly_count: u32,
    now: DateTime<Utc>,
) -> Result<CheckoutOutcome, CheckoutError> {
    debug!(
        customer_id = %request.customer_id,
        package_count = request.packages.len(),
        payment_method = %request.payment_method,
        "processing checkout"
    );

    if request.packages.is_empty() {
        return Err(CheckoutError::EmptyCheckout);
    }

    validate_fee_config(config)?;

    let fee_result = calculate_fees(
        &request.packages,
        config,
        monthly_count,
        request.add_on_total,
        now,
    );
    let line_items = build_line_items(&fee_result);

    let invoice_number = generate_invoice_number();
    let package_ids: Vec<String> = request.packages.iter().map(|p| p.id.clone()).collect();

    let receipt_data = build_receipt_data(
        &fee_result,
        line_items.clone(),
        ReceiptContext {
            invoice_number: invoice_number.clone(),
            store_name: request.store.name,
            store_address: request.store.address,
            store_phone: request.store.phone,
            store_logo: request.store.logo_url,
            customer_name: request.customer_name,
            pmb_number: request.pmb_number,
            packages: request
                .packages
                .iter()
                .map(|p| ReceiptPackage {
                    id: p.id.clone(),
                    tracking_number: p.tracking_number.clone(),
                    carrier: p.carrier.clone(),
                    package_type: p.package_type.clone(),
                })
                .collect(),
            payment_method: request.payment_method.clone(),
            employee_name: request.employee_name,
            signature_data_url: request.signature_data_url,
        },
    );
    let receipt_html = render_receipt(&receipt_data)?;

    let transaction = CheckoutTransaction {
        id: Uuid::new_v4().to_string(),
        invoice_number: invoice_number.clone(),
        customer_id: request.customer_id,
        employee_id: request.employee_id,
        storage_fees: fee_result.storage_fee_total,
        receiving_fees: fee_result.receiving_fee_total,
        quota_fees: fee_result.quota_fee_total,
        add_on_fees: fee_result.add_on_total,
        subtotal: fee_result.subtotal,
        tax_rate: fee_result.tax_rate,
        tax_amount: fee_result.tax_amount,
        total: fee_result.total,
        payment_method: request.payment_method.clone(),
        payment_status: PaymentStatus::for_method(&request.payment_method),
        package_count: package_ids.len(),
        package_ids,
        recipient_name: request.delegate_name,
        recipient_id_type: request.delegate_id_type,
        receipt_method: request.receipt_method,
        line_items: line_items.clone(),
        created_at: now,
    };

    info!(
        invoice_number = %invoice_number,
        total_cents = fee_result.total.cents(),
        package_count = transaction.package_count,
        "checkout transaction assembled"
    );

    Ok(CheckoutOutcome {
        transaction,
        fee_result,
        line_items,
        receipt_html,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
