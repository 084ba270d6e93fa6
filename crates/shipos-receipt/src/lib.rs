//! # shipos-receipt: Receipt Building and Rendering for ShipOS Checkout
//!
//! Turns a fee calculation from `shipos-core` into everything the counter
//! hands to the customer: itemized line items, the immutable checkout
//! transaction record, and a printable HTML receipt.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FeeCalculationResult (from shipos-core)                                │
//! │        │                                                                │
//! │        ├──► build_line_items ──► Vec<LineItem>                          │
//! │        │                              │                                 │
//! │        ├──► build_receipt_data ◄──────┘   (+ ReceiptContext)            │
//! │        │         │                                                      │
//! │        │         ▼                                                      │
//! │        │    render_receipt ──► self-contained HTML document             │
//! │        │                                                                │
//! │        └──► process_checkout ──► CheckoutTransaction + receipt          │
//! │             (the full workflow, one call)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`line_items`] - Itemized charge rows derived from a fee result
//! - [`receipt`] - Receipt data assembly and payment method labels
//! - [`render`] - HTML rendering via compile-time checked templates
//! - [`transaction`] - The checkout workflow and transaction record
//! - [`error`] - Render and workflow error types
//!
//! This crate performs no I/O. Printing, emailing, and persistence belong
//! to the embedding application.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line_items;
pub mod receipt;
pub mod render;
pub mod transaction;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CheckoutError, RenderError};
pub use line_items::{build_line_items, LineItem};
pub use receipt::{
    build_receipt_data, payment_method_label, ReceiptContext, ReceiptData, ReceiptPackage,
};
pub use render::render_receipt;
pub use transaction::{
    generate_invoice_number, process_checkout, CheckoutOutcome, CheckoutRequest,
    CheckoutTransaction, PaymentStatus, ReceiptMethod, StoreInfo,
};
