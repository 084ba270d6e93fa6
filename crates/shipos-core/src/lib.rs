//! # shipos-core: Pure Fee Calculation for ShipOS Checkout
//!
//! This crate is the **heart** of the ShipOS checkout workflow. It contains
//! the fee engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ShipOS Checkout Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard (React/Next.js)                       │   │
//! │  │    Package Select ──► Fee Preview ──► Tender ──► Receipt        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (out of scope here)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             Checkout routes / persistence layer                 │   │
//! │  │    loads packages + tenant config, supplies monthly_count       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shipos-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   fees    │  │ validation│   │   │
//! │  │   │ FeeConfig │  │   Money   │  │ day count │  │   rules   │   │   │
//! │  │   │ Breakdown │  │  TaxCalc  │  │  quotas   │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shipos-receipt (sibling crate)                   │   │
//! │  │        line items, printable receipt HTML, transactions         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (FeeConfig, PackageForFees, breakdowns)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`fees`] - Day counting and the fee calculator
//! - [`error`] - Validation error types
//! - [`validation`] - Opt-in strict input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic. The reference
//!    instant and the prior monthly package count are parameters, never
//!    ambient state, so concurrent checkouts share nothing.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here.
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors on receipts.
//! 4. **Total Calculation**: The calculator never fails. Strict input
//!    checking is a separate, opt-in validation layer.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use shipos_core::{calculate_fees, FeeConfig, Money, PackageForFees};
//!
//! let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
//! let packages = vec![PackageForFees {
//!     id: "pkg_01".to_string(),
//!     checked_in_at: now - Duration::days(45),
//!     carrier: "fedex".to_string(),
//!     tracking_number: Some("794644790132".to_string()),
//!     package_type: "box".to_string(),
//! }];
//!
//! let result = calculate_fees(&packages, &FeeConfig::default(), 0, Money::zero(), now);
//! assert_eq!(result.total.cents(), 1958); // $18.00 + 8.75% tax
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fees;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shipos_core::Money` instead of
// `use shipos_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use fees::{calculate_fees, count_days};
pub use money::Money;
pub use types::*;
