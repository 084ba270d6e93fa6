//! # Validation Module
//!
//! Opt-in strict checks for caller-supplied checkout inputs.
//!
//! The fee calculator deliberately accepts whatever it is given: a
//! negative rate propagates arithmetically rather than failing, because
//! the engine treats configuration integrity as the caller's concern.
//! Callers that want a hard contract (the checkout API boundary, config
//! admin screens) run these validators before invoking the engine.
//!
//! ## Usage
//! ```rust
//! use shipos_core::types::FeeConfig;
//! use shipos_core::validation::validate_fee_config;
//!
//! let config = FeeConfig::default();
//! validate_fee_config(&config).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::FeeConfig;

// =============================================================================
// Fee Configuration
// =============================================================================

/// Validates a tenant fee configuration.
///
/// ## Rules
/// - All rates must be non-negative (zero is allowed: free receiving,
///   no-overage tenants)
/// - Free days must be non-negative
/// - Tax rate must not exceed 10000 bps (100%)
pub fn validate_fee_config(config: &FeeConfig) -> ValidationResult<()> {
    if config.storage_rate.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "storage_rate".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if config.storage_free_days < 0 {
        return Err(ValidationError::OutOfRange {
            field: "storage_free_days".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if config.receiving_fee_rate.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "receiving_fee_rate".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if config.package_quota_overage.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "package_quota_overage".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if config.tax_rate.bps() > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a package identifier.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 64 characters
pub fn validate_package_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "package_id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "package_id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a PMB (private mailbox) number.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 16 characters
/// - Only letters, digits, and hyphens
///
/// ## Example
/// ```rust
/// use shipos_core::validation::validate_pmb_number;
///
/// assert!(validate_pmb_number("1042").is_ok());
/// assert!(validate_pmb_number("A-17").is_ok());
/// assert!(validate_pmb_number("").is_err());
/// ```
pub fn validate_pmb_number(pmb: &str) -> ValidationResult<()> {
    let pmb = pmb.trim();

    if pmb.is_empty() {
        return Err(ValidationError::Required {
            field: "pmb_number".to_string(),
        });
    }

    if pmb.len() > 16 {
        return Err(ValidationError::TooLong {
            field: "pmb_number".to_string(),
            max: 16,
        });
    }

    if !pmb.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "pmb_number".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates an invoice number.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 32 characters
pub fn validate_invoice_number(invoice: &str) -> ValidationResult<()> {
    let invoice = invoice.trim();

    if invoice.is_empty() {
        return Err(ValidationError::Required {
            field: "invoice_number".to_string(),
        });
    }

    if invoice.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "invoice_number".to_string(),
            max: 32,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
