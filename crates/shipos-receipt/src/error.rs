//! # Error Types
//!
//! Errors for receipt rendering and the checkout workflow.

use shipos_core::ValidationError;
use thiserror::Error;

/// Receipt template rendering failure.
///
/// The receipt template contains no fallible expressions, so this is a
/// theoretical path: it exists because template rendering returns a
/// Result, not because any input is expected to trigger it. Missing
/// optional fields are omitted from output, never errors.
#[derive(Debug, Error)]
#[error("failed to render receipt: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Checkout workflow errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The checkout batch contained no packages.
    #[error("no packages selected for checkout")]
    EmptyCheckout,

    /// The tenant fee configuration failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Receipt rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_messages() {
        assert_eq!(
            CheckoutError::EmptyCheckout.to_string(),
            "no packages selected for checkout"
        );

        let err: CheckoutError = ValidationError::Required {
            field: "pmb_number".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "validation error: pmb_number is required");
    }
}
