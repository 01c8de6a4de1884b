//! Submission rules a candidate must pass before it reaches the store.

use thiserror::Error;

use catalog_core::DomainError;

use crate::product::ProductDraft;

/// The first rule a candidate broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Price must be positive.")]
    PriceNotPositive,
}

impl From<ValidationError> for DomainError {
    fn from(value: ValidationError) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// Capability: accept or reject a product submission.
pub trait ProductValidator: Send + Sync {
    fn validate(&self, candidate: &ProductDraft) -> Result<(), ValidationError>;
}

/// Name must be non-blank, then price must be strictly positive.
///
/// Only the first failing rule is reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicProductValidator;

impl BasicProductValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ProductValidator for BasicProductValidator {
    fn validate(&self, candidate: &ProductDraft) -> Result<(), ValidationError> {
        if candidate.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        // NaN fails this comparison too.
        if !(candidate.price > 0.0) {
            return Err(ValidationError::PriceNotPositive);
        }

        Ok(())
    }
}
