//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositiveScale) The scale factor is zero, negative, NaN or infinite
    NonPositiveScale(Real),
    /// (SubdivisionsOutOfRange) The requested subdivision level exceeds
    /// [`MAX_SUBDIVISIONS`](crate::mesh::MAX_SUBDIVISIONS)
    SubdivisionsOutOfRange(u32),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NonPositiveScale(scale) => write!(
                f,
                "(NonPositiveScale) The scale factor ({}) must be positive and finite",
                scale
            ),
            ValidationError::SubdivisionsOutOfRange(levels) => write!(
                f,
                "(SubdivisionsOutOfRange) {} subdivision levels requested, at most {} are supported",
                levels,
                crate::mesh::MAX_SUBDIVISIONS
            ),
        }
    }
}
