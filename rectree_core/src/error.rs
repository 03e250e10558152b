// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Validation errors are raised before any generation work starts, so a
//! failed call never yields a partial tree.

use thiserror::Error;

/// Errors returned by tree generation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TreeError {
    /// A recurrence or display parameter is out of range.
    #[error("invalid recurrence parameters: {0}")]
    InvalidRecurrenceParameters(InvalidParameter),
    /// A linear-shift recurrence declares no shifts.
    #[error("linear-shift recurrence has no shifts")]
    EmptyRecurrence,
    /// A node could not be matched to its parent.
    ///
    /// This signals a defect in the builder, not a bad input. Callers should
    /// treat it like a failed assertion.
    #[error("layout inconsistency: node {index} at level {level} has no parent")]
    LayoutInconsistency {
        /// Level of the orphaned node.
        level: u32,
        /// Index of the orphaned node within its level.
        index: u64,
    },
}

/// The parameter that failed validation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidParameter {
    /// Divide-and-conquer branching factor `a` must be positive.
    #[error("branching factor a must be positive (got {0})")]
    BranchingFactor(u32),
    /// Divide-and-conquer reduction factor `b` must be greater than 1.
    #[error("reduction factor b must be greater than 1 (got {0})")]
    ReductionFactor(f64),
    /// Linear-shift decrements must be positive.
    #[error("shift at position {position} must be positive")]
    ZeroShift {
        /// Position of the offending shift in declaration order.
        position: usize,
    },
    /// Linear-shift coefficients must pair up with shifts.
    #[error("{coefficients} coefficients given for {shifts} shifts")]
    CoefficientMismatch {
        /// Number of declared shifts.
        shifts: usize,
        /// Number of declared coefficients.
        coefficients: usize,
    },
    /// The initial problem size must be finite and non-negative.
    #[error("initial size must be finite and non-negative (got {0})")]
    InitialSize(f64),
}

impl From<InvalidParameter> for TreeError {
    fn from(param: InvalidParameter) -> Self {
        Self::InvalidRecurrenceParameters(param)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = TreeError::from(InvalidParameter::ReductionFactor(1.0));
        assert_eq!(
            err.to_string(),
            "invalid recurrence parameters: reduction factor b must be greater than 1 (got 1)"
        );
        let err = TreeError::from(InvalidParameter::CoefficientMismatch {
            shifts: 2,
            coefficients: 1,
        });
        assert!(
            err.to_string().contains("1 coefficients given for 2 shifts"),
            "unexpected message: {err}"
        );
    }
}
