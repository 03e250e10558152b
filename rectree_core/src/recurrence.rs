// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recurrence descriptions.
//!
//! A [`RecurrenceSpec`] is supplied per visualization request by whatever
//! derived the recurrence from source code. This crate never evaluates the
//! symbolic parts (`f`, `g`, coefficients); they are carried as opaque labels.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{InvalidParameter, TreeError};

/// The recurrence family a tree was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Family {
    /// Regular trees from `T(n) = a·T(n/b) + f(n)`.
    DivideConquer,
    /// Irregular trees from `T(n) = Σ cₖ·T(n − sₖ) + g(n)`.
    LinearShift,
}

/// A recurrence relation in one of the two supported families.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum RecurrenceSpec {
    /// `T(n) = a·T(n/b) + f(n)`.
    DivideConquer(DivideConquer),
    /// `T(n) = Σ cₖ·T(n − sₖ) + g(n)`.
    LinearShift(LinearShift),
}

impl RecurrenceSpec {
    /// Checks the parameters of either family.
    ///
    /// # Errors
    ///
    /// See [`DivideConquer::validate`] and [`LinearShift::validate`].
    pub fn validate(&self) -> Result<(), TreeError> {
        match self {
            Self::DivideConquer(dc) => dc.validate(),
            Self::LinearShift(ls) => ls.validate(),
        }
    }

    /// Returns the family of this recurrence.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::DivideConquer(_) => Family::DivideConquer,
            Self::LinearShift(_) => Family::LinearShift,
        }
    }

    /// Returns the base-case threshold `n0`.
    #[must_use]
    pub fn threshold(&self) -> i64 {
        match self {
            Self::DivideConquer(dc) => dc.n0,
            Self::LinearShift(ls) => ls.n0,
        }
    }
}

impl From<DivideConquer> for RecurrenceSpec {
    fn from(dc: DivideConquer) -> Self {
        Self::DivideConquer(dc)
    }
}

impl From<LinearShift> for RecurrenceSpec {
    fn from(ls: LinearShift) -> Self {
        Self::LinearShift(ls)
    }
}

/// Divide-and-conquer recurrence `T(n) = a·T(n/b) + f(n)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivideConquer {
    /// Branching factor (number of subproblems per call).
    pub a: u32,
    /// Reduction factor (each subproblem has size `n / b`).
    pub b: f64,
    /// Non-recursive work, e.g. `"n"` or `"n log n"`.
    pub f: String,
    /// Base-case threshold.
    pub n0: i64,
}

impl DivideConquer {
    /// Creates a divide-and-conquer recurrence.
    #[must_use]
    pub fn new(a: u32, b: f64, f: impl Into<String>, n0: i64) -> Self {
        Self {
            a,
            b,
            f: f.into(),
            n0,
        }
    }

    /// Checks that `a > 0` and `b > 1`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRecurrenceParameters`] naming the first
    /// offending field. A NaN `b` is rejected as well.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.a == 0 {
            return Err(InvalidParameter::BranchingFactor(self.a).into());
        }
        if !self.b.is_finite() || self.b <= 1.0 {
            return Err(InvalidParameter::ReductionFactor(self.b).into());
        }
        Ok(())
    }
}

/// Linear-shift recurrence `T(n) = Σ cₖ·T(n − sₖ) + g(n)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearShift {
    /// Argument decrements, in declaration order. Children are expanded in
    /// this order.
    pub shifts: Vec<u32>,
    /// Weights parallel to `shifts`.
    pub coefficients: Vec<String>,
    /// Non-homogeneous term, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub g: Option<String>,
    /// Base-case threshold.
    pub n0: i64,
}

impl LinearShift {
    /// Creates a linear-shift recurrence with unit coefficients.
    #[must_use]
    pub fn new(shifts: impl Into<Vec<u32>>, n0: i64) -> Self {
        let shifts = shifts.into();
        let coefficients = shifts.iter().map(|_| String::from("1")).collect();
        Self {
            shifts,
            coefficients,
            g: None,
            n0,
        }
    }

    /// Replaces the coefficients.
    #[must_use]
    pub fn with_coefficients<I, S>(mut self, coefficients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coefficients = coefficients.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the non-homogeneous term.
    #[must_use]
    pub fn with_g(mut self, g: impl Into<String>) -> Self {
        self.g = Some(g.into());
        self
    }

    /// Checks that shifts are present and positive and that every shift has
    /// a coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyRecurrence`] for an empty shift list, or
    /// [`TreeError::InvalidRecurrenceParameters`] for a zero shift or a
    /// coefficient count mismatch.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.shifts.is_empty() {
            return Err(TreeError::EmptyRecurrence);
        }
        if let Some(position) = self.shifts.iter().position(|&s| s == 0) {
            return Err(InvalidParameter::ZeroShift { position }.into());
        }
        if self.coefficients.len() != self.shifts.len() {
            return Err(InvalidParameter::CoefficientMismatch {
                shifts: self.shifts.len(),
                coefficients: self.coefficients.len(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn divide_conquer_rejects_bad_factors() {
        assert_eq!(
            DivideConquer::new(0, 2.0, "n", 1).validate(),
            Err(TreeError::InvalidRecurrenceParameters(
                InvalidParameter::BranchingFactor(0)
            ))
        );
        assert!(DivideConquer::new(2, 1.0, "n", 1).validate().is_err());
        assert!(DivideConquer::new(2, 0.5, "n", 1).validate().is_err());
        assert!(DivideConquer::new(2, f64::NAN, "n", 1).validate().is_err());
        assert!(DivideConquer::new(2, 1.5, "n", 1).validate().is_ok());
    }

    #[test]
    fn linear_shift_rejects_empty_and_zero_shifts() {
        assert_eq!(
            LinearShift::new(Vec::<u32>::new(), 0).validate(),
            Err(TreeError::EmptyRecurrence)
        );
        assert_eq!(
            LinearShift::new(vec![1, 0], 0).validate(),
            Err(TreeError::InvalidRecurrenceParameters(
                InvalidParameter::ZeroShift { position: 1 }
            ))
        );
    }

    #[test]
    fn linear_shift_requires_parallel_coefficients() {
        let ls = LinearShift::new(vec![1, 2], 0).with_coefficients(["1"]);
        assert!(matches!(
            ls.validate(),
            Err(TreeError::InvalidRecurrenceParameters(
                InvalidParameter::CoefficientMismatch {
                    shifts: 2,
                    coefficients: 1
                }
            ))
        ));
        let fib = LinearShift::new(vec![1, 2], 0).with_g("1");
        assert_eq!(fib.coefficients, vec!["1", "1"]);
        assert!(fib.validate().is_ok());
    }

    #[test]
    fn threshold_is_family_independent() {
        let spec: RecurrenceSpec = DivideConquer::new(2, 2.0, "n", 3).into();
        assert_eq!(spec.threshold(), 3);
        let spec: RecurrenceSpec = LinearShift::new(vec![1], 5).into();
        assert_eq!(spec.threshold(), 5);
        assert_eq!(spec.family(), Family::LinearShift);
    }
}
