// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth budgeting.
//!
//! Decides how many levels below the root a tree may materialize:
//!
//! - **Divide-and-conquer** — the natural depth is the number of times `n` can
//!   be divided by `b` before it drops to `n0` or below.
//! - **Linear-shift** — no closed form exists for mixed shifts, but every
//!   shift is at least 1, so the recursion ends within `n` steps. The natural
//!   depth is `n` itself.
//!
//! In both cases a requested depth can only shrink the budget, never grow it.

use crate::error::{InvalidParameter, TreeError};
use crate::recurrence::{DivideConquer, LinearShift, RecurrenceSpec};

/// Upper bound on the natural depth reported for any recurrence.
///
/// Only reachable with a reduction factor extremely close to 1 or a huge
/// initial size. A budget clamped here is flagged with
/// [`DepthBudget::at_horizon`] and the resulting tree is marked truncated.
pub const DEPTH_HORIZON: u32 = 1 << 16;

/// The outcome of depth resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepthBudget {
    /// Depth at which the recurrence bottoms out on its own.
    pub natural: u32,
    /// Depth the caller asked for, if any.
    pub requested: Option<u32>,
    /// Levels below the root that will be materialized.
    pub effective: u32,
    /// Whether `natural` was clamped to [`DEPTH_HORIZON`]; the recurrence
    /// itself goes deeper.
    pub at_horizon: bool,
}

impl DepthBudget {
    fn new(natural: u32, at_horizon: bool, requested: Option<u32>) -> Self {
        Self {
            natural,
            requested,
            effective: requested.unwrap_or(natural).min(natural),
            at_horizon,
        }
    }

    /// Returns whether the requested depth cut the tree short.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.effective < self.natural
    }

    /// Returns whether the horizon, not the caller, stops the tree before
    /// its base cases.
    #[must_use]
    pub fn is_horizon_bound(&self) -> bool {
        self.at_horizon && !self.is_capped()
    }
}

/// Validates `spec` and `initial_n`, then computes the depth budget.
///
/// # Errors
///
/// Returns the validation error of `spec`, or
/// [`InvalidParameter::InitialSize`] when `initial_n` is NaN, infinite, or
/// negative. No partial work is done on failure.
pub fn resolve_depth(
    spec: &RecurrenceSpec,
    initial_n: f64,
    requested: Option<u32>,
) -> Result<DepthBudget, TreeError> {
    match spec {
        RecurrenceSpec::DivideConquer(dc) => divide_conquer_depth(dc, initial_n, requested),
        RecurrenceSpec::LinearShift(ls) => linear_shift_depth(ls, initial_n, requested),
    }
}

/// Depth budget for a divide-and-conquer recurrence.
///
/// # Errors
///
/// See [`resolve_depth`].
pub fn divide_conquer_depth(
    dc: &DivideConquer,
    initial_n: f64,
    requested: Option<u32>,
) -> Result<DepthBudget, TreeError> {
    dc.validate()?;
    check_initial_size(initial_n)?;
    let (natural, at_horizon) = base_case_depth(dc, initial_n);
    Ok(DepthBudget::new(natural, at_horizon, requested))
}

/// Depth budget for a linear-shift recurrence.
///
/// # Errors
///
/// See [`resolve_depth`].
pub fn linear_shift_depth(
    ls: &LinearShift,
    initial_n: f64,
    requested: Option<u32>,
) -> Result<DepthBudget, TreeError> {
    ls.validate()?;
    check_initial_size(initial_n)?;
    let full = u32::try_from(linear_argument(initial_n)).unwrap_or(u32::MAX);
    let natural = full.min(DEPTH_HORIZON);
    Ok(DepthBudget::new(natural, full > natural, requested))
}

/// Checks that the initial problem size is finite and non-negative.
fn check_initial_size(initial_n: f64) -> Result<(), TreeError> {
    if !initial_n.is_finite() || initial_n < 0.0 {
        return Err(InvalidParameter::InitialSize(initial_n).into());
    }
    Ok(())
}

/// The integer root argument of a linear-shift tree.
#[expect(
    clippy::cast_possible_truncation,
    reason = "callers validate initial_n; the saturating cast truncates toward zero on purpose"
)]
pub(crate) fn linear_argument(initial_n: f64) -> i64 {
    initial_n as i64
}

/// Counts divisions by `b` until the size reaches `n0` or below.
///
/// Also returns whether the count stopped at [`DEPTH_HORIZON`] first.
fn base_case_depth(dc: &DivideConquer, initial_n: f64) -> (u32, bool) {
    let threshold = dc.n0 as f64;
    let mut n = initial_n;
    let mut depth = 0;
    while n > threshold {
        if depth == DEPTH_HORIZON {
            return (depth, true);
        }
        n /= dc.b;
        depth += 1;
    }
    (depth, false)
}
