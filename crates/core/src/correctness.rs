// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Correctness checks for function and constructor preconditions.
//!
//! Checked constructors return these results directly; panicking variants
//! call their checked counterpart with `.expect(FAILED)`.

/// Standard message for a failed precondition check.
pub const FAILED: &str = "Condition failed";

/// Checks that `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks that `value` is finite (not NaN and not infinite).
///
/// # Errors
///
/// Returns an error if `value` is NaN or infinite.
pub fn check_finite(value: f64, param: &str) -> anyhow::Result<()> {
    if !value.is_finite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    Ok(())
}

/// Checks that `value` is finite and not negative.
///
/// # Errors
///
/// Returns an error if `value` is NaN, infinite, or negative.
pub fn check_non_negative(value: f64, param: &str) -> anyhow::Result<()> {
    check_finite(value, param)?;
    if value < 0.0 {
        anyhow::bail!("invalid f64 for '{param}' negative, was {value}")
    }
    Ok(())
}

/// Checks that `value` is finite and within the inclusive range [`l`, `r`].
///
/// # Errors
///
/// Returns an error if `value` is NaN, infinite, or outside the range.
pub fn check_in_range_inclusive_f64(value: f64, l: f64, r: f64, param: &str) -> anyhow::Result<()> {
    check_finite(value, param)?;
    if value < l || value > r {
        anyhow::bail!("invalid f64 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}
