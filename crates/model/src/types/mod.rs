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

//! Value types for the commercial document domain model.
//!
//! This module provides the immutable value types [`Currency`] and [`Money`].
//! [`Money`] uses fixed-point arithmetic internally (a raw subunit count)
//! for deterministic decomposition into whole units and subunits.
//!
//! # Immutability
//!
//! Value types are **immutable** - once constructed, their values cannot
//! change. Arithmetic operations return new instances rather than modifying
//! existing ones.
//!
//! # Constraints
//!
//! - [`Money`]: Non-negative values only (document totals). Subtracting a
//!   larger amount from a smaller one panics rather than producing a
//!   negative result, and operations between different currencies panic.

pub mod currency;
pub mod money;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use currency::Currency;
pub use money::{MONEY_MAX, MONEY_RAW_MAX, Money, MoneyParseError};
