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

//! Represents a non-negative amount of money in a specified currency.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use facture_core::{
    correctness::{FAILED, check_in_range_inclusive_f64},
    formatting::FrenchFormat,
};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::types::currency::Currency;

/// The number of subunits per whole unit.
const SUBUNIT_SCALE: u64 = 100;

/// The maximum valid monetary amount: one subunit below 10^12 whole units.
///
/// Amounts at or beyond 10^12 whole units are outside the words expansion
/// domain and are rejected rather than silently capped.
pub const MONEY_MAX: f64 = 999_999_999_999.99;

/// The maximum raw subunit count, corresponding to [`MONEY_MAX`].
pub const MONEY_RAW_MAX: u64 = 99_999_999_999_999;

/// Errors when parsing a [`Money`] from its string representation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    /// The input did not contain a `<value> <code>` pair.
    #[error("expected '<value> <code>', was '{input}'")]
    MissingCurrency {
        /// The unparsable input.
        input: String,
    },
    /// The value part was not a valid decimal number.
    #[error("invalid decimal value '{value}'")]
    InvalidValue {
        /// The offending value part.
        value: String,
    },
    /// The currency code is not a supported built-in.
    #[error("unknown currency code '{code}'")]
    UnknownCurrency {
        /// The offending code part.
        code: String,
    },
    /// The value is negative or above [`MONEY_MAX`].
    #[error("amount not in range [0, {MONEY_MAX}], was '{value}'")]
    OutOfRange {
        /// The offending value part.
        value: String,
    },
}

/// Represents a non-negative amount of money in a specified currency.
///
/// Stored as a raw subunit count (scale 100) so the decomposition into
/// whole units and subunits used by the words expansion is deterministic.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Money {
    /// The raw subunit count (100 subunits per whole unit).
    pub raw: u64,
    /// The currency denomination.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance with correctness checking.
    ///
    /// `amount` is rounded to subunit scale (`round(amount * 100)`), so
    /// inputs carrying more than two decimals carry into the units
    /// (1.999 becomes 2.00) instead of producing an out-of-range subunit
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is NaN, infinite, negative, or above
    /// [`MONEY_MAX`].
    pub fn new_checked(amount: f64, currency: Currency) -> anyhow::Result<Self> {
        check_in_range_inclusive_f64(amount, 0.0, MONEY_MAX, "amount")?;
        let raw = (amount * SUBUNIT_SCALE as f64).round() as u64;
        Ok(Self { raw, currency })
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is NaN, infinite, negative, or above [`MONEY_MAX`]
    /// (see [`Money::new_checked`]).
    #[must_use]
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] instance from a raw subunit count.
    ///
    /// Valid raw values come from the `raw` field of an existing instance;
    /// the caller is responsible for staying within [`MONEY_RAW_MAX`].
    #[must_use]
    pub fn from_raw(raw: u64, currency: Currency) -> Self {
        debug_assert!(raw <= MONEY_RAW_MAX);
        Self { raw, currency }
    }

    /// Creates a zero amount in `currency`.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self { raw: 0, currency }
    }

    /// Returns the whole-unit count (`floor` of the amount).
    #[must_use]
    pub fn units(&self) -> u64 {
        self.raw / SUBUNIT_SCALE
    }

    /// Returns the subunit count in the range 0–99.
    #[must_use]
    pub fn subunits(&self) -> u8 {
        (self.raw % SUBUNIT_SCALE) as u8
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns the amount as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.raw as f64 / SUBUNIT_SCALE as f64
    }

    /// Returns the amount as an exact two-decimal [`Decimal`].
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.raw), 2)
    }

    /// Returns the French typographic rendition printed beside the words
    /// on a document (e.g. `1 234,56 MAD`).
    #[must_use]
    pub fn to_french_digits(&self) -> String {
        let digits = format!("{}.{:02}", self.units(), self.subunits());
        format!("{} {}", digits.to_french_digits(), self.currency)
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}.{:02}, {})",
            stringify!(Money),
            self.units(),
            self.subunits(),
            self.currency
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02} {}", self.units(), self.subunits(), self.currency)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        assert_eq!(
            self.currency, other.currency,
            "Money currency mismatch: {} vs {}",
            self.currency, other.currency,
        );
        Some(self.raw.cmp(&other.raw))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert_eq!(
            self.currency, rhs.currency,
            "Money currency mismatch: {} vs {}",
            self.currency, rhs.currency,
        );
        let raw = self.raw + rhs.raw;
        assert!(raw <= MONEY_RAW_MAX, "Money addition exceeds MONEY_MAX");
        Self { raw, currency: self.currency }
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        assert_eq!(
            self.currency, rhs.currency,
            "Money currency mismatch: {} vs {}",
            self.currency, rhs.currency,
        );
        let raw = self
            .raw
            .checked_sub(rhs.raw)
            .expect("Money subtraction would be negative");
        Self { raw, currency: self.currency }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value_str, code) = s
            .rsplit_once(' ')
            .ok_or_else(|| MoneyParseError::MissingCurrency { input: s.to_string() })?;
        let currency =
            Currency::from_code(code).ok_or_else(|| MoneyParseError::UnknownCurrency {
                code: code.to_string(),
            })?;
        let value = Decimal::from_str(value_str)
            .map_err(|_| MoneyParseError::InvalidValue { value: value_str.to_string() })?;
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let raw = (rounded * Decimal::ONE_HUNDRED)
            .to_u64()
            .filter(|raw| *raw <= MONEY_RAW_MAX)
            .ok_or_else(|| MoneyParseError::OutOfRange { value: value_str.to_string() })?;
        Ok(Self { raw, currency })
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::stubs::*;

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(-0.01)]
    #[case(-1.0)]
    #[case(1_000_000_000_000.0)]
    fn test_new_checked_rejects_out_of_domain(#[case] amount: f64) {
        assert!(Money::new_checked(amount, Currency::mad()).is_err());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.01)]
    #[case(1234.56)]
    #[case(MONEY_MAX)]
    fn test_new_checked_accepts_domain(#[case] amount: f64) {
        assert!(Money::new_checked(amount, Currency::mad()).is_ok());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_on_negative() {
        let _ = Money::new(-1.0, Currency::mad());
    }

    #[rstest]
    #[case(0.0, 0, 0)]
    #[case(0.01, 0, 1)]
    #[case(0.50, 0, 50)]
    #[case(1.0, 1, 0)]
    #[case(1.5, 1, 50)]
    #[case(0.29, 0, 29)]
    #[case(1234.56, 1234, 56)]
    #[case(999_999_999_999.99, 999_999_999_999, 99)]
    fn test_decomposition(#[case] amount: f64, #[case] units: u64, #[case] subunits: u8) {
        let money = Money::new(amount, Currency::mad());
        assert_eq!(money.units(), units);
        assert_eq!(money.subunits(), subunits);
    }

    #[rstest]
    fn test_extra_decimals_carry_into_units() {
        let money = Money::new(1.999, Currency::mad());
        assert_eq!(money.units(), 2);
        assert_eq!(money.subunits(), 0);
    }

    #[rstest]
    fn test_zero_and_is_zero(currency_mad: Currency) {
        let money = Money::zero(currency_mad);
        assert!(money.is_zero());
        assert_eq!(money.raw, 0);
        assert!(!Money::new(0.01, currency_mad).is_zero());
    }

    #[rstest]
    fn test_from_raw_round_trip(money_ttc: Money) {
        let rebuilt = Money::from_raw(money_ttc.raw, money_ttc.currency);
        assert_eq!(rebuilt, money_ttc);
    }

    #[rstest]
    fn test_as_f64_and_as_decimal(money_ttc: Money) {
        assert_eq!(money_ttc.as_f64(), 1234.56);
        assert_eq!(money_ttc.as_decimal(), dec!(1234.56));
    }

    #[rstest]
    fn test_string_reprs(money_ttc: Money) {
        assert_eq!(money_ttc.to_string(), "1234.56 MAD");
        assert_eq!(format!("{money_ttc:?}"), "Money(1234.56, MAD)");
        assert_eq!(Money::new(0.01, Currency::mad()).to_string(), "0.01 MAD");
        assert_eq!(Money::new(80.0, Currency::mad()).to_string(), "80.00 MAD");
    }

    #[rstest]
    fn test_to_french_digits(money_ttc: Money) {
        assert_eq!(money_ttc.to_french_digits(), "1\u{202F}234,56 MAD");
        assert_eq!(Money::new(250.0, Currency::eur()).to_french_digits(), "250,00 EUR");
    }

    #[rstest]
    #[case("1234.56 MAD", 123_456)]
    #[case("0.01 MAD", 1)]
    #[case("0 MAD", 0)]
    #[case("1.005 MAD", 101)] // midpoint rounds away from zero
    #[case("999999999999.99 MAD", MONEY_RAW_MAX)]
    fn test_from_str_valid(#[case] input: &str, #[case] raw: u64) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money.raw, raw);
        assert_eq!(money.currency, Currency::mad());
    }

    #[rstest]
    fn test_from_str_missing_currency() {
        let result = Money::from_str("1234.56");
        assert_eq!(
            result.unwrap_err(),
            MoneyParseError::MissingCurrency { input: "1234.56".to_string() },
        );
    }

    #[rstest]
    fn test_from_str_invalid_value() {
        let result = Money::from_str("abc MAD");
        assert_eq!(
            result.unwrap_err(),
            MoneyParseError::InvalidValue { value: "abc".to_string() },
        );
    }

    #[rstest]
    fn test_from_str_unknown_currency() {
        let result = Money::from_str("10 XXX");
        assert_eq!(
            result.unwrap_err(),
            MoneyParseError::UnknownCurrency { code: "XXX".to_string() },
        );
    }

    #[rstest]
    #[case("-1 MAD")]
    #[case("1000000000000 MAD")]
    fn test_from_str_out_of_range(#[case] input: &str) {
        assert!(matches!(
            Money::from_str(input).unwrap_err(),
            MoneyParseError::OutOfRange { .. },
        ));
    }

    #[rstest]
    fn test_serde_round_trip(money_ttc: Money) {
        let json = serde_json::to_string(&money_ttc).unwrap();
        assert_eq!(json, "\"1234.56 MAD\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, money_ttc);
    }

    #[rstest]
    fn test_add_sub(currency_mad: Currency) {
        let a = Money::new(10.50, currency_mad);
        let b = Money::new(0.75, currency_mad);
        assert_eq!(a + b, Money::new(11.25, currency_mad));
        assert_eq!(a - b, Money::new(9.75, currency_mad));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::new(11.25, currency_mad));
        c -= b;
        assert_eq!(c, a);
    }

    #[rstest]
    #[should_panic(expected = "Money currency mismatch")]
    fn test_add_currency_mismatch_panics() {
        let _ = Money::new(1.0, Currency::mad()) + Money::new(1.0, Currency::eur());
    }

    #[rstest]
    #[should_panic(expected = "Money subtraction would be negative")]
    fn test_sub_underflow_panics(currency_mad: Currency) {
        let _ = Money::new(1.0, currency_mad) - Money::new(2.0, currency_mad);
    }

    #[rstest]
    fn test_ordering(currency_mad: Currency) {
        let small = Money::new(1.0, currency_mad);
        let large = Money::new(2.0, currency_mad);
        assert!(small < large);
        assert!(large >= small);
    }
}
