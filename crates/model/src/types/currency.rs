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

//! Represents a medium of exchange with associated French naming metadata.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use facture_core::correctness::{FAILED, check_predicate_true};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

/// Represents a medium of exchange in a specified denomination.
///
/// Carries the ISO 4217 identity of the currency together with the French
/// words used when an amount is written out on a document ("dirham",
/// "centime"). Plurals of both words are formed by appending `s`, which
/// holds for every supported currency.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Currency {
    /// The currency code (ISO 4217 alphabetic).
    pub code: Ustr,
    /// The currency decimal precision (subunit digits).
    pub precision: u8,
    /// The ISO 4217 numeric code.
    pub iso4217: u16,
    /// The currency name.
    pub name: Ustr,
    /// The French singular word for one whole unit.
    pub unit_word: Ustr,
    /// The French singular word for one subunit.
    pub subunit_word: Ustr,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code`, `unit_word` or `subunit_word` is empty.
    /// - `precision` is not 2 (the words expansion assumes a subunit scale of 100).
    pub fn new_checked(
        code: &str,
        precision: u8,
        iso4217: u16,
        name: &str,
        unit_word: &str,
        subunit_word: &str,
    ) -> anyhow::Result<Self> {
        check_predicate_true(!code.is_empty(), "`code` was empty")?;
        check_predicate_true(!unit_word.is_empty(), "`unit_word` was empty")?;
        check_predicate_true(!subunit_word.is_empty(), "`subunit_word` was empty")?;
        check_predicate_true(
            precision == 2,
            "`precision` must be 2: the words expansion assumes 100 subunits per unit",
        )?;

        Ok(Self {
            code: Ustr::from(code),
            precision,
            iso4217,
            name: Ustr::from(name),
            unit_word: Ustr::from(unit_word),
            subunit_word: Ustr::from(subunit_word),
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any correctness check fails (see [`Currency::new_checked`]).
    #[must_use]
    pub fn new(
        code: &str,
        precision: u8,
        iso4217: u16,
        name: &str,
        unit_word: &str,
        subunit_word: &str,
    ) -> Self {
        Self::new_checked(code, precision, iso4217, name, unit_word, subunit_word).expect(FAILED)
    }

    /// Moroccan dirham (100 centimes per dirham).
    #[must_use]
    pub fn mad() -> Self {
        Self::new("MAD", 2, 504, "Moroccan dirham", "dirham", "centime")
    }

    /// Euro (100 centimes per euro).
    #[must_use]
    pub fn eur() -> Self {
        Self::new("EUR", 2, 978, "Euro", "euro", "centime")
    }

    /// Returns the built-in currency for an ISO 4217 code, if supported.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MAD" => Some(Self::mad()),
            "EUR" => Some(Self::eur()),
            _ => None,
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown currency code '{s}'"))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_str(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_mad_metadata() {
        let currency = Currency::mad();
        assert_eq!(currency.code.as_str(), "MAD");
        assert_eq!(currency.precision, 2);
        assert_eq!(currency.iso4217, 504);
        assert_eq!(currency.name.as_str(), "Moroccan dirham");
        assert_eq!(currency.unit_word.as_str(), "dirham");
        assert_eq!(currency.subunit_word.as_str(), "centime");
    }

    #[rstest]
    fn test_eur_metadata() {
        let currency = Currency::eur();
        assert_eq!(currency.code.as_str(), "EUR");
        assert_eq!(currency.iso4217, 978);
        assert_eq!(currency.unit_word.as_str(), "euro");
    }

    #[rstest]
    #[case("MAD", true)]
    #[case("EUR", true)]
    #[case("USD", false)]
    #[case("", false)]
    #[case("mad", false)]
    fn test_from_code(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(Currency::from_code(code).is_some(), expected);
    }

    #[rstest]
    fn test_new_checked_rejects_unsupported_precision() {
        let result = Currency::new_checked("TND", 3, 788, "Tunisian dinar", "dinar", "millime");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_new_checked_rejects_empty_code() {
        let result = Currency::new_checked("", 2, 0, "Nameless", "unit", "subunit");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_equality_is_by_code() {
        let a = Currency::mad();
        let b = Currency::new("MAD", 2, 0, "Dirham marocain", "dirham", "centime");
        assert_eq!(a, b);
        assert_ne!(a, Currency::eur());
    }

    #[rstest]
    fn test_display_and_from_str_round_trip() {
        let currency = Currency::mad();
        let parsed: Currency = currency.to_string().parse().unwrap();
        assert_eq!(parsed, currency);
    }

    #[rstest]
    fn test_from_str_unknown_code() {
        let result = Currency::from_str("XXX");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "unknown currency code 'XXX'");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let currency = Currency::mad();
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"MAD\"");

        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, currency);
    }
}
