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

//! French cardinal numbers and amount-in-words expansion.
//!
//! The irregular pluralization of "cent", "vingt" and "mille", and the
//! "et un" / "et onze" liaisons, follow Académie française convention and
//! are encoded as explicit branches rather than inferred.

use facture_core::string::capitalize_first;

use crate::types::{Currency, Money};

const UNITS: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];
// Indices 7 and 9 are unreachable: the 70s and 90s are expressed as
// 60 + teens and 80 + teens in the dedicated branches below.
const TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante",
    "quatre-vingt",
    "quatre-vingt",
];

/// Expands `n` (0–999) into French words; empty string for 0.
fn under_thousand(n: u64) -> String {
    debug_assert!(n < 1_000);

    let mut s = String::new();
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        if hundreds == 1 {
            s.push_str("cent");
        } else {
            s.push_str(UNITS[hundreds as usize]);
            s.push_str(" cent");
            // "deux cents" but "deux cent cinquante"
            if rest == 0 {
                s.push('s');
            }
        }
        if rest > 0 {
            s.push(' ');
        }
    }

    match rest {
        0 => {}
        1..=9 => s.push_str(UNITS[rest as usize]),
        10..=19 => s.push_str(TEENS[(rest - 10) as usize]),
        _ => {
            let tens = rest / 10;
            let units = rest % 10;
            match tens {
                // The 70s read as sixty plus a teen, with the "et onze" liaison
                7 => {
                    s.push_str("soixante");
                    if units == 1 {
                        s.push_str(" et onze");
                    } else {
                        s.push('-');
                        s.push_str(TEENS[units as usize]);
                    }
                }
                // The 90s read as eighty plus a teen, without the liaison
                9 => {
                    s.push_str("quatre-vingt-");
                    s.push_str(TEENS[units as usize]);
                }
                _ => {
                    s.push_str(TENS[tens as usize]);
                    if units == 1 && tens != 8 {
                        s.push_str(" et un");
                    } else if units > 0 {
                        s.push('-');
                        s.push_str(UNITS[units as usize]);
                    } else if tens == 8 {
                        // "quatre-vingts" only when nothing follows
                        s.push('s');
                    }
                }
            }
        }
    }

    s
}

/// Returns the French cardinal of `n`.
///
/// Decomposes by magnitude group (milliard / million / mille / 0–999);
/// "mille" is invariant and never preceded by "un", while "milliard" and
/// "million" pluralize when their group exceeds one. Supports
/// `0 <= n <= 999_999_999_999`.
///
/// # Examples
///
/// ```
/// use facture_model::words::cardinal;
///
/// assert_eq!(cardinal(71), "soixante et onze");
/// assert_eq!(cardinal(1000), "mille");
/// assert_eq!(cardinal(1234), "mille deux cent trente-quatre");
/// ```
#[must_use]
pub fn cardinal(n: u64) -> String {
    debug_assert!(n <= 999_999_999_999);

    if n == 0 {
        return "zéro".to_string();
    }

    let billions = n / 1_000_000_000;
    let millions = n / 1_000_000 % 1_000;
    let thousands = n / 1_000 % 1_000;
    let rest = n % 1_000;

    let mut parts: Vec<String> = Vec::with_capacity(4);

    if billions > 0 {
        let mut part = under_thousand(billions);
        part.push_str(" milliard");
        if billions > 1 {
            part.push('s');
        }
        parts.push(part);
    }

    if millions > 0 {
        let mut part = under_thousand(millions);
        part.push_str(" million");
        if millions > 1 {
            part.push('s');
        }
        parts.push(part);
    }

    if thousands == 1 {
        parts.push("mille".to_string());
    } else if thousands > 1 {
        parts.push(format!("{} mille", under_thousand(thousands)));
    }

    if rest > 0 {
        parts.push(under_thousand(rest));
    }

    parts.join(" ")
}

impl Money {
    /// Returns the amount written out in French words, as printed on
    /// commercial documents.
    ///
    /// The unit and subunit words come from the currency and pluralize
    /// when their count exceeds one; a zero amount renders as
    /// "Zéro dirham" with no subunit clause, and a zero unit count with
    /// nonzero subunits keeps the "zéro" base ("Zéro dirham et cinquante
    /// centimes"). The first character is capitalized.
    #[must_use]
    pub fn to_words(&self) -> String {
        let units = self.units();
        let subunits = u64::from(self.subunits());

        let mut text = cardinal(units);
        text.push(' ');
        text.push_str(self.currency.unit_word.as_str());
        if units > 1 {
            text.push('s');
        }

        if subunits > 0 {
            text.push_str(" et ");
            text.push_str(&cardinal(subunits));
            text.push(' ');
            text.push_str(self.currency.subunit_word.as_str());
            if subunits > 1 {
                text.push('s');
            }
        }

        capitalize_first(&text)
    }
}

/// Expands `amount` into French words for the given currency.
///
/// This is the validation boundary for document render paths holding a
/// plain float: the amount is checked before any text is produced, so an
/// invalid total can never reach a printed document.
///
/// # Errors
///
/// Returns an error if `amount` is NaN, infinite, negative, or at or above
/// 10^12 whole units (see [`Money::new_checked`]).
pub fn amount_to_words(amount: f64, currency: Currency) -> anyhow::Result<String> {
    Ok(Money::new_checked(amount, currency)?.to_words())
}
