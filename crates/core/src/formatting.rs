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

//! Number formatting for French commercial documents.

/// Narrow no-break space, the thousands separator used in French typography.
const NARROW_NBSP: char = '\u{202F}';

fn french_digits(s: &str) -> String {
    let (neg, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s)
    };

    let (int_part, dec_part) = match digits.find('.') {
        Some(pos) => (&digits[..pos], Some(&digits[pos + 1..])),
        None => (digits, None),
    };

    let mut result = String::with_capacity(s.len() + int_part.len() / 3 + 2);

    if neg {
        result.push('-');
    }

    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(NARROW_NBSP);
        }
        result.push(*c);
    }

    if let Some(dec) = dec_part {
        result.push(',');
        result.push_str(dec);
    }

    result
}

/// Extension trait for rendering numbers in French typographic form.
///
/// Thousands are grouped with narrow no-break spaces and the decimal
/// separator is a comma, as printed on commercial documents
/// (`1234567.89` → `1 234 567,89`).
pub trait FrenchFormat {
    /// Formats the number as French-grouped digits with a decimal comma.
    fn to_french_digits(&self) -> String;
}

macro_rules! impl_french_format {
    ($($t:ty),*) => {
        $(
            impl FrenchFormat for $t {
                fn to_french_digits(&self) -> String {
                    french_digits(&self.to_string())
                }
            }
        )*
    };
}

impl_french_format!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl FrenchFormat for String {
    fn to_french_digits(&self) -> String {
        french_digits(self)
    }
}

impl FrenchFormat for &str {
    fn to_french_digits(&self) -> String {
        french_digits(self)
    }
}
