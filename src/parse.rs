/*
 * // Copyright (c) Radzivon Bartoshyk 7/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

//! Decimal input: grammar
//! `sign? digits ('.' digits?)? ([eE] sign? digits)? (ws* '+' ws* number)?`
//! plus the case-insensitive specials `nan` and `[+-]?inf(inity)?`. The
//! trailing sum form is the exact two-word output of
//! [`DoubleDouble::to_sum_string`] and round-trips bit for bit.

use crate::double_double::DoubleDouble;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use std::str::FromStr;
use thiserror::Error;

/// The input did not match the decimal grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid double-double literal")]
pub struct ParseDdError;

/// Largest integer every binary64 stores exactly, 2^53 - 1.
const MAX_SAFE_INT: i64 = (1i64 << 53) - 1;

/// Value of at most 15 ascii digits; always exact in binary64.
#[inline]
fn small_digits(s: &[u8]) -> f64 {
    let mut v = 0u64;
    for &c in s {
        v = v * 10 + (c - b'0') as u64;
    }
    v as f64
}

/// Non-negative digit string to double-double by 15-digit chunking: the
/// leading chunk is exact, the rest recurses with trailing zeros folded
/// into the scale so every chunk keeps at most 15 significant digits.
fn digits_to_dd(s: &str) -> DoubleDouble {
    let s = s.trim_start_matches('0');
    if s.is_empty() {
        return DoubleDouble::ZERO;
    }
    if s.len() <= 15 {
        return DoubleDouble::from_f64(small_digits(s.as_bytes()));
    }
    let (head, tail) = s.split_at(15);
    let hi = DoubleDouble::from_f64(small_digits(head.as_bytes()))
        * DoubleDouble::pow10(tail.len() as i32);
    let trimmed = tail.trim_end_matches('0');
    if trimmed.is_empty() {
        return hi;
    }
    let zeros = tail.len() - trimmed.len();
    hi + digits_to_dd(trimmed) * DoubleDouble::pow10(zeros as i32)
}

/// `digits * 10^e` for a non-negative digit string. Digits beyond what the
/// format resolves are dropped into the exponent, and scaling near the
/// exponent limits goes in two steps so intermediate powers stay finite.
fn decimal_to_dd(digits: &str, e: i64) -> DoubleDouble {
    let t = digits.trim_start_matches('0');
    let t2 = t.trim_end_matches('0');
    let mut e = e + (t.len() - t2.len()) as i64;
    if t2.is_empty() {
        return DoubleDouble::ZERO;
    }
    const SIG: usize = 36;
    let kept = if t2.len() > SIG {
        e += (t2.len() - SIG) as i64;
        &t2[..SIG]
    } else {
        t2
    };
    let d = kept.len() as i64;
    if d + e > 310 {
        return DoubleDouble::INFINITY;
    }
    if d + e < -340 {
        return DoubleDouble::ZERO;
    }
    let m = digits_to_dd(kept);
    if e < -300 {
        m * DoubleDouble::pow10(-300) * DoubleDouble::pow10((e + 300) as i32)
    } else if e > 300 {
        m * DoubleDouble::pow10(300) * DoubleDouble::pow10((e - 300) as i32)
    } else {
        m * DoubleDouble::pow10(e as i32)
    }
}

struct NumLex<'a> {
    raw: &'a str,
    neg: bool,
    digits: String,
    frac_len: usize,
    exp: i64,
}

/// Consumes one `sign? digits ('.' digits?)? ([eE] sign? digits)?` lexeme
/// starting at `*pos`; leaves `*pos` at the first unconsumed byte.
fn lex_number<'a>(s: &'a str, pos: &mut usize) -> Option<NumLex<'a>> {
    let b = s.as_bytes();
    let start = *pos;
    let mut i = start;
    let mut neg = false;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        neg = b[i] == b'-';
        i += 1;
    }
    let mut digits = String::new();
    let int_mark = i;
    while i < b.len() && b[i].is_ascii_digit() {
        digits.push(b[i] as char);
        i += 1;
    }
    if i == int_mark {
        return None;
    }
    let mut frac_len = 0usize;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            digits.push(b[i] as char);
            frac_len += 1;
            i += 1;
        }
    }
    let mut exp = 0i64;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mark = i;
        i += 1;
        let mut eneg = false;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            eneg = b[i] == b'-';
            i += 1;
        }
        let exp_mark = i;
        let mut v = 0i64;
        while i < b.len() && b[i].is_ascii_digit() {
            v = v.saturating_mul(10).saturating_add((b[i] - b'0') as i64);
            i += 1;
        }
        if i == exp_mark {
            // a bare 'e' is not an exponent, hand it back
            i = mark;
        } else {
            exp = if eneg { -v } else { v };
        }
    }
    let raw = &s[start..i];
    *pos = i;
    Some(NumLex {
        raw,
        neg,
        digits,
        frac_len,
        exp,
    })
}

pub(crate) fn parse_dd(input: &str) -> Option<DoubleDouble> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if s.eq_ignore_ascii_case("nan") {
        return Some(DoubleDouble::NAN);
    }
    let (inf_neg, rest) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };
    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        return Some(if inf_neg {
            DoubleDouble::NEG_INFINITY
        } else {
            DoubleDouble::INFINITY
        });
    }

    let mut pos = 0usize;
    let first = lex_number(s, &mut pos)?;
    let tail = s[pos..].trim_start();
    if !tail.is_empty() {
        // the dual-word sum form: both lexemes are plain binary64 values
        let second_str = tail.strip_prefix('+')?.trim_start();
        let mut p2 = 0usize;
        let second = lex_number(second_str, &mut p2)?;
        if p2 != second_str.len() {
            return None;
        }
        let hi: f64 = first.raw.parse().ok()?;
        let lo: f64 = second.raw.parse().ok()?;
        return Some(DoubleDouble::from_full_exact_add(hi, lo));
    }

    let e = first.exp - first.frac_len as i64;
    let v = decimal_to_dd(&first.digits, e);
    Some(if first.neg { -v } else { v })
}

impl DoubleDouble {
    /// Converts an arbitrary-precision integer, correctly rounded past the
    /// 31 digits the format holds.
    pub fn from_bigint(i: &BigInt) -> Self {
        if let Some(v) = i.to_i64() {
            if v.unsigned_abs() <= MAX_SAFE_INT as u64 {
                return DoubleDouble::from_f64(v as f64);
            }
        }
        let mag = i.magnitude().to_string();
        let dd = digits_to_dd(&mag);
        if i.sign() == Sign::Minus { -dd } else { dd }
    }

    /// `i * 10^e`
    pub fn from_int_exp(i: &BigInt, e: i32) -> Self {
        if i.is_zero() {
            return DoubleDouble::ZERO;
        }
        let mag = i.magnitude().to_string();
        let v = decimal_to_dd(&mag, e as i64);
        if i.sign() == Sign::Minus { -v } else { v }
    }

    /// `d * 10^e`
    pub fn from_f64_exp(d: f64, e: i32) -> Self {
        DoubleDouble::from_f64(d) * DoubleDouble::pow10(e)
    }

    /// Lenient parse: any input the grammar rejects becomes NaN.
    pub fn from_str_or_nan(s: &str) -> Self {
        parse_dd(s).unwrap_or(DoubleDouble::NAN)
    }
}

impl FromStr for DoubleDouble {
    type Err = ParseDdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dd(s).ok_or(ParseDdError)
    }
}
