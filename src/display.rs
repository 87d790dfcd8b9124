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
use crate::double_double::DoubleDouble;
use pxfm::f_log10;
use std::fmt;

/// Digits past this carry no information the two words can resolve.
const MAX_DIGITS: usize = 32;

/// Extracts `prec` decimal digits of a positive finite value together with
/// its decimal exponent (`value = d.ddd... * 10^e`).
///
/// One guard digit is taken and folded back half-up; a borrow/carry sweep
/// repairs the raw per-digit truncations first. Scaling to the mantissa is
/// guarded at both exponent extremes so the power of ten never over- or
/// underflows on the way.
fn to_digits(x: DoubleDouble, prec: usize) -> (Vec<u8>, i32) {
    let mut e = f_log10(x.hi).floor() as i32;
    let mut r = if e < -300 {
        (x * DoubleDouble::pow10(300)) / DoubleDouble::pow10(e + 300)
    } else if e > 300 {
        (x.ldexp(-53) / DoubleDouble::pow10(e)).ldexp(53)
    } else {
        x / DoubleDouble::pow10(e)
    };
    // the log10 estimate may land one off
    if r.hi >= 10. {
        e += 1;
        r = r / 10.;
    }
    if r.hi < 1. {
        e -= 1;
        r = r * 10.;
    }

    let n = prec + 1;
    let mut digits = vec![0i32; n];
    for d in digits.iter_mut() {
        let dig = r.hi as i32;
        *d = dig;
        r = (r - dig as f64) * 10.;
    }
    for i in (1..n).rev() {
        if digits[i] < 0 {
            digits[i] += 10;
            digits[i - 1] -= 1;
        } else if digits[i] > 9 {
            digits[i] -= 10;
            digits[i - 1] += 1;
        }
    }
    // a borrow chain can strip the leading digit when the value sits just
    // under a power of ten
    if digits[0] == 0 {
        digits.remove(0);
        digits.push(0);
        e -= 1;
    }
    // guard digit folds back half-up on magnitude
    if digits[n - 1] >= 5 {
        digits[n - 2] += 1;
        let mut i = n - 2;
        while i > 0 && digits[i] > 9 {
            digits[i] -= 10;
            digits[i - 1] += 1;
            i -= 1;
        }
    }
    digits.truncate(prec);
    if digits[0] > 9 {
        digits[0] -= 10;
        digits.insert(0, 1);
        digits.truncate(prec);
        e += 1;
    }
    (digits.into_iter().map(|d| d as u8).collect(), e)
}

/// Re-extracts until the exponent agrees with the digit count the fixed
/// format needs; a final rounding can still carry the exponent up, which
/// the assembler absorbs by zero padding.
fn fixed_digits(x: DoubleDouble, dprec: usize) -> (Vec<u8>, i32) {
    let mut est = to_digits(x, 1).1;
    for _ in 0..3 {
        let need = est + 1 + dprec as i32;
        let take = (need.max(1) as usize).min(MAX_DIGITS);
        let (ds, e) = to_digits(x, take);
        if e >= est {
            return (ds, e);
        }
        est = e;
    }
    to_digits(x, MAX_DIGITS)
}

#[inline]
fn digit_char(digits: &[u8], i: i32) -> char {
    if i >= 0 && (i as usize) < digits.len() {
        (b'0' + digits[i as usize]) as char
    } else {
        '0'
    }
}

fn assemble_fixed(neg: bool, digits: &[u8], e: i32, dprec: usize, trim: bool) -> String {
    let mut out = String::new();
    if neg {
        out.push('-');
    }
    if e < 0 {
        out.push('0');
    } else {
        for k in 0..=e {
            out.push(digit_char(digits, k));
        }
    }
    let mut frac = String::new();
    for j in 0..dprec as i32 {
        frac.push(digit_char(digits, e + 1 + j));
    }
    if trim {
        while frac.ends_with('0') {
            frac.pop();
        }
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn assemble_sci(neg: bool, digits: &[u8], e: i32, prec: usize, trim: bool) -> String {
    let mut out = String::new();
    if neg {
        out.push('-');
    }
    out.push(digit_char(digits, 0));
    let mut frac = String::new();
    for i in 1..prec as i32 {
        frac.push(digit_char(digits, i));
    }
    if trim {
        while frac.ends_with('0') {
            frac.pop();
        }
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    if e != 0 {
        out.push('e');
        out.push_str(&e.to_string());
    }
    out
}

fn format_auto(x: DoubleDouble, prec: Option<usize>) -> String {
    if let Some(s) = format_special(x) {
        return s;
    }
    let p = prec
        .unwrap_or(DoubleDouble::MAX_PRECISION)
        .clamp(1, DoubleDouble::MAX_PRECISION);
    let trim = prec.is_none();
    let neg = x.hi < 0.;
    let (ds, e) = to_digits(x.abs(), p);
    let integral = x.is_integer();
    // small enough exponents print positionally, integers a bit further out
    let fixed = (p as i32) > e && e >= -4 && (e <= 27 || (integral && e <= 30));
    if fixed {
        let dprec = (p as i32 - 1 - e).max(0) as usize;
        assemble_fixed(neg, &ds, e, dprec, trim)
    } else {
        assemble_sci(neg, &ds, e, p, trim)
    }
}

fn format_special(x: DoubleDouble) -> Option<String> {
    if x.is_nan() {
        return Some("NaN".to_string());
    }
    if x.is_infinite() {
        return Some(if x.hi > 0. { "inf" } else { "-inf" }.to_string());
    }
    if x.is_zero() {
        return Some(if x.hi.is_sign_negative() { "-0" } else { "0" }.to_string());
    }
    None
}

impl DoubleDouble {
    /// Decimal rendering at exactly `prec` significant digits, fixed or
    /// scientific by the same selection [`Display`](fmt::Display) uses but
    /// with trailing zeros kept.
    pub fn to_precision(self, prec: usize) -> String {
        format_auto(self, Some(prec))
    }

    /// Positional rendering with `dprec` digits after the point, zero
    /// padded; values whose exponent leaves the positional window fall
    /// back to scientific form.
    pub fn to_fixed(self, dprec: usize, trim_zeros: bool) -> String {
        if let Some(s) = format_special(self) {
            return s;
        }
        let neg = self.hi < 0.;
        let a = self.abs();
        let est = to_digits(a, 1).1;
        let fixed_max = if self.is_integer() { 30 } else { 27 };
        if est > fixed_max {
            return self.to_scientific(DoubleDouble::MAX_PRECISION, trim_zeros);
        }
        if est + 1 + dprec as i32 <= 0 {
            // everything is below the last printed place; only a leading
            // half rounds up into it
            let t = DoubleDouble::pow10(-(dprec as i32)).mul_pwr2(0.5);
            return if a >= t {
                assemble_fixed(neg, &[1], -(dprec as i32), dprec, trim_zeros)
            } else {
                assemble_fixed(neg, &[], -1, dprec, trim_zeros)
            };
        }
        let (ds, e) = fixed_digits(a, dprec);
        assemble_fixed(neg, &ds, e, dprec, trim_zeros)
    }

    /// Scientific rendering `d.ddd…e±k` at `prec` significant digits; the
    /// exponent part is omitted when it is zero.
    pub fn to_scientific(self, prec: usize, trim_zeros: bool) -> String {
        if let Some(s) = format_special(self) {
            return s;
        }
        let p = prec.clamp(1, DoubleDouble::MAX_PRECISION);
        let (ds, e) = to_digits(self.abs(), p);
        assemble_sci(self.hi < 0., &ds, e, p, trim_zeros)
    }

    /// Writes the two words as `hi + lo`, each at `prec` significant
    /// digits. With `prec >= 17` parsing the result restores the value bit
    /// for bit.
    pub fn to_sum_string(self, prec: usize) -> String {
        if let Some(s) = format_special(self) {
            return s;
        }
        let hi = format_auto(DoubleDouble::from_f64(self.hi), Some(prec));
        let lo = format_auto(DoubleDouble::from_f64(self.lo), Some(prec));
        format!("{} + {}", hi, lo)
    }
}

impl fmt::Display for DoubleDouble {
    /// Shortest faithful decimal form: up to 31 significant digits with
    /// trailing zeros trimmed; `{:.N}` renders exactly `N` significant
    /// digits instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_auto(*self, f.precision()))
    }
}

impl fmt::LowerExp for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DoubleDouble::MAX_PRECISION);
        f.write_str(&self.to_scientific(prec, f.precision().is_none()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tenth_plus_two_tenths_shows_three_tenths() {
        let a = DoubleDouble::from_str("0.1").unwrap();
        let b = DoubleDouble::from_str("0.2").unwrap();
        assert_eq!((a + b).to_string(), "0.3");
    }

    #[test]
    fn sum_string_canonical_tenth() {
        let x = DoubleDouble::from_str("0.1").unwrap();
        assert_eq!(
            x.to_sum_string(20),
            "0.10000000000000000555 + -5.5511151231257830103e-18"
        );
        let naive = DoubleDouble::from_f64(0.1);
        assert_eq!(naive.to_sum_string(20), "0.10000000000000000555 + 0");
    }

    #[test]
    fn sum_string_round_trips() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..500 {
            let x = DoubleDouble::from_f64(rng.random_range(-1e18..1e18))
                / DoubleDouble::from_f64(rng.random_range(1.0..1e6));
            let s = x.to_sum_string(20);
            let back = DoubleDouble::from_str(&s).unwrap();
            assert_eq!(back.hi, x.hi, "Invalid result for {}", s);
            assert_eq!(back.lo, x.lo, "Invalid result for {}", s);
        }
    }

    #[test]
    fn power_of_two_prints_all_digits() {
        let x = DoubleDouble::pow2(100);
        assert_eq!(x.to_string(), "1267650600228229401496703205376");
        assert_eq!(
            x,
            DoubleDouble::from_str("1267650600228229401496703205376").unwrap()
        );
    }

    #[test]
    fn fixed_padding_and_trimming() {
        let x = DoubleDouble::from_str("3.5").unwrap();
        assert_eq!(x.to_fixed(4, false), "3.5000");
        assert_eq!(x.to_fixed(4, true), "3.5");
        assert_eq!(x.to_fixed(0, false), "4");
        let y = DoubleDouble::from_str("-0.0625").unwrap();
        assert_eq!(y.to_fixed(2, false), "-0.06");
        assert_eq!(y.to_fixed(1, false), "-0.1");
        assert_eq!(y.to_fixed(6, false), "-0.062500");
    }

    #[test]
    fn fixed_rounds_below_last_place() {
        let x = DoubleDouble::from_str("0.004").unwrap();
        assert_eq!(x.to_fixed(2, false), "0.00");
        let y = DoubleDouble::from_str("0.006").unwrap();
        assert_eq!(y.to_fixed(2, false), "0.01");
        let c = DoubleDouble::from_str("0.99").unwrap();
        assert_eq!(c.to_fixed(1, false), "1.0");
    }

    #[test]
    fn scientific_forms() {
        let x = DoubleDouble::from_str("1234.5").unwrap();
        assert_eq!(x.to_scientific(5, false), "1.2345e3");
        let y = DoubleDouble::from_str("5.25").unwrap();
        assert_eq!(y.to_scientific(3, false), "5.25");
        let z = DoubleDouble::from_str("-0.00025").unwrap();
        assert_eq!(z.to_scientific(2, true), "-2.5e-4");
    }

    #[test]
    fn auto_selection() {
        assert_eq!(DoubleDouble::from_str("1e-4").unwrap().to_string(), "0.0001");
        assert_eq!(DoubleDouble::from_str("1e-5").unwrap().to_string(), "1e-5");
        // a 31-digit integer stays positional, larger magnitudes flip
        assert_eq!(
            DoubleDouble::pow10(30).to_string(),
            "1000000000000000000000000000000"
        );
        assert_eq!(DoubleDouble::pow10(31).to_string(), "1e31");
    }

    #[test]
    fn auto_selection_mid_range_exponents() {
        // exponents in (20, 27] stay positional whether or not the value
        // is an integer
        assert_eq!(
            DoubleDouble::from_str("1.23e24").unwrap().to_string(),
            "1230000000000000000000000"
        );
        assert_eq!(
            DoubleDouble::from_str("1234567890123456789012345.5")
                .unwrap()
                .to_string(),
            "1234567890123456789012345.5"
        );
        // a non-integer past 27 flips to scientific
        assert_eq!(
            DoubleDouble::from_str("1.25e28").unwrap().to_string(),
            "12500000000000000000000000000"
        );
        let frac28 = DoubleDouble::from_str("1.25e28").unwrap() + 0.5;
        assert_eq!(frac28.to_string(), "1.25000000000000000000000000005e28");
    }

    #[test]
    fn specials_render() {
        assert_eq!(DoubleDouble::NAN.to_string(), "NaN");
        assert_eq!(DoubleDouble::INFINITY.to_string(), "inf");
        assert_eq!(DoubleDouble::NEG_INFINITY.to_string(), "-inf");
        assert_eq!(DoubleDouble::ZERO.to_string(), "0");
        assert_eq!((-DoubleDouble::ZERO).to_string(), "-0");
        assert_eq!(DoubleDouble::NAN.to_sum_string(20), "NaN");
    }

    #[test]
    fn display_precision_flag() {
        let x = DoubleDouble::from_str("2").unwrap().sqrt();
        assert_eq!(format!("{:.5}", x), "1.4142");
        assert_eq!(format!("{:.1}", x), "1");
    }

    #[test]
    fn extreme_exponent_digits() {
        let big = DoubleDouble::from_str("9.5e307").unwrap();
        assert_eq!(big.to_scientific(2, false), "9.5e307");
        let tiny = DoubleDouble::from_str("2.5e-305").unwrap();
        assert_eq!(tiny.to_scientific(2, false), "2.5e-305");
    }
}
