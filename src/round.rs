/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
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
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use std::ops::Rem;

impl DoubleDouble {
    /// Rounds to the nearest integer, ties on the high word to even.
    ///
    /// When the high word is already integral the low word still has to be
    /// rounded and the pair renormalized; when the high word sits exactly
    /// on a half-integer, a negative low word pulls the true value below
    /// the tie and the rounded result down with it.
    pub fn round(self) -> Self {
        let r = self.hi.round_ties_even();
        if r == self.hi {
            DoubleDouble::from_exact_add(r, self.lo.round_ties_even())
        } else if (r - self.hi).abs() == 0.5 && self.lo < 0. {
            DoubleDouble::from_f64(r - 1.)
        } else {
            DoubleDouble::from_f64(r)
        }
    }

    pub fn floor(self) -> Self {
        let r = self.hi.floor();
        if r == self.hi {
            DoubleDouble::from_exact_add(r, self.lo.floor())
        } else {
            DoubleDouble::from_f64(r)
        }
    }

    pub fn ceil(self) -> Self {
        let r = self.hi.ceil();
        if r == self.hi {
            DoubleDouble::from_exact_add(r, self.lo.ceil())
        } else {
            DoubleDouble::from_f64(r)
        }
    }

    /// Rounds toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        if self.hi < 0. { self.ceil() } else { self.floor() }
    }

    /// Fractional part toward zero, `x - trunc(x)`.
    #[inline]
    pub fn fract(self) -> Self {
        self - self.trunc()
    }

    /// Floored fractional part, `x - floor(x)`; never negative for finite
    /// input.
    #[inline]
    pub fn floor_fract(self) -> Self {
        self - self.floor()
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        self.is_finite() && self == self.trunc()
    }

    /// Rounded quotient and the matching remainder `self - q * rhs`.
    pub fn div_rem(self, rhs: DoubleDouble) -> (DoubleDouble, DoubleDouble) {
        let q = (self / rhs).round();
        (q, self - q * rhs)
    }

    /// Rounds at `prec` decimal digits after the point. Non-positive
    /// precision rounds to an integer; anything beyond the digits the
    /// format holds returns the value unchanged.
    pub fn round_to_precision(self, prec: i32) -> Self {
        if !self.is_finite() {
            return self;
        }
        if prec <= 0 {
            return self.round();
        }
        if prec > DoubleDouble::MAX_PRECISION as i32 {
            return self;
        }
        // no fractional digits left at this magnitude, and scaling would
        // overflow
        if self.hi.abs() > 1.7e277 {
            return self;
        }
        let scale = DoubleDouble::pow10(prec);
        (self * scale).round() / scale
    }

    /// Nearest integer as a big integer, `None` for non-finite values.
    ///
    /// After `round` both words are integral binary64s, each exact in a
    /// `BigInt`, so the conversion loses nothing even past 2^53.
    pub fn to_bigint(self) -> Option<BigInt> {
        let r = self.round();
        if !r.is_finite() {
            return None;
        }
        let hi = BigInt::from_f64(r.hi)?;
        let lo = BigInt::from_f64(r.lo)?;
        Some(hi + lo)
    }
}

impl Rem<DoubleDouble> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn rem(self, rhs: DoubleDouble) -> Self::Output {
        self.div_rem(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_basics() {
        assert_eq!(DoubleDouble::from_f64(2.4).round().hi, 2.0);
        assert_eq!(DoubleDouble::from_f64(2.6).round().hi, 3.0);
        assert_eq!(DoubleDouble::from_f64(-2.6).round().hi, -3.0);
        // integral high word defers to the low one
        let x = DoubleDouble::new(0.75, 4.0);
        assert_eq!(x.round().hi, 5.0);
        let y = DoubleDouble::new(-0.75, 4.0);
        assert_eq!(y.round().hi, 3.0);
    }

    #[test]
    fn floor_ceil_trunc() {
        let x = DoubleDouble::from_f64(-2.5);
        assert_eq!(x.floor().hi, -3.0);
        assert_eq!(x.ceil().hi, -2.0);
        assert_eq!(x.trunc().hi, -2.0);
        // low word decides when hi is integral
        let y = DoubleDouble::new(-1e-30, 7.0);
        assert_eq!(y.floor().hi, 6.0);
        assert_eq!(y.ceil().hi, 7.0);
    }

    #[test]
    fn fract_parts() {
        let x = DoubleDouble::from_f64(-3.25);
        assert_eq!(x.fract().hi, -0.25);
        assert_eq!(x.floor_fract().hi, 0.75);
        assert!(DoubleDouble::from_f64(12.0).is_integer());
        assert!(!x.is_integer());
    }

    #[test]
    fn rem_follows_rounded_quotient() {
        let x = DoubleDouble::from_f64(7.0);
        let y = DoubleDouble::from_f64(2.0);
        let (q, r) = x.div_rem(y);
        assert_eq!(q.hi, 4.0);
        assert_eq!(r.hi, -1.0);
        assert_eq!((x % y).hi, -1.0);
    }

    #[test]
    fn round_to_precision_clamps() {
        let x = DoubleDouble::from_str("3.14159").unwrap();
        assert_eq!(x.round_to_precision(2).to_string(), "3.14");
        assert_eq!(x.round_to_precision(0).to_string(), "3");
        assert_eq!(x.round_to_precision(64), x);
    }

    #[test]
    fn to_bigint_exact_past_native_range() {
        let x = DoubleDouble::pow2(100);
        let i = x.to_bigint().unwrap();
        assert_eq!(i.to_string(), "1267650600228229401496703205376");
        assert!(DoubleDouble::NAN.to_bigint().is_none());
        assert_eq!(
            DoubleDouble::from_f64(-2.5).to_bigint().unwrap().to_string(),
            "-2"
        );
    }
}
