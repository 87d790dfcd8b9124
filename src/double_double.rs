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
use crate::common::{f_fmla, pow2i};
use crate::eft::{quick_two_sum, two_prod, two_sqr, two_sum};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A double-double number, the unevaluated sum `hi + lo` of two binary64
/// words. Normalized values satisfy `hi = fl(hi + lo)`, which leaves the
/// low word below half an ulp of the high one; every operation here returns
/// values in that form.
///
/// The high word alone decides the class of the value: an infinite or NaN
/// `hi` makes the whole value infinite or NaN (`lo` is also consulted for
/// NaN), and the sign of zero is the sign of `hi`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DoubleDouble {
    pub lo: f64,
    pub hi: f64,
}

impl DoubleDouble {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        DoubleDouble { lo, hi }
    }

    /// Materializes a constant from `(lo_bits, hi_bits)`.
    #[inline]
    pub(crate) const fn from_bit_pair(pair: (u64, u64)) -> Self {
        DoubleDouble {
            lo: f64::from_bits(pair.0),
            hi: f64::from_bits(pair.1),
        }
    }

    /// Any binary64 is exactly a double-double with a zero low word.
    #[inline]
    pub const fn from_f64(v: f64) -> Self {
        DoubleDouble { lo: 0., hi: v }
    }

    /// Renormalizes `a + b` assuming `|a| >= |b|`. A non-finite sum
    /// collapses to `(s, 0)` so the special value stays canonical.
    #[inline]
    pub fn from_exact_add(a: f64, b: f64) -> Self {
        if !a.is_finite() {
            return DoubleDouble::new(0., a);
        }
        let (s, e) = quick_two_sum(a, b);
        if !s.is_finite() {
            return DoubleDouble::new(0., s);
        }
        DoubleDouble::new(e, s)
    }

    /// Renormalizes `a + b` without a magnitude precondition.
    #[inline]
    pub fn from_full_exact_add(a: f64, b: f64) -> Self {
        let (s, e) = two_sum(a, b);
        if !s.is_finite() {
            return DoubleDouble::new(0., s);
        }
        DoubleDouble::new(e, s)
    }

    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.lo + self.hi
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan() || self.lo.is_nan()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.hi == 0.
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    #[inline]
    pub fn is_sign_positive(self) -> bool {
        self.hi.is_sign_positive()
    }

    /// -1, 0 or 1 by the sign of the value; NaN propagates.
    #[inline]
    pub fn signum(self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else if self.hi > 0. {
            1.
        } else if self.hi < 0. {
            -1.
        } else {
            0.
        }
    }

    /// Returns the magnitude of `self` with the sign of `sign`.
    #[inline]
    pub fn copysign(self, sign: DoubleDouble) -> Self {
        if self.hi.is_sign_negative() == sign.hi.is_sign_negative() {
            self
        } else {
            -self
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.hi.is_sign_negative() {
            -self
        } else {
            self
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.is_nan() {
            other
        } else if other.is_nan() || self <= other {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.is_nan() {
            other
        } else if other.is_nan() || self >= other {
            self
        } else {
            other
        }
    }

    /// Squares the value, one `two_sqr` cheaper than `self * self`.
    #[inline]
    pub fn sqr(self) -> Self {
        let (p, e) = two_sqr(self.hi);
        let t = f_fmla(self.lo, self.lo, f_fmla(self.hi + self.hi, self.lo, e));
        DoubleDouble::from_exact_add(p, t)
    }

    #[inline]
    pub fn recip(self) -> Self {
        DoubleDouble::from_f64(1.) / self
    }

    /// Multiplies both words by an exact power of two without renormalizing.
    #[inline]
    pub fn mul_pwr2(self, p: f64) -> Self {
        DoubleDouble::new(self.lo * p, self.hi * p)
    }

    /// Scales by 2^n. Splitting the scale keeps intermediate steps inside
    /// the binary64 exponent range, so extreme `n` over- or underflows the
    /// same way a single exact scaling would.
    #[inline]
    pub fn ldexp(self, n: i32) -> Self {
        let mut r = self;
        let mut k = n;
        while k != 0 {
            let s = k.clamp(-1022, 1023);
            r = DoubleDouble::new(r.lo * pow2i(s), r.hi * pow2i(s));
            k -= s;
        }
        r
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(v: f64) -> Self {
        DoubleDouble::from_f64(v)
    }
}

impl From<i32> for DoubleDouble {
    #[inline]
    fn from(v: i32) -> Self {
        DoubleDouble::from_f64(v as f64)
    }
}

impl From<i64> for DoubleDouble {
    #[inline]
    fn from(v: i64) -> Self {
        let hi = v as f64;
        // the rounded high word is integral and within i128, so the defect
        // is an exact small integer
        let e = (v as i128 - hi as i128) as f64;
        DoubleDouble::from_exact_add(hi, e)
    }
}

impl From<u64> for DoubleDouble {
    #[inline]
    fn from(v: u64) -> Self {
        let hi = v as f64;
        let e = (v as i128 - hi as i128) as f64;
        DoubleDouble::from_exact_add(hi, e)
    }
}

impl From<DoubleDouble> for f64 {
    #[inline]
    fn from(v: DoubleDouble) -> Self {
        v.to_f64()
    }
}

impl PartialEq for DoubleDouble {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }
}

impl PartialOrd for DoubleDouble {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi) {
            Some(Ordering::Equal) => self.lo.partial_cmp(&other.lo),
            ord => ord,
        }
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn neg(self) -> Self::Output {
        DoubleDouble::new(-self.lo, -self.hi)
    }
}

impl Add<DoubleDouble> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: DoubleDouble) -> Self::Output {
        let (s1, e1) = two_sum(self.hi, rhs.hi);
        let (s2, e2) = two_sum(self.lo, rhs.lo);
        let (s1, e1) = quick_two_sum(s1, e1 + s2);
        DoubleDouble::from_exact_add(s1, e1 + e2)
    }
}

impl Add<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        let (s, e) = two_sum(self.hi, rhs);
        DoubleDouble::from_exact_add(s, e + self.lo)
    }
}

impl Add<DoubleDouble> for f64 {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: DoubleDouble) -> Self::Output {
        rhs + self
    }
}

impl Sub<DoubleDouble> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: DoubleDouble) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub<DoubleDouble> for f64 {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: DoubleDouble) -> Self::Output {
        -rhs + self
    }
}

impl Mul<DoubleDouble> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: DoubleDouble) -> Self::Output {
        let (p, e) = two_prod(self.hi, rhs.hi);
        let t1 = f_fmla(self.hi, rhs.lo, e);
        let t2 = f_fmla(self.lo, rhs.hi, t1);
        DoubleDouble::from_exact_add(p, t2)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let (p, e) = two_prod(self.hi, rhs);
        let t = f_fmla(self.lo, rhs, e);
        DoubleDouble::from_exact_add(p, t)
    }
}

impl Mul<DoubleDouble> for f64 {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: DoubleDouble) -> Self::Output {
        rhs * self
    }
}

impl Div<DoubleDouble> for DoubleDouble {
    type Output = DoubleDouble;

    /// Three-step long division: a quotient word per step, each taken
    /// against the exact remainder so far.
    #[inline]
    fn div(self, rhs: DoubleDouble) -> Self::Output {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() {
            return DoubleDouble::new(0., q1);
        }
        let mut r = self - rhs * q1;
        let q2 = r.hi / rhs.hi;
        r = r - rhs * q2;
        let q3 = r.hi / rhs.hi;
        DoubleDouble::from_exact_add(q1, q2) + DoubleDouble::from_f64(q3)
    }
}

impl Div<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self / DoubleDouble::from_f64(rhs)
    }
}

impl Div<DoubleDouble> for f64 {
    type Output = DoubleDouble;

    #[inline]
    fn div(self, rhs: DoubleDouble) -> Self::Output {
        DoubleDouble::from_f64(self) / rhs
    }
}

impl Sum<DoubleDouble> for DoubleDouble {
    fn sum<I: Iterator<Item = DoubleDouble>>(iter: I) -> Self {
        iter.fold(DoubleDouble::from_f64(0.), Add::add)
    }
}

impl<'a> Sum<&'a DoubleDouble> for DoubleDouble {
    fn sum<I: Iterator<Item = &'a DoubleDouble>>(iter: I) -> Self {
        iter.fold(DoubleDouble::from_f64(0.), |acc, x| acc + *x)
    }
}
