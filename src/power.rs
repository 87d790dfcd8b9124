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
use pxfm::{f_exp, f_log};

impl DoubleDouble {
    /// Integer power by binary exponentiation; `0^0` is NaN, a negative
    /// exponent inverts at the end.
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return if self.is_zero() {
                DoubleDouble::NAN
            } else {
                DoubleDouble::ONE
            };
        }
        let mut base = self;
        let mut e = n.unsigned_abs();
        let mut acc = DoubleDouble::ONE;
        while e > 1 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            base = base.sqr();
            e >>= 1;
        }
        let r = acc * base;
        if n < 0 { r.recip() } else { r }
    }

    /// 2^n
    #[inline]
    pub fn pow2(n: i32) -> Self {
        DoubleDouble::from_f64(2.).powi(n)
    }

    /// 10^n
    #[inline]
    pub fn pow10(n: i32) -> Self {
        DoubleDouble::from_f64(10.).powi(n)
    }

    /// General power. Integral exponents in the `i32` range go through
    /// `powi`, everything else through `exp(y ln x)` with the usual domain
    /// coding: a negative base or `0^0` is NaN, powers of zero split on
    /// the exponent sign.
    pub fn powf(self, y: DoubleDouble) -> Self {
        if y.is_integer() && y.hi.abs() <= i32::MAX as f64 {
            return self.powi(y.to_f64() as i32);
        }
        if self.is_nan() || y.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.is_zero() {
            return if y.hi < 0. {
                DoubleDouble::INFINITY
            } else {
                DoubleDouble::ZERO
            };
        }
        if self.hi < 0. {
            return DoubleDouble::NAN;
        }
        (y * self.ln()).exp()
    }

    /// Square root by Karp's method: a binary64 reciprocal-root seed, one
    /// correction in double-double, and a final error-free sum.
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return self;
        }
        if self.is_nan() || self.hi < 0. {
            return DoubleDouble::NAN;
        }
        if self.hi.is_infinite() {
            return DoubleDouble::INFINITY;
        }
        let a = 1. / self.hi.sqrt();
        let t1 = self.hi * a;
        let t2 = (self - DoubleDouble::from_f64(t1).sqr()).hi * a * 0.5;
        DoubleDouble::from_full_exact_add(t1, t2)
    }

    /// n-th root. Even roots of negative values and non-positive `n` are
    /// NaN; odd roots keep the sign of the radicand.
    pub fn nroot(self, n: i32) -> Self {
        if n == 1 {
            return self;
        }
        if n == 2 {
            return self.sqrt();
        }
        if n <= 0 || (n & 1 == 0 && self.hi < 0.) || self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.is_zero() {
            return self;
        }
        if self.hi.is_infinite() {
            return if self.hi > 0. {
                DoubleDouble::INFINITY
            } else {
                DoubleDouble::NEG_INFINITY
            };
        }
        let r = self.abs();
        // seed a ~= |x|^(-1/n), then one Newton step on f(a) = a^-n - |x|
        let a0 = DoubleDouble::from_f64(f_exp(-f_log(r.hi) / n as f64));
        let a1 = a0 + a0 * ((DoubleDouble::ONE - r * a0.powi(n)) / DoubleDouble::from_f64(n as f64));
        let inv = a1.recip();
        if self.hi < 0. { -inv } else { inv }
    }
}
