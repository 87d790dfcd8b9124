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
use crate::consts::EPS;
use crate::double_double::DoubleDouble;

impl DoubleDouble {
    /// Hyperbolic sine. The exponential form cancels catastrophically near
    /// zero, so below |x| = 0.05 the odd Taylor series runs until its terms
    /// drop under an ulp of the argument.
    pub fn sinh(self) -> Self {
        if self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.is_zero() {
            return self;
        }
        if self.hi.abs() > 0.05 {
            let e = self.exp();
            return (e - e.recip()).mul_pwr2(0.5);
        }
        let thresh = self.hi.abs() * EPS;
        let x2 = self.sqr();
        let mut t = self;
        let mut s = self;
        let mut m = 1.0f64;
        loop {
            m += 2.;
            t = t * x2;
            t = t / DoubleDouble::from_f64((m - 1.) * m);
            s = s + t;
            if t.hi.abs() <= thresh {
                break;
            }
        }
        s
    }

    pub fn cosh(self) -> Self {
        if self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.is_zero() {
            return DoubleDouble::ONE;
        }
        if self.hi.abs() > 0.05 {
            let e = self.exp();
            (e + e.recip()).mul_pwr2(0.5)
        } else {
            (DoubleDouble::ONE + self.sinh().sqr()).sqrt()
        }
    }

    /// Hyperbolic tangent, saturating to ±1 where the exponentials would
    /// overflow into ∞/∞.
    pub fn tanh(self) -> Self {
        if self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.is_zero() {
            return self;
        }
        if self.hi.abs() > 709. {
            return DoubleDouble::ONE.copysign(self);
        }
        if self.hi.abs() > 0.05 {
            let e = self.exp();
            let ei = e.recip();
            (e - ei) / (e + ei)
        } else {
            let s = self.sinh();
            let c = (DoubleDouble::ONE + s.sqr()).sqrt();
            s / c
        }
    }

    pub fn asinh(self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return self;
        }
        if self.is_zero() {
            return self;
        }
        (self + (self.sqr() + 1.).sqrt()).ln()
    }

    /// NaN below 1.
    pub fn acosh(self) -> Self {
        if !(self >= DoubleDouble::ONE) {
            return DoubleDouble::NAN;
        }
        (self + (self.sqr() - 1.).sqrt()).ln()
    }

    /// NaN outside (-1, 1).
    pub fn atanh(self) -> Self {
        if !(self.abs() < DoubleDouble::ONE) {
            return DoubleDouble::NAN;
        }
        ((DoubleDouble::ONE + self) / (DoubleDouble::ONE - self))
            .ln()
            .mul_pwr2(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinh_small_and_large_agree() {
        // straddle the 0.05 switch point
        let lo = DoubleDouble::from_f64(0.049999);
        let hi = DoubleDouble::from_f64(0.050001);
        assert!(lo.sinh() < hi.sinh());
        let d = (hi.sinh() - lo.sinh()).to_f64();
        assert!(d > 0. && d < 3e-6, "Invalid result {}", d);
    }

    #[test]
    fn hyperbolic_identity() {
        for v in [-3.0, -0.4, -0.02, 0.01, 0.3, 5.0] {
            let x = DoubleDouble::from_f64(v);
            let resid = (x.cosh().sqr() - x.sinh().sqr() - DoubleDouble::ONE)
                .to_f64()
                .abs();
            let scale = x.cosh().to_f64().powi(2);
            assert!(resid <= 16. * EPS * scale, "Invalid result {} at {}", resid, v);
        }
    }

    #[test]
    fn tanh_range_and_saturation() {
        assert_eq!(DoubleDouble::from_f64(1000.).tanh(), DoubleDouble::ONE);
        assert_eq!(DoubleDouble::from_f64(-1000.).tanh(), -DoubleDouble::ONE);
        let t = DoubleDouble::from_f64(0.5).tanh();
        assert!(t > DoubleDouble::ZERO && t < DoubleDouble::ONE);
        assert!(DoubleDouble::ZERO.tanh().is_zero());
    }

    #[test]
    fn inverses_round_trip() {
        for v in [-2.0, -0.3, 0.04, 1.7] {
            let x = DoubleDouble::from_f64(v);
            let r = x.sinh().asinh();
            assert!((r - x).to_f64().abs() < 1e-28, "Invalid result at {}", v);
        }
        for v in [1.0, 1.5, 20.0] {
            let x = DoubleDouble::from_f64(v);
            let r = x.cosh().acosh();
            assert!((r - x).to_f64().abs() < 1e-28, "Invalid result at {}", v);
        }
        for v in [-0.8, -0.1, 0.5] {
            let x = DoubleDouble::from_f64(v);
            let r = x.tanh().atanh();
            assert!((r - x).to_f64().abs() < 1e-28, "Invalid result at {}", v);
        }
    }

    #[test]
    fn inverse_domains() {
        assert!(DoubleDouble::from_f64(0.5).acosh().is_nan());
        assert!(DoubleDouble::from_f64(1.0).atanh().is_nan());
        assert!(DoubleDouble::from_f64(-1.5).atanh().is_nan());
        assert_eq!(DoubleDouble::ONE.acosh(), DoubleDouble::ZERO);
        assert!(DoubleDouble::ZERO.asinh().is_zero());
    }
}
