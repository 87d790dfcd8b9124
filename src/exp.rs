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
use crate::consts::INV_FACT;
use crate::double_double::DoubleDouble;
use pxfm::f_log;

/// eps / 512 = 2^-113, where the scaled exponential series may stop.
const EXP_TERM_THRESHOLD: f64 = f64::from_bits(0x38e0000000000000);

impl DoubleDouble {
    /// Exponential function.
    ///
    /// The argument is reduced twice: `m = round(x / ln 2)` takes out the
    /// binary exponent, division by 512 squeezes the remainder into a range
    /// where the Taylor series converges in a handful of terms. Nine
    /// squarings of `e^r - 1` (as `2a + a^2`, which never loses the leading
    /// digits) undo the 512, `ldexp` undoes `m`.
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self.hi <= -709. {
            return DoubleDouble::ZERO;
        }
        if self.hi >= 709. {
            return DoubleDouble::INFINITY;
        }
        if self.is_zero() {
            return DoubleDouble::ONE;
        }
        if self == DoubleDouble::ONE {
            return DoubleDouble::E;
        }

        let m = (self.hi / DoubleDouble::LN_2.hi + 0.5).floor();
        let r = (self - DoubleDouble::LN_2 * m).mul_pwr2(1. / 512.);

        let mut p = r.sqr();
        let mut s = r + p.mul_pwr2(0.5);
        p = p * r;
        let mut t = p * DoubleDouble::from_bit_pair(INV_FACT[0]);
        let mut i = 0usize;
        loop {
            s = s + t;
            p = p * r;
            i += 1;
            t = p * DoubleDouble::from_bit_pair(INV_FACT[i]);
            if i >= 5 || t.hi.abs() <= EXP_TERM_THRESHOLD {
                break;
            }
        }
        s = s + t;

        for _ in 0..9 {
            s = s.mul_pwr2(2.) + s.sqr();
        }
        s = s + 1.;
        s.ldexp(m as i32)
    }

    /// Natural logarithm by a single Newton step on `exp(y) = x`: the
    /// binary64 seed already carries 16 digits and the step doubles them.
    pub fn ln(self) -> Self {
        if self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self == DoubleDouble::ONE {
            return DoubleDouble::ZERO;
        }
        if self.hi <= 0. {
            return DoubleDouble::NAN;
        }
        if self.hi.is_infinite() {
            return DoubleDouble::INFINITY;
        }
        if self == DoubleDouble::E {
            return DoubleDouble::ONE;
        }
        let y = DoubleDouble::from_f64(f_log(self.hi));
        y + self * (-y).exp() - 1.
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.ln() / DoubleDouble::LN_2
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.ln() / DoubleDouble::LN_10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPS;

    #[test]
    fn exp_special_points() {
        assert_eq!(DoubleDouble::ZERO.exp(), DoubleDouble::ONE);
        assert_eq!(DoubleDouble::ONE.exp(), DoubleDouble::E);
        assert_eq!(DoubleDouble::from_f64(-1000.).exp(), DoubleDouble::ZERO);
        assert!(DoubleDouble::from_f64(1000.).exp().is_infinite());
        assert!(DoubleDouble::NAN.exp().is_nan());
    }

    #[test]
    fn exp_matches_reference() {
        // e^5 = 148.41315910257660342111558004055227962348...
        let r = DoubleDouble::from_f64(5.).exp();
        let reference: DoubleDouble = "148.41315910257660342111558004055".parse().unwrap();
        assert!(
            (r - reference).to_f64().abs() <= 8. * EPS * 148.,
            "Invalid result {}",
            r
        );
        // e^-3 = 0.04978706836786394297934241565006177663169...
        let n = DoubleDouble::from_f64(-3.).exp();
        assert_eq!(n.to_precision(20), "0.049787068367863942979");
    }

    #[test]
    fn ln_special_points() {
        assert_eq!(DoubleDouble::ONE.ln(), DoubleDouble::ZERO);
        assert_eq!(DoubleDouble::E.ln(), DoubleDouble::ONE);
        assert!(DoubleDouble::ZERO.ln().is_nan());
        assert!(DoubleDouble::from_f64(-2.).ln().is_nan());
        assert!(DoubleDouble::INFINITY.ln().is_infinite());
    }

    #[test]
    fn ln_matches_reference() {
        // ln 2 to full precision is the embedded constant
        let r = DoubleDouble::from_f64(2.).ln();
        assert!(
            (r - DoubleDouble::LN_2).to_f64().abs() <= 4. * EPS,
            "Invalid result {}",
            r
        );
        let t = DoubleDouble::from_f64(10.).ln();
        assert!((t - DoubleDouble::LN_10).to_f64().abs() <= 16. * EPS);
    }

    #[test]
    fn log_exp_inverse() {
        for v in [-500., -37.5, -2., -0.125, 0.5, 3., 250., 500.] {
            let x = DoubleDouble::from_f64(v);
            let r = x.exp().ln();
            assert!(
                (r - x).to_f64().abs() <= 4. * EPS * v.abs().max(1.),
                "Invalid result {} at {}",
                r,
                v
            );
        }
    }

    #[test]
    fn exp_is_monotone_on_samples() {
        let mut prev = DoubleDouble::from_f64(-20.).exp();
        let mut v = -20.;
        while v < 20. {
            v += 0.37;
            let cur = DoubleDouble::from_f64(v).exp();
            assert!(cur > prev, "Invalid result at {}", v);
            prev = cur;
        }
    }

    #[test]
    fn log_bases() {
        let x = DoubleDouble::from_f64(1024.);
        assert!((x.log2() - DoubleDouble::from_f64(10.)).to_f64().abs() < 1e-29);
        let y = DoubleDouble::from_f64(1000.);
        assert!((y.log10() - DoubleDouble::from_f64(3.)).to_f64().abs() < 1e-29);
    }
}
