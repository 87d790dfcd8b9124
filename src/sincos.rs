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

/// sin(i*pi/16) for i = 0..=8 as `(lo_bits, hi_bits)`; cosines come from
/// the same table through sin((8 - i)*pi/16).
static SIN_PI_OVER_16: [(u64, u64); 9] = [
    (0x0000000000000000, 0x0000000000000000),
    (0xbc626d19b9ff8d82, 0x3fc8f8b83c69a60b),
    (0xbc672cedd3d5a610, 0x3fd87de2a6aea963),
    (0x3c8b25dd267f6600, 0x3fe1c73b39ae68c8),
    (0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd),
    (0x3c39f630e8b6dac8, 0x3fea9b66290ea1a3),
    (0x3c7457e610231ac2, 0x3fed906bcf328d46),
    (0x3c7562172a361fd3, 0x3fef6297cff75cb0),
    (0x0000000000000000, 0x3ff0000000000000),
];

/// Odd Taylor coefficients of sine, -1/3! through -1/15!, alternating.
static SIN_COEFFS: [(u64, u64); 7] = [
    (0xbc65555555555555, 0xbfc5555555555555), // -1/3!
    (0x3c01111111111111, 0x3f81111111111111), // 1/5!
    (0xbb6a01a01a01a01a, 0xbf2a01a01a01a01a), // -1/7!
    (0xbb6c154f8ddc6c00, 0x3ec71de3a556c734), // 1/9!
    (0x3afc062e06d1f209, 0xbe5ae64567f544e4), // -1/11!
    (0x3a8f28e0cc748ebe, 0x3de6124613a86d09), // 1/13!
    (0xb9e1d8656b0ee8cb, 0xbd6ae7f3e733b81f), // -1/15!
];

/// Polynomial sine on the final reduced range |s| <= pi/32.
#[inline]
fn sin_poly(s: DoubleDouble) -> DoubleDouble {
    let x = s.sqr();
    let mut p = DoubleDouble::from_bit_pair(SIN_COEFFS[6]);
    let mut k = 6usize;
    while k > 0 {
        k -= 1;
        p = p * x + DoubleDouble::from_bit_pair(SIN_COEFFS[k]);
    }
    s + s * (x * p)
}

impl DoubleDouble {
    /// Sine and cosine of the same angle, sharing one argument reduction.
    ///
    /// The angle is folded modulo 2π, then into a quadrant (multiples of
    /// π/2), then onto a sixteenth (multiples of π/16), leaving |s| ≤ π/32
    /// for the polynomial. The table entries rebuild the angle by the
    /// addition formulas and the quadrant selector permutes the pair.
    pub fn sin_cos(self) -> (DoubleDouble, DoubleDouble) {
        if !self.is_finite() {
            return (DoubleDouble::NAN, DoubleDouble::NAN);
        }
        if self.hi.abs() < 1e-11 {
            // below this the tail of the series is under half an ulp
            let c = DoubleDouble::ONE - self.sqr().mul_pwr2(0.5);
            return (self, c);
        }

        let z = (self / DoubleDouble::TAU).round();
        let r = self - DoubleDouble::TAU * z;

        let qa = (r.hi / DoubleDouble::FRAC_PI_2.hi + 0.5).floor();
        let a = qa as i32;
        let t = r - DoubleDouble::FRAC_PI_2 * qa;

        let qb = (t.hi / DoubleDouble::FRAC_PI_16.hi + 0.5).floor();
        let b = qb as i32;
        let s = t - DoubleDouble::FRAC_PI_16 * qb;

        // the reduction only resolves angles the two words can still
        // separate from a multiple of 2π
        if !(-2..=2).contains(&a) || !(-4..=4).contains(&b) {
            return (DoubleDouble::NAN, DoubleDouble::NAN);
        }

        let sin_s = sin_poly(s);
        let cos_s = (DoubleDouble::ONE - sin_s.sqr()).sqrt();

        let bi = b.unsigned_abs() as usize;
        let sb = DoubleDouble::from_bit_pair(SIN_PI_OVER_16[bi]);
        let sin_b = if b < 0 { -sb } else { sb };
        let cos_b = DoubleDouble::from_bit_pair(SIN_PI_OVER_16[8 - bi]);

        // t = s + b*pi/16
        let sin_t = sin_s * cos_b + cos_s * sin_b;
        let cos_t = cos_s * cos_b - sin_s * sin_b;

        match a {
            0 => (sin_t, cos_t),
            1 => (cos_t, -sin_t),
            -1 => (-cos_t, sin_t),
            _ => (-sin_t, -cos_t),
        }
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    #[inline]
    pub fn tan(self) -> Self {
        let (s, c) = self.sin_cos();
        s / c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPS;

    #[test]
    fn sin_cos_at_pi() {
        let (s, c) = DoubleDouble::PI.sin_cos();
        assert!(s.to_f64().abs() < 1e-30, "Invalid result {}", s);
        assert!((c + DoubleDouble::ONE).to_f64().abs() < 1e-30, "Invalid result {}", c);
    }

    #[test]
    fn sin_cos_quarters() {
        let (s, c) = DoubleDouble::FRAC_PI_2.sin_cos();
        assert!((s - DoubleDouble::ONE).to_f64().abs() < 1e-31);
        assert!(c.to_f64().abs() < 1e-31);
        let (s4, c4) = DoubleDouble::FRAC_PI_4.sin_cos();
        assert!((s4 - c4).to_f64().abs() < 1e-31, "Invalid result {}", s4);
    }

    #[test]
    fn small_angle_fast_path() {
        let x = DoubleDouble::from_f64(1e-13);
        let (s, c) = x.sin_cos();
        assert_eq!(s, x);
        assert!((c - DoubleDouble::ONE).to_f64().abs() < 1e-26);
        let (sz, cz) = DoubleDouble::ZERO.sin_cos();
        assert!(sz.is_zero());
        assert_eq!(cz, DoubleDouble::ONE);
    }

    #[test]
    fn pythagorean_identity() {
        let mut th = -1000.0f64;
        while th < 1000.0 {
            let x = DoubleDouble::from_f64(th);
            let (s, c) = x.sin_cos();
            let resid = (s.sqr() + c.sqr() - DoubleDouble::ONE).to_f64().abs();
            assert!(resid <= 8. * EPS, "Invalid result {} at {}", resid, th);
            th += 37.7;
        }
    }

    #[test]
    fn tan_matches_ratio() {
        let x = DoubleDouble::from_f64(0.7);
        let t = x.tan();
        let (s, c) = x.sin_cos();
        assert_eq!(t, s / c);
        // tan(pi/4) = 1
        let q = DoubleDouble::FRAC_PI_4.tan();
        assert!((q - DoubleDouble::ONE).to_f64().abs() < 1e-30);
    }

    #[test]
    fn non_finite_angles() {
        assert!(DoubleDouble::NAN.sin().is_nan());
        assert!(DoubleDouble::INFINITY.cos().is_nan());
    }

    #[test]
    fn sin_table_symmetry() {
        // sin(i*pi/16)^2 + sin((8-i)*pi/16)^2 = 1
        for i in 0..=8usize {
            let s = DoubleDouble::from_bit_pair(SIN_PI_OVER_16[i]);
            let c = DoubleDouble::from_bit_pair(SIN_PI_OVER_16[8 - i]);
            let resid = (s.sqr() + c.sqr() - DoubleDouble::ONE).to_f64().abs();
            assert!(resid <= 4. * EPS, "Invalid result {} at {}", resid, i);
        }
    }
}
