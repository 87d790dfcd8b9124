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
use pxfm::f_atan2;

impl DoubleDouble {
    /// Four-quadrant arc tangent of `self / x`.
    ///
    /// Axis and diagonal arguments resolve to the exact constants; the
    /// generic case normalizes onto the unit circle and applies one Newton
    /// correction to a binary64 seed, picked against whichever of sin or
    /// cos is better conditioned there.
    pub fn atan2(self, x: DoubleDouble) -> Self {
        let y = self;
        if y.is_nan() || x.is_nan() {
            return DoubleDouble::NAN;
        }
        if y.is_zero() {
            return if x.hi < 0. {
                DoubleDouble::PI
            } else {
                DoubleDouble::ZERO
            };
        }
        if x.is_zero() {
            return if y.hi > 0. {
                DoubleDouble::FRAC_PI_2
            } else {
                -DoubleDouble::FRAC_PI_2
            };
        }
        if x.is_infinite() || y.is_infinite() {
            return match (x.hi.is_infinite(), y.hi.is_infinite()) {
                (true, true) => {
                    let q = if x.hi > 0. {
                        DoubleDouble::FRAC_PI_4
                    } else {
                        DoubleDouble::FRAC_3PI_4
                    };
                    if y.hi > 0. { q } else { -q }
                }
                (false, true) => {
                    if y.hi > 0. {
                        DoubleDouble::FRAC_PI_2
                    } else {
                        -DoubleDouble::FRAC_PI_2
                    }
                }
                _ => {
                    if x.hi > 0. {
                        DoubleDouble::ZERO
                    } else if y.hi > 0. {
                        DoubleDouble::PI
                    } else {
                        -DoubleDouble::PI
                    }
                }
            };
        }
        if y == x {
            return if y.hi > 0. {
                DoubleDouble::FRAC_PI_4
            } else {
                -DoubleDouble::FRAC_3PI_4
            };
        }
        if y == -x {
            return if y.hi > 0. {
                DoubleDouble::FRAC_3PI_4
            } else {
                -DoubleDouble::FRAC_PI_4
            };
        }

        let r = (x.sqr() + y.sqr()).sqrt();
        let xr = x / r;
        let yr = y / r;

        let mut z = DoubleDouble::from_f64(f_atan2(y.hi, x.hi));
        let (sin_z, cos_z) = z.sin_cos();
        if xr.hi.abs() > yr.hi.abs() {
            z = z + (yr - sin_z) / cos_z;
        } else {
            z = z - (xr - cos_z) / sin_z;
        }
        z
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.atan2(DoubleDouble::ONE)
    }

    /// Arc sine; NaN outside [-1, 1], exact ±π/2 at the endpoints.
    pub fn asin(self) -> Self {
        let a = self.abs();
        if a > DoubleDouble::ONE || self.is_nan() {
            return DoubleDouble::NAN;
        }
        if a == DoubleDouble::ONE {
            return if self.hi > 0. {
                DoubleDouble::FRAC_PI_2
            } else {
                -DoubleDouble::FRAC_PI_2
            };
        }
        self.atan2((DoubleDouble::ONE - self.sqr()).sqrt())
    }

    /// Arc cosine; NaN outside [-1, 1], exact 0 and π at the endpoints.
    pub fn acos(self) -> Self {
        let a = self.abs();
        if a > DoubleDouble::ONE || self.is_nan() {
            return DoubleDouble::NAN;
        }
        if self == DoubleDouble::ONE {
            return DoubleDouble::ZERO;
        }
        if self == -DoubleDouble::ONE {
            return DoubleDouble::PI;
        }
        (DoubleDouble::ONE - self.sqr()).sqrt().atan2(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPS;

    #[test]
    fn atan2_axis_cases() {
        let zero = DoubleDouble::ZERO;
        let one = DoubleDouble::ONE;
        assert_eq!(zero.atan2(-one), DoubleDouble::PI);
        assert_eq!(zero.atan2(one), DoubleDouble::ZERO);
        assert_eq!(zero.atan2(zero), DoubleDouble::ZERO);
        assert_eq!(one.atan2(zero), DoubleDouble::FRAC_PI_2);
        assert_eq!((-one).atan2(zero), -DoubleDouble::FRAC_PI_2);
    }

    #[test]
    fn atan2_diagonal_cases() {
        let one = DoubleDouble::ONE;
        assert_eq!(one.atan2(one), DoubleDouble::FRAC_PI_4);
        assert_eq!((-one).atan2(-one), -DoubleDouble::FRAC_3PI_4);
        assert_eq!(one.atan2(-one), DoubleDouble::FRAC_3PI_4);
        assert_eq!((-one).atan2(one), -DoubleDouble::FRAC_PI_4);
    }

    #[test]
    fn atan2_infinite_arguments() {
        let inf = DoubleDouble::INFINITY;
        let one = DoubleDouble::ONE;
        assert_eq!(one.atan2(inf), DoubleDouble::ZERO);
        assert_eq!(one.atan2(-inf), DoubleDouble::PI);
        assert_eq!(inf.atan2(one), DoubleDouble::FRAC_PI_2);
        assert_eq!(inf.atan2(inf), DoubleDouble::FRAC_PI_4);
        assert_eq!((-inf).atan2(-inf), -DoubleDouble::FRAC_3PI_4);
    }

    #[test]
    fn atan_round_trips_tan() {
        for v in [-5.0, -1.5, -0.3, 0.2, 0.9, 4.0, 100.0] {
            let x = DoubleDouble::from_f64(v);
            let r = x.atan().tan();
            // the angle error is magnified back by 1 + x^2
            assert!(
                (r - x).to_f64().abs() <= 8. * EPS * (1. + v * v),
                "Invalid result {} at {}",
                r,
                v
            );
        }
    }

    #[test]
    fn asin_acos_identities() {
        let h = DoubleDouble::from_f64(0.5);
        let s = h.asin();
        // asin(1/2) = pi/6
        let pi6 = DoubleDouble::PI / DoubleDouble::from_f64(6.);
        assert!((s - pi6).to_f64().abs() < 1e-30, "Invalid result {}", s);
        // asin(x) + acos(x) = pi/2
        for v in [-0.9, -0.5, -0.1, 0.3, 0.7] {
            let x = DoubleDouble::from_f64(v);
            let sum = x.asin() + x.acos();
            assert!(
                (sum - DoubleDouble::FRAC_PI_2).to_f64().abs() <= 8. * EPS,
                "Invalid result at {}",
                v
            );
        }
    }

    #[test]
    fn asin_acos_domain() {
        assert!(DoubleDouble::from_f64(1.5).asin().is_nan());
        assert!(DoubleDouble::from_f64(-1.5).acos().is_nan());
        assert_eq!(DoubleDouble::ONE.asin(), DoubleDouble::FRAC_PI_2);
        assert_eq!((-DoubleDouble::ONE).asin(), -DoubleDouble::FRAC_PI_2);
        assert_eq!(DoubleDouble::ONE.acos(), DoubleDouble::ZERO);
        assert_eq!((-DoubleDouble::ONE).acos(), DoubleDouble::PI);
    }
}
