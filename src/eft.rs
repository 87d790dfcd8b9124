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

//! Error-free transformations: each primitive returns `(s, e)` where `s` is
//! the rounded binary64 result and `e` the exact roundoff. When `s` leaves
//! the finite range the error word is set to `s` so that renormalization
//! collapses to the non-finite special value.

/// 2^27 + 1, Dekker's split constant.
#[allow(dead_code)]
const SPLIT_FACTOR: f64 = 134217729.0;

/// Magnitudes above 2^996 are pre-scaled before splitting so the
/// `SPLIT_FACTOR` product cannot overflow.
#[allow(dead_code)]
const SPLIT_THRESHOLD: f64 = 6.69692879491417e+299;

/// 2^-28
#[allow(dead_code)]
const SPLIT_SHIFT_DOWN: f64 = 3.7252902984619140625e-9;

/// 2^28
#[allow(dead_code)]
const SPLIT_SHIFT_UP: f64 = 268435456.0;

#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    if !s.is_finite() {
        return (s, s);
    }
    let v = s - a;
    let e = (a - (s - v)) + (b - v);
    (s, e)
}

/// Valid only when `|a| >= |b|` or either operand is zero.
#[inline]
pub(crate) fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    if !s.is_finite() {
        return (s, s);
    }
    let e = b - (s - a);
    (s, e)
}

/// Splits `a` into high and low halves of at most 27 significand bits each.
#[allow(dead_code)]
#[inline]
fn split(a: f64) -> (f64, f64) {
    if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
        let s = a * SPLIT_SHIFT_DOWN;
        let t = SPLIT_FACTOR * s;
        let hi = t - (t - s);
        let lo = s - hi;
        (hi * SPLIT_SHIFT_UP, lo * SPLIT_SHIFT_UP)
    } else {
        let t = SPLIT_FACTOR * a;
        let hi = t - (t - a);
        let lo = a - hi;
        (hi, lo)
    }
}

#[inline]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    if !p.is_finite() {
        return (p, p);
    }
    #[cfg(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    ))]
    {
        (p, f64::mul_add(a, b, -p))
    }
    #[cfg(not(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    {
        let (ah, al) = split(a);
        let (bh, bl) = split(b);
        let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
        (p, e)
    }
}

#[inline]
pub(crate) fn two_sqr(a: f64) -> (f64, f64) {
    let p = a * a;
    if !p.is_finite() {
        return (p, p);
    }
    #[cfg(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    ))]
    {
        (p, f64::mul_add(a, a, -p))
    }
    #[cfg(not(any(
        all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "fma"
        ),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    {
        let (ah, al) = split(a);
        let e = ((ah * ah - p) + 2.0 * ah * al) + al * al;
        (p, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_recovers_roundoff() {
        let (s, e) = two_sum(1e16, 1.0);
        assert_eq!(s, 1e16);
        assert_eq!(e, 1.0);
        let (s, e) = two_sum(0.1, 0.2);
        assert_eq!(s, 0.30000000000000004);
        assert!(e != 0.0, "Invalid result {}", e);
    }

    #[test]
    fn quick_two_sum_exact_cases() {
        let (s, e) = quick_two_sum(1.5, 0.25);
        assert_eq!(s, 1.75);
        assert_eq!(e, 0.0);
        let (s, e) = quick_two_sum(f64::INFINITY, 1.0);
        assert!(s.is_infinite());
        assert!(e.is_infinite());
    }

    #[test]
    fn two_prod_exact_cases() {
        let (p, e) = two_prod(1.5, 1.25);
        assert_eq!(p, 1.875);
        assert_eq!(e, 0.0);
        // 10 * 0.1 rounds to 1, the error word keeps the defect
        let (p, e) = two_prod(10.0, 0.1);
        assert_eq!(p, 1.0);
        assert!(e > 0.0, "Invalid result {}", e);
    }

    #[test]
    fn two_sqr_matches_two_prod() {
        for v in [0.1, 1.0 / 3.0, 12345.6789, 1e200] {
            let (p0, e0) = two_prod(v, v);
            let (p1, e1) = two_sqr(v);
            assert_eq!(p0, p1);
            assert_eq!(e0, e1);
        }
    }

    #[test]
    fn split_is_exact() {
        for v in [1.0, 0.1, 1e300, -3.5e299, 6.5e-300] {
            let (hi, lo) = split(v);
            assert_eq!(hi + lo, v, "Invalid split of {}", v);
        }
    }
}
