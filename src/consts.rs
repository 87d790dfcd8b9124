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

/// Unit roundoff of the format, 2^-104.
pub(crate) const EPS: f64 = f64::from_bits(0x3970000000000000);

impl DoubleDouble {
    pub const ZERO: DoubleDouble = DoubleDouble::new(0., 0.);
    pub const ONE: DoubleDouble = DoubleDouble::new(0., 1.);
    pub const NAN: DoubleDouble = DoubleDouble::new(0., f64::NAN);
    pub const INFINITY: DoubleDouble = DoubleDouble::new(0., f64::INFINITY);
    pub const NEG_INFINITY: DoubleDouble = DoubleDouble::new(0., f64::NEG_INFINITY);

    pub const PI: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3ca1a62633145c07, 0x400921fb54442d18));
    /// 2π
    pub const TAU: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3cb1a62633145c07, 0x401921fb54442d18));
    /// π/2
    pub const FRAC_PI_2: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3c91a62633145c07, 0x3ff921fb54442d18));
    /// π/4
    pub const FRAC_PI_4: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3c81a62633145c07, 0x3fe921fb54442d18));
    /// 3π/4
    pub const FRAC_3PI_4: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3c9a79394c9e8a0a, 0x4002d97c7f3321d2));
    /// π/16
    pub const FRAC_PI_16: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3c61a62633145c07, 0x3fc921fb54442d18));
    /// Euler's number
    pub const E: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3ca4d57ee2b1013a, 0x4005bf0a8b145769));
    /// ln 2
    pub const LN_2: DoubleDouble =
        DoubleDouble::from_bit_pair((0x3c7abc9e3b39803f, 0x3fe62e42fefa39ef));
    /// ln 10
    pub const LN_10: DoubleDouble =
        DoubleDouble::from_bit_pair((0xbcaf48ad494ea3e9, 0x40026bb1bbb55516));

    /// Distance from 1 to the next representable double-double, 2^-104.
    pub const EPSILON: DoubleDouble = DoubleDouble::new(0., EPS);
    /// Largest finite double-double.
    pub const MAX: DoubleDouble =
        DoubleDouble::from_bit_pair((0x7c8fffffffffffff, 0x7fefffffffffffff));
    /// Smallest positive value whose low word keeps full precision, 2^-969.
    pub const MIN_POSITIVE: DoubleDouble =
        DoubleDouble::new(0., f64::from_bits(0x0360000000000000));

    /// Significant decimal digits the format can hold.
    pub const MAX_PRECISION: usize = 31;
}

/// 1/k! for k = 3..=17 as `(lo_bits, hi_bits)`. The exponential series
/// consumes the head of the table, the sine polynomial the odd entries.
pub(crate) static INV_FACT: [(u64, u64); 15] = [
    (0x3c65555555555555, 0x3fc5555555555555), // 1/3!
    (0x3c45555555555555, 0x3fa5555555555555), // 1/4!
    (0x3c01111111111111, 0x3f81111111111111), // 1/5!
    (0xbbef49f49f49f49f, 0x3f56c16c16c16c17), // 1/6!
    (0x3b6a01a01a01a01a, 0x3f2a01a01a01a01a), // 1/7!
    (0x3b3a01a01a01a01a, 0x3efa01a01a01a01a), // 1/8!
    (0xbb6c154f8ddc6c00, 0x3ec71de3a556c734), // 1/9!
    (0x3b3cbbc05b4fa99a, 0x3e927e4fb7789f5c), // 1/10!
    (0xbafc062e06d1f209, 0x3e5ae64567f544e4), // 1/11!
    (0xbac2aec959e14c06, 0x3e21eed8eff8d898), // 1/12!
    (0x3a8f28e0cc748ebe, 0x3de6124613a86d09), // 1/13!
    (0x3a305d6f8a2efd1f, 0x3da93974a8c07c9d), // 1/14!
    (0x39e1d8656b0ee8cb, 0x3d6ae7f3e733b81f), // 1/15!
    (0x39a1d8656b0ee8cb, 0x3d2ae7f3e733b81f), // 1/16!
    (0x398ac981465ddc6c, 0x3ce952c77030ad4a), // 1/17!
];
