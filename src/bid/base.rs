macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = ::core::assert!($($tt)*);
    }
}
pub(crate) use const_assert;

macro_rules! impl_dec {
    (
        name = $name:ident,
        ucoeff = $ucoeff:ty,
        icoeff = $icoeff:ty,
        unbiased_exp = $unbiased:ty,
        arith = $arith:ident,
        default_precision = $defprec:literal $(,)?
    ) => {
        $crate::bid::base::impl_dec_internal!($name, $ucoeff, $icoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_consts!($name, $ucoeff, $icoeff, $unbiased, $arith, $defprec);
        $crate::bid::base::impl_dec_codec!($name, $ucoeff, $icoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_round!($name, $ucoeff, $icoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_cmp!($name, $ucoeff, $icoeff, $unbiased, $arith);
        $crate::bid::base::impl_dec_ctx!($name, $ucoeff, $icoeff, $unbiased, $arith);
        $crate::bid::dtoa::impl_dtoa!($name, $arith);
    };
}
pub(crate) use impl_dec;

macro_rules! impl_dec_internal {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        // Internal layout.
        impl $name {
            /// The storage width in bits.
            pub(crate) const K: u32 = (size_of::<$name>() * 8) as u32;
            /// The size of the sign bit in bits.
            const S: u32 = 1;
            /// The width parameter of the exponent.
            pub(crate) const W: u32 = Self::K / 16 + 4;
            /// The width of the trailing significand in bits.
            const T: u32 = 15 * (Self::K / 16) - 10;
            /// The number of digits of precision.
            const P: u32 = 9 * (Self::K / 32) - 2;

            /// The bias added to the unbiased exponent to form
            /// the encoded exponent.
            pub(crate) const BIAS: i32 = Self::EMAX + (Self::P as i32) - 2;

            /// The maximum value of the biased encoded exponent.
            ///
            /// Larger encoded exponents would set the top two
            /// bits of the exponent field and collide with the
            /// large-coefficient form marker.
            pub(crate) const EXP_LIMIT: i32 = (3 << Self::W) - 1;

            /// The maximum allowed adjusted exponent.
            pub(crate) const EMAX: i32 = 3 << (Self::W - 1);

            /// The minimum allowed exponent.
            pub(crate) const EMIN: i32 = 1 - Self::EMAX;

            /// The shift needed to set the sign bit.
            pub(crate) const SIGN_SHIFT: u32 = Self::K - Self::S;
            /// Masks just the sign bit.
            const SIGN_MASK: $ucoeff = 1 << Self::SIGN_SHIFT;

            // Top N bits of the combination field.
            //
            // - Top 2 set (but not top 4): large form
            // - Top 4 set: inf or NaN
            // - Top 5 set: NaN
            // - Top 6 set: sNaN
            pub(crate) const COMB_TOP2: $ucoeff = 0x3 << (Self::SIGN_SHIFT - 2);
            pub(crate) const COMB_TOP4: $ucoeff = 0xf << (Self::SIGN_SHIFT - 4);
            pub(crate) const COMB_TOP5: $ucoeff = 0x1f << (Self::SIGN_SHIFT - 5);
            pub(crate) const COMB_TOP6: $ucoeff = 0x3f << (Self::SIGN_SHIFT - 6);

            /// The number of bits in the encoded exponent.
            pub(crate) const EXP_BITS: u32 = Self::W + 2;

            /// The shift to the small-form exponent.
            const FORM1_EXP_SHIFT: u32 = Self::SIGN_SHIFT - Self::EXP_BITS;
            /// Masks the small-form exponent.
            const FORM1_EXP_MASK: $ucoeff =
                (((1 << Self::EXP_BITS) - 1) as $ucoeff) << Self::FORM1_EXP_SHIFT;

            /// The shift to the large-form exponent, which sits
            /// two bits lower to make room for the form marker.
            const FORM2_EXP_SHIFT: u32 = Self::FORM1_EXP_SHIFT - 2;
            /// Masks the large-form exponent.
            const FORM2_EXP_MASK: $ucoeff = Self::FORM1_EXP_MASK >> 2;

            /// The number of bits in the small-form coefficient.
            const FORM1_COEFF_BITS: u32 = 3 + Self::T;
            /// Gathers the bits in the small-form coefficient.
            const FORM1_COEFF_MASK: $ucoeff = (1 << Self::FORM1_COEFF_BITS) - 1;

            /// The number of bits in the large-form coefficient.
            const FORM2_COEFF_BITS: u32 = 1 + Self::T;
            /// Gathers the bits in the large-form coefficient.
            const FORM2_COEFF_MASK: $ucoeff = (1 << Self::FORM2_COEFF_BITS) - 1;
            /// The implicit `100` prefix of the large-form
            /// coefficient.
            const FORM2_IMPLICIT_COEFF_BITS: $ucoeff = 0x8 << Self::T;

            /// The number of bits required to represent
            /// [`MAX_COEFF`][Self::MAX_COEFF].
            const MAX_COEFF_BITS: u32 = $arith::bitlen(Self::MAX_COEFF);

            /// Masks a NaN's payload.
            pub(crate) const PAYLOAD_MASK: $ucoeff = (1 << Self::T) - 1;

            const fn signbit(self) -> bool {
                (self.0 & Self::SIGN_MASK) != 0
            }

            /// Returns the sign encoded in the sign bit.
            pub(crate) const fn sign(self) -> $crate::Sign {
                $crate::Sign::from_bit(self.signbit())
            }

            /// Is this the small-coefficient form?
            const fn is_form1(self) -> bool {
                self.0 & Self::COMB_TOP2 != Self::COMB_TOP2
            }

            /// Reports whether the number is infinite or NaN.
            const fn is_special(self) -> bool {
                // When the first (top) four bits of the
                // combination field are set, the number is
                // either an infinity or a NaN.
                self.0 & Self::COMB_TOP4 == Self::COMB_TOP4
            }

            /// Returns the biased exponent.
            const fn biased_exp(self) -> u16 {
                // The exponent only has meaning for finite
                // numbers.
                debug_assert!(self.is_finite());

                let exp = if self.is_form1() {
                    (self.0 & Self::FORM1_EXP_MASK) >> Self::FORM1_EXP_SHIFT
                } else {
                    (self.0 & Self::FORM2_EXP_MASK) >> Self::FORM2_EXP_SHIFT
                };
                debug_assert!(exp <= Self::EXP_LIMIT as $ucoeff);

                exp as u16
            }

            /// Returns the unbiased exponent.
            const fn unbiased_exp(self) -> $unbiased {
                // The exponent only has meaning for finite
                // numbers.
                debug_assert!(self.is_finite());

                (self.biased_exp() as i32 - Self::BIAS) as $unbiased
            }

            /// Returns the full coefficient without adjusting
            /// for values > [`MAX_COEFF`][Self::MAX_COEFF].
            const fn raw_coeff(self) -> $ucoeff {
                // The coefficient only has meaning for finite
                // numbers.
                debug_assert!(self.is_finite());

                if self.is_form1() {
                    self.0 & Self::FORM1_COEFF_MASK
                } else {
                    Self::FORM2_IMPLICIT_COEFF_BITS | (self.0 & Self::FORM2_COEFF_MASK)
                }
            }

            /// Returns the full coefficient.
            ///
            /// A non-canonical coefficient past
            /// [`MAX_COEFF`][Self::MAX_COEFF] reads as zero.
            pub(crate) const fn coeff(self) -> $ucoeff {
                let coeff = self.raw_coeff();
                if coeff > Self::MAX_COEFF {
                    0
                } else {
                    coeff
                }
            }

            /// Returns a NaN's diagnostic payload.
            pub(crate) const fn payload(self) -> $ucoeff {
                // The payload only has meaning for NaNs.
                debug_assert!(self.is_nan());

                self.0 & Self::PAYLOAD_MASK
            }

            /// Returns the number of significant digits in the
            /// coefficient, with zero counting as one digit.
            ///
            /// The result only has meaning for finite numbers.
            pub const fn digits(self) -> u32 {
                $arith::digits(self.coeff())
            }

            /// Creates a finite number from its sign, unbiased
            /// exponent, and coefficient.
            ///
            /// The components must be in range.
            pub(crate) const fn from_parts(
                sign: $crate::Sign,
                exp: $unbiased,
                coeff: $ucoeff,
            ) -> Self {
                debug_assert!(coeff <= Self::MAX_COEFF);
                debug_assert!(exp as i32 >= Self::EMIN);
                debug_assert!(exp as i32 + Self::BIAS <= Self::EXP_LIMIT);

                let biased = (exp as i32 + Self::BIAS) as $ucoeff;

                // Form one is 3+T bits with an implicit leading 0b0.
                // Form two is 1+T bits with an implicit leading 0b100.
                let need_form2 = if Self::MAX_COEFF_BITS <= Self::FORM1_COEFF_BITS {
                    // The max coefficient fits in 3+T bits, so
                    // we never need form two.
                    false
                } else {
                    (coeff >> (Self::MAX_COEFF_BITS - 1)) & 0x1 != 0
                };

                let mut bits = (sign.is_negative() as $ucoeff) << Self::SIGN_SHIFT;
                if need_form2 {
                    bits |= Self::COMB_TOP2;
                    bits |= biased << Self::FORM2_EXP_SHIFT;
                    bits |= coeff & Self::FORM2_COEFF_MASK;
                } else {
                    bits |= biased << Self::FORM1_EXP_SHIFT;
                    bits |= coeff & Self::FORM1_COEFF_MASK;
                }
                Self(bits)
            }

            /// Creates a canonical infinity.
            pub(crate) const fn inf(sign: $crate::Sign) -> Self {
                let bits = (sign.is_negative() as $ucoeff) << Self::SIGN_SHIFT;
                Self(bits | Self::COMB_TOP4)
            }

            /// Creates a canonical quiet NaN.
            pub(crate) const fn nan(sign: $crate::Sign, payload: $ucoeff) -> Self {
                debug_assert!(payload <= Self::PAYLOAD_MASK);

                let bits = (sign.is_negative() as $ucoeff) << Self::SIGN_SHIFT;
                Self(bits | Self::COMB_TOP5 | (payload & Self::PAYLOAD_MASK))
            }

            /// Creates a canonical signaling NaN.
            pub(crate) const fn snan(sign: $crate::Sign, payload: $ucoeff) -> Self {
                debug_assert!(payload <= Self::PAYLOAD_MASK);

                let bits = (sign.is_negative() as $ucoeff) << Self::SIGN_SHIFT;
                Self(bits | Self::COMB_TOP6 | (payload & Self::PAYLOAD_MASK))
            }

            /// Creates a canonical zero.
            pub(crate) const fn zero() -> Self {
                Self::from_parts($crate::Sign::Positive, 0, 0)
            }

            /// Creates a quiet NaN whose payload records the
            /// caller's location.
            #[track_caller]
            pub(crate) fn nan_here(sign: $crate::Sign) -> Self {
                let payload = $crate::diag::record(Self::PAYLOAD_MASK as u64);
                Self::nan(sign, payload as $ucoeff)
            }

            /// Creates a signaling NaN whose payload records the
            /// caller's location.
            #[track_caller]
            pub(crate) fn snan_here(sign: $crate::Sign) -> Self {
                let payload = $crate::diag::record(Self::PAYLOAD_MASK as u64);
                Self::snan(sign, payload as $ucoeff)
            }

            /// Creates a NaN from either `lhs` or `rhs` per the
            /// arithmetic operation rules.
            ///
            /// One of the two arguments *must* be NaN. The sign
            /// and payload are copied from the first signaling
            /// NaN, or if neither is signaling then from the
            /// first NaN; the result is always quiet.
            pub(crate) const fn select_nan(lhs: Self, rhs: Self) -> Self {
                debug_assert!(lhs.is_nan() || rhs.is_nan());

                let nan = if lhs.is_snan() {
                    lhs
                } else if rhs.is_snan() {
                    rhs
                } else if lhs.is_nan() {
                    lhs
                } else {
                    rhs
                };
                Self::nan(nan.sign(), nan.payload())
            }
        }
    };
}
pub(crate) use impl_dec_internal;

macro_rules! impl_dec_consts {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident, $defprec:literal $(,)?) => {
        impl $name {
            /// Canonical zero.
            pub const ZERO: Self = Self::zero();

            /// Not a Number (NaN).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is NaN. Use [`is_nan`][Self::is_nan]
            /// instead.
            pub const NAN: Self = Self::nan($crate::Sign::Positive, 0);

            /// Infinity (∞).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is infinity. Use
            /// [`is_infinite`][Self::is_infinite] instead.
            pub const INFINITY: Self = Self::inf($crate::Sign::Positive);

            /// Negative infinity (−∞).
            pub const NEG_INFINITY: Self = Self::inf($crate::Sign::Negative);

            /// The number of base 10 significant digits.
            pub const DIGITS: u32 = Self::P;

            /// The largest allowed coefficient.
            pub const MAX_COEFF: $ucoeff = <$ucoeff>::pow(10, Self::DIGITS) - 1;

            /// The smallest allowed exponent.
            pub const MIN_EXP: $unbiased = Self::EMIN as $unbiased;

            /// The largest allowed adjusted exponent.
            pub const MAX_EXP: $unbiased = Self::EMAX as $unbiased;

            /// The largest exponent [`pack`][Self::pack]
            /// accepts.
            ///
            /// Exponents in `(MAX_QUANTUM_EXP, MAX_EXP]` would
            /// need an encoded exponent whose top bits collide
            /// with the large-coefficient form marker, making
            /// the encoding ambiguous, and are rejected.
            pub const MAX_QUANTUM_EXP: $unbiased = (Self::EXP_LIMIT - Self::BIAS) as $unbiased;

            /// The smallest allowed context precision.
            pub const MIN_PRECISION: u32 = 3;

            /// The largest allowed context precision.
            pub const MAX_PRECISION: u32 = Self::DIGITS;

            /// The default context precision.
            pub const DEFAULT_PRECISION: u32 = $defprec;
        }
    };
}
pub(crate) use impl_dec_consts;

macro_rules! impl_dec_codec {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        impl $name {
            /// Creates a number from its raw bit pattern.
            pub const fn from_bits(bits: $ucoeff) -> Self {
                Self(bits)
            }

            /// Returns the raw bit pattern.
            pub const fn to_bits(self) -> $ucoeff {
                self.0
            }

            /// Creates a finite number from a signed coefficient
            /// and an exponent.
            ///
            /// The coefficient magnitude must be at most
            /// [`MAX_COEFF`][Self::MAX_COEFF] and the exponent
            /// must be in [[`MIN_EXP`][Self::MIN_EXP],
            /// [`MAX_QUANTUM_EXP`][Self::MAX_QUANTUM_EXP]].
            /// Use [`pack`][Self::pack] for checked
            /// construction.
            pub const fn new(coeff: $icoeff, exp: $unbiased) -> Self {
                let sign = $crate::Sign::from_bit(coeff < 0);
                Self::from_parts(sign, exp, coeff.unsigned_abs())
            }

            /// Encodes `(kind, sign, exponent, coefficient)`.
            ///
            /// The exponent and coefficient only apply to finite
            /// numbers: a finite coefficient past
            /// [`MAX_COEFF`][Self::MAX_COEFF] or exponent
            /// outside [[`MIN_EXP`][Self::MIN_EXP],
            /// [`MAX_QUANTUM_EXP`][Self::MAX_QUANTUM_EXP]] is an
            /// error. NaNs keep the low coefficient bits as
            /// a diagnostic payload; infinities ignore both.
            pub const fn pack(
                kind: $crate::Kind,
                sign: $crate::Sign,
                exp: $unbiased,
                coeff: $ucoeff,
            ) -> Result<Self, $crate::PackError> {
                match kind {
                    $crate::Kind::Infinity => Ok(Self::inf(sign)),
                    $crate::Kind::Quiet => Ok(Self::nan(sign, coeff & Self::PAYLOAD_MASK)),
                    $crate::Kind::Signaling => Ok(Self::snan(sign, coeff & Self::PAYLOAD_MASK)),
                    $crate::Kind::Finite => {
                        if coeff > Self::MAX_COEFF {
                            return Err($crate::PackError::coefficient());
                        }
                        if (exp as i32) < Self::EMIN
                            || exp as i32 + Self::BIAS > Self::EXP_LIMIT
                        {
                            return Err($crate::PackError::exponent());
                        }
                        Ok(Self::from_parts(sign, exp, coeff))
                    }
                }
            }

            /// Decodes the number into
            /// `(kind, sign, exponent, coefficient)`.
            ///
            /// Never fails. For NaNs the coefficient is the
            /// diagnostic payload and the exponent is zero; for
            /// infinities both are zero.
            pub const fn unpack(self) -> ($crate::Kind, $crate::Sign, $unbiased, $ucoeff) {
                let sign = self.sign();
                if self.is_nan() {
                    let kind = if self.is_snan() {
                        $crate::Kind::Signaling
                    } else {
                        $crate::Kind::Quiet
                    };
                    (kind, sign, 0, self.payload())
                } else if self.is_infinite() {
                    ($crate::Kind::Infinity, sign, 0, 0)
                } else {
                    ($crate::Kind::Finite, sign, self.unbiased_exp(), self.coeff())
                }
            }

            /// Reports whether the number is neither infinite
            /// nor NaN.
            pub const fn is_finite(self) -> bool {
                !self.is_special()
            }

            /// Reports whether the number is either positive or
            /// negative infinity.
            pub const fn is_infinite(self) -> bool {
                self.is_special() && !self.is_nan()
            }

            /// Reports whether the number is a quiet or
            /// signaling NaN.
            pub const fn is_nan(self) -> bool {
                self.0 & Self::COMB_TOP5 == Self::COMB_TOP5
            }

            /// Reports whether the number is a quiet NaN.
            pub const fn is_qnan(self) -> bool {
                self.is_nan() && !self.is_snan()
            }

            /// Reports whether the number is a signaling NaN.
            pub const fn is_snan(self) -> bool {
                self.0 & Self::COMB_TOP6 == Self::COMB_TOP6
            }

            /// Reports whether the number is ±0.
            pub const fn is_zero(self) -> bool {
                self.is_finite() && self.coeff() == 0
            }

            /// Reports whether the sign bit is set.
            ///
            /// This applies to every kind, NaNs included.
            pub const fn is_sign_negative(self) -> bool {
                self.signbit()
            }

            /// Reports whether the sign bit is clear.
            ///
            /// This applies to every kind, NaNs included.
            pub const fn is_sign_positive(self) -> bool {
                !self.signbit()
            }

            /// Returns `-self`.
            ///
            /// This flips the sign bit and has no special NaN
            /// handling.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn neg(self) -> Self {
                Self(self.0 ^ Self::SIGN_MASK)
            }

            /// Returns the absolute value of `self`.
            ///
            /// This clears the sign bit and has no special NaN
            /// handling.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn abs(self) -> Self {
                Self(self.0 & !Self::SIGN_MASK)
            }
        }
    };
}
pub(crate) use impl_dec_codec;

macro_rules! impl_dec_round {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        impl $name {
            /// Rounds the coefficient down to at most
            /// `precision` digits.
            ///
            /// Returns the rounded number together with the
            /// signals the rounding raised: `ROUNDING` whenever
            /// digits were removed, plus `INEXACT` when the
            /// removed digits were non-zero. If the exponent
            /// adjustment overflows the format the result is
            /// infinity with `OVERFLOW`.
            ///
            /// Non-finite numbers round to themselves with clear
            /// signals.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn round(self, mode: $crate::RoundingMode, precision: u32) -> (Self, $crate::Signal) {
                if !self.is_finite() {
                    return (self, $crate::Signal::CLEAR);
                }

                let sign = self.sign();
                let coeff = self.coeff();
                let (mut q, mut removed) = $crate::round::apply(mode, coeff, sign, precision);
                if removed == 0 {
                    return (self, $crate::Signal::CLEAR);
                }

                // A round-up may carry one digit past the target
                // precision; fold the carry into the exponent.
                if $arith::digits(q) > precision {
                    q /= 10;
                    removed += 1;
                }

                let mut signal = $crate::Signal::ROUNDING;
                let exact = match $arith::checked_scale(q, removed, <$ucoeff>::MAX) {
                    Some(v) => v == coeff,
                    None => false,
                };
                if !exact {
                    signal = signal.union($crate::Signal::INEXACT);
                }

                let exp = self.unbiased_exp() as i32 + removed as i32;
                if exp + Self::BIAS > Self::EXP_LIMIT {
                    return (Self::inf(sign), signal.union($crate::Signal::OVERFLOW));
                }
                (Self::from_parts(sign, exp as $unbiased, q), signal)
            }

            /// Returns `self` with its exponent adjusted to
            /// `exp`, rounding the coefficient per `mode` when
            /// the adjustment discards digits.
            ///
            /// Non-finite numbers quantize to themselves with
            /// `INVALID_OPERATION`. A coefficient that would
            /// grow past [`MAX_COEFF`][Self::MAX_COEFF] yields
            /// zero with `OVERFLOW`; an unencodable target
            /// exponent yields a signaling NaN with
            /// `INVALID_OPERATION`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn quantize(self, exp: $unbiased, mode: $crate::RoundingMode) -> (Self, $crate::Signal) {
                if !self.is_finite() {
                    return (self, $crate::Signal::INVALID_OPERATION);
                }

                let sign = self.sign();
                let coeff = self.coeff();
                let shift = exp as i32 - self.unbiased_exp() as i32;
                if shift == 0 {
                    return (self, $crate::Signal::CLEAR);
                }

                let q = if shift < 0 {
                    // The decimal point moves right: the
                    // coefficient gains digits.
                    match $arith::checked_scale(coeff, shift.unsigned_abs(), Self::MAX_COEFF) {
                        Some(v) => v,
                        None => return (Self::ZERO, $crate::Signal::OVERFLOW),
                    }
                } else {
                    // The decimal point moves left: the
                    // coefficient loses digits, rounding the
                    // remainder away.
                    $crate::round::shr_round(mode, coeff, sign, shift as u32)
                };

                match Self::pack($crate::Kind::Finite, sign, exp, q) {
                    Ok(v) => (v, $crate::Signal::CLEAR),
                    Err(_) => (
                        Self::snan_here($crate::Sign::Positive),
                        $crate::Signal::INVALID_OPERATION,
                    ),
                }
            }
        }
    };
}
pub(crate) use impl_dec_round;

macro_rules! impl_dec_cmp {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        impl $name {
            /// Reports whether `self == rhs`.
            ///
            /// - If either number is NaN, it returns `false`.
            /// - +0 and -0 are considered equal.
            ///
            /// This is a const version of [`PartialEq`].
            pub const fn const_eq(self, rhs: Self) -> bool {
                if self.is_nan() || rhs.is_nan() {
                    // NaN != NaN
                    return false;
                }

                if self.0 == rhs.0 {
                    // Obvious case: same bits.
                    return true;
                }

                if self.signbit() != rhs.signbit() {
                    // ±x == ∓y only for zeros.
                    return self.is_zero() && rhs.is_zero();
                }
                // Signs are the same.

                if self.is_infinite() || rhs.is_infinite() {
                    return self.is_infinite() && rhs.is_infinite();
                }
                // Both are finite.

                if self.is_zero() || rhs.is_zero() {
                    return self.is_zero() && rhs.is_zero();
                }
                // Both are non-zero.

                let shift = self.biased_exp().abs_diff(rhs.biased_exp()) as u32;
                if shift >= Self::DIGITS {
                    // The coefficients cannot overlap.
                    return false;
                }

                if shift == 0 {
                    self.coeff() == rhs.coeff()
                } else if self.biased_exp() > rhs.biased_exp() {
                    $arith::const_eq_shifted(self.coeff(), rhs.coeff(), shift)
                } else {
                    $arith::const_eq_shifted(rhs.coeff(), self.coeff(), shift)
                }
            }

            /// Returns the ordering between `self` and `rhs`.
            ///
            /// - If either number is NaN, it returns `None`.
            /// - +0 and -0 are considered equal.
            ///
            /// This is a const version of [`PartialOrd`].
            pub const fn const_partial_cmp(self, rhs: Self) -> Option<::core::cmp::Ordering> {
                if self.is_nan() || rhs.is_nan() {
                    // NaN != NaN
                    return None;
                }
                Some(self.cmp_numeric(rhs))
            }

            const fn cmp_numeric(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                debug_assert!(!self.is_nan() && !rhs.is_nan());

                if self.signbit() != rhs.signbit() {
                    return if self.is_zero() && rhs.is_zero() {
                        // ±0 == ∓0
                        Ordering::Equal
                    } else if self.signbit() {
                        // -x < +y
                        Ordering::Less
                    } else {
                        // +x > -y
                        Ordering::Greater
                    };
                }
                // Signs are the same.

                let ord = self.cmp_magnitude(rhs);
                if self.signbit() {
                    ord.reverse()
                } else {
                    ord
                }
            }

            const fn cmp_magnitude(self, rhs: Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                debug_assert!(self.signbit() == rhs.signbit());

                if self.0 == rhs.0 {
                    // Obvious case: same bits.
                    return Ordering::Equal;
                }

                if self.is_infinite() || rhs.is_infinite() {
                    return if self.is_infinite() && rhs.is_infinite() {
                        Ordering::Equal
                    } else if self.is_infinite() {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                }
                // Both are finite.

                if self.is_zero() || rhs.is_zero() {
                    return if self.is_zero() && rhs.is_zero() {
                        Ordering::Equal
                    } else if self.is_zero() {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                // Both are non-zero.

                let shift = self.biased_exp().abs_diff(rhs.biased_exp()) as u32;
                if shift >= Self::DIGITS {
                    // The coefficients cannot overlap, so the
                    // larger exponent is the larger magnitude.
                    return if self.biased_exp() < rhs.biased_exp() {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }

                if shift == 0 {
                    $arith::const_cmp(self.coeff(), rhs.coeff())
                } else if self.biased_exp() > rhs.biased_exp() {
                    $arith::const_cmp_shifted(self.coeff(), rhs.coeff(), shift)
                } else {
                    $arith::const_cmp_shifted(rhs.coeff(), self.coeff(), shift).reverse()
                }
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, rhs: &Self) -> bool {
                self.const_eq(*rhs)
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, rhs: &Self) -> Option<::core::cmp::Ordering> {
                self.const_partial_cmp(*rhs)
            }
        }
    };
}
pub(crate) use impl_dec_cmp;

macro_rules! impl_dec_ctx {
    ($name:ident, $ucoeff:ty, $icoeff:ty, $unbiased:ty, $arith:ident $(,)?) => {
        impl $crate::Ctx<$name> {
            /// Creates a context.
            ///
            /// The precision must be in the format's
            /// `[MIN_PRECISION, MAX_PRECISION]` range.
            pub fn new(
                precision: u32,
                rounding: $crate::RoundingMode,
                traps: $crate::Signal,
                locale: $crate::Locale,
            ) -> Result<Self, $crate::CtxError> {
                if precision < <$name>::MIN_PRECISION || precision > <$name>::MAX_PRECISION {
                    return Err($crate::CtxError::precision(
                        precision,
                        <$name>::MIN_PRECISION,
                        <$name>::MAX_PRECISION,
                    ));
                }
                Ok(Self {
                    precision,
                    rounding,
                    traps,
                    signals: $crate::Signal::CLEAR,
                    locale,
                    _dec: ::core::marker::PhantomData,
                })
            }

            /// Creates a context with the basic default values:
            /// the format's default precision, ties-to-even
            /// rounding, and traps on invalid operations,
            /// overflow, and underflow.
            pub fn basic() -> Self {
                Self {
                    precision: <$name>::DEFAULT_PRECISION,
                    rounding: $crate::RoundingMode::TiesToEven,
                    traps: $crate::ctx::BASIC_TRAPS,
                    signals: $crate::Signal::CLEAR,
                    locale: $crate::Locale::default(),
                    _dec: ::core::marker::PhantomData,
                }
            }

            /// Parses a decimal literal under this context.
            ///
            /// Special tokens (`nan`, `snan`, `inf`, `infinity`,
            /// optionally signed, case-insensitive) produce the
            /// corresponding specials. A malformed literal
            /// raises `CONVERSION_SYNTAX` and a coefficient past
            /// the format's range raises `OVERFLOW`; both return
            /// a signaling NaN. Finite results are rounded to
            /// the context precision.
            pub fn parse(&mut self, input: &str) -> $name {
                let s = self.locale.normalize(input);
                if s.is_empty() {
                    self.raise($crate::Signal::CONVERSION_SYNTAX);
                    return <$name>::snan_here($crate::Sign::Positive);
                }

                if let Some((sign, kind)) = $crate::bid::atod::special(&s) {
                    return match kind {
                        $crate::Kind::Infinity => <$name>::inf(sign),
                        $crate::Kind::Signaling => <$name>::snan(sign, 0),
                        _ => <$name>::nan(sign, 0),
                    };
                }

                let Some(lit) = $crate::bid::atod::scan(&s) else {
                    self.raise($crate::Signal::CONVERSION_SYNTAX);
                    return <$name>::snan_here($crate::Sign::Positive);
                };

                if lit.coeff > <$name>::MAX_COEFF as u64 {
                    self.raise($crate::Signal::OVERFLOW);
                    return <$name>::snan_here($crate::Sign::Positive);
                }
                let exp = -(lit.frac as i32);
                if exp < <$name>::EMIN {
                    self.raise($crate::Signal::CONVERSION_SYNTAX);
                    return <$name>::snan_here($crate::Sign::Positive);
                }

                let v = <$name>::from_parts(lit.sign, exp as $unbiased, lit.coeff as $ucoeff);
                let (v, signal) = v.round(self.rounding, self.precision);
                self.raise(signal);
                v
            }

            /// Returns `lhs + rhs`, rounded to the context
            /// precision.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn add(&mut self, lhs: $name, rhs: $name) -> $name {
                if lhs.is_nan() || rhs.is_nan() {
                    // ±NaN + rhs
                    // lhs + ±NaN
                    // ±NaN + ±NaN
                    if lhs.is_snan() || rhs.is_snan() {
                        self.raise($crate::Signal::INVALID_OPERATION);
                    }
                    return <$name>::select_nan(lhs, rhs);
                }

                if lhs.is_infinite() || rhs.is_infinite() {
                    if lhs.is_infinite() && rhs.is_infinite() {
                        if lhs.is_sign_negative() == rhs.is_sign_negative() {
                            // ±inf + ±inf
                            return <$name>::inf(lhs.sign());
                        }
                        // +inf + -inf
                        self.raise($crate::Signal::INVALID_OPERATION);
                        return <$name>::snan_here($crate::Sign::Positive);
                    }
                    // ±inf + rhs
                    // lhs + ±inf
                    return if lhs.is_infinite() { lhs } else { rhs };
                }

                let (_, lsign, lexp, lcoe) = lhs.unpack();
                let (_, rsign, rexp, rcoe) = rhs.unpack();

                // Align the exponents downward, scaling each
                // coefficient up to the smaller exponent.
                let min_exp = if lexp < rexp { lexp } else { rexp };
                let x = $arith::checked_scale(
                    lcoe,
                    (lexp as i32 - min_exp as i32) as u32,
                    <$name>::MAX_COEFF,
                );
                let y = $arith::checked_scale(
                    rcoe,
                    (rexp as i32 - min_exp as i32) as u32,
                    <$name>::MAX_COEFF,
                );
                let (Some(x), Some(y)) = (x, y) else {
                    self.raise($crate::Signal::OVERFLOW);
                    return <$name>::ZERO;
                };

                let (sum, sign) = if lsign.is_negative() == rsign.is_negative() {
                    match $arith::checked_add(x, y, <$name>::MAX_COEFF) {
                        Some(v) => (v, lsign),
                        None => {
                            self.raise($crate::Signal::INVALID_OPERATION);
                            return <$name>::snan_here($crate::Sign::Positive);
                        }
                    }
                } else {
                    // Subtract the smaller magnitude from the
                    // larger; the sign follows the larger.
                    let (big, small, sign) = if x >= y { (x, y, lsign) } else { (y, x, rsign) };
                    match $arith::checked_sub(big, small) {
                        Some(v) => (v, sign),
                        None => {
                            self.raise($crate::Signal::INVALID_OPERATION);
                            return <$name>::snan_here($crate::Sign::Positive);
                        }
                    }
                };
                // A zero result is always positive.
                let sign = if sum == 0 { $crate::Sign::Positive } else { sign };

                let packed = match <$name>::pack($crate::Kind::Finite, sign, min_exp, sum) {
                    Ok(v) => v,
                    Err(_) => {
                        self.raise($crate::Signal::INVALID_OPERATION);
                        return <$name>::snan_here($crate::Sign::Positive);
                    }
                };
                let (rounded, signal) = packed.round(self.rounding, self.precision);
                self.raise(signal);
                rounded
            }

            /// Returns `lhs - rhs`, rounded to the context
            /// precision.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn sub(&mut self, lhs: $name, rhs: $name) -> $name {
                if lhs.is_nan() || rhs.is_nan() {
                    if lhs.is_snan() || rhs.is_snan() {
                        self.raise($crate::Signal::INVALID_OPERATION);
                    }
                    return <$name>::select_nan(lhs, rhs);
                }
                // x - y = x + -y
                self.add(lhs, rhs.neg())
            }

            /// Returns `lhs * rhs`, rounded to the context
            /// precision.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn mul(&mut self, lhs: $name, rhs: $name) -> $name {
                if lhs.is_nan() || rhs.is_nan() {
                    if lhs.is_snan() || rhs.is_snan() {
                        self.raise($crate::Signal::INVALID_OPERATION);
                    }
                    return <$name>::select_nan(lhs, rhs);
                }

                let sign = lhs.sign().xor(rhs.sign());
                if lhs.is_infinite() || rhs.is_infinite() {
                    if lhs.is_zero() || rhs.is_zero() {
                        // ±inf * ±0
                        self.raise($crate::Signal::INVALID_OPERATION);
                        return <$name>::snan_here($crate::Sign::Positive);
                    }
                    // ±inf * rhs
                    // lhs * ±inf
                    // ±inf * ±inf
                    return <$name>::inf(sign);
                }

                let (_, _, lexp, lcoe) = lhs.unpack();
                let (_, _, rexp, rcoe) = rhs.unpack();

                let coeff = match $arith::checked_mul(lcoe, rcoe, <$name>::MAX_COEFF) {
                    Some(v) => v,
                    None => {
                        self.raise($crate::Signal::OVERFLOW);
                        return <$name>::nan_here($crate::Sign::Positive);
                    }
                };
                let exp = lexp as i32 + rexp as i32;
                if exp < <$name>::EMIN || exp + <$name>::BIAS > <$name>::EXP_LIMIT {
                    self.raise($crate::Signal::INVALID_OPERATION);
                    return <$name>::snan_here($crate::Sign::Positive);
                }

                let packed = <$name>::from_parts(sign, exp as $unbiased, coeff);
                let (rounded, signal) = packed.round(self.rounding, self.precision);
                self.raise(signal);
                rounded
            }

            /// Returns `lhs / rhs`, rounded to the context
            /// precision.
            ///
            /// Dividing a non-zero finite number by zero raises
            /// `DIVISION_BY_ZERO` and returns infinity; `0 / 0`
            /// raises `DIVISION_IMPOSSIBLE` and returns a
            /// signaling NaN.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn div(&mut self, lhs: $name, rhs: $name) -> $name {
                if lhs.is_nan() || rhs.is_nan() {
                    if lhs.is_snan() || rhs.is_snan() {
                        self.raise($crate::Signal::INVALID_OPERATION);
                    }
                    return <$name>::select_nan(lhs, rhs);
                }

                let sign = lhs.sign().xor(rhs.sign());
                if lhs.is_infinite() {
                    if rhs.is_infinite() || rhs.is_zero() {
                        // ±inf / ±inf
                        // ±inf / ±0
                        self.raise($crate::Signal::INVALID_OPERATION);
                        return <$name>::snan_here($crate::Sign::Positive);
                    }
                    // ±inf / rhs
                    return <$name>::inf(sign);
                }
                if rhs.is_infinite() {
                    // lhs / ±inf
                    return <$name>::ZERO;
                }

                let (_, _, lexp, lcoe) = lhs.unpack();
                let (_, _, rexp, rcoe) = rhs.unpack();

                if rcoe == 0 {
                    if lcoe == 0 {
                        // 0 / 0
                        self.raise($crate::Signal::DIVISION_IMPOSSIBLE);
                        return <$name>::snan_here($crate::Sign::Positive);
                    }
                    // lhs / 0
                    self.raise($crate::Signal::DIVISION_BY_ZERO);
                    return <$name>::inf(sign);
                }
                if lcoe == 0 {
                    // 0 / rhs
                    return <$name>::from_parts(sign, 0, 0);
                }

                // Scale the dividend up to the context precision
                // so the quotient keeps its significant digits.
                let mut adjust = lexp as i32 - rexp as i32;
                let mut dividend = lcoe;
                let mut steps = 0;
                while steps < self.precision && dividend <= <$name>::MAX_COEFF / 10 {
                    dividend *= 10;
                    adjust -= 1;
                    steps += 1;
                }

                let q = dividend / rcoe;
                let r = dividend % rcoe;
                let q = $crate::round::div_round(self.rounding, q, r, rcoe, sign);

                if adjust < <$name>::EMIN || adjust + <$name>::BIAS > <$name>::EXP_LIMIT {
                    self.raise($crate::Signal::INVALID_OPERATION);
                    return <$name>::snan_here($crate::Sign::Positive);
                }

                let packed = <$name>::from_parts(sign, adjust as $unbiased, q);
                let (rounded, signal) = packed.round(self.rounding, self.precision);
                self.raise(signal);
                rounded
            }

            /// Returns `x` with its exponent adjusted to `exp`,
            /// rounding per the context mode and accumulating
            /// the raised signals.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub fn quantize(&mut self, x: $name, exp: $unbiased) -> $name {
                let (v, signal) = x.quantize(exp, self.rounding);
                self.raise(signal);
                v
            }
        }

        impl ::core::default::Default for $crate::Ctx<$name> {
            fn default() -> Self {
                Self::basic()
            }
        }

        impl ::core::fmt::Debug for $crate::Ctx<$name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(
                    f,
                    "Ctx<{}>{{precision: {}, rounding: {}, traps: {:?}, signals: {:?}}}",
                    stringify!($name),
                    self.precision,
                    self.rounding.abbrev(),
                    self.traps,
                    self.signals,
                )
            }
        }
    };
}
pub(crate) use impl_dec_ctx;
