use core::mem::size_of;

use super::{
    arith32,
    base::{const_assert, impl_dec},
};

/// A 32-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// The value is a single bit-packed word; the kind lives in the
/// combination field and is read by the classification
/// predicates.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct X32(
    /// ## Form 1
    ///
    /// s eeeeeeee   (0)ttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 11eeeeeeee   (100)t tttttttttt tttttttttt
    u32,
);
const_assert!(size_of::<X32>() == 32 / 8);

impl_dec! {
    name = X32,
    ucoeff = u32,
    icoeff = i32,
    unbiased_exp = i8,
    arith = arith32,
    default_precision = 5,
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for X32 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i32::from(coeff), 0)
            }
        }
    )*)
}
from_unsigned_impl!(u8 u16);

macro_rules! from_signed_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for X32 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i32::from(coeff), 0)
            }
        }
    )*)
}
from_signed_impl!(i8 i16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ctx, Kind, RoundingMode, Sign, Signal};

    #[test]
    fn test_consts() {
        assert_eq!(X32::DIGITS, 7);
        assert_eq!(X32::MAX_COEFF, 9_999_999);
        assert_eq!(X32::BIAS, 101);
        assert_eq!(X32::MIN_EXP, -95);
        assert_eq!(X32::MAX_EXP, 96);
        assert_eq!(X32::MAX_QUANTUM_EXP, 90);
        assert_eq!(X32::EXP_LIMIT, 191);
        assert_eq!(X32::DEFAULT_PRECISION, 5);
    }

    #[test]
    fn test_pack_unpack() {
        let tests: &[(Kind, Sign, i8, u32)] = &[
            (Kind::Finite, Sign::Positive, 0, 12345),
            (Kind::Finite, Sign::Negative, -5, 67890),
            (Kind::Finite, Sign::Positive, 0, 0),
            (Kind::Finite, Sign::Negative, 0, 0),
            (Kind::Finite, Sign::Positive, -95, 1),
            (Kind::Finite, Sign::Positive, 90, X32::MAX_COEFF),
            // Form 2: bit 23 forces the implicit `100` prefix.
            (Kind::Finite, Sign::Positive, 0, 1 << 23),
            (Kind::Finite, Sign::Negative, 7, 9_999_999),
            (Kind::Quiet, Sign::Positive, 0, 0),
            (Kind::Quiet, Sign::Negative, 0, 999),
            (Kind::Signaling, Sign::Negative, 0, 0),
            (Kind::Signaling, Sign::Positive, 0, (1 << 20) - 1),
            (Kind::Infinity, Sign::Positive, 0, 0),
            (Kind::Infinity, Sign::Negative, 0, 0),
        ];
        for (i, &(kind, sign, exp, coeff)) in tests.iter().enumerate() {
            let x = X32::pack(kind, sign, exp, coeff).unwrap();
            assert_eq!(x.unpack(), (kind, sign, exp, coeff), "#{i}");
        }
    }

    #[test]
    fn test_pack_errors() {
        assert!(X32::pack(Kind::Finite, Sign::Positive, 0, X32::MAX_COEFF + 1).is_err());
        assert!(X32::pack(Kind::Finite, Sign::Positive, -96, 1).is_err());
        assert!(X32::pack(Kind::Finite, Sign::Positive, 91, 1).is_err());
        assert!(X32::pack(Kind::Finite, Sign::Positive, 90, 1).is_ok());
    }

    #[test]
    fn test_roundtrip_fuzz() {
        // The coefficient range is small enough to sweep the
        // interesting band around the form boundary entirely.
        for sign in [Sign::Positive, Sign::Negative] {
            for exp in X32::MIN_EXP..=X32::MAX_QUANTUM_EXP {
                for coeff in [
                    0u32,
                    1,
                    999_999,
                    (1 << 20) - 1,
                    1 << 20,
                    (1 << 23) - 1,
                    1 << 23,
                    X32::MAX_COEFF,
                ] {
                    let x = X32::pack(Kind::Finite, sign, exp, coeff).unwrap();
                    assert_eq!(
                        x.unpack(),
                        (Kind::Finite, sign, exp, coeff),
                        "{sign:?} {exp} {coeff}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_form_boundary() {
        // Everything below 2^23 stays in form 1.
        let small = X32::pack(Kind::Finite, Sign::Positive, 0, (1 << 23) - 1).unwrap();
        let large = X32::pack(Kind::Finite, Sign::Positive, 0, 1 << 23).unwrap();
        assert!(small.is_form1());
        assert!(!large.is_form1());
        assert_eq!(small.coeff(), (1 << 23) - 1);
        assert_eq!(large.coeff(), 1 << 23);
    }

    #[test]
    fn test_parse_format() {
        let mut ctx = Ctx::<X32>::basic();
        let x = ctx.parse("1.23");
        assert_eq!(x.unpack(), (Kind::Finite, Sign::Positive, -2, 123));
        assert_eq!(x.to_string(), "1.23");
        assert_eq!(ctx.signal(), Signal::CLEAR);

        // The 32-bit coefficient range is tighter.
        let x = ctx.parse("12345678");
        assert!(x.is_snan());
        assert!(ctx.signal().contains(Signal::OVERFLOW));
    }

    #[test]
    fn test_round() {
        let x = X32::new(9_999_999, 0);
        let (v, sig) = x.round(RoundingMode::TiesToEven, 5);
        // 9999999 rounds up to 100000e2, whose carry folds into
        // the exponent once more.
        assert_eq!(v.unpack(), (Kind::Finite, Sign::Positive, 3, 10_000));
        assert_eq!(sig, Signal::ROUNDING | Signal::INEXACT);
    }

    #[test]
    fn test_add() {
        let mut ctx = Ctx::<X32>::basic();
        let a = ctx.parse("1.5");
        let b = ctx.parse("2.25");
        let got = ctx.add(a, b);
        assert_eq!(got.to_string(), "3.75");
        assert_eq!(ctx.signal(), Signal::CLEAR);
    }

    #[test]
    fn test_format() {
        assert_eq!(X32::new(123, -2).to_string(), "1.23");
        assert_eq!(X32::new(-9_999_999, 0).to_string(), "-9999999");
        assert_eq!(X32::INFINITY.to_string(), "Infinity");
        assert_eq!(X32::NAN.to_string(), "qNaN");
        assert_eq!(format!("{:?}", X32::new(123, -2)), "X32{+, 123, -2}");
    }
}
