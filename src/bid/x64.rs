use core::mem::size_of;

use super::{arith64, base::const_assert, base::impl_dec};

/// A 64-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// The value is a single bit-packed word; the kind lives in the
/// combination field and is read by the classification
/// predicates.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct X64(
    /// ## Form 1
    ///
    /// s eeeeeeeeee   (0)ttt tttttttttt ... tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 11eeeeeeeeee   (100)t tttttttttt ... tttttttttt
    u64,
);
const_assert!(size_of::<X64>() == 64 / 8);

impl_dec! {
    name = X64,
    ucoeff = u64,
    icoeff = i64,
    unbiased_exp = i16,
    arith = arith64,
    default_precision = 9,
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for X64 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i64::from(coeff), 0)
            }
        }
    )*)
}
from_unsigned_impl!(u8 u16 u32);

macro_rules! from_signed_impl {
    ($($ty:ty)*) => ($(
        impl From<$ty> for X64 {
            #[inline]
            fn from(coeff: $ty) -> Self {
                Self::new(i64::from(coeff), 0)
            }
        }
    )*)
}
from_signed_impl!(i8 i16 i32);

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::{Kind, RoundingMode, Sign, Signal};

    #[test]
    fn test_consts() {
        assert_eq!(X64::DIGITS, 16);
        assert_eq!(X64::MAX_COEFF, 9_999_999_999_999_999);
        assert_eq!(X64::BIAS, 398);
        assert_eq!(X64::MIN_EXP, -383);
        assert_eq!(X64::MAX_EXP, 384);
        assert_eq!(X64::MAX_QUANTUM_EXP, 369);
        assert_eq!(X64::EXP_LIMIT, 767);
    }

    #[test]
    fn test_exp_roundtrip() {
        for exp in X64::MIN_EXP..=X64::MAX_QUANTUM_EXP {
            let d = X64::new(0, exp);
            assert_eq!(d.unbiased_exp(), exp, "(1) d={:064b}", d.to_bits());
            assert_eq!(d.coeff(), 0, "#{exp}");

            let d = X64::new(X64::MAX_COEFF as i64, exp);
            assert_eq!(d.unbiased_exp(), exp, "(2) d={:064b}", d.to_bits());
            assert_eq!(d.coeff(), X64::MAX_COEFF, "#{exp}");
        }
    }

    #[test]
    fn test_pack_unpack() {
        let tests: &[(Kind, Sign, i16, u64)] = &[
            (Kind::Finite, Sign::Positive, 0, 123456789012345),
            (Kind::Finite, Sign::Negative, -10, 987654321098765),
            (Kind::Finite, Sign::Positive, 0, 0),
            (Kind::Finite, Sign::Negative, 0, 0),
            (Kind::Finite, Sign::Positive, -383, 1),
            (Kind::Finite, Sign::Positive, 369, X64::MAX_COEFF),
            // Form 2: the coefficient's top bit needs the
            // implicit `100` prefix.
            (Kind::Finite, Sign::Positive, 0, 1 << 53),
            (Kind::Finite, Sign::Negative, 5, 9_999_999_999_999_999),
            (Kind::Quiet, Sign::Positive, 0, 0),
            (Kind::Quiet, Sign::Negative, 0, 12345),
            (Kind::Signaling, Sign::Negative, 0, 0),
            (Kind::Signaling, Sign::Positive, 0, (1 << 50) - 1),
            (Kind::Infinity, Sign::Positive, 0, 0),
            (Kind::Infinity, Sign::Negative, 0, 0),
        ];
        for (i, &(kind, sign, exp, coeff)) in tests.iter().enumerate() {
            let x = X64::pack(kind, sign, exp, coeff).unwrap();
            assert_eq!(x.unpack(), (kind, sign, exp, coeff), "#{i}");
        }
    }

    #[test]
    fn test_pack_normalizes_specials() {
        // Exponents are ignored for non-finite kinds.
        let x = X64::pack(Kind::Infinity, Sign::Negative, 123, 456).unwrap();
        assert_eq!(x.unpack(), (Kind::Infinity, Sign::Negative, 0, 0));

        let x = X64::pack(Kind::Quiet, Sign::Positive, -7, 99).unwrap();
        assert_eq!(x.unpack(), (Kind::Quiet, Sign::Positive, 0, 99));
    }

    #[test]
    fn test_pack_errors() {
        assert!(X64::pack(Kind::Finite, Sign::Positive, 0, X64::MAX_COEFF + 1).is_err());
        assert!(X64::pack(Kind::Finite, Sign::Positive, -384, 1).is_err());
        assert!(X64::pack(Kind::Finite, Sign::Positive, 370, 1).is_err());
        assert!(X64::pack(Kind::Finite, Sign::Positive, 369, 1).is_ok());
        assert!(X64::pack(Kind::Finite, Sign::Negative, -383, 0).is_ok());
    }

    #[test]
    fn test_roundtrip_fuzz() {
        // Sampled sweep over the full tuple space.
        let coeffs = [
            0u64,
            1,
            9,
            10,
            999_999,
            1_000_000,
            (1 << 53) - 1,
            1 << 53,
            (1 << 53) + 1,
            X64::MAX_COEFF - 1,
            X64::MAX_COEFF,
        ];
        for sign in [Sign::Positive, Sign::Negative] {
            for exp in (X64::MIN_EXP..=X64::MAX_QUANTUM_EXP).step_by(7) {
                for &coeff in &coeffs {
                    let x = X64::pack(Kind::Finite, sign, exp, coeff).unwrap();
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
    fn test_zero_signs() {
        let pos = X64::pack(Kind::Finite, Sign::Positive, 0, 0).unwrap();
        let neg = X64::pack(Kind::Finite, Sign::Negative, 0, 0).unwrap();
        assert_ne!(pos.to_bits(), neg.to_bits());
        // Signed zeros compare equal.
        assert_eq!(pos, neg);
        assert!(pos.is_zero() && neg.is_zero());
        assert!(neg.is_sign_negative());
    }

    #[test]
    fn test_predicates() {
        assert!(X64::ZERO.is_finite() && X64::ZERO.is_zero());
        assert!(X64::INFINITY.is_infinite() && !X64::INFINITY.is_finite());
        assert!(X64::NEG_INFINITY.is_infinite());
        assert!(X64::NEG_INFINITY.is_sign_negative());
        assert!(X64::NAN.is_nan() && X64::NAN.is_qnan() && !X64::NAN.is_snan());
        let snan = X64::snan(Sign::Negative, 7);
        assert!(snan.is_nan() && snan.is_snan() && !snan.is_qnan());
        assert!(!snan.is_finite() && !snan.is_infinite());
        let x = X64::new(42, -1);
        assert!(x.is_finite() && !x.is_zero() && !x.is_nan() && !x.is_infinite());
    }

    #[test]
    fn test_neg_abs() {
        let x = X64::new(42, -1);
        assert!(x.neg().is_sign_negative());
        assert_eq!(x.neg().neg().to_bits(), x.to_bits());
        assert_eq!(x.neg().abs().to_bits(), x.to_bits());
        assert!(X64::NEG_INFINITY.abs().is_sign_positive());
    }

    static STR_TESTS: &[(X64, &str)] = &[
        (X64::ZERO, "0"),
        (X64::INFINITY, "Infinity"),
        (X64::NEG_INFINITY, "-Infinity"),
        (X64::NAN, "qNaN"),
        (X64::new(123, 0), "123"),
        (X64::new(-456, 0), "-456"),
        (X64::new(789, 2), "78900"),
        (X64::new(12345, -2), "123.45"),
        (X64::new(-12345, -2), "-123.45"),
        (X64::new(1230, -3), "1.230"),
        (X64::new(42, -2), "0.42"),
        (X64::new(42, -5), "0.00042"),
        (X64::new(42, -6), "0.000042"),
        (X64::new(42, -7), "4.2e-6"),
        (X64::new(5, 7), "5.0e+7"),
        (X64::new(4200, -7), "4.2e-4"),
        (X64::new(123456789, 10), "1.23456789e+18"),
        (X64::new(-1, -9), "-1.0e-9"),
        (X64::new(42000000, 0), "42000000"),
    ];

    #[test]
    fn test_format() {
        for (i, (input, want)) in STR_TESTS.iter().enumerate() {
            let got = input.to_string();
            assert_eq!(got, *want, "#{i}");
        }
        // -0 keeps its sign.
        let neg = X64::pack(Kind::Finite, Sign::Negative, 0, 0).unwrap();
        assert_eq!(neg.to_string(), "-0");
        assert_eq!(X64::snan(Sign::Negative, 0).to_string(), "-sNaN");
        assert_eq!(X64::nan(Sign::Negative, 0).to_string(), "-qNaN");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", X64::new(123, -2)), "X64{+, 123, -2}");
        assert_eq!(format!("{:?}", X64::new(-7, 0)), "X64{-, 7, 0}");
        assert_eq!(format!("{:?}", X64::INFINITY), "X64{Inf, +}");
        assert_eq!(format!("{:?}", X64::NEG_INFINITY), "X64{Inf, -}");
        assert_eq!(format!("{:?}", X64::NAN), "X64{qNaN, +}");
        assert_eq!(format!("{:?}", X64::snan(Sign::Negative, 0)), "X64{sNaN, -}");
        // A library-made NaN resolves to its creation site.
        let nan = X64::nan_here(Sign::Positive);
        let dump = format!("{nan:?}");
        assert!(dump.contains("x64.rs"), "{dump}");
    }

    #[test]
    fn test_round() {
        // No digits removed: identity, clear signals.
        let x = X64::new(123456789, -2);
        let (v, sig) = x.round(RoundingMode::TiesToEven, 9);
        assert_eq!(v.to_bits(), x.to_bits());
        assert_eq!(sig, Signal::CLEAR);

        // Exact removal raises only ROUNDING.
        let x = X64::new(1230, -1);
        let (v, sig) = x.round(RoundingMode::TiesToEven, 3);
        assert_eq!(v.unpack(), (Kind::Finite, Sign::Positive, 0, 123));
        assert_eq!(sig, Signal::ROUNDING);

        // Lossy removal raises ROUNDING | INEXACT.
        let x = X64::new(123456789012345, 0);
        let (v, sig) = x.round(RoundingMode::TiesToEven, 9);
        assert_eq!(v.unpack(), (Kind::Finite, Sign::Positive, 6, 123456789));
        assert_eq!(sig, Signal::ROUNDING | Signal::INEXACT);

        // A carry folds into the exponent.
        let x = X64::new(999, 0);
        let (v, sig) = x.round(RoundingMode::TiesToAway, 2);
        assert_eq!(v.unpack(), (Kind::Finite, Sign::Positive, 2, 10));
        assert_eq!(sig, Signal::ROUNDING | Signal::INEXACT);

        // Exponent overflow becomes infinity.
        let x = X64::new(X64::MAX_COEFF as i64, X64::MAX_QUANTUM_EXP);
        let (v, sig) = x.round(RoundingMode::TiesToEven, 3);
        assert!(v.is_infinite());
        assert!(sig.contains(Signal::OVERFLOW));

        // Specials round to themselves.
        let (v, sig) = X64::INFINITY.round(RoundingMode::TiesToEven, 3);
        assert!(v.is_infinite());
        assert_eq!(sig, Signal::CLEAR);
    }

    #[test]
    fn test_quantize() {
        use RoundingMode::*;

        // No shift.
        let x = X64::new(12345, 0);
        let (v, sig) = x.quantize(0, TiesToEven);
        assert_eq!(v.to_string(), "12345");
        assert_eq!(sig, Signal::CLEAR);

        // Discarding digits rounds them away.
        let (v, sig) = X64::new(12345, -2).quantize(0, TiesToEven);
        assert_eq!(v.to_string(), "123");
        assert_eq!(sig, Signal::CLEAR);

        let (v, _) = X64::new(12345, -1).quantize(0, TowardPositive);
        assert_eq!(v.to_string(), "1235");

        let (v, _) = X64::new(-12345, -1).quantize(0, TowardNegative);
        assert_eq!(v.to_string(), "-1235");

        let (v, _) = X64::new(12345, -3).quantize(0, TowardPositive);
        assert_eq!(v.to_string(), "13");

        // Negative shift grows the coefficient.
        let (v, sig) = X64::new(5, 0).quantize(-3, TiesToEven);
        assert_eq!(v.unpack(), (Kind::Finite, Sign::Positive, -3, 5000));
        assert_eq!(sig, Signal::CLEAR);

        // Growth past the coefficient range overflows to zero.
        let (v, sig) = X64::new(X64::MAX_COEFF as i64, 0).quantize(-1, TiesToEven);
        assert!(v.is_zero());
        assert_eq!(sig, Signal::OVERFLOW);

        // Specials are invalid operands.
        let (v, sig) = X64::INFINITY.quantize(0, TiesToEven);
        assert!(v.is_infinite());
        assert_eq!(sig, Signal::INVALID_OPERATION);

        // An unencodable target exponent fails the repack.
        let (v, sig) = X64::new(1, 0).quantize(380, TiesToEven);
        assert!(v.is_snan());
        assert_eq!(sig, Signal::INVALID_OPERATION);
    }

    #[test]
    fn test_partial_cmp() {
        let tests = [
            (X64::new(21, -1), X64::new(3, 0), Some(Ordering::Less)),
            (X64::new(21, -1), X64::new(21, -1), Some(Ordering::Equal)),
            (X64::new(21, -1), X64::new(210, -2), Some(Ordering::Equal)),
            (X64::new(3, 0), X64::new(21, -1), Some(Ordering::Greater)),
            (X64::new(21, -1), X64::new(-3, 0), Some(Ordering::Greater)),
            (X64::new(-3, 0), X64::new(21, -1), Some(Ordering::Less)),
            (X64::new(-2, 0), X64::new(-3, 0), Some(Ordering::Greater)),
            (X64::NAN, X64::new(3, 0), None),
            (X64::new(3, 0), X64::NAN, None),
            (X64::INFINITY, X64::new(3, 0), Some(Ordering::Greater)),
            (X64::NEG_INFINITY, X64::new(3, 0), Some(Ordering::Less)),
            (X64::INFINITY, X64::INFINITY, Some(Ordering::Equal)),
            (X64::NEG_INFINITY, X64::INFINITY, Some(Ordering::Less)),
            // Coefficients so far apart they cannot overlap.
            (X64::new(1, 20), X64::new(9, 0), Some(Ordering::Greater)),
            (X64::new(-1, 20), X64::new(-9, 0), Some(Ordering::Less)),
        ];
        for (i, (lhs, rhs, want)) in tests.into_iter().enumerate() {
            let got = PartialOrd::partial_cmp(&lhs, &rhs);
            assert_eq!(got, want, "#{i}: partial_cmp({lhs}, {rhs})");
            assert_eq!(lhs.const_partial_cmp(rhs), want, "#{i}");
        }
        assert!(X64::NAN != X64::NAN);
    }

    #[test]
    fn test_from() {
        assert_eq!(X64::from(42u8).to_string(), "42");
        assert_eq!(X64::from(42u32).to_string(), "42");
        assert_eq!(X64::from(-42i32).to_string(), "-42");
        assert_eq!(X64::from(i32::MIN).to_string(), "-2147483648");
    }

    #[test]
    fn test_digits() {
        for i in 1..X64::DIGITS {
            let v = 10i64.pow(i);
            let got = X64::new(v - 1, 0).digits();
            assert_eq!(got, i, "#{}", v - 1);
        }
        assert_eq!(X64::ZERO.digits(), 1);
    }
}
