//! The rounding engine.
//!
//! [`apply`] reduces a coefficient to a target number of digits
//! under one of the IEEE 754-2008 rounding-direction attributes.
//! It is a pure function over coefficients; it neither packs nor
//! raises signals. The packed types layer exponent bookkeeping
//! and signal reporting on top of it.

use core::fmt;

use crate::bid::{arith32, arith64, Sign};

/// An IEEE 754-2008 rounding-direction attribute.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub enum RoundingMode {
    /// Round to the nearest value; on a tie, pick the one with
    /// an even least significant digit.
    ///
    /// This is the IEEE 754-2008 default (roundTiesToEven).
    #[default]
    TiesToEven,
    /// Round to the nearest value; on a tie, pick the one with
    /// the larger magnitude (roundTiesToAway).
    TiesToAway,
    /// Round toward positive infinity, AKA ceiling
    /// (roundTowardPositive).
    TowardPositive,
    /// Round toward negative infinity, AKA floor
    /// (roundTowardNegative).
    TowardNegative,
    /// Round toward zero, AKA truncation (roundTowardZero).
    TowardZero,
}

impl RoundingMode {
    /// A three-character abbreviation for compact debug output.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::TiesToEven => "TiE",
            Self::TiesToAway => "TiA",
            Self::TowardPositive => "ToP",
            Self::TowardNegative => "ToN",
            Self::TowardZero => "ToZ",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TiesToEven => "TiesToEven",
            Self::TiesToAway => "TiesToAway",
            Self::TowardPositive => "TowardPositive",
            Self::TowardNegative => "TowardNegative",
            Self::TowardZero => "TowardZero",
        };
        f.write_str(name)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A raw decimal coefficient.
///
/// Implemented for the coefficient widths of the supported
/// formats (`u32` and `u64`); this trait is sealed.
pub trait Coefficient: private::Sealed + Copy + Ord {
    /// The zero coefficient.
    const ZERO: Self;
    /// The unit coefficient.
    const ONE: Self;
    /// The largest `n` for which `10^n` fits the width.
    const MAX_POW10: u32;

    /// Returns the number of decimal digits, with zero counting
    /// as one digit.
    fn digits(self) -> u32;
    /// Shifts right by `n` digits, returning the quotient and
    /// the shifted-off remainder.
    fn shr10(self, n: u32) -> (Self, Self);
    /// Returns one half of `10^n`; `n` must be in
    /// [1, [`MAX_POW10`][Self::MAX_POW10]].
    fn point5(n: u32) -> Self;
    /// Reports whether the coefficient is odd.
    fn is_odd(self) -> bool;
    /// Returns `self + 1`.
    fn incr(self) -> Self;
    /// Returns `self * 2`.
    fn double(self) -> Self;
}

impl Coefficient for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX_POW10: u32 = arith32::MAX_POW10;

    fn digits(self) -> u32 {
        arith32::digits(self)
    }
    fn shr10(self, n: u32) -> (Self, Self) {
        arith32::shr(self, n)
    }
    fn point5(n: u32) -> Self {
        arith32::point5(n)
    }
    fn is_odd(self) -> bool {
        self % 2 != 0
    }
    fn incr(self) -> Self {
        self + 1
    }
    fn double(self) -> Self {
        self * 2
    }
}

impl Coefficient for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX_POW10: u32 = arith64::MAX_POW10;

    fn digits(self) -> u32 {
        arith64::digits(self)
    }
    fn shr10(self, n: u32) -> (Self, Self) {
        arith64::shr(self, n)
    }
    fn point5(n: u32) -> Self {
        arith64::point5(n)
    }
    fn is_odd(self) -> bool {
        self % 2 != 0
    }
    fn incr(self) -> Self {
        self + 1
    }
    fn double(self) -> Self {
        self * 2
    }
}

/// Rounds `coeff` down to at most `precision` digits.
///
/// Returns the rounded coefficient and the number of digits
/// removed. If the coefficient already fits the target precision
/// it is returned unchanged with zero digits removed.
///
/// `precision` must be at least 1. A rounded-up result may carry
/// into one digit more than `precision` (e.g. `999` at precision
/// 2 rounds to `100` with a carry to `1000/10`); callers
/// re-examine the digit count.
pub fn apply<C: Coefficient>(
    mode: RoundingMode,
    coeff: C,
    sign: Sign,
    precision: u32,
) -> (C, u32) {
    debug_assert!(precision >= 1);

    if coeff == C::ZERO {
        return (coeff, 0);
    }
    let digits = coeff.digits();
    if digits <= precision {
        return (coeff, 0);
    }
    let removed = digits - precision;
    (shr_round(mode, coeff, sign, removed), removed)
}

/// Divides `coeff` by `10^n`, rounding the quotient per `mode`.
pub(crate) fn shr_round<C: Coefficient>(mode: RoundingMode, coeff: C, sign: Sign, n: u32) -> C {
    debug_assert!(n >= 1);

    if n > C::MAX_POW10 {
        // The divisor exceeds the width, so the quotient is zero
        // and the remainder (the whole coefficient) is below any
        // representable tie point.
        return match mode {
            RoundingMode::TowardPositive if sign.is_positive() && coeff != C::ZERO => C::ONE,
            RoundingMode::TowardNegative if sign.is_negative() && coeff != C::ZERO => C::ONE,
            _ => C::ZERO,
        };
    }

    let (q, r) = coeff.shr10(n);
    let half = C::point5(n);

    let up = match mode {
        RoundingMode::TiesToEven => r > half || (r == half && q.is_odd()),
        RoundingMode::TiesToAway => r >= half,
        RoundingMode::TowardPositive => sign.is_positive() && r > C::ZERO,
        RoundingMode::TowardNegative => sign.is_negative() && r > C::ZERO,
        RoundingMode::TowardZero => false,
    };
    if up {
        q.incr()
    } else {
        q
    }
}

/// Rounds the quotient `q` with remainder `r` of a division by
/// an arbitrary (not necessarily power-of-ten) `divisor`.
///
/// The tie point is `r * 2 == divisor`; `r.double()` must not
/// overflow, which holds for any remainder of a coefficient
/// division.
pub(crate) fn div_round<C: Coefficient>(
    mode: RoundingMode,
    q: C,
    r: C,
    divisor: C,
    sign: Sign,
) -> C {
    if r == C::ZERO {
        return q;
    }
    let r2 = r.double();
    let up = match mode {
        RoundingMode::TiesToEven => r2 > divisor || (r2 == divisor && q.is_odd()),
        RoundingMode::TiesToAway => r2 >= divisor,
        RoundingMode::TowardPositive => sign.is_positive(),
        RoundingMode::TowardNegative => sign.is_negative(),
        RoundingMode::TowardZero => false,
    };
    if up {
        q.incr()
    } else {
        q
    }
}
