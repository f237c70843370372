// Bitflags
#![allow(clippy::indexing_slicing)]

use core::fmt;

use bitflags::bitflags;

/// An exceptional condition raised during an operation.
///
/// Signals are sticky: a context unions in every signal an
/// operation raises and only [`clear_signals`][crate::Ctx::clear_signals]
/// removes them.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signal(u8);

bitflags! {
    impl Signal: u8 {
        /// Occurs when a coefficient or exponent exceeds the
        /// range of the destination format.
        const OVERFLOW = 0x1;
        /// Occurs when a result is too small for the
        /// destination format.
        const UNDERFLOW = 0x2;
        /// Occurs when division is attempted with a finite,
        /// non-zero dividend and a divisor with a value of
        /// zero.
        const DIVISION_BY_ZERO = 0x4;
        /// Occurs when both the dividend and the divisor are
        /// zero.
        const DIVISION_IMPOSSIBLE = 0x8;
        /// Occurs when discarded digits were non-zero, i.e. the
        /// result differs from the mathematically exact one.
        const INEXACT = 0x10;
        /// Occurs when rounding discarded digits, whether or
        /// not they were zero.
        const ROUNDING = 0x20;
        /// Occurs when:
        ///
        /// - An operand to an operation is a signaling NaN.
        /// - An attempt is made to add infinities of opposite
        ///   signs.
        /// - An attempt is made to multiply zero by an infinity
        ///   of either sign.
        /// - An attempt is made to divide an infinity by an
        ///   infinity.
        /// - A result cannot be packed into the destination
        ///   format.
        const INVALID_OPERATION = 0x40;
        /// Occurs when a string is converted to a decimal and
        /// does not have a valid syntax.
        ///
        /// A syntax error is always also an invalid operation,
        /// so this constant includes
        /// [`INVALID_OPERATION`][Self::INVALID_OPERATION].
        const CONVERSION_SYNTAX = 0x80 | 0x40;
    }
}

/// Flag names and their compact one-character spellings, in
/// display order.
const FLAGS: &[(Signal, &str, char)] = &[
    (Signal::OVERFLOW, "Overflow", 'O'),
    (Signal::UNDERFLOW, "Underflow", 'U'),
    (Signal::DIVISION_BY_ZERO, "DivisionByZero", 'Z'),
    (Signal::DIVISION_IMPOSSIBLE, "DivisionImpossible", 'D'),
    (Signal::INEXACT, "Inexact", 'X'),
    (Signal::ROUNDING, "Rounding", 'R'),
    (Signal::INVALID_OPERATION, "InvalidOperation", 'V'),
    // The syntax bit alone; INVALID_OPERATION prints itself.
    (Signal::CONVERSION_SYNTAX.difference(Signal::INVALID_OPERATION), "ConversionSyntax", 'S'),
];

impl Signal {
    /// The empty signal set.
    pub const CLEAR: Self = Self::empty();

    /// Reports whether any signal in `traps` is raised.
    pub const fn trips(self, traps: Self) -> bool {
        !self.intersection(traps).is_empty()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl fmt::Display for Signal {
    /// Pipe-joined flag names, or `Clear` for the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Clear");
        }
        let mut first = true;
        for &(flag, name, _) in FLAGS {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Signal {
    /// One character per raised flag, `-` for the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for &(flag, _, ch) in FLAGS {
            if self.contains(flag) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
