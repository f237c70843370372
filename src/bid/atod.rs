//! Lexing of decimal literals.
//!
//! The scanner operates on input the context has already
//! normalized: trimmed, lowercased, separators mapped. It is
//! width-independent; the per-format range checks happen in the
//! context.

use super::{Kind, Sign};

/// A scanned finite literal.
pub(crate) struct Literal {
    /// The literal's sign.
    pub sign: Sign,
    /// The concatenated integer and fraction digits.
    pub coeff: u64,
    /// The number of fraction digits, i.e. the negated exponent.
    pub frac: usize,
}

/// Matches the special tokens.
pub(crate) fn special(s: &str) -> Option<(Sign, Kind)> {
    match s {
        "nan" | "+nan" => Some((Sign::Positive, Kind::Quiet)),
        "-nan" => Some((Sign::Negative, Kind::Quiet)),
        "snan" | "+snan" => Some((Sign::Positive, Kind::Signaling)),
        "-snan" => Some((Sign::Negative, Kind::Signaling)),
        "inf" | "infinity" | "+inf" | "+infinity" => Some((Sign::Positive, Kind::Infinity)),
        "-inf" | "-infinity" => Some((Sign::Negative, Kind::Infinity)),
        _ => None,
    }
}

/// Scans a finite literal: an optional sign followed by digits
/// with at most one embedded decimal point and at least one
/// digit overall.
///
/// Returns `None` on any syntax violation, including digits
/// overflowing the 64-bit scratch coefficient.
pub(crate) fn scan(s: &str) -> Option<Literal> {
    let mut bytes = s.as_bytes();

    let mut sign = Sign::Positive;
    if let Some((c @ (b'-' | b'+'), rest)) = bytes.split_first() {
        sign = Sign::from_bit(*c == b'-');
        bytes = rest;
    }

    let mut coeff: u64 = 0;
    let mut count = 0usize;
    let mut frac: Option<usize> = None;
    while let Some((&c, rest)) = bytes.split_first() {
        match c {
            b'0'..=b'9' => {
                let d = (c - b'0') as u64;
                coeff = coeff.checked_mul(10)?.checked_add(d)?;
                count += 1;
                if let Some(n) = frac.as_mut() {
                    *n += 1;
                }
            }
            b'.' if frac.is_none() => frac = Some(0),
            _ => return None,
        }
        bytes = rest;
    }
    if count == 0 {
        return None;
    }

    Some(Literal {
        sign,
        coeff,
        frac: frac.unwrap_or(0),
    })
}
