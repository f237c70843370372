use core::fmt;
use core::marker::PhantomData;

use crate::{RoundingMode, Signal};

/// The trap mask of `basic` contexts.
pub const BASIC_TRAPS: Signal = Signal::INVALID_OPERATION
    .union(Signal::OVERFLOW)
    .union(Signal::UNDERFLOW);

/// A computation context for the decimal format `D`.
///
/// The context carries the working precision, the rounding mode,
/// the trap mask, the sticky signal state, and the locale used
/// for parsing. Operations union the signals they raise into the
/// sticky state; only [`clear_signals`][Self::clear_signals]
/// removes them.
///
/// A context is exclusively owned: clone it to branch, and do
/// not share one across threads without external
/// synchronization.
pub struct Ctx<D> {
    pub(crate) precision: u32,
    pub(crate) rounding: RoundingMode,
    pub(crate) traps: Signal,
    pub(crate) signals: Signal,
    pub(crate) locale: Locale,
    pub(crate) _dec: PhantomData<D>,
}

impl<D> Clone for Ctx<D> {
    fn clone(&self) -> Self {
        Ctx {
            precision: self.precision,
            rounding: self.rounding,
            traps: self.traps,
            signals: self.signals,
            locale: self.locale.clone(),
            _dec: PhantomData,
        }
    }
}

impl<D> Ctx<D> {
    /// Returns the sticky signal state.
    pub const fn signal(&self) -> Signal {
        self.signals
    }

    /// Returns the trap mask.
    pub const fn traps(&self) -> Signal {
        self.traps
    }

    /// Returns the working precision in digits.
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the rounding mode.
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the parsing locale.
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resets the sticky signal state to
    /// [`CLEAR`][Signal::CLEAR].
    pub fn clear_signals(&mut self) {
        self.signals = Signal::CLEAR;
    }

    /// Returns a copy of the context, optionally with the
    /// sticky signals cleared.
    #[must_use = "this returns a new context \
                      without modifying the original"]
    pub fn cloned(&self, clear: bool) -> Self {
        let mut ctx = self.clone();
        if clear {
            ctx.signals = Signal::CLEAR;
        }
        ctx
    }

    /// Returns `primary` unless a trapped signal is raised, in
    /// which case `fallback` is substituted.
    ///
    /// This is the library's trap discipline: computational
    /// errors never unwind, so callers opt into recovery by
    /// supplying the value to fall back on.
    pub fn handle_signals(&self, primary: D, fallback: D) -> D {
        if self.signals.trips(self.traps) {
            fallback
        } else {
            primary
        }
    }

    /// Unions `signal` into the sticky state.
    pub(crate) fn raise(&mut self, signal: Signal) {
        self.signals |= signal;
    }
}

/// Separator sets used to normalize numeric input.
///
/// Characters in `decimals` read as the decimal point;
/// characters in `thousands` are grouping noise and are deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Locale {
    decimals: String,
    thousands: String,
}

impl Locale {
    /// Creates a locale from its separator sets.
    pub fn new(decimals: impl Into<String>, thousands: impl Into<String>) -> Self {
        Self {
            decimals: decimals.into(),
            thousands: thousands.into(),
        }
    }

    /// Normalizes `input` for the scanner: trims surrounding
    /// whitespace, lowercases ASCII, deletes embedded spaces and
    /// thousands separators, and maps decimal separators to
    /// `.`.
    pub(crate) fn normalize(&self, input: &str) -> String {
        let input = input.trim();
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            if ch == ' ' || self.thousands.contains(ch) {
                continue;
            }
            if self.decimals.contains(ch) {
                out.push('.');
            } else {
                out.push(ch.to_ascii_lowercase());
            }
        }
        out
    }
}

impl Default for Locale {
    /// The default locale: `.` as the decimal point, `,` and
    /// `_` as grouping separators.
    fn default() -> Self {
        Self::new(".", ",_")
    }
}

/// An error returned when constructing a context with an
/// unsupported precision.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CtxError {
    precision: u32,
    min: u32,
    max: u32,
}

impl CtxError {
    pub(crate) const fn precision(precision: u32, min: u32, max: u32) -> Self {
        Self {
            precision,
            min,
            max,
        }
    }
}

impl fmt::Display for CtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported precision {}: must be in [{}, {}]",
            self.precision, self.min, self.max,
        )
    }
}

impl std::error::Error for CtxError {}
