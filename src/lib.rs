//! IEEE 754-2008 decimal floating point arithmetic.
//!
//! This crate implements the 32- and 64-bit decimal interchange
//! formats with binary integer significands (BID), together with
//! the computation-context machinery of the General Decimal
//! Arithmetic Specification: working precision, rounding modes,
//! trap masks, and sticky signals.
//!
//! Values are plain bit-packed words ([`X32`], [`X64`]) that are
//! cheap to copy and never allocate. Operations run under a
//! [`Ctx`], which accumulates the signals they raise;
//! computational errors never unwind. Callers recover from
//! trapped signals by substituting a fallback value:
//!
//! ```
//! use decfp::{Ctx, X64};
//!
//! let mut ctx = Ctx::<X64>::basic();
//! let a = ctx.parse("1.23");
//! let b = ctx.parse("4.56");
//! let sum = ctx.add(a, b);
//! assert_eq!(sum.to_string(), "5.79");
//!
//! // A malformed literal raises a trapped signal; recover with
//! // a fallback value.
//! let bad = ctx.parse("1.2.3");
//! assert_eq!(ctx.handle_signals(bad, X64::ZERO).to_string(), "0");
//! ```

#![allow(clippy::unusual_byte_groupings)]
#![warn(rust_2018_idioms)]
#![warn(unused_lifetimes)]
#![warn(missing_docs)]

mod bid;
mod ctx;
pub mod diag;
pub mod imath;
mod round;
mod signal;

pub use bid::{Kind, PackError, Sign, X32, X64};
pub use ctx::{Ctx, CtxError, Locale, BASIC_TRAPS};
pub use round::{apply, Coefficient, RoundingMode};
pub use signal::Signal;
