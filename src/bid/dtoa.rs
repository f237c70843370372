macro_rules! impl_dtoa {
    ($name:ident, $arith:ident) => {
        impl ::core::fmt::Display for $name {
            /// The canonical decimal form.
            ///
            /// Finite numbers with exponents in [-6, 6] print in
            /// plain notation; everything else uses scientific
            /// notation with the adjusted exponent and a
            /// trailing-zero-trimmed fraction of at least one
            /// digit. Specials print as `qNaN`, `sNaN`, and
            /// `Infinity`, sign-prefixed when negative.
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                if self.is_nan() {
                    let s = match (self.is_snan(), self.is_sign_negative()) {
                        (true, true) => "-sNaN",
                        (true, false) => "sNaN",
                        (false, true) => "-qNaN",
                        (false, false) => "qNaN",
                    };
                    return f.write_str(s);
                }
                if self.is_infinite() {
                    return f.write_str(if self.is_sign_negative() {
                        "-Infinity"
                    } else {
                        "Infinity"
                    });
                }

                if self.is_sign_negative() {
                    f.write_str("-")?;
                }
                let coeff = self.coeff();
                if coeff == 0 {
                    return f.write_str("0");
                }

                let mut buf = ::itoa::Buffer::new();
                let digits = buf.format(coeff);
                let exp = self.unbiased_exp() as i32;

                if exp.unsigned_abs() > 6 {
                    // Scientific notation against the adjusted
                    // exponent.
                    let adj = exp + digits.len() as i32 - 1;
                    let (first, rest) = digits.split_at(1);
                    f.write_str(first)?;
                    let frac = rest.trim_end_matches('0');
                    if frac.is_empty() {
                        f.write_str(".0")?;
                    } else {
                        f.write_str(".")?;
                        f.write_str(frac)?;
                    }
                    return write!(f, "e{adj:+}");
                }

                if exp >= 0 {
                    // Pad with zeros.
                    f.write_str(digits)?;
                    for _ in 0..exp {
                        f.write_str("0")?;
                    }
                    return Ok(());
                }

                let point = exp.unsigned_abs() as usize;
                if point >= digits.len() {
                    // 0.00ccc
                    f.write_str("0.")?;
                    for _ in 0..point - digits.len() {
                        f.write_str("0")?;
                    }
                    f.write_str(digits)
                } else {
                    // cc.ccc
                    let (int, frac) = digits.split_at(digits.len() - point);
                    f.write_str(int)?;
                    f.write_str(".")?;
                    f.write_str(frac)
                }
            }
        }

        impl ::core::fmt::Debug for $name {
            /// Dumps the unpacked components: sign character,
            /// coefficient, and exponent for finite numbers, a
            /// short label for specials. NaN payloads resolve to
            /// the site that produced them when the registry
            /// knows it.
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let name = stringify!($name);
                let sign = self.sign().as_char();
                if self.is_nan() {
                    let label = if self.is_snan() { "sNaN" } else { "qNaN" };
                    let payload = self.payload() as u64;
                    if payload == 0 {
                        return write!(f, "{name}{{{label}, {sign}}}");
                    }
                    return match $crate::diag::lookup(payload) {
                        Some(site) => write!(
                            f,
                            "{name}{{{label}, {sign}, {}:{}}}",
                            site.file, site.line,
                        ),
                        None => write!(f, "{name}{{{label}, {sign}, {payload:#x}}}"),
                    };
                }
                if self.is_infinite() {
                    return write!(f, "{name}{{Inf, {sign}}}");
                }
                write!(
                    f,
                    "{name}{{{sign}, {}, {}}}",
                    self.coeff(),
                    self.unbiased_exp(),
                )
            }
        }

        impl ::core::fmt::Binary for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Binary::fmt(&self.to_bits(), f)
            }
        }
    };
}
pub(crate) use impl_dtoa;
