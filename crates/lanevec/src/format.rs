use std::{
    fmt::{Display, LowerExp},
    str::FromStr,
};

use crate::{Error, Locale, Result, Scalar};

/// Largest precision accepted after a format letter.
pub const MAX_PRECISION: usize = 99;

/// Formatting style of a single lane.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Plain integers, shortest round-trip floats (`G`).
    #[default]
    General,
    /// Zero-padded integers (`D`).
    Decimal,
    /// Two's complement hexadecimal of the lane width (`X`, `x`).
    Hex { upper: bool },
    /// Fixed number of fractional digits (`F`).
    Fixed,
    /// Like `Fixed` with group separators in the integer part (`N`).
    Number,
    /// Scientific notation with a three-digit signed exponent (`E`, `e`).
    Exponential { upper: bool },
}

/// Parsed lane format string: a letter followed by an optional precision.
///
/// An empty string is the general format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    kind: FormatKind,
    precision: Option<usize>,
}

impl FormatSpec {
    pub const GENERAL: Self = Self::new(FormatKind::General, None);

    pub const fn new(kind: FormatKind, precision: Option<usize>) -> Self {
        Self { kind, precision }
    }

    #[inline]
    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    #[inline]
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn letter(&self) -> char {
        match self.kind {
            FormatKind::General => 'G',
            FormatKind::Decimal => 'D',
            FormatKind::Hex { upper: true } => 'X',
            FormatKind::Hex { upper: false } => 'x',
            FormatKind::Fixed => 'F',
            FormatKind::Number => 'N',
            FormatKind::Exponential { upper: true } => 'E',
            FormatKind::Exponential { upper: false } => 'e',
        }
    }

    #[inline]
    fn precision_or(&self, default: usize) -> usize {
        self.precision.unwrap_or(default)
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormatSpec(s.to_string());

        let mut chars = s.chars();
        let Some(letter) = chars.next() else {
            return Ok(Self::GENERAL);
        };

        let kind = match letter {
            'G' | 'g' => FormatKind::General,
            'D' | 'd' => FormatKind::Decimal,
            'X' => FormatKind::Hex { upper: true },
            'x' => FormatKind::Hex { upper: false },
            'F' | 'f' => FormatKind::Fixed,
            'N' | 'n' => FormatKind::Number,
            'E' => FormatKind::Exponential { upper: true },
            'e' => FormatKind::Exponential { upper: false },
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let precision: usize = digits.parse().map_err(|_| invalid())?;
            if precision > MAX_PRECISION {
                return Err(invalid());
            }
            Some(precision)
        };

        Ok(Self { kind, precision })
    }
}

/// Appends `scalar` rendered with `spec` and `locale` to `out`.
pub fn format_scalar(
    scalar: Scalar,
    spec: &FormatSpec,
    locale: &Locale,
    out: &mut String,
) -> Result<()> {
    match scalar {
        Scalar::Unsigned { value, .. } => {
            format_integer(false, value, value, spec, locale, out);
            Ok(())
        }
        Scalar::Signed { value, bits } => {
            let raw = value as u64 & mask(bits);
            format_integer(value < 0, value.unsigned_abs(), raw, spec, locale, out);
            Ok(())
        }
        Scalar::F32(v) => format_float(v, scalar, spec, locale, out),
        Scalar::F64(v) => format_float(v, scalar, spec, locale, out),
    }
}

#[inline]
const fn mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

fn format_integer(
    negative: bool,
    magnitude: u64,
    raw: u64,
    spec: &FormatSpec,
    locale: &Locale,
    out: &mut String,
) {
    match spec.kind {
        FormatKind::General => push_number(out, negative, &magnitude.to_string(), false, locale),
        FormatKind::Decimal => {
            let width = spec.precision_or(0);
            push_number(out, negative, &format!("{magnitude:0>width$}"), false, locale)
        }
        FormatKind::Hex { upper } => {
            let width = spec.precision_or(0);
            let hex = if upper {
                format!("{raw:X}")
            } else {
                format!("{raw:x}")
            };
            out.push_str(&format!("{hex:0>width$}"));
        }
        FormatKind::Fixed | FormatKind::Number => {
            let precision = spec.precision_or(2);
            let mut body = magnitude.to_string();
            if precision > 0 {
                body.push('.');
                body.extend(std::iter::repeat_n('0', precision));
            }
            let grouped = spec.kind == FormatKind::Number;
            push_number(out, negative, &body, grouped, locale)
        }
        FormatKind::Exponential { upper } => {
            let precision = spec.precision_or(6);
            let body = exponential(&integer_exponential(magnitude, precision), upper);
            push_number(out, negative, &body, false, locale)
        }
    }
}

/// Scientific notation straight from the decimal digits, rounding half away from zero.
fn integer_exponential(magnitude: u64, precision: usize) -> String {
    let digits = magnitude.to_string();
    let keep = precision + 1;
    let mut exp = digits.len() - 1;
    let mut kept: Vec<u8> = digits.bytes().take(keep).collect();

    if digits.as_bytes().get(keep).is_some_and(|&next| next >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.truncate(keep);
            exp += 1;
        }
    }
    kept.resize(keep, b'0');

    let (lead, rest) = kept.split_at(1);
    let mut body = String::with_capacity(keep + 8);
    body.extend(lead.iter().map(|&d| char::from(d)));
    if !rest.is_empty() {
        body.push('.');
        body.extend(rest.iter().map(|&d| char::from(d)));
    }
    body.push('e');
    body.push_str(&exp.to_string());
    body
}

trait Float: Copy + Display + LowerExp + FromStr {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    <$t>::is_infinite(self)
                }

                #[inline]
                fn is_sign_negative(self) -> bool {
                    <$t>::is_sign_negative(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

fn format_float<F: Float>(
    v: F,
    scalar: Scalar,
    spec: &FormatSpec,
    locale: &Locale,
    out: &mut String,
) -> Result<()> {
    if matches!(spec.kind, FormatKind::Decimal | FormatKind::Hex { .. }) {
        return Err(Error::FormatNotSupported {
            spec: spec.letter(),
            kind: scalar.kind(),
        });
    }

    if v.is_nan() {
        out.push_str(locale.nan_symbol());
        return Ok(());
    }

    let negative = v.is_sign_negative();
    if v.is_infinite() {
        out.push_str(if negative {
            locale.negative_infinity()
        } else {
            locale.positive_infinity()
        });
        return Ok(());
    }

    let abs = v.abs();
    match spec.kind {
        FormatKind::General => {
            let body = match spec.precision {
                Some(digits) if digits > 0 => {
                    let fraction = digits - 1;
                    let rounded: F = format!("{abs:.fraction$e}").parse().unwrap_or(abs);
                    rounded.to_string()
                }
                _ => abs.to_string(),
            };
            push_number(out, negative, &body, false, locale);
        }
        FormatKind::Fixed | FormatKind::Number => {
            let precision = spec.precision_or(2);
            let grouped = spec.kind == FormatKind::Number;
            push_number(out, negative, &format!("{abs:.precision$}"), grouped, locale);
        }
        FormatKind::Exponential { upper } => {
            let precision = spec.precision_or(6);
            let body = exponential(&format!("{abs:.precision$e}"), upper);
            push_number(out, negative, &body, false, locale);
        }
        FormatKind::Decimal | FormatKind::Hex { .. } => unreachable!(),
    }
    Ok(())
}

/// Rewrites Rust's `1.5e-7` into `1.5E-007`.
fn exponential(rust: &str, upper: bool) -> String {
    let (mantissa, exp) = rust.split_once('e').unwrap_or((rust, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    format!(
        "{mantissa}{}{}{:03}",
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

/// Pushes an ASCII number body, swapping in the locale's sign and separators.
fn push_number(out: &mut String, negative: bool, body: &str, grouped: bool, locale: &Locale) {
    let (int, frac) = match body.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (body, None),
    };

    if negative {
        out.push_str(locale.negative_sign());
    }

    if grouped {
        for (i, digit) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                out.push_str(locale.group_separator());
            }
            out.push(digit);
        }
    } else {
        out.push_str(int);
    }

    if let Some(frac) = frac {
        out.push_str(locale.decimal_separator());
        out.push_str(frac);
    }
}
