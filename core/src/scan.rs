//! scanf-style scan formats.
//!
//! A format holds exactly one conversion, optionally preceded and followed
//! by literal text. Whitespace in the format matches any run of whitespace
//! in the input, including none. Text after the conversion is not checked,
//! matching scanf, which only counts assigned values.
//!
//! Two exact formats bypass scanning: `%s` returns the raw text untouched
//! and `%b` maps `true`, `yes`, `1` and `on` to `true` and anything else to
//! `false`.
//!
//! # Examples
//!
//! ```
//! use shortopt_core::{ScanFormat, Value};
//!
//! let fmt = ScanFormat::parse("%d").unwrap();
//! assert_eq!(fmt.scan(" 42abc"), Some(Value::Int(42)));
//! assert_eq!(fmt.scan("abc"), None);
//!
//! let fmt = ScanFormat::parse("x=%lf").unwrap();
//! assert_eq!(fmt.scan("x=2.5"), Some(Value::Float(2.5)));
//!
//! let fmt = ScanFormat::parse("%b").unwrap();
//! assert_eq!(fmt.scan("on"), Some(Value::Bool(true)));
//! assert_eq!(fmt.scan("ON"), Some(Value::Bool(false)));
//! ```

use crate::value::Value;

/// Raw texts that scan as `true` under `%b`.
pub const TRUE_WORDS: &[&str] = &["true", "yes", "1", "on"];

/// Length modifiers accepted and ignored between `%` and the conversion.
const LENGTH_MODIFIERS: &[char] = &['h', 'l', 'L', 'q', 'j', 'z', 't'];

/// What a single conversion extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`: signed decimal.
    Decimal,
    /// `%i`: signed integer, base from prefix (`0x` hex, `0` octal).
    Integer,
    /// `%u`: unsigned decimal.
    Unsigned,
    /// `%x`, `%X`: unsigned hexadecimal.
    Hex,
    /// `%o`: unsigned octal.
    Octal,
    /// `%f`, `%e`, `%g`, `%a` and upper-case forms; decimal or `0x` hex.
    Float,
    /// `%c`: one character, no whitespace skipping.
    Char,
    /// `%s` among other text: one whitespace-delimited word.
    Word,
}

/// A parsed scan format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFormat {
    /// Exactly `%s`: the raw text.
    Raw,
    /// Exactly `%b`: boolean words.
    Boolean,
    /// A single conversion with literal text before it.
    Pattern {
        prefix: String,
        width: Option<usize>,
        conversion: Conversion,
    },
}

impl ScanFormat {
    /// Parses a format string or one of the aliases `string`, `boolean`
    /// (`bool`), `integer` (`int`), `float` (`double`).
    ///
    /// Returns `None` for formats without exactly one supported conversion.
    pub fn parse(format: &str) -> Option<Self> {
        let format = match format {
            "string" => "%s",
            "boolean" | "bool" => "%b",
            "integer" | "int" => "%d",
            "float" | "double" => "%lf",
            other => other,
        };
        match format {
            "%s" => return Some(Self::Raw),
            "%b" => return Some(Self::Boolean),
            _ => {}
        }

        let mut chars = format.chars().peekable();
        let mut prefix = String::new();
        while let Some(c) = chars.next() {
            if c != '%' {
                prefix.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                prefix.push('%');
                continue;
            }

            let mut width: Option<usize> = None;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = Some(
                    width
                        .unwrap_or(0)
                        .checked_mul(10)?
                        .checked_add(d as usize)?,
                );
                chars.next();
            }
            while chars.peek().is_some_and(|c| LENGTH_MODIFIERS.contains(c)) {
                chars.next();
            }
            let conversion = match chars.next()? {
                'd' => Conversion::Decimal,
                'i' => Conversion::Integer,
                'u' => Conversion::Unsigned,
                'x' | 'X' => Conversion::Hex,
                'o' => Conversion::Octal,
                'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' => Conversion::Float,
                'c' => Conversion::Char,
                's' => Conversion::Word,
                _ => return None,
            };
            if width == Some(0) {
                return None;
            }

            // A second conversion would assign a second value.
            let rest: String = chars.collect();
            if rest.replace("%%", "").contains('%') {
                return None;
            }
            return Some(Self::Pattern {
                prefix,
                width,
                conversion,
            });
        }
        None
    }

    /// Scans `input`, returning the single extracted value.
    pub fn scan<'a>(&self, input: &'a str) -> Option<Value<'a>> {
        match self {
            Self::Raw => Some(Value::Str(input)),
            Self::Boolean => Some(Value::Bool(TRUE_WORDS.contains(&input))),
            Self::Pattern {
                prefix,
                width,
                conversion,
            } => {
                let input = match_literal(input, prefix)?;
                scan_conversion(input, *width, *conversion)
            }
        }
    }
}

/// Consumes `literal` from the front of `input`.
fn match_literal<'a>(mut input: &'a str, literal: &str) -> Option<&'a str> {
    for c in literal.chars() {
        if c.is_whitespace() {
            input = input.trim_start();
        } else {
            input = input.strip_prefix(c)?;
        }
    }
    Some(input)
}

/// Limits `input` to at most `width` characters.
fn field(input: &str, width: Option<usize>) -> &str {
    match width {
        Some(width) => {
            let end = input
                .char_indices()
                .nth(width)
                .map_or(input.len(), |(i, _)| i);
            &input[..end]
        }
        None => input,
    }
}

fn scan_conversion(input: &str, width: Option<usize>, conversion: Conversion) -> Option<Value<'_>> {
    let trimmed = field(input.trim_start(), width);
    match conversion {
        Conversion::Char => field(input, width).chars().next().map(Value::Char),
        Conversion::Decimal => scan_signed(trimmed, Some(10)).map(Value::Int),
        Conversion::Integer => scan_signed(trimmed, None).map(Value::Int),
        Conversion::Unsigned => scan_unsigned(trimmed, 10).map(Value::Uint),
        Conversion::Hex => scan_unsigned(trimmed, 16).map(Value::Uint),
        Conversion::Octal => scan_unsigned(trimmed, 8).map(Value::Uint),
        Conversion::Float => scan_float(trimmed).map(Value::Float),
        Conversion::Word => {
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            (end > 0).then(|| Value::Str(&trimmed[..end]))
        }
    }
}

/// Splits an optional sign off the front. Returns `true` for `-`.
fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else {
        (false, input.strip_prefix('+').unwrap_or(input))
    }
}

/// Leading digits of `input` in `radix`.
fn leading_digits(input: &str, radix: u32) -> &str {
    let end = input
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(input.len());
    &input[..end]
}

/// Strips a `0x`/`0X` prefix when hex digits follow it.
fn strip_hex_prefix(input: &str) -> Option<&str> {
    let rest = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))?;
    rest.starts_with(|c: char| c.is_ascii_hexdigit())
        .then_some(rest)
}

/// Magnitude of a number. `radix` of `None` detects the base from the
/// prefix.
fn scan_magnitude(input: &str, radix: Option<u32>) -> Option<u64> {
    let (digits, radix) = match radix {
        Some(16) => (leading_digits(strip_hex_prefix(input).unwrap_or(input), 16), 16),
        Some(radix) => (leading_digits(input, radix), radix),
        None => match strip_hex_prefix(input) {
            Some(rest) => (leading_digits(rest, 16), 16),
            None if input.starts_with('0') => (leading_digits(input, 8), 8),
            None => (leading_digits(input, 10), 10),
        },
    };
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn scan_signed(input: &str, radix: Option<u32>) -> Option<i64> {
    let (negative, rest) = split_sign(input);
    let magnitude = i128::from(scan_magnitude(rest, radix)?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn scan_unsigned(input: &str, radix: u32) -> Option<u64> {
    let rest = input.strip_prefix('+').unwrap_or(input);
    scan_magnitude(rest, Some(radix))
}

fn scan_float(input: &str) -> Option<f64> {
    let (negative, unsigned) = split_sign(input);
    let sign_len = input.len() - unsigned.len();

    if let Some(magnitude) = scan_hex_float(unsigned) {
        return Some(if negative { -magnitude } else { magnitude });
    }

    for word in ["infinity", "inf", "nan"] {
        let matches = unsigned
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word));
        if matches {
            return input[..sign_len + word.len()].parse().ok();
        }
    }

    let int_part = leading_digits(unsigned, 10);
    let mut len = int_part.len();
    let mut mantissa_digits = int_part.len();
    if let Some(after_dot) = unsigned[len..].strip_prefix('.') {
        let frac = leading_digits(after_dot, 10);
        len += 1 + frac.len();
        mantissa_digits += frac.len();
    }
    if mantissa_digits == 0 {
        return None;
    }

    let after_mantissa = &unsigned[len..];
    if let Some(exp) = after_mantissa
        .strip_prefix('e')
        .or_else(|| after_mantissa.strip_prefix('E'))
    {
        let (_, exp_digits) = split_sign(exp);
        let digits = leading_digits(exp_digits, 10);
        if !digits.is_empty() {
            len += 1 + (exp.len() - exp_digits.len()) + digits.len();
        }
    }

    input[..sign_len + len].parse().ok()
}

/// Hexadecimal float `0x<hex>[.<hex>][p[+-]<dec>]`, unsigned. `None` when
/// no hex digit follows the prefix, leaving `0x` to scan as `0`.
fn scan_hex_float(input: &str) -> Option<f64> {
    let rest = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))?;

    let int_part = leading_digits(rest, 16);
    let mut after_mantissa = &rest[int_part.len()..];
    let mut frac_part = "";
    if let Some(after_dot) = after_mantissa.strip_prefix('.') {
        frac_part = leading_digits(after_dot, 16);
        after_mantissa = &after_dot[frac_part.len()..];
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut mantissa = 0.0_f64;
    for d in int_part.chars().chain(frac_part.chars()) {
        mantissa = mantissa * 16.0 + f64::from(d.to_digit(16)?);
    }
    if mantissa == 0.0 {
        return Some(0.0);
    }

    let mut exponent: i64 = 0;
    if let Some(exp) = after_mantissa
        .strip_prefix('p')
        .or_else(|| after_mantissa.strip_prefix('P'))
    {
        let (exp_negative, exp_digits) = split_sign(exp);
        let digits = leading_digits(exp_digits, 10);
        if !digits.is_empty() {
            let value = digits.parse::<i64>().unwrap_or(i64::MAX);
            exponent = if exp_negative { -value } else { value };
        }
    }

    // Each fraction digit is four bits below the binary point.
    let frac_bits = i64::try_from(frac_part.len()).ok()?.saturating_mul(4);
    let shift = exponent.saturating_sub(frac_bits).clamp(-10_000, 10_000);
    let shift = i32::try_from(shift).ok()?;
    // Scaled in two steps so neither power of two leaves the f64 range.
    let half = shift / 2;
    Some(mantissa * 2f64.powi(half) * 2f64.powi(shift - half))
}
