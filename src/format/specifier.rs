//! Tokenizer and renderer for `%[index$][flags][width][.precision]conversion` specifiers

use super::arg::Arg;
use crate::error::FormatError;

const FLAG_CHARS: &[u8] = b"-#+ 0,";
const CONVERSIONS: &str = "sSbBcCdxXofeE%n";

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    /// `%%`
    Percent,
    /// `%n`
    Newline,
    Conversion(Spec<'a>),
}

/// One conversion specifier
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spec<'a> {
    /// Source text of the specifier, `%` included
    pub raw: &'a str,
    /// 1-based explicit argument index (`%2$s`)
    pub index: Option<usize>,
    flags: &'a str,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Split a template into text runs and specifiers
///
/// The whole template is validated before anything is rendered, so a bad
/// specifier late in the string fails the call without partial output.
pub(crate) fn parse(template: &str) -> Result<Vec<Token<'_>>, FormatError> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        if pos > 0 {
            tokens.push(Token::Text(&rest[..pos]));
        }
        let (token, len) = parse_specifier(&rest[pos..])?;
        tokens.push(token);
        rest = &rest[pos + len..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Parse the specifier at the start of `s` (which begins with `%`).
/// Returns the token and its length in bytes.
fn parse_specifier(s: &str) -> Result<(Token<'_>, usize), FormatError> {
    let bytes = s.as_bytes();
    let mut i = 1;

    let mut index = None;
    let end = digits_end(bytes, i);
    if end > i && bytes.get(end) == Some(&b'$') {
        index = Some(s[i..end].parse().unwrap_or(usize::MAX));
        i = end + 1;
    }

    let flags_start = i;
    while i < bytes.len() && FLAG_CHARS.contains(&bytes[i]) {
        i += 1;
    }
    let flags = &s[flags_start..i];

    let mut width = None;
    let end = digits_end(bytes, i);
    if end > i {
        width = s[i..end].parse().ok();
        i = end;
    }

    let mut precision = None;
    if bytes.get(i) == Some(&b'.') {
        let end = digits_end(bytes, i + 1);
        if end == i + 1 {
            return Err(FormatError::UnknownConversion { conversion: '.' });
        }
        precision = s[i + 1..end].parse().ok();
        i = end;
    }

    let Some(conversion) = s[i..].chars().next() else {
        return Err(FormatError::DanglingPercent { spec: s.to_string() });
    };
    if !CONVERSIONS.contains(conversion) {
        return Err(FormatError::UnknownConversion { conversion });
    }

    let len = i + conversion.len_utf8();
    let raw = &s[..len];

    let token = match conversion {
        '%' => Token::Percent,
        'n' => Token::Newline,
        _ => {
            if (flags.contains('-') || flags.contains('0')) && width.is_none() {
                return Err(FormatError::MissingWidth {
                    spec: raw.to_string(),
                });
            }
            Token::Conversion(Spec {
                raw,
                index,
                flags,
                width,
                precision,
                conversion,
            })
        }
    };
    Ok((token, len))
}

impl Spec<'_> {
    /// Render `arg` through this specifier
    pub(crate) fn render(&self, arg: &Arg) -> Result<String, FormatError> {
        if self.has('-') && self.has('0') {
            return Err(self.flag_mismatch('0'));
        }
        let body = self.render_body(arg)?;
        let body = if self.conversion.is_ascii_uppercase() {
            body.to_uppercase()
        } else {
            body
        };
        Ok(self.pad(body))
    }

    fn render_body(&self, arg: &Arg) -> Result<String, FormatError> {
        match self.conversion.to_ascii_lowercase() {
            's' => {
                self.allow_flags("-")?;
                Ok(self.truncate(arg.to_string()))
            }
            'b' => {
                self.allow_flags("-")?;
                let value = !matches!(arg, Arg::Null | Arg::Bool(false));
                Ok(self.truncate(value.to_string()))
            }
            'c' => {
                self.allow_flags("-")?;
                self.forbid_precision()?;
                let c = match arg {
                    Arg::Null => return Ok("null".to_string()),
                    Arg::Char(c) => Some(*c),
                    Arg::Int { value, .. } => u32::try_from(*value).ok().and_then(char::from_u32),
                    Arg::UInt(v) => u32::try_from(*v).ok().and_then(char::from_u32),
                    _ => None,
                };
                c.map(String::from).ok_or_else(|| self.illegal(arg))
            }
            'd' => {
                self.allow_flags("-+ 0,")?;
                self.forbid_precision()?;
                match arg {
                    Arg::Null => Ok("null".to_string()),
                    Arg::Int { value, .. } => {
                        Ok(self.signed(*value < 0, value.unsigned_abs().to_string()))
                    }
                    Arg::UInt(v) => Ok(self.signed(false, v.to_string())),
                    _ => Err(self.illegal(arg)),
                }
            }
            'x' | 'o' => {
                self.allow_flags("-#0")?;
                self.forbid_precision()?;
                // Negative values print as two's complement at their source width
                let bits = match arg {
                    Arg::Null => return Ok("null".to_string()),
                    Arg::Int { value, bits } => twos_complement(*value, *bits),
                    Arg::UInt(v) => *v,
                    _ => return Err(self.illegal(arg)),
                };
                let hex = self.conversion.to_ascii_lowercase() == 'x';
                let digits = if hex {
                    format!("{bits:x}")
                } else {
                    format!("{bits:o}")
                };
                let prefix = match (self.has('#'), hex) {
                    (false, _) => "",
                    (true, true) => "0x",
                    (true, false) => "0",
                };
                Ok(self.zero_pad(prefix, digits))
            }
            'f' | 'e' => {
                let fixed = self.conversion == 'f';
                self.allow_flags(if fixed { "-#+ 0," } else { "-#+ 0" })?;
                let value = match arg {
                    Arg::Null => return Ok("null".to_string()),
                    Arg::Float(v) => *v,
                    Arg::Float32(v) => f64::from(*v),
                    _ => return Err(self.illegal(arg)),
                };
                if value.is_nan() {
                    return Ok("NaN".to_string());
                }
                if value.is_infinite() {
                    let sign = if value < 0.0 {
                        "-"
                    } else if self.has('+') {
                        "+"
                    } else {
                        ""
                    };
                    return Ok(format!("{sign}Infinity"));
                }
                let precision = self.precision.unwrap_or(6);
                let magnitude = if fixed {
                    format!("{:.*}", precision, value.abs())
                } else {
                    scientific(value.abs(), precision)
                };
                Ok(self.signed(value.is_sign_negative(), magnitude))
            }
            _ => Err(FormatError::UnknownConversion {
                conversion: self.conversion,
            }),
        }
    }

    fn has(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    fn allow_flags(&self, allowed: &str) -> Result<(), FormatError> {
        match self.flags.chars().find(|f| !allowed.contains(*f)) {
            Some(flag) => Err(self.flag_mismatch(flag)),
            None => Ok(()),
        }
    }

    fn forbid_precision(&self) -> Result<(), FormatError> {
        if self.precision.is_some() {
            return Err(FormatError::IllegalPrecision {
                conversion: self.conversion,
            });
        }
        Ok(())
    }

    fn flag_mismatch(&self, flag: char) -> FormatError {
        FormatError::FlagMismatch {
            flag,
            conversion: self.conversion,
        }
    }

    fn illegal(&self, arg: &Arg) -> FormatError {
        FormatError::IllegalConversion {
            conversion: self.conversion,
            arg: arg.kind(),
        }
    }

    fn truncate(&self, text: String) -> String {
        match self.precision {
            Some(max) => text.chars().take(max).collect(),
            None => text,
        }
    }

    fn signed(&self, negative: bool, magnitude: String) -> String {
        let magnitude = if self.has(',') {
            group_thousands(&magnitude)
        } else {
            magnitude
        };
        let sign = if negative {
            "-"
        } else if self.has('+') {
            "+"
        } else if self.has(' ') {
            " "
        } else {
            ""
        };
        self.zero_pad(sign, magnitude)
    }

    fn zero_pad(&self, prefix: &str, digits: String) -> String {
        match self.width {
            Some(width) if self.has('0') => {
                let len = prefix.chars().count() + digits.chars().count();
                let zeros = "0".repeat(width.saturating_sub(len));
                format!("{prefix}{zeros}{digits}")
            }
            _ => format!("{prefix}{digits}"),
        }
    }

    fn pad(&self, body: String) -> String {
        let Some(width) = self.width else {
            return body;
        };
        let len = body.chars().count();
        if len >= width {
            return body;
        }
        let fill = " ".repeat(width - len);
        if self.has('-') {
            body + &fill
        } else {
            fill + &body
        }
    }
}

/// Reinterpret `value` as an unsigned number `bits` wide
fn twos_complement(value: i64, bits: u32) -> u64 {
    let mask = u64::MAX >> (64 - bits.clamp(1, 64));
    value as u64 & mask
}

/// `1.234568e+04` style exponent notation
fn scientific(value: f64, precision: usize) -> String {
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => text,
    }
}

fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (number, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
