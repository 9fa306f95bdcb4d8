//! Positional arguments for printf-style templates

use std::fmt;

/// A single argument interpolated into a log template
///
/// Built through `From` for the primitive and string types, so the logging
/// macros can accept plain values: `debug!("took %d ms", elapsed)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Char(char),
    /// Signed integer with the bit width of its source type
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    /// Kept apart from `Float` so `%s` prints the shortest `f32` form
    Float32(f32),
    Str(String),
}

impl Arg {
    /// Render any `Display` value as a string argument
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Arg::Str(value.to_string())
    }

    /// Render any `Debug` value as a string argument
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Arg::Str(format!("{value:?}"))
    }

    /// Short name of the argument type, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
            Arg::Int { .. } => "signed integer",
            Arg::UInt(_) => "unsigned integer",
            Arg::Float(_) | Arg::Float32(_) => "float",
            Arg::Str(_) => "string",
        }
    }
}

/// The `%s` rendering of an argument
impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("null"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Char(v) => write!(f, "{v}"),
            Arg::Int { value, .. } => write!(f, "{value}"),
            Arg::UInt(v) => write!(f, "{v}"),
            // Debug keeps the fractional part on whole numbers ("2.0", not "2")
            Arg::Float(v) => write!(f, "{v:?}"),
            Arg::Float32(v) => write!(f, "{v:?}"),
            Arg::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from {
    ($source:ty => |$value:ident| $build:expr) => {
        impl From<$source> for Arg {
            fn from($value: $source) -> Self {
                $build
            }
        }

        impl From<&$source> for Arg {
            fn from(value: &$source) -> Self {
                Arg::from(*value)
            }
        }
    };
}

macro_rules! impl_from_signed {
    ($($source:ty),+) => {
        $(impl_from!($source => |value| Arg::Int {
            value: value as i64,
            bits: <$source>::BITS,
        });)+
    };
}

macro_rules! impl_from_unsigned {
    ($($source:ty),+) => {
        $(impl_from!($source => |value| Arg::UInt(value as u64));)+
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from!(f32 => |value| Arg::Float32(value));
impl_from!(f64 => |value| Arg::Float(value));

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&bool> for Arg {
    fn from(value: &bool) -> Self {
        Arg::Bool(*value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<&char> for Arg {
    fn from(value: &char) -> Self {
        Arg::Char(*value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

/// Lists render like `[one, two]`
impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        let items: Vec<String> = values.into_iter().map(|v| v.into().to_string()).collect();
        Arg::Str(format!("[{}]", items.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Arg::from(2), Arg::Int { value: 2, bits: 32 });
        assert_eq!(Arg::from(-7i8), Arg::Int { value: -7, bits: 8 });
        assert_eq!(Arg::from(&9i64), Arg::Int { value: 9, bits: 64 });
        assert_eq!(Arg::from(3usize), Arg::UInt(3));
        assert_eq!(Arg::from(&5u16), Arg::UInt(5));
        assert_eq!(Arg::from(1.5f32), Arg::Float32(1.5));
        assert_eq!(Arg::from(1.5), Arg::Float(1.5));
        assert_eq!(Arg::from('x'), Arg::Char('x'));
        assert_eq!(Arg::from(true), Arg::Bool(true));
    }

    #[test]
    fn test_from_strings_and_options() {
        let owned = String::from("owned");
        assert_eq!(Arg::from("lit"), Arg::Str("lit".into()));
        assert_eq!(Arg::from(&owned), Arg::Str("owned".into()));
        assert_eq!(Arg::from(None::<i32>), Arg::Null);
        assert_eq!(Arg::from(Some(4)), Arg::Int { value: 4, bits: 32 });
    }

    #[test]
    fn test_list_rendering() {
        let arg = Arg::from(vec!["one", "two"]);
        assert_eq!(arg.to_string(), "[one, two]");
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Arg::Null.to_string(), "null");
        assert_eq!(Arg::Float(2.0).to_string(), "2.0");
        assert_eq!(Arg::from(1.1f32).to_string(), "1.1");
        assert_eq!(Arg::from(1.1f64).to_string(), "1.1");
        assert_eq!(Arg::display(&std::net::Ipv4Addr::LOCALHOST).to_string(), "127.0.0.1");
        assert_eq!(Arg::debug("quoted").to_string(), "\"quoted\"");
    }
}
