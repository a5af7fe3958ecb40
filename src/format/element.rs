//! Typed Zero elements
//!
//! An element pairs a kind with a value of exactly that kind. The pairing is
//! enforced by the enum itself: each variant carries the payload its tag
//! implies, so a `String` element can never hold a sequence.

use std::fmt;

use bytes::Bytes;

use super::{Error, Result, ZeroArray, ZeroMap, ZeroType};

/// A single typed value, the atomic unit of the Zero format
///
/// Equality is exact: floats compare by bit pattern, so a `NaN` element
/// equals itself and `0.0` differs from `-0.0`, matching what the wire
/// carries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroElement {
    /// Explicitly absent value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Raw byte
    Byte(u8),
    /// 16-bit integer
    Short(i16),
    /// 32-bit integer
    Integer(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// UTF-8 string
    String(String),
    /// Booleans
    BooleanArray(Vec<bool>),
    /// Binary blob
    ByteArray(Bytes),
    /// Shorts
    ShortArray(Vec<i16>),
    /// Integers
    IntegerArray(Vec<i32>),
    /// Longs
    LongArray(Vec<i64>),
    /// Floats
    FloatArray(Vec<f32>),
    /// Doubles
    DoubleArray(Vec<f64>),
    /// Strings
    StringArray(Vec<String>),
    /// Nested sequence container
    NestedArray(ZeroArray),
    /// Nested keyed container
    NestedMap(ZeroMap),
}

macro_rules! copy_accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<$ty> {
            match self {
                Self::$variant(v) => Ok(*v),
                other => Err(other.wrong_kind(ZeroType::$variant)),
            }
        }
    };
}

macro_rules! ref_accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty, $v:ident => $conv:expr) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<$ty> {
            match self {
                Self::$variant($v) => Ok($conv),
                other => Err(other.wrong_kind(ZeroType::$variant)),
            }
        }
    };
}

impl ZeroElement {
    /// Kind of this element
    #[must_use]
    pub const fn kind(&self) -> ZeroType {
        match self {
            Self::Null => ZeroType::Null,
            Self::Boolean(_) => ZeroType::Boolean,
            Self::Byte(_) => ZeroType::Byte,
            Self::Short(_) => ZeroType::Short,
            Self::Integer(_) => ZeroType::Integer,
            Self::Long(_) => ZeroType::Long,
            Self::Float(_) => ZeroType::Float,
            Self::Double(_) => ZeroType::Double,
            Self::String(_) => ZeroType::String,
            Self::BooleanArray(_) => ZeroType::BooleanArray,
            Self::ByteArray(_) => ZeroType::ByteArray,
            Self::ShortArray(_) => ZeroType::ShortArray,
            Self::IntegerArray(_) => ZeroType::IntegerArray,
            Self::LongArray(_) => ZeroType::LongArray,
            Self::FloatArray(_) => ZeroType::FloatArray,
            Self::DoubleArray(_) => ZeroType::DoubleArray,
            Self::StringArray(_) => ZeroType::StringArray,
            Self::NestedArray(_) => ZeroType::NestedArray,
            Self::NestedMap(_) => ZeroType::NestedMap,
        }
    }

    /// Check if this element is `Null`
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn wrong_kind(&self, expected: ZeroType) -> Error {
        Error::WrongKind {
            expected,
            found: self.kind(),
        }
    }

    copy_accessor!(
        /// Read a boolean
        as_boolean, Boolean, bool
    );
    copy_accessor!(
        /// Read a byte
        as_byte, Byte, u8
    );
    copy_accessor!(
        /// Read a short
        as_short, Short, i16
    );
    copy_accessor!(
        /// Read an integer
        as_integer, Integer, i32
    );
    copy_accessor!(
        /// Read a long
        as_long, Long, i64
    );
    copy_accessor!(
        /// Read a float
        as_float, Float, f32
    );
    copy_accessor!(
        /// Read a double
        as_double, Double, f64
    );
    ref_accessor!(
        /// Read a string
        as_str, String, &str, v => v.as_str()
    );
    ref_accessor!(
        /// Read a boolean array
        as_boolean_array, BooleanArray, &[bool], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a byte array
        as_byte_array, ByteArray, &Bytes, v => v
    );
    ref_accessor!(
        /// Read a short array
        as_short_array, ShortArray, &[i16], v => v.as_slice()
    );
    ref_accessor!(
        /// Read an integer array
        as_integer_array, IntegerArray, &[i32], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a long array
        as_long_array, LongArray, &[i64], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a float array
        as_float_array, FloatArray, &[f32], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a double array
        as_double_array, DoubleArray, &[f64], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a string array
        as_string_array, StringArray, &[String], v => v.as_slice()
    );
    ref_accessor!(
        /// Read a nested array
        as_nested_array, NestedArray, &ZeroArray, v => v
    );
    ref_accessor!(
        /// Read a nested map
        as_nested_map, NestedMap, &ZeroMap, v => v
    );

    /// Write the element as an indented tree, one line per value.
    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Self::NestedArray(array) => {
                writeln!(f, "({})", self.kind())?;
                array.write_tree(f, indent + 1)
            }
            Self::NestedMap(map) => {
                writeln!(f, "({})", self.kind())?;
                map.write_tree(f, indent + 1)
            }
            Self::Null => writeln!(f, "(Null) null"),
            Self::Boolean(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::Byte(v) => writeln!(f, "({}) {v:#04x}", self.kind()),
            Self::Short(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::Integer(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::Long(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::Float(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::Double(v) => writeln!(f, "({}) {v}", self.kind()),
            Self::String(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::ByteArray(v) => writeln!(f, "({}) [{} bytes]", self.kind(), v.len()),
            Self::BooleanArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::ShortArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::IntegerArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::LongArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::FloatArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::DoubleArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
            Self::StringArray(v) => writeln!(f, "({}) {v:?}", self.kind()),
        }
    }
}

fn same_bits<T: Copy, B: PartialEq>(a: &[T], b: &[T], bits: impl Fn(T) -> B) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| bits(*x) == bits(*y))
}

impl PartialEq for ZeroElement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::BooleanArray(a), Self::BooleanArray(b)) => a == b,
            (Self::ByteArray(a), Self::ByteArray(b)) => a == b,
            (Self::ShortArray(a), Self::ShortArray(b)) => a == b,
            (Self::IntegerArray(a), Self::IntegerArray(b)) => a == b,
            (Self::LongArray(a), Self::LongArray(b)) => a == b,
            (Self::FloatArray(a), Self::FloatArray(b)) => same_bits(a, b, f32::to_bits),
            (Self::DoubleArray(a), Self::DoubleArray(b)) => same_bits(a, b, f64::to_bits),
            (Self::StringArray(a), Self::StringArray(b)) => a == b,
            (Self::NestedArray(a), Self::NestedArray(b)) => a == b,
            (Self::NestedMap(a), Self::NestedMap(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ZeroElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ZeroElement {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    u8 => Byte,
    i16 => Short,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Vec<bool> => BooleanArray,
    Bytes => ByteArray,
    Vec<i16> => ShortArray,
    Vec<i32> => IntegerArray,
    Vec<i64> => LongArray,
    Vec<f32> => FloatArray,
    Vec<f64> => DoubleArray,
    Vec<String> => StringArray,
    ZeroArray => NestedArray,
    ZeroMap => NestedMap,
}

impl From<&str> for ZeroElement {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<u8>> for ZeroElement {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteArray(Bytes::from(value))
    }
}

impl From<&[u8]> for ZeroElement {
    fn from(value: &[u8]) -> Self {
        Self::ByteArray(Bytes::copy_from_slice(value))
    }
}

impl<T: Into<ZeroElement>> From<Option<T>> for ZeroElement {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
