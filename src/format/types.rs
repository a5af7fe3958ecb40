//! Zero value kinds and their wire tags

use std::fmt;

/// Every value kind representable in the Zero format.
///
/// The discriminant is the one-byte wire tag. Tags are persisted with the
/// data and must never be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ZeroType {
    /// Explicitly absent value
    Null = 0,
    /// `true` / `false`
    Boolean = 1,
    /// Single raw byte
    Byte = 2,
    /// 16-bit signed integer
    Short = 3,
    /// 32-bit signed integer
    Integer = 4,
    /// 64-bit signed integer
    Long = 5,
    /// 32-bit IEEE-754 float
    Float = 6,
    /// 64-bit IEEE-754 float
    Double = 7,
    /// UTF-8 string
    String = 8,
    /// Sequence of booleans
    BooleanArray = 9,
    /// Flat binary blob
    ByteArray = 10,
    /// Sequence of shorts
    ShortArray = 11,
    /// Sequence of integers
    IntegerArray = 12,
    /// Sequence of longs
    LongArray = 13,
    /// Sequence of floats
    FloatArray = 14,
    /// Sequence of doubles
    DoubleArray = 15,
    /// Sequence of strings
    StringArray = 16,
    /// Nested [`ZeroArray`](super::ZeroArray)
    NestedArray = 17,
    /// Nested [`ZeroMap`](super::ZeroMap)
    NestedMap = 18,
}

impl ZeroType {
    /// All kinds in tag order.
    pub const ALL: [Self; 19] = [
        Self::Null,
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::String,
        Self::BooleanArray,
        Self::ByteArray,
        Self::ShortArray,
        Self::IntegerArray,
        Self::LongArray,
        Self::FloatArray,
        Self::DoubleArray,
        Self::StringArray,
        Self::NestedArray,
        Self::NestedMap,
    ];

    /// Convert from wire tag
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Convert to wire tag
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this kind is a nested container
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::NestedArray | Self::NestedMap)
    }

    /// Check if this kind is a homogeneous scalar array
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::BooleanArray
                | Self::ByteArray
                | Self::ShortArray
                | Self::IntegerArray
                | Self::LongArray
                | Self::FloatArray
                | Self::DoubleArray
                | Self::StringArray
        )
    }

    /// Width of the fixed-size payload, `None` for variable-length kinds.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Null => Some(0),
            Self::Boolean | Self::Byte => Some(1),
            Self::Short => Some(2),
            Self::Integer | Self::Float => Some(4),
            Self::Long | Self::Double => Some(8),
            _ => None,
        }
    }
}

impl TryFrom<u8> for ZeroType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<ZeroType> for u8 {
    fn from(value: ZeroType) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for ZeroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::BooleanArray => "BooleanArray",
            Self::ByteArray => "ByteArray",
            Self::ShortArray => "ShortArray",
            Self::IntegerArray => "IntegerArray",
            Self::LongArray => "LongArray",
            Self::FloatArray => "FloatArray",
            Self::DoubleArray => "DoubleArray",
            Self::StringArray => "StringArray",
            Self::NestedArray => "NestedArray",
            Self::NestedMap => "NestedMap",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for kind in ZeroType::ALL {
            let tag = kind.as_u8();
            assert_eq!(ZeroType::from_u8(tag), Some(kind));
        }
    }

    #[test]
    fn test_tags_are_stable() {
        assert_eq!(ZeroType::Null.as_u8(), 0);
        assert_eq!(ZeroType::String.as_u8(), 8);
        assert_eq!(ZeroType::ByteArray.as_u8(), 10);
        assert_eq!(ZeroType::NestedArray.as_u8(), 17);
        assert_eq!(ZeroType::NestedMap.as_u8(), 18);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(ZeroType::from_u8(19), None);
        assert_eq!(ZeroType::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn test_classification() {
        assert!(ZeroType::NestedMap.is_container());
        assert!(!ZeroType::StringArray.is_container());
        assert!(ZeroType::ByteArray.is_array());
        assert!(!ZeroType::String.is_array());
        assert_eq!(ZeroType::Long.fixed_width(), Some(8));
        assert_eq!(ZeroType::String.fixed_width(), None);
    }
}
