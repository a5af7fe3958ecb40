//! Ordered sequence container

use std::fmt;

use bytes::Bytes;

use super::{Error, ReadOnly, Result, ZeroElement, ZeroMap, ZeroType};

/// Ordered list of typed elements, addressed by 0-based position.
///
/// Mutators append and return `&mut Self`, so calls can be chained:
///
/// ```rust
/// use zero::ZeroArray;
///
/// let mut array = ZeroArray::new();
/// array.add_boolean(true).add_integer(1000).add_string("abc");
/// assert_eq!(array.get_integer(1)?, 1000);
/// # Ok::<(), zero::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZeroArray {
    elements: Vec<ZeroElement>,
}

macro_rules! typed_pair {
    ($add:ident, $get:ident, $variant:ident, $in:ty, $out:ty, $accessor:ident) => {
        #[doc = concat!("Append a `", stringify!($variant), "` element.")]
        pub fn $add(&mut self, value: $in) -> &mut Self {
            self.elements.push(ZeroElement::$variant(value.into()));
            self
        }

        #[doc = concat!("Read the `", stringify!($variant), "` element at `index`.")]
        pub fn $get(&self, index: usize) -> Result<$out> {
            self.non_null(index)?.$accessor()
        }
    };
}

impl ZeroArray {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `capacity` elements
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the array has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ZeroElement> {
        self.elements.iter()
    }

    /// Append an already-typed element
    pub fn add_element(&mut self, element: impl Into<ZeroElement>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Append a `Null` element
    pub fn add_null(&mut self) -> &mut Self {
        self.elements.push(ZeroElement::Null);
        self
    }

    /// Element at `index`
    pub fn get_element(&self, index: usize) -> Result<&ZeroElement> {
        self.elements.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        })
    }

    /// Kind of the element at `index`
    pub fn kind_at(&self, index: usize) -> Result<ZeroType> {
        self.get_element(index).map(ZeroElement::kind)
    }

    /// Check whether the element at `index` is `Null`
    pub fn is_null(&self, index: usize) -> Result<bool> {
        self.get_element(index).map(ZeroElement::is_null)
    }

    fn non_null(&self, index: usize) -> Result<&ZeroElement> {
        match self.get_element(index)? {
            ZeroElement::Null => Err(Error::NullAtIndex { index }),
            element => Ok(element),
        }
    }

    /// Remove and return the element at `index`, shifting later elements down
    pub fn remove(&mut self, index: usize) -> Result<ZeroElement> {
        if index >= self.elements.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    /// Linear search for an element equal to `value`.
    ///
    /// `None` queries match stored `Null` elements.
    pub fn contains(&self, value: impl Into<ZeroElement>) -> bool {
        let needle = value.into();
        self.elements.iter().any(|element| *element == needle)
    }

    typed_pair!(add_boolean, get_boolean, Boolean, bool, bool, as_boolean);
    typed_pair!(add_byte, get_byte, Byte, u8, u8, as_byte);
    typed_pair!(add_short, get_short, Short, i16, i16, as_short);
    typed_pair!(add_integer, get_integer, Integer, i32, i32, as_integer);
    typed_pair!(add_long, get_long, Long, i64, i64, as_long);
    typed_pair!(add_float, get_float, Float, f32, f32, as_float);
    typed_pair!(add_double, get_double, Double, f64, f64, as_double);
    typed_pair!(add_string, get_string, String, impl Into<String>, &str, as_str);
    typed_pair!(
        add_boolean_array,
        get_boolean_array,
        BooleanArray,
        impl Into<Vec<bool>>,
        &[bool],
        as_boolean_array
    );
    typed_pair!(
        add_byte_array,
        get_byte_array,
        ByteArray,
        impl Into<Bytes>,
        &Bytes,
        as_byte_array
    );
    typed_pair!(
        add_short_array,
        get_short_array,
        ShortArray,
        impl Into<Vec<i16>>,
        &[i16],
        as_short_array
    );
    typed_pair!(
        add_integer_array,
        get_integer_array,
        IntegerArray,
        impl Into<Vec<i32>>,
        &[i32],
        as_integer_array
    );
    typed_pair!(
        add_long_array,
        get_long_array,
        LongArray,
        impl Into<Vec<i64>>,
        &[i64],
        as_long_array
    );
    typed_pair!(
        add_float_array,
        get_float_array,
        FloatArray,
        impl Into<Vec<f32>>,
        &[f32],
        as_float_array
    );
    typed_pair!(
        add_double_array,
        get_double_array,
        DoubleArray,
        impl Into<Vec<f64>>,
        &[f64],
        as_double_array
    );
    typed_pair!(
        add_string_array,
        get_string_array,
        StringArray,
        Vec<String>,
        &[String],
        as_string_array
    );
    typed_pair!(
        add_nested_array,
        get_nested_array,
        NestedArray,
        ZeroArray,
        &ZeroArray,
        as_nested_array
    );
    typed_pair!(
        add_nested_map,
        get_nested_map,
        NestedMap,
        ZeroMap,
        &ZeroMap,
        as_nested_map
    );

    /// Detached, immutable copy of the current contents
    #[must_use]
    pub fn read_only(&self) -> ReadOnly<Self> {
        ReadOnly::new(self.clone())
    }

    /// Encode to Zero wire bytes
    pub fn to_bytes(&self) -> Result<Bytes> {
        super::encode_array(self)
    }

    /// Decode from Zero wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        super::decode_to_array(bytes)
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{:width$}", "", width = indent * 2)?;
            element.write_tree(f, indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for ZeroArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl<'a> IntoIterator for &'a ZeroArray {
    type Item = &'a ZeroElement;
    type IntoIter = std::slice::Iter<'a, ZeroElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for ZeroArray {
    type Item = ZeroElement;
    type IntoIter = std::vec::IntoIter<ZeroElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl FromIterator<ZeroElement> for ZeroArray {
    fn from_iter<I: IntoIterator<Item = ZeroElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<ZeroElement> for ZeroArray {
    fn extend<I: IntoIterator<Item = ZeroElement>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
