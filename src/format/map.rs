//! String-keyed container

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use bytes::Bytes;

use super::{Error, ReadOnly, Result, ZeroArray, ZeroElement, ZeroType};

/// Mapping of unique string keys to typed elements.
///
/// The wire format does not define an entry order. Entries are kept sorted by
/// key so encoding the same map always yields the same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZeroMap {
    entries: BTreeMap<String, ZeroElement>,
}

macro_rules! typed_pair {
    ($put:ident, $get:ident, $variant:ident, $in:ty, $out:ty, $accessor:ident) => {
        #[doc = concat!("Insert a `", stringify!($variant), "` element, replacing any previous value.")]
        pub fn $put(&mut self, key: impl Into<String>, value: $in) -> &mut Self {
            self.entries.insert(key.into(), ZeroElement::$variant(value.into()));
            self
        }

        #[doc = concat!("Read the `", stringify!($variant), "` element stored under `key`.")]
        pub fn $get(&self, key: &str) -> Result<$out> {
            self.non_null(key)?.$accessor()
        }
    };
}

impl ZeroMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries
    pub fn iter(&self) -> btree_map::Iter<'_, String, ZeroElement> {
        self.entries.iter()
    }

    /// Iterate over keys
    pub fn keys(&self) -> btree_map::Keys<'_, String, ZeroElement> {
        self.entries.keys()
    }

    /// Check whether `key` has an entry, `Null` included
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Check whether `key` holds a `Null` element.
    ///
    /// Missing keys are not null; use [`contains_key`](Self::contains_key)
    /// to tell the two apart.
    #[must_use]
    pub fn is_null(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(ZeroElement::is_null)
    }

    /// Insert an already-typed element, replacing any previous value
    pub fn put_element(
        &mut self,
        key: impl Into<String>,
        element: impl Into<ZeroElement>,
    ) -> &mut Self {
        self.entries.insert(key.into(), element.into());
        self
    }

    /// Insert a `Null` element
    pub fn put_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), ZeroElement::Null);
        self
    }

    /// Element stored under `key`, `None` if absent
    #[must_use]
    pub fn get_element(&self, key: &str) -> Option<&ZeroElement> {
        self.entries.get(key)
    }

    /// Kind of the element stored under `key`
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ZeroType> {
        self.entries.get(key).map(ZeroElement::kind)
    }

    fn non_null(&self, key: &str) -> Result<&ZeroElement> {
        match self.entries.get(key) {
            None => Err(Error::KeyNotFound { key: key.to_owned() }),
            Some(ZeroElement::Null) => Err(Error::NullValue { key: key.to_owned() }),
            Some(element) => Ok(element),
        }
    }

    /// Remove the entry for `key`, returning its element
    pub fn remove(&mut self, key: &str) -> Option<ZeroElement> {
        self.entries.remove(key)
    }

    typed_pair!(put_boolean, get_boolean, Boolean, bool, bool, as_boolean);
    typed_pair!(put_byte, get_byte, Byte, u8, u8, as_byte);
    typed_pair!(put_short, get_short, Short, i16, i16, as_short);
    typed_pair!(put_integer, get_integer, Integer, i32, i32, as_integer);
    typed_pair!(put_long, get_long, Long, i64, i64, as_long);
    typed_pair!(put_float, get_float, Float, f32, f32, as_float);
    typed_pair!(put_double, get_double, Double, f64, f64, as_double);
    typed_pair!(put_string, get_string, String, impl Into<String>, &str, as_str);
    typed_pair!(
        put_boolean_array,
        get_boolean_array,
        BooleanArray,
        impl Into<Vec<bool>>,
        &[bool],
        as_boolean_array
    );
    typed_pair!(
        put_byte_array,
        get_byte_array,
        ByteArray,
        impl Into<Bytes>,
        &Bytes,
        as_byte_array
    );
    typed_pair!(
        put_short_array,
        get_short_array,
        ShortArray,
        impl Into<Vec<i16>>,
        &[i16],
        as_short_array
    );
    typed_pair!(
        put_integer_array,
        get_integer_array,
        IntegerArray,
        impl Into<Vec<i32>>,
        &[i32],
        as_integer_array
    );
    typed_pair!(
        put_long_array,
        get_long_array,
        LongArray,
        impl Into<Vec<i64>>,
        &[i64],
        as_long_array
    );
    typed_pair!(
        put_float_array,
        get_float_array,
        FloatArray,
        impl Into<Vec<f32>>,
        &[f32],
        as_float_array
    );
    typed_pair!(
        put_double_array,
        get_double_array,
        DoubleArray,
        impl Into<Vec<f64>>,
        &[f64],
        as_double_array
    );
    typed_pair!(
        put_string_array,
        get_string_array,
        StringArray,
        Vec<String>,
        &[String],
        as_string_array
    );
    typed_pair!(
        put_nested_array,
        get_nested_array,
        NestedArray,
        ZeroArray,
        &ZeroArray,
        as_nested_array
    );
    typed_pair!(
        put_nested_map,
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
        super::encode_map(self)
    }

    /// Decode from Zero wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        super::decode_to_map(bytes)
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        for (key, element) in &self.entries {
            write!(f, "{:width$}{key}: ", "", width = indent * 2)?;
            element.write_tree(f, indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for ZeroMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl<'a> IntoIterator for &'a ZeroMap {
    type Item = (&'a String, &'a ZeroElement);
    type IntoIter = btree_map::Iter<'a, String, ZeroElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ZeroMap {
    type Item = (String, ZeroElement);
    type IntoIter = btree_map::IntoIter<String, ZeroElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, ZeroElement)> for ZeroMap {
    fn from_iter<I: IntoIterator<Item = (K, ZeroElement)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, ZeroElement)> for ZeroMap {
    fn extend<I: IntoIterator<Item = (K, ZeroElement)>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut map = ZeroMap::new();
        map.put_string("k", "v")
            .put_integer("hp", 120)
            .put_double_array("pos", vec![1.0, 2.5])
            .put_boolean("alive", true);

        assert_eq!(map.len(), 4);
        assert_eq!(map.get_string("k").unwrap(), "v");
        assert_eq!(map.get_integer("hp").unwrap(), 120);
        assert_eq!(map.get_double_array("pos").unwrap(), &[1.0, 2.5]);
        assert!(map.get_boolean("alive").unwrap());
    }

    #[test]
    fn test_missing_key_vs_null() {
        let mut map = ZeroMap::new();
        map.put_string("k", "v").put_null("n");

        assert!(map.contains_key("n"));
        assert!(map.is_null("n"));
        assert!(!map.contains_key("missing"));
        assert!(!map.is_null("missing"));

        assert_eq!(
            map.get_string("n"),
            Err(Error::NullValue { key: "n".into() })
        );
        assert_eq!(
            map.get_string("missing"),
            Err(Error::KeyNotFound {
                key: "missing".into()
            })
        );
        assert_eq!(map.get_element("n"), Some(&ZeroElement::Null));
        assert_eq!(map.get_element("missing"), None);
    }

    #[test]
    fn test_put_replaces() {
        let mut map = ZeroMap::new();
        map.put_integer("score", 1).put_long("score", 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.kind_of("score"), Some(ZeroType::Long));
        assert_eq!(map.get_long("score").unwrap(), 2);
    }

    #[test]
    fn test_remove() {
        let mut map = ZeroMap::new();
        map.put_byte("b", 9);

        assert_eq!(map.remove("b"), Some(ZeroElement::Byte(9)));
        assert_eq!(map.remove("b"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_read_only_is_detached() {
        let mut map = ZeroMap::new();
        map.put_short("a", 1);
        let view = map.read_only();

        map.put_short("b", 2);
        map.remove("a");

        assert_eq!(view.len(), 1);
        assert_eq!(view.get_short("a").unwrap(), 1);
        assert!(!view.contains_key("b"));
    }

    #[test]
    fn test_keys_sorted() {
        let mut map = ZeroMap::new();
        map.put_null("c").put_null("a").put_null("b");

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_display_nested() {
        let mut inner = ZeroArray::new();
        inner.add_boolean(false);
        let mut map = ZeroMap::new();
        map.put_nested_array("flags", inner).put_long("id", 9);

        assert_eq!(
            map.to_string(),
            "flags: (NestedArray)\n  (Boolean) false\nid: (Long) 9\n"
        );
    }
}
