//! Zero container codec (encode/decode)
//!
//! All integers are big-endian. Every element is a one-byte kind tag
//! followed by its payload; containers start with their own tag and a
//! two-byte entry count.

use bytes::Bytes;
use tracing::{debug, instrument, trace};

use super::buffer::{ByteReader, GrowableBuffer};
use super::metrics::Metrics;
use super::{
    CodecConfig, Error, HEADER_SIZE, MAX_BLOB_LEN, MAX_SHORT_LEN, Result, ZeroArray, ZeroElement,
    ZeroMap, ZeroType, hex_dump,
};

/// Encode an array with the default configuration.
///
/// # Format
///
/// ```text
/// [NestedArray tag (1)] [COUNT (2)] [ELEMENT]*
/// ```
pub fn encode_array(array: &ZeroArray) -> Result<Bytes> {
    encode_array_with(array, &CodecConfig::default())
}

/// Encode a map with the default configuration.
///
/// # Format
///
/// ```text
/// [NestedMap tag (1)] [COUNT (2)] ([KEY LEN (2)] [KEY] [ELEMENT])*
/// ```
pub fn encode_map(map: &ZeroMap) -> Result<Bytes> {
    encode_map_with(map, &CodecConfig::default())
}

/// Encode an array.
///
/// # Errors
///
/// Returns an error if:
/// - A string, key, or sequence is longer than its length field allows
/// - Containers nest deeper than `config.max_depth`
#[instrument(level = "trace", skip_all, fields(len = array.len()))]
pub fn encode_array_with(array: &ZeroArray, config: &CodecConfig) -> Result<Bytes> {
    let mut encoder = Encoder::new(config);
    encoder.write_array(array, 1)?;
    Ok(encoder.finish())
}

/// Encode a map.
///
/// # Errors
///
/// Same conditions as [`encode_array_with`].
#[instrument(level = "trace", skip_all, fields(len = map.len()))]
pub fn encode_map_with(map: &ZeroMap, config: &CodecConfig) -> Result<Bytes> {
    let mut encoder = Encoder::new(config);
    encoder.write_map(map, 1)?;
    Ok(encoder.finish())
}

/// Decode an array with the default configuration.
pub fn decode_to_array(bytes: &[u8]) -> Result<ZeroArray> {
    decode_to_array_with(bytes, &CodecConfig::default())
}

/// Decode a map with the default configuration.
pub fn decode_to_map(bytes: &[u8]) -> Result<ZeroMap> {
    decode_to_map_with(bytes, &CodecConfig::default())
}

/// Decode an array.
///
/// # Errors
///
/// Returns an error if:
/// - Input is shorter than a container header
/// - The header tag is not `NestedArray`
/// - Any tag is unknown, any length is negative, or input ends early
/// - Bytes remain after the array
#[instrument(level = "trace", skip_all, fields(len = bytes.len()))]
pub fn decode_to_array_with(bytes: &[u8], config: &CodecConfig) -> Result<ZeroArray> {
    decode_root(bytes, config, |decoder| decoder.read_array(1))
}

/// Decode a map.
///
/// # Errors
///
/// Same conditions as [`decode_to_array_with`], with a `NestedMap` header.
#[instrument(level = "trace", skip_all, fields(len = bytes.len()))]
pub fn decode_to_map_with(bytes: &[u8], config: &CodecConfig) -> Result<ZeroMap> {
    decode_root(bytes, config, |decoder| decoder.read_map(1))
}

fn decode_root<T>(
    bytes: &[u8],
    config: &CodecConfig,
    read: impl FnOnce(&mut Decoder<'_>) -> Result<T>,
) -> Result<T> {
    let result = if bytes.len() < HEADER_SIZE {
        Err(Error::InputTooShort { len: bytes.len() })
    } else {
        let mut decoder = Decoder::new(bytes, config);
        read(&mut decoder).and_then(|value| decoder.finish().map(|()| value))
    };

    match &result {
        Ok(_) => Metrics::record_decode(bytes.len()),
        Err(err) => {
            Metrics::record_decode_error();
            debug!(error = %err, len = bytes.len(), "rejected zero payload");
            trace!(bytes = %hex_dump(&bytes[..bytes.len().min(64)]), "rejected payload prefix");
        }
    }
    result
}

struct Encoder {
    buffer: GrowableBuffer,
    max_depth: usize,
}

impl Encoder {
    fn new(config: &CodecConfig) -> Self {
        Self {
            buffer: GrowableBuffer::with_capacity(config.initial_capacity),
            max_depth: config.max_depth,
        }
    }

    fn finish(self) -> Bytes {
        let bytes = self.buffer.freeze();
        Metrics::record_encode(bytes.len());
        bytes
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::EncodeDepthExceeded {
                max: self.max_depth,
            });
        }
        Ok(())
    }

    fn write_array(&mut self, array: &ZeroArray, depth: usize) -> Result<()> {
        self.buffer.put_u8(ZeroType::NestedArray.as_u8());
        self.write_array_body(array, depth)
    }

    fn write_map(&mut self, map: &ZeroMap, depth: usize) -> Result<()> {
        self.buffer.put_u8(ZeroType::NestedMap.as_u8());
        self.write_map_body(map, depth)
    }

    fn write_array_body(&mut self, array: &ZeroArray, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        self.write_len("array count", array.len())?;
        for element in array {
            self.write_element(element, depth)?;
        }
        Ok(())
    }

    fn write_map_body(&mut self, map: &ZeroMap, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        self.write_len("map count", map.len())?;
        for (key, element) in map {
            self.write_str("key", key)?;
            self.write_element(element, depth)?;
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_len(&mut self, field: &'static str, len: usize) -> Result<()> {
        if len > MAX_SHORT_LEN {
            return Err(Error::LengthOverflow {
                field,
                len,
                max: MAX_SHORT_LEN,
            });
        }
        self.buffer.put_u16(len as u16);
        Ok(())
    }

    fn write_str(&mut self, field: &'static str, value: &str) -> Result<()> {
        self.write_len(field, value.len())?;
        self.buffer.append(value.as_bytes());
        Ok(())
    }

    fn write_element(&mut self, element: &ZeroElement, depth: usize) -> Result<()> {
        self.buffer.put_u8(element.kind().as_u8());
        match element {
            ZeroElement::Null => {}
            ZeroElement::Boolean(v) => self.buffer.put_u8(u8::from(*v)),
            ZeroElement::Byte(v) => self.buffer.put_u8(*v),
            ZeroElement::Short(v) => self.buffer.append(&v.to_be_bytes()),
            ZeroElement::Integer(v) => self.buffer.append(&v.to_be_bytes()),
            ZeroElement::Long(v) => self.buffer.append(&v.to_be_bytes()),
            ZeroElement::Float(v) => self.buffer.append(&v.to_be_bytes()),
            ZeroElement::Double(v) => self.buffer.append(&v.to_be_bytes()),
            ZeroElement::String(v) => self.write_str("string", v)?,
            ZeroElement::BooleanArray(values) => {
                self.write_len("boolean array count", values.len())?;
                for v in values {
                    self.buffer.put_u8(u8::from(*v));
                }
            }
            ZeroElement::ByteArray(blob) => {
                if blob.len() > MAX_BLOB_LEN {
                    return Err(Error::LengthOverflow {
                        field: "byte array",
                        len: blob.len(),
                        max: MAX_BLOB_LEN,
                    });
                }
                #[allow(clippy::cast_possible_truncation)]
                let len = blob.len() as u32;
                self.buffer.put_u32(len);
                self.buffer.append(blob);
            }
            ZeroElement::ShortArray(values) => {
                self.write_len("short array count", values.len())?;
                for v in values {
                    self.buffer.append(&v.to_be_bytes());
                }
            }
            ZeroElement::IntegerArray(values) => {
                self.write_len("integer array count", values.len())?;
                for v in values {
                    self.buffer.append(&v.to_be_bytes());
                }
            }
            ZeroElement::LongArray(values) => {
                self.write_len("long array count", values.len())?;
                for v in values {
                    self.buffer.append(&v.to_be_bytes());
                }
            }
            ZeroElement::FloatArray(values) => {
                self.write_len("float array count", values.len())?;
                for v in values {
                    self.buffer.append(&v.to_be_bytes());
                }
            }
            ZeroElement::DoubleArray(values) => {
                self.write_len("double array count", values.len())?;
                for v in values {
                    self.buffer.append(&v.to_be_bytes());
                }
            }
            ZeroElement::StringArray(values) => {
                self.write_len("string array count", values.len())?;
                for v in values {
                    self.write_str("string", v)?;
                }
            }
            // The element tag doubles as the nested container's header tag.
            ZeroElement::NestedArray(array) => self.write_array_body(array, depth + 1)?,
            ZeroElement::NestedMap(map) => self.write_map_body(map, depth + 1)?,
        }
        Ok(())
    }
}

struct Decoder<'a> {
    reader: ByteReader<'a>,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(bytes: &'a [u8], config: &CodecConfig) -> Self {
        Self {
            reader: ByteReader::new(bytes),
            max_depth: config.max_depth,
        }
    }

    fn finish(&self) -> Result<()> {
        match self.reader.remaining() {
            0 => Ok(()),
            count => Err(Error::TrailingBytes {
                count,
                offset: self.reader.position(),
            }),
        }
    }

    fn read_kind(&mut self) -> Result<(ZeroType, usize)> {
        let offset = self.reader.position();
        let tag = self.reader.read_u8("type tag")?;
        let kind = ZeroType::from_u8(tag).ok_or(Error::UnknownTag { tag, offset })?;
        Ok((kind, offset))
    }

    fn read_header(&mut self, expected: ZeroType, depth: usize) -> Result<usize> {
        if depth > self.max_depth {
            return Err(Error::DecodeDepthExceeded {
                max: self.max_depth,
                offset: self.reader.position(),
            });
        }
        let (found, offset) = self.read_kind()?;
        if found != expected {
            return Err(Error::TypeMismatch {
                expected,
                found,
                offset,
            });
        }
        self.read_len("container count")
    }

    fn read_array(&mut self, depth: usize) -> Result<ZeroArray> {
        let count = self.read_header(ZeroType::NestedArray, depth)?;
        let mut array = ZeroArray::with_capacity(count.min(self.reader.remaining()));
        for _ in 0..count {
            let element = self.read_element(depth)?;
            array.add_element(element);
        }
        Ok(array)
    }

    fn read_map(&mut self, depth: usize) -> Result<ZeroMap> {
        let count = self.read_header(ZeroType::NestedMap, depth)?;
        let mut map = ZeroMap::new();
        for _ in 0..count {
            let key = self.read_string("key length", "key")?;
            let element = self.read_element(depth)?;
            map.put_element(key, element);
        }
        Ok(map)
    }

    fn read_len(&mut self, field: &'static str) -> Result<usize> {
        let offset = self.reader.position();
        let value = self.reader.read_i16(field)?;
        usize::try_from(value).map_err(|_| Error::NegativeLength {
            field,
            value: i64::from(value),
            offset,
        })
    }

    fn read_blob_len(&mut self) -> Result<usize> {
        let offset = self.reader.position();
        let value = self.reader.read_i32("byte array length")?;
        usize::try_from(value).map_err(|_| Error::NegativeLength {
            field: "byte array length",
            value: i64::from(value),
            offset,
        })
    }

    fn read_boolean(&mut self) -> Result<bool> {
        let offset = self.reader.position();
        match self.reader.read_u8("boolean")? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(Error::InvalidBoolean { value, offset }),
        }
    }

    fn read_string(&mut self, len_field: &'static str, field: &'static str) -> Result<String> {
        let len = self.read_len(len_field)?;
        let offset = self.reader.position();
        let bytes = self.reader.read_bytes(field, len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8 { offset })
    }

    fn read_sequence<T>(
        &mut self,
        field: &'static str,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let count = self.read_len(field)?;
        let mut values = Vec::with_capacity(count.min(self.reader.remaining()));
        for _ in 0..count {
            values.push(read(self)?);
        }
        Ok(values)
    }

    fn read_element(&mut self, depth: usize) -> Result<ZeroElement> {
        let (kind, offset) = self.read_kind()?;
        let element = match kind {
            ZeroType::Null => ZeroElement::Null,
            ZeroType::Boolean => ZeroElement::Boolean(self.read_boolean()?),
            ZeroType::Byte => ZeroElement::Byte(self.reader.read_u8("byte")?),
            ZeroType::Short => ZeroElement::Short(self.reader.read_i16("short")?),
            ZeroType::Integer => ZeroElement::Integer(self.reader.read_i32("integer")?),
            ZeroType::Long => ZeroElement::Long(self.reader.read_i64("long")?),
            ZeroType::Float => ZeroElement::Float(self.reader.read_f32("float")?),
            ZeroType::Double => ZeroElement::Double(self.reader.read_f64("double")?),
            ZeroType::String => ZeroElement::String(self.read_string("string length", "string")?),
            ZeroType::BooleanArray => ZeroElement::BooleanArray(
                self.read_sequence("boolean array count", Self::read_boolean)?,
            ),
            ZeroType::ByteArray => {
                let len = self.read_blob_len()?;
                ZeroElement::ByteArray(Bytes::copy_from_slice(
                    self.reader.read_bytes("byte array", len)?,
                ))
            }
            ZeroType::ShortArray => ZeroElement::ShortArray(
                self.read_sequence("short array count", |d| d.reader.read_i16("short"))?,
            ),
            ZeroType::IntegerArray => ZeroElement::IntegerArray(
                self.read_sequence("integer array count", |d| d.reader.read_i32("integer"))?,
            ),
            ZeroType::LongArray => ZeroElement::LongArray(
                self.read_sequence("long array count", |d| d.reader.read_i64("long"))?,
            ),
            ZeroType::FloatArray => ZeroElement::FloatArray(
                self.read_sequence("float array count", |d| d.reader.read_f32("float"))?,
            ),
            ZeroType::DoubleArray => ZeroElement::DoubleArray(
                self.read_sequence("double array count", |d| d.reader.read_f64("double"))?,
            ),
            ZeroType::StringArray => ZeroElement::StringArray(
                self.read_sequence("string array count", |d| {
                    d.read_string("string length", "string")
                })?,
            ),
            ZeroType::NestedArray => {
                trace!(offset, depth = depth + 1, "decoding nested array");
                // Let the nested decode re-read its own header.
                self.reader.rewind(1);
                ZeroElement::NestedArray(self.read_array(depth + 1)?)
            }
            ZeroType::NestedMap => {
                trace!(offset, depth = depth + 1, "decoding nested map");
                self.reader.rewind(1);
                ZeroElement::NestedMap(self.read_map(depth + 1)?)
            }
        };
        Ok(element)
    }
}
