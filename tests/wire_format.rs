use zero::format::{MAX_SHORT_LEN, hex_dump};
use zero::{
    CHUNK_SIZE, Error, GrowableBuffer, ZeroArray, ZeroElement, ZeroMap, ZeroType, decode_to_array,
    decode_to_map, encode_array, encode_map,
};

#[test]
fn fluent_array_encodes_to_exact_bytes() {
    let mut array = ZeroArray::new();
    array.add_boolean(true).add_integer(1000).add_string("abc");

    let bytes = encode_array(&array).unwrap();

    let mut expected = vec![ZeroType::NestedArray.as_u8(), 0x00, 0x03];
    expected.extend_from_slice(&[ZeroType::Boolean.as_u8(), 1]);
    expected.push(ZeroType::Integer.as_u8());
    expected.extend_from_slice(&1000i32.to_be_bytes());
    expected.extend_from_slice(&[ZeroType::String.as_u8(), 0x00, 0x03]);
    expected.extend_from_slice(b"abc");
    assert_eq!(bytes.as_ref(), expected.as_slice(), "\n{}", hex_dump(&bytes));

    let decoded = decode_to_array(&bytes).unwrap();
    assert_eq!(decoded.len(), 3);
    assert!(decoded.get_boolean(0).unwrap());
    assert_eq!(decoded.get_integer(1).unwrap(), 1000);
    assert_eq!(decoded.get_string(2).unwrap(), "abc");
}

#[test]
fn null_entries_survive_and_differ_from_missing_keys() {
    let mut map = ZeroMap::new();
    map.put_string("k", "v");
    map.put_null("n");

    let decoded = decode_to_map(&encode_map(&map).unwrap()).unwrap();

    assert!(decoded.contains_key("n"));
    assert!(decoded.is_null("n"));
    assert!(!decoded.contains_key("missing"));
    assert_eq!(decoded.get_string("k").unwrap(), "v");
    assert!(matches!(
        decoded.get_string("missing"),
        Err(Error::KeyNotFound { .. })
    ));
    assert!(matches!(
        decoded.get_string("n"),
        Err(Error::NullValue { .. })
    ));
}

#[test]
fn two_level_nesting_reencodes_identically() {
    let mut leaf = ZeroArray::new();
    leaf.add_long(42)
        .add_string_array(vec!["sword".to_owned(), "shield".to_owned()])
        .add_null();

    let mut inventory = ZeroMap::new();
    inventory.put_nested_array("items", leaf).put_short("slots", 12);

    let mut player = ZeroMap::new();
    player
        .put_string("name", "ayla")
        .put_nested_map("inventory", inventory)
        .put_float_array("position", vec![1.0f32, -2.5, 3.25]);

    let first = encode_map(&player).unwrap();
    let decoded = decode_to_map(&first).unwrap();
    let second = encode_map(&decoded).unwrap();

    assert_eq!(decoded, player);
    assert_eq!(first, second);

    let items = decoded
        .get_nested_map("inventory")
        .unwrap()
        .get_nested_array("items")
        .unwrap();
    assert_eq!(items.get_long(0).unwrap(), 42);
    assert_eq!(items.get_string_array(1).unwrap()[1], "shield");
    assert!(items.is_null(2).unwrap());
}

#[test]
fn buffer_overflow_reallocates_once_and_keeps_bytes() {
    let mut buffer = GrowableBuffer::with_capacity(16);
    let head: Vec<u8> = (0u8..12).collect();
    buffer.append(&head);
    assert_eq!(buffer.remaining(), 4);

    buffer.append(&[0xAA; 10]);
    assert_eq!(buffer.reallocations(), 1);
    assert_eq!(buffer.capacity(), 16 + CHUNK_SIZE);

    let huge = vec![0xBB; CHUNK_SIZE * 2];
    let before = buffer.capacity();
    buffer.append(&huge);
    assert_eq!(buffer.reallocations(), 2);
    assert_eq!(buffer.capacity(), before + huge.len());

    let snapshot = buffer.snapshot();
    assert_eq!(snapshot.len(), 12 + 10 + huge.len());
    assert_eq!(&snapshot[..12], head.as_slice());
    assert_eq!(&snapshot[12..22], &[0xAA; 10]);
    assert!(snapshot[22..].iter().all(|b| *b == 0xBB));
}

#[test]
fn short_input_is_rejected() {
    for len in 0..3 {
        let bytes = vec![ZeroType::NestedArray.as_u8(); len];
        assert_eq!(decode_to_array(&bytes), Err(Error::InputTooShort { len }));
        assert_eq!(decode_to_map(&bytes), Err(Error::InputTooShort { len }));
    }
}

#[test]
fn every_truncation_of_a_payload_fails() {
    let mut array = ZeroArray::new();
    array
        .add_double(6.5)
        .add_byte_array(vec![1u8, 2, 3, 4])
        .add_integer_array(vec![-1, 0, 1])
        .add_element(ZeroElement::from(Some("opt")));
    let bytes = encode_array(&array).unwrap();

    for cut in 0..bytes.len() {
        let result = decode_to_array(&bytes[..cut]);
        assert!(result.is_err(), "prefix of {cut} bytes decoded");
        assert!(result.unwrap_err().is_decode_error());
    }
}

#[test]
fn unknown_header_tag_is_reported() {
    let result = decode_to_map(&[0x63, 0x00, 0x00]);
    assert_eq!(result, Err(Error::UnknownTag { tag: 0x63, offset: 0 }));
}

#[test]
fn signed_ceiling_limits_entry_count() {
    let mut array = ZeroArray::with_capacity(MAX_SHORT_LEN + 1);
    for _ in 0..=MAX_SHORT_LEN {
        array.add_null();
    }
    assert!(matches!(
        encode_array(&array),
        Err(Error::LengthOverflow { field: "array count", .. })
    ));

    array.remove(0).unwrap();
    let bytes = encode_array(&array).unwrap();
    assert_eq!(bytes.len(), 3 + MAX_SHORT_LEN);
    assert_eq!(decode_to_array(&bytes).unwrap().len(), MAX_SHORT_LEN);
}

#[test]
fn read_only_snapshot_round_trips() {
    let mut map = ZeroMap::new();
    map.put_integer("level", 3);
    let view = map.read_only();
    map.put_integer("level", 4);

    let bytes = view.to_bytes().unwrap();
    let decoded = ZeroMap::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.get_integer("level").unwrap(), 3);
}

#[test]
fn nan_floats_roundtrip_and_compare_equal() {
    let mut array = ZeroArray::new();
    array
        .add_float(f32::NAN)
        .add_double(f64::NAN)
        .add_double_array(vec![f64::NAN, -0.0]);

    let bytes = encode_array(&array).unwrap();
    let decoded = decode_to_array(&bytes).unwrap();

    assert_eq!(decoded, array);
    assert_eq!(encode_array(&decoded).unwrap(), bytes);
    assert!(decoded.contains(f32::NAN));
    assert!(decoded.contains(ZeroElement::Double(f64::NAN)));
    assert!(!decoded.contains(0.0f64));
}
