use ethereum_rlp::{
    decode, decode_partial, encode, encode_bytes, encode_hex, encode_item, size_of_length,
    DecoderError, EncoderError, Format, RlpError, RlpItem, RlpValue,
};
use ethereum_types::{Bytes, Hex};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = RlpItem> {
    let leaf = proptest::collection::vec(any::<u8>(), 0..80)
        .prop_map(|bytes: Vec<u8>| RlpItem::string(bytes));
    leaf.prop_recursive(4, 64, 8, |inner| {
        proptest::collection::vec(inner, 0..8).prop_map(RlpItem::List)
    })
}

#[test]
fn test_single_byte_shortcut() {
    let value = RlpValue::bytes(vec![0x7f]);
    assert_eq!(encode_bytes(&value).unwrap().as_slice(), &[0x7f]);
}

#[test]
fn test_short_string_boundary() {
    let at_limit = encode_bytes(&RlpValue::bytes(vec![0x01; 55])).unwrap();
    assert_eq!(at_limit[0], 0xb7);

    let past_limit = encode_bytes(&RlpValue::bytes(vec![0x01; 56])).unwrap();
    assert_eq!(&past_limit[..2], &[0xb8, 0x38]);
}

#[test]
fn test_empty_and_nested_lists() {
    assert_eq!(encode_bytes(&RlpValue::list(vec![])).unwrap().as_slice(), &[0xc0]);

    let nested = RlpValue::list(vec![RlpValue::list(vec![]), RlpValue::list(vec![])]);
    assert_eq!(encode_bytes(&nested).unwrap().as_slice(), &[0xc2, 0xc0, 0xc0]);
}

#[test]
fn test_hello_world_vector() {
    let from_bytes = encode(&RlpValue::bytes(Bytes::from("hello world")), Format::Hex).unwrap();
    let from_hex = encode_hex(&RlpValue::hex("0x68656c6c6f20776f726c64").unwrap()).unwrap();

    assert_eq!(from_bytes.into_hex(), from_hex);
    assert_eq!(from_hex.as_str(), "0x8b68656c6c6f20776f726c64");
}

#[test]
fn test_length_ceiling() {
    assert!(size_of_length(u32::MAX as usize).is_ok());

    #[cfg(target_pointer_width = "64")]
    assert!(matches!(
        size_of_length(u32::MAX as usize + 1),
        Err(EncoderError::LengthTooLarge { .. })
    ));
}

#[test]
fn test_determinism() {
    let value = RlpValue::list(vec![
        RlpValue::hex("0xdeadbeef").unwrap(),
        RlpValue::bytes(vec![0x42; 200]),
        RlpValue::list(vec![RlpValue::bytes(Vec::new())]),
    ]);

    let first = encode_bytes(&value).unwrap();
    for _ in 0..16 {
        assert_eq!(encode_bytes(&value).unwrap(), first);
    }
}

#[test]
fn test_official_vectors() {
    let cases: &[(RlpItem, &str)] = &[
        (RlpItem::string(Vec::new()), "0x80"),
        (RlpItem::string(vec![0x00]), "0x00"),
        (RlpItem::string("dog"), "0x83646f67"),
        (
            RlpItem::list(vec![RlpItem::string("cat"), RlpItem::string("dog")]),
            "0xc88363617483646f67",
        ),
        (
            RlpItem::string("Lorem ipsum dolor sit amet, consectetur adipisicing elit"),
            "0xb8384c6f72656d20697073756d20646f6c6f722073697420616d65742c20636f6e7365637465747572206164697069736963696e6720656c6974",
        ),
        (RlpItem::string(vec![0x04, 0x00]), "0x820400"),
    ];

    for (item, expected) in cases {
        let encoded = encode_item(item).unwrap();
        assert_eq!(encoded.to_hex().as_str(), *expected);
        assert_eq!(&decode(&encoded).unwrap(), item);
    }
}

#[test]
fn test_decode_reports_consumed() {
    let hex = Hex::parse("0xc3010203ff").unwrap();
    let (item, consumed) = decode_partial(&hex.to_bytes()).unwrap();
    assert_eq!(consumed, 4);
    assert_eq!(item.as_list().map(|items| items.len()), Some(3));

    assert_eq!(
        decode(&hex.to_bytes()),
        Err(RlpError::Decoder(DecoderError::TrailingBytes(1)))
    );
}

#[test]
fn test_encode_does_not_touch_input() {
    let value = RlpValue::list(vec![RlpValue::hex("0xabcdef").unwrap()]);
    let before = value.clone();
    encode_bytes(&value).unwrap();
    assert_eq!(value, before);
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(item in arb_item()) {
        let encoded = encode_item(&item).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), item);
    }

    #[test]
    fn prop_encode_inverts_decode(item in arb_item()) {
        let canonical = encode_item(&item).unwrap();
        let reencoded = encode_item(&decode(&canonical).unwrap()).unwrap();
        prop_assert_eq!(reencoded, canonical);
    }

    #[test]
    fn prop_hex_and_byte_leaves_agree(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let from_bytes = encode_bytes(&RlpValue::bytes(data.clone())).unwrap();
        let from_hex = encode_bytes(&RlpValue::from(Hex::from_bytes(&data))).unwrap();
        prop_assert_eq!(from_bytes, from_hex);
    }

    #[test]
    fn prop_truncation_is_rejected(item in arb_item()) {
        let encoded = encode_item(&item).unwrap();
        let truncated = &encoded[..encoded.len() - 1];
        prop_assert!(decode(truncated).is_err());
    }
}
