// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use strata::{serialize_vec, Error, Serializable, Serializer};

#[derive(Debug, Default, PartialEq)]
struct Record {
    id: u32,
    tag: String,
    items: Vec<u64>,
}

impl Serializable for Record {
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
        s.begin_object(name)?;
        s.u32(&mut self.id, "id")?;
        s.string(&mut self.tag, "tag")?;
        serialize_vec(&mut self.items, "items", s)?;
        s.end_object()
    }
}

#[test]
fn test_object_layout_is_field_order_no_framing() {
    let mut record = Record {
        id: 7,
        tag: String::from("x"),
        items: vec![1, 2, 3],
    };
    let bytes = strata::to_binary(&mut record, "record").unwrap();
    // varint(7), varint(1) + "x", varint(3) count + varint elements
    assert_eq!(bytes, vec![7, 1, b'x', 3, 1, 2, 3]);

    let decoded: Record = strata::from_binary(&bytes, "record").unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_varint_widths() {
    for (value, width) in [
        (0u64, 1),
        (127, 1),
        (128, 2),
        (300, 2),
        (16_383, 2),
        (16_384, 3),
        (u64::MAX, 10),
    ] {
        let mut v = value;
        let bytes = strata::to_binary(&mut v, "v").unwrap();
        assert_eq!(bytes.len(), width, "width of {}", value);
        let decoded: u64 = strata::from_binary(&bytes, "v").unwrap();
        assert_eq!(decoded, value);
    }

    let mut v = 300u64;
    let bytes = strata::to_binary(&mut v, "v").unwrap();
    assert_eq!(bytes, vec![0xAC, 0x02]);
}

#[test]
fn test_signed_values_use_the_unsigned_bit_pattern() {
    let mut v = -1i64;
    let bytes = strata::to_binary(&mut v, "v").unwrap();
    // -1 is all 64 bits set, the widest varint there is
    assert_eq!(bytes.len(), 10);
    let decoded: i64 = strata::from_binary(&bytes, "v").unwrap();
    assert_eq!(decoded, -1);

    // a small negative i8 still costs two bytes, not ten
    let mut v = -2i8;
    let bytes = strata::to_binary(&mut v, "v").unwrap();
    assert_eq!(bytes, vec![0xFE, 0x01]);
    let decoded: i8 = strata::from_binary(&bytes, "v").unwrap();
    assert_eq!(decoded, -2);
}

#[test]
fn test_trailing_bytes_fail_the_decode() {
    let mut v = 7u32;
    let mut bytes = strata::to_binary(&mut v, "v").unwrap();
    bytes.push(0xFF);
    assert!(matches!(
        strata::from_binary::<u32>(&bytes, "v"),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_truncated_input_fails_the_decode() {
    let mut record = Record {
        id: 1,
        tag: String::from("abcdef"),
        items: vec![9],
    };
    let bytes = strata::to_binary(&mut record, "record").unwrap();
    assert!(strata::from_binary::<Record>(&bytes[..4], "record").is_err());
}

#[derive(Debug, Default, PartialEq)]
struct MinedBlock {
    mm_tag: String,
    nonce: u32,
}

impl Serializable for MinedBlock {
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
        s.begin_object(name)?;
        s.string(&mut self.mm_tag, "mm_tag")?;
        s.u32(&mut self.nonce, "nonce")?;
        s.end_object()
    }
}

#[test]
fn test_oversized_legacy_mm_tag_reads_empty_and_stays_aligned() {
    // varint(300) declared length, 300 payload bytes, then the next field
    let mut bytes = vec![0xAC, 0x02];
    bytes.extend(std::iter::repeat(b'a').take(300));
    bytes.push(9);

    let decoded: MinedBlock = strata::from_binary(&bytes, "block").unwrap();
    assert_eq!(decoded.mm_tag, "");
    assert_eq!(decoded.nonce, 9);
}

#[test]
fn test_in_range_mm_tag_roundtrips() {
    let mut block = MinedBlock {
        mm_tag: String::from("aux-chain"),
        nonce: 77,
    };
    let bytes = strata::to_binary(&mut block, "block").unwrap();
    let decoded: MinedBlock = strata::from_binary(&bytes, "block").unwrap();
    assert_eq!(decoded, block);
}
