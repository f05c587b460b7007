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

use std::collections::BTreeMap;
use std::time::Duration;

use strata::{
    serialize_btree_map, serialize_duration, serialize_enum, serialize_flags, serialize_option,
    serialize_variant, serialize_vec, Error, FlagBits, Serializable, Serializer, TaggedEnum,
    TaggedVariant, TypeTag, VARIANT_VALUE_FIELD,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum TransferDirection {
    #[default]
    In,
    Out,
    Pending,
}

impl TaggedEnum for TransferDirection {
    const TAGS: &'static [(TransferDirection, TypeTag)] = &[
        (TransferDirection::In, TypeTag::new(1, "in")),
        (TransferDirection::Out, TypeTag::new(2, "out")),
        (TransferDirection::Pending, TypeTag::new(3, "pending")),
    ];
}

#[derive(Clone, Debug, Default, PartialEq)]
struct TransferFlags(u64);

impl FlagBits for TransferFlags {
    const TAGS: &'static [(u64, TypeTag)] = &[
        (1 << 0, TypeTag::new(1, "coinbase")),
        (1 << 1, TypeTag::new(2, "locked")),
        (1 << 2, TypeTag::new(3, "multisig")),
    ];

    fn bits(&self) -> u64 {
        self.0
    }

    fn from_bits(bits: u64) -> TransferFlags {
        TransferFlags(bits)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum TxSource {
    Mining(u64),
    Key(Vec<u8>),
}

impl Default for TxSource {
    fn default() -> TxSource {
        TxSource::Mining(0)
    }
}

const MINING_TAG: TypeTag = TypeTag::new(1, "mining");
const KEY_TAG: TypeTag = TypeTag::new(2, "key");

impl TaggedVariant for TxSource {
    fn active_tag(&self) -> Option<TypeTag> {
        Some(match self {
            TxSource::Mining(_) => MINING_TAG,
            TxSource::Key(_) => KEY_TAG,
        })
    }

    fn construct(tag: &TypeTag) -> Option<TxSource> {
        if MINING_TAG.matches(tag) {
            Some(TxSource::Mining(0))
        } else if KEY_TAG.matches(tag) {
            Some(TxSource::Key(Vec::new()))
        } else {
            None
        }
    }

    fn payload<S: Serializer>(&mut self, s: &mut S) -> Result<(), Error> {
        match self {
            TxSource::Mining(height) => height.serialize(VARIANT_VALUE_FIELD, s),
            TxSource::Key(key) => s.blob(key, VARIANT_VALUE_FIELD),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Transfer {
    height: u64,
    direction: TransferDirection,
    flags: TransferFlags,
    source: TxSource,
    amounts: Vec<u64>,
    spend_key: [u8; 4],
    memo: Option<String>,
    attrs: BTreeMap<String, String>,
    unlock_delay: Duration,
}

impl Serializable for Transfer {
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
        s.begin_object(name)?;
        s.u64(&mut self.height, "height")?;
        serialize_enum(&mut self.direction, "direction", s)?;
        serialize_flags(&mut self.flags, "flags", s)?;
        serialize_variant(&mut self.source, "source", s)?;
        serialize_vec(&mut self.amounts, "amounts", s)?;
        s.binary(&mut self.spend_key, "spend_key")?;
        let has_memo = self.memo.is_some();
        serialize_option(&mut self.memo, has_memo, "memo", s)?;
        serialize_btree_map(&mut self.attrs, "attrs", s)?;
        serialize_duration(&mut self.unlock_delay, "unlock_delay", s)?;
        s.end_object()
    }
}

fn sample() -> Transfer {
    let mut attrs = BTreeMap::new();
    attrs.insert(String::from("origin"), String::from("pool"));
    attrs.insert(String::from("ring"), String::from("11"));
    Transfer {
        height: 2_891_004,
        direction: TransferDirection::Out,
        flags: TransferFlags(0b011),
        source: TxSource::Key(vec![0xDE, 0xAD, 0xBE, 0xEF]),
        amounts: vec![0, 600_000, u64::MAX],
        spend_key: [0x10, 0x20, 0x30, 0x40],
        memo: Some(String::from("rent")),
        attrs,
        unlock_delay: Duration::from_secs(7200),
    }
}

#[test]
fn test_binary_roundtrip() {
    let mut value = sample();
    let bytes = strata::to_binary(&mut value, "transfer").unwrap();
    let decoded: Transfer = strata::from_binary(&bytes, "transfer").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_binary_roundtrip_with_defaults() {
    let mut value = Transfer {
        memo: None,
        ..Transfer::default()
    };
    let bytes = strata::to_binary(&mut value, "transfer").unwrap();
    let decoded: Transfer = strata::from_binary(&bytes, "transfer").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_json_roundtrip() {
    let mut value = sample();
    let tree = strata::to_json_value(&mut value, "transfer").unwrap();
    // discriminators travel as their symbolic names in trees
    assert_eq!(tree["transfer"]["direction"], "out");
    assert_eq!(
        tree["transfer"]["flags"],
        serde_json::json!(["coinbase", "locked"])
    );
    assert_eq!(tree["transfer"]["source"]["type"], "key");
    assert_eq!(tree["transfer"]["source"]["value"], "deadbeef");

    let decoded: Transfer = strata::from_json_value(&tree, "transfer").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_yaml_roundtrip() {
    let mut value = sample();
    let text = strata::to_yaml_string(&mut value, "transfer").unwrap();
    let decoded: Transfer = strata::from_yaml_str(&text, "transfer").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_yaml_roundtrip_with_absent_optional() {
    let mut value = sample();
    value.memo = None;
    let text = strata::to_yaml_string(&mut value, "transfer").unwrap();
    assert!(text.contains("memo: ~"));
    let decoded: Transfer = strata::from_yaml_str(&text, "transfer").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_validate_accepts_well_formed_traversal() {
    let mut value = sample();
    strata::validate(&mut value, "transfer").unwrap();
    // validation observes only; the value is untouched
    assert_eq!(value, sample());
}

#[test]
fn test_validate_rejects_unannotated_flag_bit() {
    let mut value = sample();
    value.flags = TransferFlags(1 << 9);
    assert!(matches!(
        strata::validate(&mut value, "transfer"),
        Err(Error::UnknownTag(_))
    ));
}

#[test]
fn test_time_delta_keeps_its_sign() {
    let mut enc = strata::BinaryEncoder::new();
    let mut delta = chrono::TimeDelta::milliseconds(-250);
    strata::serialize_time_delta(&mut delta, "drift", &mut enc).unwrap();
    let bytes = enc.into_bytes();

    let mut dec = strata::BinaryDecoder::new(&bytes);
    let mut out = chrono::TimeDelta::zero();
    strata::serialize_time_delta(&mut out, "drift", &mut dec).unwrap();
    assert_eq!(out, delta);
}

#[test]
fn test_console_dump_is_styled_text() {
    colored::control::set_override(true);
    let mut value = sample();
    let text = strata::to_console_string(&mut value, "transfer").unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("height"));
    assert!(text.contains("deadbeef"));
}
