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

//! # Strata
//!
//! Strata is a bidirectional, format-agnostic serialization engine. A type
//! describes its layout once, as an ordered traversal over named fields, and
//! that single description drives every supported representation:
//!
//! - a compact varint binary wire format for persistence and transport,
//! - JSON and YAML value trees for configuration and RPC,
//! - a colorized console dump for operators,
//! - a null sink that validates a traversal without producing output.
//!
//! ## Describing a type
//!
//! ```rust
//! use strata::{Error, Serializable, Serializer};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct BlockRef {
//!     height: u64,
//!     hash: [u8; 4],
//! }
//!
//! impl Serializable for BlockRef {
//!     fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
//!         s.begin_object(name)?;
//!         s.u64(&mut self.height, "height")?;
//!         s.binary(&mut self.hash, "hash")?;
//!         s.end_object()
//!     }
//! }
//!
//! let mut block = BlockRef { height: 120, hash: [0xAA, 0xBB, 0xCC, 0xDD] };
//! let bytes = strata::to_binary(&mut block, "block").unwrap();
//! let decoded: BlockRef = strata::from_binary(&bytes, "block").unwrap();
//! assert_eq!(decoded, block);
//!
//! let text = strata::to_json_string(&mut block, "block").unwrap();
//! assert!(text.contains("\"height\": 120"));
//! ```
//!
//! The same `serialize` body runs in both directions: encoding observes the
//! value, decoding overwrites it in place. Generic helpers in
//! [`serializer`](strata_core::serializer) cover containers, maps, sets,
//! optionals, fixed arrays, durations, tagged enums, bit-flags and
//! discriminated unions.

pub use strata_core::codec::{
    BinaryDecoder, BinaryEncoder, ConsoleEncoder, JsonDecoder, JsonEncoder, NullEncoder,
    YamlDecoder, YamlEncoder,
};
pub use strata_core::error::Error;
pub use strata_core::serializer::array::serialize_fixed_array;
pub use strata_core::serializer::collection::{serialize_deque, serialize_vec};
pub use strata_core::serializer::duration::{serialize_duration, serialize_time_delta};
pub use strata_core::serializer::enum_::{serialize_enum, TaggedEnum};
pub use strata_core::serializer::flags::{serialize_flags, FlagBits};
pub use strata_core::serializer::map::{
    serialize_btree_map, serialize_btree_multi_map, serialize_hash_map, serialize_hash_multi_map,
};
pub use strata_core::serializer::option::{serialize_option, serialize_optional_vec};
pub use strata_core::serializer::set::{serialize_btree_set, serialize_hash_set};
pub use strata_core::serializer::variant::{
    serialize_variant, TaggedVariant, VARIANT_TAG_FIELD, VARIANT_VALUE_FIELD,
};
pub use strata_core::serializer::{
    Direction, Presentation, Serializable, Serializer, MAX_FLAG_TAGS,
};
pub use strata_core::tag::TypeTag;
pub use strata_core::{
    from_binary, from_json_str, from_json_value, from_yaml_str, to_binary, to_console_string,
    to_json_string, to_json_value, to_yaml_string, validate,
};
