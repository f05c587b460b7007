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

//! Core engine of the strata serialization framework.
//!
//! One [`Serializable`](serializer::Serializable) implementation per type
//! drives every format: the compact binary wire, JSON and YAML trees, a
//! colorized console dump and an always-succeeds validation sink. The
//! [`serializer`] module defines the traversal protocol and the generic
//! algorithms for containers, optionals, enums, flags and unions; [`codec`]
//! holds the per-format backends; [`buffer`] the byte-level plumbing the
//! binary codec sits on.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod serializer;
pub mod tag;

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use crate::codec::{
    BinaryDecoder, BinaryEncoder, ConsoleEncoder, JsonDecoder, JsonEncoder, NullEncoder,
    YamlDecoder, YamlEncoder,
};
use crate::error::Error;
use crate::serializer::Serializable;

/// Encodes `value` to the compact binary wire format.
pub fn to_binary<T: Serializable>(value: &mut T, name: &str) -> Result<Vec<u8>, Error> {
    let mut encoder = BinaryEncoder::new();
    value.serialize(name, &mut encoder)?;
    Ok(encoder.into_bytes())
}

/// Decodes a value from the compact binary wire format. The whole input must
/// be consumed; trailing bytes fail the decode.
pub fn from_binary<T: Serializable + Default>(bytes: &[u8], name: &str) -> Result<T, Error> {
    let mut decoder = BinaryDecoder::new(bytes);
    let mut value = T::default();
    value.serialize(name, &mut decoder)?;
    if decoder.remaining() != 0 {
        return Err(Error::invalid_data(format!(
            "{} trailing bytes after '{}'",
            decoder.remaining(),
            name
        )));
    }
    Ok(value)
}

/// Encodes `value` into a JSON tree under `name` at the root.
pub fn to_json_value<T: Serializable>(value: &mut T, name: &str) -> Result<JsonValue, Error> {
    let mut encoder = JsonEncoder::new();
    value.serialize(name, &mut encoder)?;
    Ok(encoder.into_value())
}

/// Like [`to_json_value`], rendered as pretty-printed text.
pub fn to_json_string<T: Serializable>(value: &mut T, name: &str) -> Result<String, Error> {
    let tree = to_json_value(value, name)?;
    serde_json::to_string_pretty(&tree).map_err(|e| Error::invalid_data(e.to_string()))
}

/// Decodes a value from a JSON tree; `name` is looked up at the root.
pub fn from_json_value<T: Serializable + Default>(
    root: &JsonValue,
    name: &str,
) -> Result<T, Error> {
    let mut decoder = JsonDecoder::new(root)?;
    let mut value = T::default();
    value.serialize(name, &mut decoder)?;
    Ok(value)
}

/// Parses `text` as JSON and decodes like [`from_json_value`].
pub fn from_json_str<T: Serializable + Default>(text: &str, name: &str) -> Result<T, Error> {
    let root: JsonValue =
        serde_json::from_str(text).map_err(|e| Error::invalid_data(e.to_string()))?;
    from_json_value(&root, name)
}

/// Encodes `value` as a YAML document.
pub fn to_yaml_string<T: Serializable>(value: &mut T, name: &str) -> Result<String, Error> {
    let mut encoder = YamlEncoder::new();
    value.serialize(name, &mut encoder)?;
    Ok(encoder.into_string())
}

/// Parses `text` as YAML and decodes a value out of it.
pub fn from_yaml_str<T: Serializable + Default>(text: &str, name: &str) -> Result<T, Error> {
    let root: YamlValue =
        serde_yaml::from_str(text).map_err(|e| Error::invalid_data(e.to_string()))?;
    let mut decoder = YamlDecoder::new(&root);
    let mut value = T::default();
    value.serialize(name, &mut decoder)?;
    Ok(value)
}

/// Renders `value` as the colorized console dump.
pub fn to_console_string<T: Serializable>(value: &mut T, name: &str) -> Result<String, Error> {
    let mut encoder = ConsoleEncoder::new();
    value.serialize(name, &mut encoder)?;
    Ok(encoder.into_string())
}

/// Runs `value`'s serialize logic against the null sink. Succeeding here
/// means the traversal is well-formed for every OUTPUT codec.
pub fn validate<T: Serializable>(value: &mut T, name: &str) -> Result<(), Error> {
    let mut sink = NullEncoder::new();
    value.serialize(name, &mut sink)
}
