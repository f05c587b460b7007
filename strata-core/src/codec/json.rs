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

//! Named-field tree format over [`serde_json::Value`].
//!
//! OUTPUT builds an insertion-ordered value tree; INPUT wraps a pre-parsed
//! tree and descends by name in maps and by position in sequences, so arrays
//! of objects/arrays work without synthetic keys. Binary blobs render as
//! lowercase hex strings, absent optionals as `null`, discriminators as their
//! text tag.

use serde_json::map::Map;
use serde_json::Value;

use crate::ensure;
use crate::error::Error;
use crate::serializer::{Direction, Presentation, Serializer, MAX_FLAG_TAGS};
use crate::tag::TypeTag;

enum OutFrame {
    Map { name: String, map: Map<String, Value> },
    Seq { name: String, seq: Vec<Value> },
}

/// JSON OUTPUT codec; builds a [`Value`] tree rooted in an implicit map so
/// the top-level `serialize(value, name, s)` call lands under `name`.
#[derive(Default)]
pub struct JsonEncoder {
    root: Map<String, Value>,
    stack: Vec<OutFrame>,
}

impl JsonEncoder {
    pub fn new() -> JsonEncoder {
        JsonEncoder::default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn into_value(self) -> Value {
        debug_assert!(self.stack.is_empty(), "unbalanced begin/end");
        Value::Object(self.root)
    }

    fn attach(&mut self, name: &str, value: Value) {
        match self.stack.last_mut() {
            Some(OutFrame::Map { map, .. }) => {
                map.insert(name.to_owned(), value);
            }
            Some(OutFrame::Seq { seq, .. }) => seq.push(value),
            None => {
                self.root.insert(name.to_owned(), value);
            }
        }
    }

    fn require_text(tag: &TypeTag, name: &str) -> Result<Value, Error> {
        ensure!(
            !tag.text.is_empty(),
            Error::unknown_tag(format!("tag without text part for '{}'", name))
        );
        Ok(Value::String(tag.text.clone().into_owned()))
    }
}

impl Serializer for JsonEncoder {
    fn direction(&self) -> Direction {
        Direction::Output
    }

    fn presentation(&self) -> Presentation {
        Presentation::Machinery
    }

    fn begin_object(&mut self, name: &str) -> Result<(), Error> {
        self.stack.push(OutFrame::Map {
            name: name.to_owned(),
            map: Map::new(),
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(OutFrame::Map { name, map }) => {
                self.attach(&name, Value::Object(map));
                Ok(())
            }
            Some(frame @ OutFrame::Seq { .. }) => {
                self.stack.push(frame);
                Err(Error::structure_mismatch("end_object closes an array scope"))
            }
            None => Err(Error::structure_mismatch("end_object without begin_object")),
        }
    }

    fn begin_array(&mut self, _len: &mut usize, name: &str) -> Result<(), Error> {
        self.stack.push(OutFrame::Seq {
            name: name.to_owned(),
            seq: Vec::new(),
        });
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(OutFrame::Seq { name, seq }) => {
                self.attach(&name, Value::Array(seq));
                Ok(())
            }
            Some(frame @ OutFrame::Map { .. }) => {
                self.stack.push(frame);
                Err(Error::structure_mismatch("end_array closes an object scope"))
            }
            None => Err(Error::structure_mismatch("end_array without begin_array")),
        }
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error> {
        self.attach(name, Value::from(*value));
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error> {
        self.attach(name, Value::Bool(*value));
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error> {
        let number = serde_json::Number::from_f64(*value)
            .ok_or_else(|| Error::invalid_data(format!("non-finite float for '{}'", name)))?;
        self.attach(name, Value::Number(number));
        Ok(())
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        self.attach(name, Value::String(value.clone()));
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error> {
        self.attach(name, Value::String(hex::encode(bytes)));
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error> {
        self.attach(name, Value::String(hex::encode(&*bytes)));
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error> {
        if !*present {
            self.attach(name, Value::Null);
        }
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error> {
        ensure!(
            !tag.is_null(),
            Error::unknown_tag(format!("null tag for '{}'", name))
        );
        let text = Self::require_text(tag, name)?;
        self.attach(name, text);
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        ensure!(
            tags.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", tags.len(), name))
        );
        let mut entries = Vec::with_capacity(tags.len());
        for tag in tags.iter() {
            entries.push(Self::require_text(tag, name)?);
        }
        self.attach(name, Value::Array(entries));
        Ok(())
    }
}

enum InFrame<'a> {
    Map(&'a Map<String, Value>),
    Seq { seq: &'a [Value], next: usize },
    /// Stands in for a missing array field, which decodes as empty.
    Empty,
}

/// JSON INPUT codec over a pre-parsed tree. Holds shared references only;
/// parse errors belong to the caller that produced the tree.
pub struct JsonDecoder<'a> {
    stack: Vec<InFrame<'a>>,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(root: &'a Value) -> Result<JsonDecoder<'a>, Error> {
        let map = root
            .as_object()
            .ok_or_else(|| Error::type_mismatch("top-level JSON value is not an object"))?;
        Ok(JsonDecoder {
            stack: vec![InFrame::Map(map)],
        })
    }

    /// Looks up the named child, consuming the next positional element when
    /// the current container is an array.
    fn fetch(&mut self, name: &str) -> Result<&'a Value, Error> {
        match self.stack.last_mut() {
            Some(InFrame::Map(map)) => map
                .get(name)
                .ok_or_else(|| Error::missing_field(name.to_owned())),
            Some(InFrame::Seq { seq, next }) => {
                let value = seq
                    .get(*next)
                    .ok_or_else(|| Error::missing_field("array element past the end"))?;
                *next += 1;
                Ok(value)
            }
            Some(InFrame::Empty) => Err(Error::missing_field(name.to_owned())),
            None => Err(Error::structure_mismatch("read outside any scope")),
        }
    }

    /// [`fetch`](Self::fetch) without consuming a positional element.
    fn peek(&self, name: &str) -> Option<&'a Value> {
        match self.stack.last() {
            Some(InFrame::Map(map)) => map.get(name),
            Some(InFrame::Seq { seq, next }) => seq.get(*next),
            _ => None,
        }
    }
}

impl Serializer for JsonDecoder<'_> {
    fn direction(&self) -> Direction {
        Direction::Input
    }

    fn presentation(&self) -> Presentation {
        Presentation::Machinery
    }

    fn begin_object(&mut self, name: &str) -> Result<(), Error> {
        let child = self.fetch(name)?;
        let map = child
            .as_object()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not an object", name)))?;
        self.stack.push(InFrame::Map(map));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        ensure!(
            self.stack.len() > 1,
            Error::structure_mismatch("end_object without begin_object")
        );
        match self.stack.pop() {
            Some(InFrame::Map(_)) => Ok(()),
            _ => Err(Error::structure_mismatch("end_object closes an array scope")),
        }
    }

    fn begin_array(&mut self, len: &mut usize, name: &str) -> Result<(), Error> {
        // a missing array *field* is an empty array, not a failure; a
        // missing positional element is still one
        let Some(child) = self.peek(name) else {
            if matches!(self.stack.last(), Some(InFrame::Seq { .. })) {
                return Err(Error::missing_field("array element past the end"));
            }
            *len = 0;
            self.stack.push(InFrame::Empty);
            return Ok(());
        };
        let seq = child
            .as_array()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not an array", name)))?;
        // consume the positional slot the peek left in place
        self.fetch(name)?;
        *len = seq.len();
        self.stack.push(InFrame::Seq { seq, next: 0 });
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        ensure!(
            self.stack.len() > 1,
            Error::structure_mismatch("end_array without begin_array")
        );
        match self.stack.pop() {
            Some(InFrame::Seq { .. }) | Some(InFrame::Empty) => Ok(()),
            _ => Err(Error::structure_mismatch("end_array closes an object scope")),
        }
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        let raw = read_u64(self.fetch(name)?, name)?;
        *value = u8::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        let raw = read_u64(self.fetch(name)?, name)?;
        *value = u16::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        let raw = read_u64(self.fetch(name)?, name)?;
        *value = u32::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error> {
        *value = read_u64(self.fetch(name)?, name)?;
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        let raw = read_i64(self.fetch(name)?, name)?;
        *value = i8::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        let raw = read_i64(self.fetch(name)?, name)?;
        *value = i16::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        let raw = read_i64(self.fetch(name)?, name)?;
        *value = i32::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error> {
        *value = read_i64(self.fetch(name)?, name)?;
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error> {
        *value = self
            .fetch(name)?
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a boolean", name)))?;
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error> {
        *value = self
            .fetch(name)?
            .as_f64()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a number", name)))?;
        Ok(())
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        *value = read_str(self.fetch(name)?, name)?.to_owned();
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error> {
        let decoded = read_hex(self.fetch(name)?, name)?;
        ensure!(
            decoded.len() == bytes.len(),
            Error::range_overflow(format!(
                "'{}': expected {} bytes, got {}",
                name,
                bytes.len(),
                decoded.len()
            ))
        );
        bytes.copy_from_slice(&decoded);
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error> {
        *bytes = read_hex(self.fetch(name)?, name)?;
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error> {
        match self.peek(name) {
            Some(Value::Null) => {
                // consume the null so positional reads stay aligned
                if matches!(self.stack.last(), Some(InFrame::Seq { .. })) {
                    self.fetch(name)?;
                }
                *present = false;
            }
            Some(_) => *present = true,
            None => *present = false,
        }
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error> {
        *tag = TypeTag::from_text(read_str(self.fetch(name)?, name)?.to_owned());
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        let entries = self
            .fetch(name)?
            .as_array()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not an array", name)))?;
        ensure!(
            entries.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", entries.len(), name))
        );
        tags.clear();
        for entry in entries {
            tags.push(TypeTag::from_text(read_str(entry, name)?.to_owned()));
        }
        Ok(())
    }
}

fn read_u64(value: &Value, name: &str) -> Result<u64, Error> {
    value
        .as_u64()
        .ok_or_else(|| Error::type_mismatch(format!("'{}' is not an unsigned integer", name)))
}

fn read_i64(value: &Value, name: &str) -> Result<i64, Error> {
    value
        .as_i64()
        .ok_or_else(|| Error::type_mismatch(format!("'{}' is not an integer", name)))
}

fn read_str<'v>(value: &'v Value, name: &str) -> Result<&'v str, Error> {
    value
        .as_str()
        .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a string", name)))
}

fn read_hex(value: &Value, name: &str) -> Result<Vec<u8>, Error> {
    hex::decode(read_str(value, name)?)
        .map_err(|_| Error::invalid_data(format!("'{}' is not a hex string", name)))
}
