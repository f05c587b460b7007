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

//! Compact positional binary wire format.
//!
//! Field identity is write/read order, never name: objects carry no framing
//! at all, arrays carry a varint count prefix, strings and blobs a varint
//! length prefix. Decode order must exactly match encode order.

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::{bail, ensure};
use crate::serializer::{Direction, Presentation, Serializer, MAX_FLAG_TAGS};
use crate::tag::TypeTag;

/// Backward-compatibility overrides for fields that historically shipped
/// oversized payloads: a string field named here whose declared length
/// exceeds its limit is drained and decoded as empty instead of failing.
/// A named exception table, not a general size policy.
const LEGACY_FIELD_LIMITS: &[(&str, usize)] = &[("mm_tag", 255)];

fn legacy_limit(name: &str) -> Option<usize> {
    LEGACY_FIELD_LIMITS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|&(_, limit)| limit)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Object,
    Array,
}

fn close_scope(stack: &mut Vec<Scope>, expected: Scope) -> Result<(), Error> {
    match stack.pop() {
        Some(scope) if scope == expected => Ok(()),
        Some(_) => Err(Error::structure_mismatch(format!(
            "closed {:?} scope with the wrong end call",
            expected
        ))),
        None => Err(Error::structure_mismatch("end call without matching begin")),
    }
}

/// Binary OUTPUT codec over an owned byte buffer.
#[derive(Default)]
pub struct BinaryEncoder {
    writer: Writer,
    stack: Vec<Scope>,
}

impl BinaryEncoder {
    pub fn new() -> BinaryEncoder {
        BinaryEncoder::default()
    }

    /// Nesting depth of currently open scopes; zero once a well-formed
    /// top-level serialize has finished.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        debug_assert!(self.stack.is_empty(), "unbalanced begin/end");
        self.writer.into_bytes()
    }

    fn varuint(&mut self, value: u64) -> Result<(), Error> {
        self.writer.write_varuint(value);
        Ok(())
    }
}

impl Serializer for BinaryEncoder {
    fn direction(&self) -> Direction {
        Direction::Output
    }

    fn presentation(&self) -> Presentation {
        Presentation::Machinery
    }

    fn begin_object(&mut self, _name: &str) -> Result<(), Error> {
        // members are positional, no framing on the wire
        self.stack.push(Scope::Object);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        close_scope(&mut self.stack, Scope::Object)
    }

    fn begin_array(&mut self, len: &mut usize, _name: &str) -> Result<(), Error> {
        self.stack.push(Scope::Array);
        self.varuint(*len as u64)
    }

    fn end_array(&mut self) -> Result<(), Error> {
        close_scope(&mut self.stack, Scope::Array)
    }

    fn u8(&mut self, value: &mut u8, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u64)
    }

    fn u16(&mut self, value: &mut u16, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u64)
    }

    fn u32(&mut self, value: &mut u32, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u64)
    }

    fn u64(&mut self, value: &mut u64, _name: &str) -> Result<(), Error> {
        self.varuint(*value)
    }

    fn i8(&mut self, value: &mut i8, _name: &str) -> Result<(), Error> {
        // bit pattern as the same-width unsigned type, no zig-zag
        self.varuint(*value as u8 as u64)
    }

    fn i16(&mut self, value: &mut i16, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u16 as u64)
    }

    fn i32(&mut self, value: &mut i32, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u32 as u64)
    }

    fn i64(&mut self, value: &mut i64, _name: &str) -> Result<(), Error> {
        self.varuint(*value as u64)
    }

    fn boolean(&mut self, value: &mut bool, _name: &str) -> Result<(), Error> {
        self.writer.write_u8(*value as u8);
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, _name: &str) -> Result<(), Error> {
        self.writer.write_f64(*value);
        Ok(())
    }

    fn string(&mut self, value: &mut String, _name: &str) -> Result<(), Error> {
        self.varuint(value.len() as u64)?;
        self.writer.write_bytes(value.as_bytes());
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], _name: &str) -> Result<(), Error> {
        self.writer.write_bytes(bytes);
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, _name: &str) -> Result<(), Error> {
        self.varuint(bytes.len() as u64)?;
        self.writer.write_bytes(bytes);
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, _name: &str) -> Result<(), Error> {
        // positional format needs a deterministic signal either way
        self.writer.write_u8(*present as u8);
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error> {
        ensure!(
            !tag.is_null(),
            Error::unknown_tag(format!("null tag for '{}'", name))
        );
        self.varuint(tag.binary)
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        ensure!(
            tags.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", tags.len(), name))
        );
        self.varuint(tags.len() as u64)?;
        for tag in tags {
            ensure!(
                tag.binary != 0,
                Error::unknown_tag(format!("flag tag without binary part for '{}'", name))
            );
            self.writer.write_varuint(tag.binary);
        }
        Ok(())
    }
}

/// Binary INPUT codec over a borrowed byte buffer.
pub struct BinaryDecoder<'a> {
    reader: Reader<'a>,
    stack: Vec<Scope>,
}

impl<'a> BinaryDecoder<'a> {
    pub fn new(bytes: &'a [u8]) -> BinaryDecoder<'a> {
        BinaryDecoder {
            reader: Reader::new(bytes),
            stack: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    fn varuint_bounded(&mut self, max: u64, what: &str) -> Result<u64, Error> {
        let raw = self.reader.read_varuint()?;
        ensure!(
            raw <= max,
            Error::range_overflow(format!("{} out of range: {}", what, raw))
        );
        Ok(raw)
    }
}

impl Serializer for BinaryDecoder<'_> {
    fn direction(&self) -> Direction {
        Direction::Input
    }

    fn presentation(&self) -> Presentation {
        Presentation::Machinery
    }

    fn begin_object(&mut self, _name: &str) -> Result<(), Error> {
        self.stack.push(Scope::Object);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        close_scope(&mut self.stack, Scope::Object)
    }

    fn begin_array(&mut self, len: &mut usize, _name: &str) -> Result<(), Error> {
        let count = self.reader.read_varuint()?;
        let count = usize::try_from(count)
            .map_err(|_| Error::range_overflow(format!("array count {}", count)))?;
        // every element costs at least one wire byte, so a count past the
        // remaining input is corrupt; callers pre-size from this value
        if count > self.reader.remaining() {
            bail!(
                "array count {} exceeds {} remaining bytes",
                count,
                self.reader.remaining()
            );
        }
        self.stack.push(Scope::Array);
        *len = count;
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        close_scope(&mut self.stack, Scope::Array)
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u8::MAX as u64, name)? as u8;
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u16::MAX as u64, name)? as u16;
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u32::MAX as u64, name)? as u32;
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, _name: &str) -> Result<(), Error> {
        *value = self.reader.read_varuint()?;
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u8::MAX as u64, name)? as u8 as i8;
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u16::MAX as u64, name)? as u16 as i16;
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        *value = self.varuint_bounded(u32::MAX as u64, name)? as u32 as i32;
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, _name: &str) -> Result<(), Error> {
        *value = self.reader.read_varuint()? as i64;
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, _name: &str) -> Result<(), Error> {
        *value = self.reader.read_u8()? != 0;
        Ok(())
    }

    fn f64(&mut self, _value: &mut f64, name: &str) -> Result<(), Error> {
        Err(Error::unsupported(format!(
            "floating point decode from the binary wire ('{}')",
            name
        )))
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        let len = self.reader.read_varuint()?;
        let len = usize::try_from(len)
            .map_err(|_| Error::range_overflow(format!("string length {}", len)))?;
        if let Some(limit) = legacy_limit(name) {
            if len > limit {
                // drain exactly the declared bytes so later reads stay aligned
                log::debug!("draining oversized legacy field '{}' ({} bytes)", name, len);
                self.reader.skip(len)?;
                value.clear();
                return Ok(());
            }
        }
        let bytes = self.reader.read_bytes(len)?;
        *value = String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::invalid_data(format!("invalid utf-8 in '{}'", name)))?;
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], _name: &str) -> Result<(), Error> {
        let src = self.reader.read_bytes(bytes.len())?;
        bytes.copy_from_slice(src);
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error> {
        let len = self.reader.read_varuint()?;
        let len = usize::try_from(len)
            .map_err(|_| Error::range_overflow(format!("blob length for '{}'", name)))?;
        let src = self.reader.read_bytes(len)?;
        bytes.clear();
        bytes.extend_from_slice(src);
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, _name: &str) -> Result<(), Error> {
        *present = self.reader.read_u8()? != 0;
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, _name: &str) -> Result<(), Error> {
        *tag = TypeTag::from_binary(self.reader.read_varuint()?);
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        let count = self.varuint_bounded(MAX_FLAG_TAGS as u64, name)? as usize;
        tags.clear();
        for _ in 0..count {
            tags.push(TypeTag::from_binary(self.reader.read_varuint()?));
        }
        Ok(())
    }
}
