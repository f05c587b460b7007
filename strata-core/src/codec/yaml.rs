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

//! Human-readable YAML text format.
//!
//! OUTPUT is a block-style emitter tracking a stack of object/array markers
//! to decide whether the next value needs a preceding key; the console codec
//! reuses it with styled strings. INPUT parses the whole document up front
//! via `serde_yaml` and then descends name-or-positionally like the JSON
//! decoder, except that the root node is the document itself — a YAML
//! document is a single top-level map or sequence, not nested under a
//! synthetic key.

use serde_yaml::{Mapping, Value};

use crate::ensure;
use crate::error::Error;
use crate::serializer::{Direction, Presentation, Serializer, MAX_FLAG_TAGS};
use crate::tag::TypeTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
    Object,
    Array,
}

struct EmitFrame {
    mark: Mark,
    /// Header line text (`name:` or `-`), written lazily so empty
    /// containers can collapse to `name: {}` / `name: []`. `None` for the
    /// document root, which has no synthetic key.
    header: Option<String>,
    flushed: bool,
}

/// Block-style YAML line emitter shared by the YAML and console codecs.
/// Callers pass key/value strings as they should appear, which is how the
/// console codec interleaves ANSI styling without owning emission logic.
#[derive(Default)]
pub(crate) struct Emitter {
    frames: Vec<EmitFrame>,
    out: String,
}

impl Emitter {
    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str("  ");
        }
    }

    /// Writes any pending container headers, outermost first.
    fn flush_headers(&mut self) {
        for i in 0..self.frames.len() {
            if self.frames[i].flushed {
                continue;
            }
            self.frames[i].flushed = true;
            if let Some(header) = self.frames[i].header.take() {
                self.indent(i - 1);
                self.out.push_str(&header);
                self.out.push('\n');
            }
        }
    }

    pub(crate) fn begin(&mut self, mark: Mark, label: &str) {
        let header = match self.frames.last() {
            None => None,
            Some(parent) if parent.mark == Mark::Array => Some("-".to_owned()),
            Some(_) => Some(format!("{}:", label)),
        };
        self.frames.push(EmitFrame {
            mark,
            header,
            flushed: false,
        });
    }

    pub(crate) fn end(&mut self, expected: Mark) -> Result<(), Error> {
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| Error::structure_mismatch("end call without matching begin"))?;
        ensure!(
            frame.mark == expected,
            Error::structure_mismatch(format!("{:?} scope closed with the wrong end call", frame.mark))
        );
        if frame.flushed {
            return Ok(());
        }
        // nothing was emitted for this container: write it inline
        self.flush_headers();
        let empty = match frame.mark {
            Mark::Object => "{}",
            Mark::Array => "[]",
        };
        match frame.header {
            Some(header) => {
                self.indent(self.frames.len().saturating_sub(1));
                self.out.push_str(&header);
                self.out.push(' ');
                self.out.push_str(empty);
            }
            None => self.out.push_str(empty),
        }
        self.out.push('\n');
        Ok(())
    }

    /// Writes one value line: `key: value` inside an object, `- value`
    /// inside an array. Children of frame `i` sit at indent `i`.
    pub(crate) fn entry(&mut self, key: &str, value: &str) {
        self.flush_headers();
        self.indent(self.frames.len().saturating_sub(1));
        match self.frames.last() {
            Some(frame) if frame.mark == Mark::Array => {
                self.out.push_str("- ");
            }
            _ => {
                self.out.push_str(key);
                self.out.push_str(": ");
            }
        }
        self.out.push_str(value);
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        debug_assert!(self.frames.is_empty(), "unbalanced begin/end");
        self.out
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Double-quotes a string with JSON-style escapes, which are a subset of
/// YAML's double-quoted scalar escapes. Quoting everything keeps hex blobs
/// and digit-only strings from re-parsing as numbers.
pub(crate) fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(crate) fn fmt_f64(value: f64, name: &str) -> Result<String, Error> {
    ensure!(
        value.is_finite(),
        Error::invalid_data(format!("non-finite float for '{}'", name))
    );
    let mut text = value.to_string();
    if !text.contains('.') && !text.contains('e') {
        // keep the scalar re-parsing as a float
        text.push_str(".0");
    }
    Ok(text)
}

/// YAML OUTPUT codec: plain text, no styling.
#[derive(Default)]
pub struct YamlEncoder {
    emitter: Emitter,
}

impl YamlEncoder {
    pub fn new() -> YamlEncoder {
        YamlEncoder::default()
    }

    pub fn depth(&self) -> usize {
        self.emitter.depth()
    }

    pub fn into_string(self) -> String {
        self.emitter.finish()
    }

    fn require_text(tag: &TypeTag, name: &str) -> Result<String, Error> {
        ensure!(
            !tag.text.is_empty(),
            Error::unknown_tag(format!("tag without text part for '{}'", name))
        );
        Ok(quote_str(&tag.text))
    }
}

impl Serializer for YamlEncoder {
    fn direction(&self) -> Direction {
        Direction::Output
    }

    fn presentation(&self) -> Presentation {
        Presentation::HumanReadable
    }

    fn begin_object(&mut self, name: &str) -> Result<(), Error> {
        self.emitter.begin(Mark::Object, name);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        self.emitter.end(Mark::Object)
    }

    fn begin_array(&mut self, _len: &mut usize, name: &str) -> Result<(), Error> {
        self.emitter.begin(Mark::Array, name);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        self.emitter.end(Mark::Array)
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &value.to_string());
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, if *value { "true" } else { "false" });
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error> {
        let text = fmt_f64(*value, name)?;
        self.emitter.entry(name, &text);
        Ok(())
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &quote_str(value));
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &quote_str(&hex::encode(bytes)));
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error> {
        self.emitter.entry(name, &quote_str(&hex::encode(&*bytes)));
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error> {
        if !*present {
            self.emitter.entry(name, "~");
        }
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error> {
        ensure!(
            !tag.is_null(),
            Error::unknown_tag(format!("null tag for '{}'", name))
        );
        let text = Self::require_text(tag, name)?;
        self.emitter.entry(name, &text);
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        ensure!(
            tags.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", tags.len(), name))
        );
        self.emitter.begin(Mark::Array, name);
        for tag in tags.iter() {
            let text = Self::require_text(tag, name)?;
            self.emitter.entry("", &text);
        }
        self.emitter.end(Mark::Array)
    }
}

enum InFrame<'a> {
    Map(&'a Mapping),
    Seq { seq: &'a [Value], next: usize },
    Empty,
}

/// YAML INPUT codec over a pre-parsed document. The root node is handed out
/// exactly once, on the first child lookup.
pub struct YamlDecoder<'a> {
    root: Option<&'a Value>,
    stack: Vec<InFrame<'a>>,
}

impl<'a> YamlDecoder<'a> {
    pub fn new(root: &'a Value) -> YamlDecoder<'a> {
        YamlDecoder {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    fn lookup(map: &'a Mapping, name: &str) -> Option<&'a Value> {
        map.iter()
            .find(|(k, _)| k.as_str() == Some(name))
            .map(|(_, v)| v)
    }

    /// Container lookup: object and array scopes opened at the top level
    /// consume the document root whole.
    fn fetch(&mut self, name: &str) -> Result<&'a Value, Error> {
        match self.stack.last_mut() {
            Some(InFrame::Map(map)) => Self::lookup(map, name)
                .ok_or_else(|| Error::missing_field(name.to_owned())),
            Some(InFrame::Seq { seq, next }) => {
                let value = seq
                    .get(*next)
                    .ok_or_else(|| Error::missing_field("sequence element past the end"))?;
                *next += 1;
                Ok(value)
            }
            Some(InFrame::Empty) => Err(Error::missing_field(name.to_owned())),
            None => self
                .root
                .take()
                .ok_or_else(|| Error::structure_mismatch("document root already consumed")),
        }
    }

    /// Scalar lookup: a top-level scalar document is a one-entry mapping
    /// (the emitter writes `name: value`), so with no scope open the named
    /// entry is looked up inside the root mapping instead of handing the
    /// root back whole.
    fn fetch_scalar(&mut self, name: &str) -> Result<&'a Value, Error> {
        if !self.stack.is_empty() {
            return self.fetch(name);
        }
        let root = self
            .root
            .take()
            .ok_or_else(|| Error::structure_mismatch("document root already consumed"))?;
        let map = root
            .as_mapping()
            .ok_or_else(|| Error::type_mismatch(format!("document holds no '{}' entry", name)))?;
        Self::lookup(map, name).ok_or_else(|| Error::missing_field(name.to_owned()))
    }

    fn peek(&self, name: &str) -> Option<&'a Value> {
        match self.stack.last() {
            Some(InFrame::Map(map)) => Self::lookup(map, name),
            Some(InFrame::Seq { seq, next }) => seq.get(*next),
            Some(InFrame::Empty) => None,
            None => self.root,
        }
    }
}

fn scalar_u64(value: &Value, name: &str) -> Result<u64, Error> {
    if let Some(v) = value.as_u64() {
        return Ok(v);
    }
    // a negative integer is the wrong range, not the wrong kind
    if let Some(v) = value.as_i64() {
        return Err(Error::range_overflow(format!("'{}': {}", name, v)));
    }
    // quoted numbers still count: text-to-number conversion is
    // locale-independent by construction here
    if let Some(s) = value.as_str() {
        let s = s.trim();
        if let Ok(v) = s.parse::<u64>() {
            return Ok(v);
        }
        if let Ok(v) = s.parse::<i64>() {
            return Err(Error::range_overflow(format!("'{}': {}", name, v)));
        }
    }
    Err(Error::type_mismatch(format!(
        "'{}' is not an unsigned integer",
        name
    )))
}

fn scalar_i64(value: &Value, name: &str) -> Result<i64, Error> {
    if let Some(v) = value.as_i64() {
        return Ok(v);
    }
    // an unsigned value past i64::MAX is the wrong range, not the wrong kind
    if let Some(v) = value.as_u64() {
        return Err(Error::range_overflow(format!("'{}': {}", name, v)));
    }
    if let Some(s) = value.as_str() {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(v);
        }
        if let Ok(v) = s.parse::<u64>() {
            return Err(Error::range_overflow(format!("'{}': {}", name, v)));
        }
    }
    Err(Error::type_mismatch(format!("'{}' is not an integer", name)))
}

fn scalar_str<'v>(value: &'v Value, name: &str) -> Result<&'v str, Error> {
    value
        .as_str()
        .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a string", name)))
}

impl Serializer for YamlDecoder<'_> {
    fn direction(&self) -> Direction {
        Direction::Input
    }

    fn presentation(&self) -> Presentation {
        Presentation::HumanReadable
    }

    fn begin_object(&mut self, name: &str) -> Result<(), Error> {
        let child = self.fetch(name)?;
        let map = child
            .as_mapping()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a mapping", name)))?;
        self.stack.push(InFrame::Map(map));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(InFrame::Map(_)) => Ok(()),
            Some(_) => Err(Error::structure_mismatch("end_object closes an array scope")),
            None => Err(Error::structure_mismatch("end_object without begin_object")),
        }
    }

    fn begin_array(&mut self, len: &mut usize, name: &str) -> Result<(), Error> {
        let Some(child) = self.peek(name) else {
            if matches!(self.stack.last(), Some(InFrame::Seq { .. })) {
                return Err(Error::missing_field("sequence element past the end"));
            }
            *len = 0;
            self.stack.push(InFrame::Empty);
            return Ok(());
        };
        let seq = child
            .as_sequence()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a sequence", name)))?;
        self.fetch(name)?;
        *len = seq.len();
        self.stack.push(InFrame::Seq {
            seq: seq.as_slice(),
            next: 0,
        });
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(InFrame::Seq { .. }) | Some(InFrame::Empty) => Ok(()),
            Some(_) => Err(Error::structure_mismatch("end_array closes an object scope")),
            None => Err(Error::structure_mismatch("end_array without begin_array")),
        }
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        let raw = scalar_u64(self.fetch_scalar(name)?, name)?;
        *value = u8::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        let raw = scalar_u64(self.fetch_scalar(name)?, name)?;
        *value = u16::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        let raw = scalar_u64(self.fetch_scalar(name)?, name)?;
        *value = u32::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error> {
        *value = scalar_u64(self.fetch_scalar(name)?, name)?;
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        let raw = scalar_i64(self.fetch_scalar(name)?, name)?;
        *value = i8::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        let raw = scalar_i64(self.fetch_scalar(name)?, name)?;
        *value = i16::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        let raw = scalar_i64(self.fetch_scalar(name)?, name)?;
        *value = i32::try_from(raw)
            .map_err(|_| Error::range_overflow(format!("'{}': {}", name, raw)))?;
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error> {
        *value = scalar_i64(self.fetch_scalar(name)?, name)?;
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error> {
        *value = self
            .fetch_scalar(name)?
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a boolean", name)))?;
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error> {
        let child = self.fetch_scalar(name)?;
        if let Some(v) = child.as_f64() {
            *value = v;
            return Ok(());
        }
        if let Some(s) = child.as_str() {
            if let Ok(v) = s.trim().parse::<f64>() {
                *value = v;
                return Ok(());
            }
        }
        Err(Error::type_mismatch(format!("'{}' is not a number", name)))
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        *value = scalar_str(self.fetch_scalar(name)?, name)?.to_owned();
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error> {
        let decoded = hex::decode(scalar_str(self.fetch_scalar(name)?, name)?)
            .map_err(|_| Error::invalid_data(format!("'{}' is not a hex string", name)))?;
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
        *bytes = hex::decode(scalar_str(self.fetch_scalar(name)?, name)?)
            .map_err(|_| Error::invalid_data(format!("'{}' is not a hex string", name)))?;
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error> {
        match self.peek(name) {
            Some(Value::Null) => {
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
        *tag = TypeTag::from_text(scalar_str(self.fetch_scalar(name)?, name)?.to_owned());
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        let entries = self
            .fetch(name)?
            .as_sequence()
            .ok_or_else(|| Error::type_mismatch(format!("'{}' is not a sequence", name)))?;
        ensure!(
            entries.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", entries.len(), name))
        );
        tags.clear();
        for entry in entries {
            tags.push(TypeTag::from_text(scalar_str(entry, name)?.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_emission_shape() {
        let mut enc = YamlEncoder::new();
        enc.begin_object("wallet").unwrap();
        let mut id = 7u32;
        enc.u32(&mut id, "id").unwrap();
        let mut label = String::from("main");
        enc.string(&mut label, "label").unwrap();
        let mut len = 2usize;
        enc.begin_array(&mut len, "heights").unwrap();
        for mut h in [10u64, 20] {
            enc.u64(&mut h, "").unwrap();
        }
        enc.end_array().unwrap();
        enc.begin_object("inner").unwrap();
        let mut flag = true;
        enc.boolean(&mut flag, "watch_only").unwrap();
        enc.end_object().unwrap();
        enc.end_object().unwrap();
        let text = enc.into_string();
        assert_eq!(
            text,
            "id: 7\nlabel: \"main\"\nheights:\n  - 10\n  - 20\ninner:\n  watch_only: true\n"
        );
    }

    #[test]
    fn empty_containers_collapse_inline() {
        let mut enc = YamlEncoder::new();
        enc.begin_object("wallet").unwrap();
        let mut len = 0usize;
        enc.begin_array(&mut len, "items").unwrap();
        enc.end_array().unwrap();
        enc.begin_object("inner").unwrap();
        enc.end_object().unwrap();
        enc.end_object().unwrap();
        assert_eq!(enc.into_string(), "items: []\ninner: {}\n");
    }

    #[test]
    fn text_roundtrip() {
        let mut enc = YamlEncoder::new();
        enc.begin_object("wallet").unwrap();
        let mut id = 42u64;
        enc.u64(&mut id, "id").unwrap();
        let mut comment = String::from("line\nbreak: tricky");
        enc.string(&mut comment, "comment").unwrap();
        let mut key = vec![0x00u8, 0x12, 0x34];
        enc.blob(&mut key, "view_key").unwrap();
        enc.end_object().unwrap();
        let text = enc.into_string();

        let root: Value = serde_yaml::from_str(&text).unwrap();
        let mut dec = YamlDecoder::new(&root);
        // the root is the document itself, no synthetic key
        dec.begin_object("wallet").unwrap();
        let mut id = 0u64;
        dec.u64(&mut id, "id").unwrap();
        assert_eq!(id, 42);
        let mut comment = String::new();
        dec.string(&mut comment, "comment").unwrap();
        assert_eq!(comment, "line\nbreak: tricky");
        let mut key = Vec::new();
        dec.blob(&mut key, "view_key").unwrap();
        assert_eq!(key, vec![0x00, 0x12, 0x34]);
        dec.end_object().unwrap();
    }

    #[test]
    fn top_level_scalar_descends_into_the_root_mapping() {
        let mut enc = YamlEncoder::new();
        let mut height = 42u64;
        enc.u64(&mut height, "height").unwrap();
        let text = enc.into_string();
        assert_eq!(text, "height: 42\n");

        let root: Value = serde_yaml::from_str(&text).unwrap();
        let mut dec = YamlDecoder::new(&root);
        let mut decoded = 0u64;
        dec.u64(&mut decoded, "height").unwrap();
        assert_eq!(decoded, 42);
    }

    #[test]
    fn negative_scalar_into_unsigned_is_range_overflow() {
        let root: Value = serde_yaml::from_str("count: -4\n").unwrap();
        let mut dec = YamlDecoder::new(&root);
        dec.begin_object("doc").unwrap();
        let mut count = 0u32;
        assert!(matches!(
            dec.u32(&mut count, "count"),
            Err(Error::RangeOverflow(_))
        ));

        // quoted negatives classify the same way
        let root: Value = serde_yaml::from_str("count: \"-4\"\n").unwrap();
        let mut dec = YamlDecoder::new(&root);
        dec.begin_object("doc").unwrap();
        assert!(matches!(
            dec.u32(&mut count, "count"),
            Err(Error::RangeOverflow(_))
        ));
    }

    #[test]
    fn out_of_range_scalar_is_hard_failure() {
        let root: Value = serde_yaml::from_str("count: 70000\n").unwrap();
        let mut dec = YamlDecoder::new(&root);
        dec.begin_object("doc").unwrap();
        let mut narrow = 0u16;
        assert!(matches!(
            dec.u16(&mut narrow, "count"),
            Err(Error::RangeOverflow(_))
        ));
    }

    #[test]
    fn quoted_numbers_still_parse() {
        let root: Value = serde_yaml::from_str("count: \"123\"\n").unwrap();
        let mut dec = YamlDecoder::new(&root);
        dec.begin_object("doc").unwrap();
        let mut count = 0u32;
        dec.u32(&mut count, "count").unwrap();
        assert_eq!(count, 123);
    }

    #[test]
    fn negative_float_and_signed_emission() {
        let mut enc = YamlEncoder::new();
        enc.begin_object("doc").unwrap();
        let mut delta = -3i32;
        enc.i32(&mut delta, "delta").unwrap();
        let mut rate = 2.0f64;
        enc.f64(&mut rate, "rate").unwrap();
        enc.end_object().unwrap();
        let text = enc.into_string();
        assert_eq!(text, "delta: -3\nrate: 2.0\n");

        let root: Value = serde_yaml::from_str(&text).unwrap();
        let mut dec = YamlDecoder::new(&root);
        dec.begin_object("doc").unwrap();
        let mut delta = 0i32;
        dec.i32(&mut delta, "delta").unwrap();
        assert_eq!(delta, -3);
        let mut rate = 0f64;
        dec.f64(&mut rate, "rate").unwrap();
        assert_eq!(rate, 2.0);
        dec.end_object().unwrap();
    }
}

