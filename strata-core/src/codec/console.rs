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

//! Colorized console dump: YAML-shaped text with ANSI styling interleaved
//! per scalar. Write-only; this output is for eyes, never re-parsed.

use colored::Colorize;

use crate::codec::yaml::{fmt_f64, quote_str, Emitter, Mark};
use crate::ensure;
use crate::error::Error;
use crate::serializer::{Direction, Presentation, Serializer, MAX_FLAG_TAGS};
use crate::tag::TypeTag;

/// Console OUTPUT codec. Keys are always cyan; values are styled per call
/// site: booleans green/red, negative numbers italic, blobs magenta hex,
/// discriminators yellow.
#[derive(Default)]
pub struct ConsoleEncoder {
    emitter: Emitter,
}

impl ConsoleEncoder {
    pub fn new() -> ConsoleEncoder {
        ConsoleEncoder::default()
    }

    pub fn depth(&self) -> usize {
        self.emitter.depth()
    }

    pub fn into_string(self) -> String {
        self.emitter.finish()
    }

    fn key(name: &str) -> String {
        name.cyan().to_string()
    }

    fn entry(&mut self, name: &str, value: &str) {
        self.emitter.entry(&Self::key(name), value);
    }

    fn unsigned(&mut self, value: u64, name: &str) {
        self.entry(name, &value.to_string());
    }

    fn signed(&mut self, value: i64, name: &str) {
        let text = value.to_string();
        let styled = if value < 0 {
            text.italic().to_string()
        } else {
            text
        };
        self.entry(name, &styled);
    }
}

impl Serializer for ConsoleEncoder {
    fn direction(&self) -> Direction {
        Direction::Output
    }

    fn presentation(&self) -> Presentation {
        Presentation::HumanReadable
    }

    fn begin_object(&mut self, name: &str) -> Result<(), Error> {
        self.emitter.begin(Mark::Object, &Self::key(name));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        self.emitter.end(Mark::Object)
    }

    fn begin_array(&mut self, _len: &mut usize, name: &str) -> Result<(), Error> {
        self.emitter.begin(Mark::Array, &Self::key(name));
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        self.emitter.end(Mark::Array)
    }

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error> {
        self.unsigned(*value as u64, name);
        Ok(())
    }

    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error> {
        self.unsigned(*value as u64, name);
        Ok(())
    }

    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error> {
        self.unsigned(*value as u64, name);
        Ok(())
    }

    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error> {
        self.unsigned(*value, name);
        Ok(())
    }

    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error> {
        self.signed(*value as i64, name);
        Ok(())
    }

    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error> {
        self.signed(*value as i64, name);
        Ok(())
    }

    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error> {
        self.signed(*value as i64, name);
        Ok(())
    }

    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error> {
        self.signed(*value, name);
        Ok(())
    }

    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error> {
        let styled = if *value {
            "true".green().to_string()
        } else {
            "false".red().to_string()
        };
        self.entry(name, &styled);
        Ok(())
    }

    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error> {
        let text = fmt_f64(*value, name)?;
        let styled = if *value < 0.0 {
            text.italic().to_string()
        } else {
            text
        };
        self.entry(name, &styled);
        Ok(())
    }

    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error> {
        self.entry(name, &quote_str(value));
        Ok(())
    }

    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error> {
        self.entry(name, &hex::encode(bytes).magenta().to_string());
        Ok(())
    }

    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error> {
        self.entry(name, &hex::encode(&*bytes).magenta().to_string());
        Ok(())
    }

    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error> {
        if !*present {
            self.entry(name, &"~".dimmed().to_string());
        }
        Ok(())
    }

    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error> {
        ensure!(
            !tag.is_null(),
            Error::unknown_tag(format!("null tag for '{}'", name))
        );
        ensure!(
            !tag.text.is_empty(),
            Error::unknown_tag(format!("tag without text part for '{}'", name))
        );
        self.entry(name, &tag.text.yellow().to_string());
        Ok(())
    }

    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error> {
        ensure!(
            tags.len() <= MAX_FLAG_TAGS,
            Error::range_overflow(format!("{} flag entries for '{}'", tags.len(), name))
        );
        self.emitter.begin(Mark::Array, &Self::key(name));
        for tag in tags.iter() {
            ensure!(
                !tag.text.is_empty(),
                Error::unknown_tag(format!("tag without text part for '{}'", name))
            );
            self.emitter.entry("", &tag.text.yellow().to_string());
        }
        self.emitter.end(Mark::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force_colors() {
        colored::control::set_override(true);
    }

    #[test]
    fn styled_scalars_carry_ansi_escapes() {
        force_colors();
        let mut enc = ConsoleEncoder::new();
        enc.begin_object("status").unwrap();
        let mut synced = true;
        enc.boolean(&mut synced, "synced").unwrap();
        let mut drift = -5i32;
        enc.i32(&mut drift, "drift").unwrap();
        let mut key = vec![0xA1u8, 0xB2];
        enc.blob(&mut key, "key").unwrap();
        enc.end_object().unwrap();
        let text = enc.into_string();
        assert!(text.contains("\x1b["));
        assert!(text.contains("a1b2"));
        assert!(text.contains("-5"));
    }

    #[test]
    fn layout_matches_yaml_shape() {
        force_colors();
        let mut enc = ConsoleEncoder::new();
        enc.begin_object("doc").unwrap();
        let mut len = 1usize;
        enc.begin_array(&mut len, "items").unwrap();
        let mut v = 3u32;
        enc.u32(&mut v, "").unwrap();
        enc.end_array().unwrap();
        enc.end_object().unwrap();
        let text = enc.into_string();
        // one header line, one element line, element indented
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("  - "));
    }
}
