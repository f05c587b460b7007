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

//! Byte buffer management for the binary wire format.
//!
//! Unsigned integers travel as little-endian base-128 varints: seven payload
//! bits per byte, least significant group first, continuation bit in the high
//! bit of every byte but the last. Signed integers travel as the varint of
//! their bit pattern reinterpreted as the same-width unsigned type (no
//! zig-zag). All reads are bounds-checked; a truncated buffer surfaces as
//! [`Error::InvalidData`] at the read that touched it.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::bail;
use crate::error::Error;

/// A varint never needs more than ten groups to carry 64 bits.
const MAX_VARINT_BYTES: usize = 10;

#[derive(Default)]
pub struct Writer {
    bf: Vec<u8>,
    reserved: usize,
}

impl Writer {
    pub fn reset(&mut self) {
        // keep capacity, drop contents
        self.bf.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.reserved += additional;
        if self.bf.capacity() < self.reserved {
            self.bf.reserve(self.reserved);
        }
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.reserve(v.len());
        self.bf.extend_from_slice(v);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.push(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        // infallible for Vec targets
        self.bf
            .write_f64::<LittleEndian>(value)
            .expect("Vec write cannot fail");
    }

    pub fn write_varuint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            value >>= 7;
        }
        self.write_u8(value as u8);
    }
}

pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Reader { bf, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let b = *self
            .bf
            .get(self.cursor)
            .ok_or_else(|| Error::invalid_data("unexpected end of input"))?;
        self.cursor += 1;
        Ok(b)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self
            .cursor
            .checked_add(len)
            .filter(|&end| end <= self.bf.len())
            .ok_or_else(|| {
                Error::invalid_data(format!(
                    "need {} bytes, {} remaining",
                    len,
                    self.bf.len() - self.cursor
                ))
            })?;
        let s = &self.bf[self.cursor..end];
        self.cursor = end;
        Ok(s)
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        let s = self.read_bytes(8)?;
        Ok(LittleEndian::read_f64(s))
    }

    pub fn read_varuint(&mut self) -> Result<u64, Error> {
        let mut result = 0u64;
        let mut shift = 0u32;
        for _ in 0..MAX_VARINT_BYTES {
            let b = self.read_u8()?;
            let group = (b & 0x7F) as u64;
            if shift == 63 && group > 1 {
                return Err(Error::range_overflow("varint exceeds 64 bits"));
            }
            result |= group << shift;
            if b & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
        }
        bail!("varint longer than 10 bytes")
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varuint_roundtrip() {
        let test_data: Vec<u64> = vec![
            // 1 byte(0..127)
            0,
            1,
            127,
            // 2 byte(128..16_383)
            128,
            300,
            16_383,
            // 3 byte(16_384..2_097_151)
            16_384,
            20_000,
            2_097_151,
            // wider groups
            2_097_152,
            268_435_455,
            268_435_456,
            u32::MAX as u64,
            u64::MAX - 1,
            u64::MAX,
        ];
        for &data in &test_data {
            let mut writer = Writer::default();
            writer.write_varuint(data);
            let binding = writer.dump();
            let mut reader = Reader::new(binding.as_slice());
            assert_eq!(reader.read_varuint().unwrap(), data);
            assert_eq!(reader.remaining(), 0);
        }
    }

    #[test]
    fn varuint_wire_layout() {
        let mut writer = Writer::default();
        writer.write_varuint(300);
        // 300 = 0b10_0101100: low group first, continuation bit set
        assert_eq!(writer.dump(), vec![0xAC, 0x02]);
    }

    #[test]
    fn truncated_read_fails() {
        let mut reader = Reader::new(&[0x80, 0x80]);
        assert!(reader.read_varuint().is_err());

        let mut reader = Reader::new(&[1, 2]);
        assert!(reader.read_bytes(3).is_err());
    }

    #[test]
    fn overlong_varint_rejected() {
        // eleven continuation groups
        let bytes = [0xFFu8; 11];
        let mut reader = Reader::new(&bytes);
        assert!(reader.read_varuint().is_err());
        // ten groups whose top group pushes past 64 bits
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        let mut reader = Reader::new(&bytes);
        assert!(reader.read_varuint().is_err());
    }
}
