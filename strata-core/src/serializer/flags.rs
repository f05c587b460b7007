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

//! Bit-flag values travel as the list of set-bit discriminators, one tag per
//! set bit. Every set bit must be annotated; decode ORs the masks together,
//! so a duplicated tag on the wire is a no-op.

use crate::error::Error;
use crate::serializer::{Direction, Serializer};
use crate::tag::TypeTag;

/// Per-type annotation table mapping each single-bit mask to its tag.
pub trait FlagBits: Sized + 'static {
    const TAGS: &'static [(u64, TypeTag)];

    fn bits(&self) -> u64;
    fn from_bits(bits: u64) -> Self;
}

pub fn serialize_flags<T, S>(value: &mut T, name: &str, s: &mut S) -> Result<(), Error>
where
    T: FlagBits,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let bits = value.bits();
            let mut tags = Vec::new();
            for shift in 0..u64::BITS {
                let mask = 1u64 << shift;
                if bits & mask == 0 {
                    continue;
                }
                let tag = T::TAGS
                    .iter()
                    .find(|(m, _)| *m == mask)
                    .map(|(_, tag)| tag.clone())
                    .ok_or_else(|| {
                        Error::unknown_tag(format!(
                            "flag bit {} of '{}' has no annotation",
                            shift, name
                        ))
                    })?;
                tags.push(tag);
            }
            s.flags(&mut tags, name)
        }
        Direction::Input => {
            let mut tags = Vec::new();
            s.flags(&mut tags, name)?;
            let mut bits = 0u64;
            for incoming in &tags {
                let mask = T::TAGS
                    .iter()
                    .find(|(_, tag)| tag.matches(incoming))
                    .map(|(mask, _)| *mask)
                    .ok_or_else(|| {
                        Error::unknown_tag(format!(
                            "unrecognized flag for '{}': binary {} text '{}'",
                            name, incoming.binary, incoming.text
                        ))
                    })?;
                bits |= mask;
            }
            *value = T::from_bits(bits);
            Ok(())
        }
    }
}
