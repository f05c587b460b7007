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

//! Enumerations travel as a single discriminator. The annotation table is
//! declared once per type; positional formats pick the binary half, tree
//! and human formats the text half, and either half is enough to decode.

use crate::error::Error;
use crate::serializer::{Direction, Serializer};
use crate::tag::TypeTag;

/// Per-type annotation table mapping each serializable value to its tag.
pub trait TaggedEnum: Copy + PartialEq + Sized + 'static {
    const TAGS: &'static [(Self, TypeTag)];
}

pub fn serialize_enum<T, S>(value: &mut T, name: &str, s: &mut S) -> Result<(), Error>
where
    T: TaggedEnum,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut tag = T::TAGS
                .iter()
                .find(|(v, _)| *v == *value)
                .map(|(_, tag)| tag.clone())
                .ok_or_else(|| {
                    Error::unknown_tag(format!("enum value without annotation for '{}'", name))
                })?;
            s.type_tag(&mut tag, name)
        }
        Direction::Input => {
            let mut incoming = TypeTag::NULL;
            s.type_tag(&mut incoming, name)?;
            let decoded = T::TAGS
                .iter()
                .find(|(_, tag)| tag.matches(&incoming))
                .map(|(v, _)| *v)
                .ok_or_else(|| {
                    Error::unknown_tag(format!(
                        "unrecognized discriminator for '{}': binary {} text '{}'",
                        name, incoming.binary, incoming.text
                    ))
                })?;
            *value = decoded;
            Ok(())
        }
    }
}
