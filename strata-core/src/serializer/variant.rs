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

//! Discriminated unions travel as a two-field record: the discriminator
//! under [`VARIANT_TAG_FIELD`], then the active alternative's payload. An
//! unmatched incoming discriminator fails without touching the destination.

use crate::error::Error;
use crate::serializer::{Direction, Serializer};
use crate::tag::TypeTag;

/// Field name carrying the discriminator inside a variant record.
pub const VARIANT_TAG_FIELD: &str = "type";
/// Field name alternatives should serialize their payload under.
pub const VARIANT_VALUE_FIELD: &str = "value";

/// Dispatch hooks a discriminated union implements once.
///
/// [`payload`](TaggedVariant::payload) serializes the active alternative's
/// contents and is expected to place them under [`VARIANT_VALUE_FIELD`].
pub trait TaggedVariant: Sized {
    /// Tag of the active alternative, `None` when it has no annotation.
    fn active_tag(&self) -> Option<TypeTag>;

    /// Default-constructs the alternative matching `tag`, `None` when no
    /// alternative matches.
    fn construct(tag: &TypeTag) -> Option<Self>;

    fn payload<S: Serializer>(&mut self, s: &mut S) -> Result<(), Error>;
}

pub fn serialize_variant<T, S>(value: &mut T, name: &str, s: &mut S) -> Result<(), Error>
where
    T: TaggedVariant,
    S: Serializer,
{
    s.begin_object(name)?;
    match s.direction() {
        Direction::Output => {
            let mut tag = value.active_tag().ok_or_else(|| {
                Error::unknown_tag(format!("variant '{}' alternative has no annotation", name))
            })?;
            s.type_tag(&mut tag, VARIANT_TAG_FIELD)?;
            value.payload(s)?;
        }
        Direction::Input => {
            let mut tag = TypeTag::NULL;
            s.type_tag(&mut tag, VARIANT_TAG_FIELD)?;
            let mut next = T::construct(&tag).ok_or_else(|| {
                Error::unknown_tag(format!(
                    "unrecognized alternative for '{}': binary {} text '{}'",
                    name, tag.binary, tag.text
                ))
            })?;
            next.payload(s)?;
            *value = next;
        }
    }
    s.end_object()
}
