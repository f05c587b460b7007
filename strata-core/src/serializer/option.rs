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

//! Optionals. The caller states at the call site whether the value is
//! expected to be present; on OUTPUT a mismatch between expectation and
//! actual state is an error, on INPUT the wire decides and `expected` is
//! advisory only.

use crate::ensure;
use crate::error::Error;
use crate::serializer::{Direction, Serializable, Serializer};

pub fn serialize_option<T, S>(
    value: &mut Option<T>,
    expected: bool,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    T: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            ensure!(
                value.is_some() == expected,
                Error::invalid_data(format!(
                    "optional '{}': expected {}, found {}",
                    name,
                    if expected { "present" } else { "absent" },
                    if value.is_some() { "present" } else { "absent" },
                ))
            );
            let mut present = expected;
            s.maybe(&mut present, name)?;
            if let Some(inner) = value.as_mut() {
                inner.serialize(name, s)?;
            }
            Ok(())
        }
        Direction::Input => {
            let mut present = false;
            s.maybe(&mut present, name)?;
            if present {
                let mut inner = T::default();
                inner.serialize(name, s)?;
                *value = Some(inner);
            } else {
                *value = None;
            }
            Ok(())
        }
    }
}

/// Lenient optional container: an empty vector is acceptable where absence
/// was expected, so callers can keep a plain `Vec` field that only sometimes
/// appears on the wire.
pub fn serialize_optional_vec<T, S>(
    items: &mut Vec<T>,
    expected: bool,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    T: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            ensure!(
                expected || items.is_empty(),
                Error::invalid_data(format!(
                    "optional container '{}': expected absent, found {} elements",
                    name,
                    items.len()
                ))
            );
            let mut present = expected;
            s.maybe(&mut present, name)?;
            if expected {
                super::collection::serialize_vec(items, name, s)?;
            }
            Ok(())
        }
        Direction::Input => {
            let mut present = false;
            s.maybe(&mut present, name)?;
            if present {
                super::collection::serialize_vec(items, name, s)?;
            } else {
                items.clear();
            }
            Ok(())
        }
    }
}
