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

//! Fixed-length arrays. The length is part of the type, so a wire count
//! that differs from `N` fails before any element is touched; decode writes
//! into the existing elements in place.

use crate::error::Error;
use crate::serializer::{Serializable, Serializer};

pub fn serialize_fixed_array<T, S, const N: usize>(
    items: &mut [T; N],
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    T: Serializable,
    S: Serializer,
{
    s.begin_static_array(N, name)?;
    for item in items.iter_mut() {
        item.serialize("", s)?;
    }
    s.end_array()
}
