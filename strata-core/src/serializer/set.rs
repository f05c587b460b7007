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

//! Sets travel as plain element arrays. Decode inserts with set semantics,
//! so duplicate wire elements collapse silently.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use crate::error::Error;
use crate::serializer::{Direction, Serializable, Serializer};

pub fn serialize_hash_set<T, S>(set: &mut HashSet<T>, name: &str, s: &mut S) -> Result<(), Error>
where
    T: Serializable + Default + Clone + Eq + Hash,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = set.len();
            s.begin_array(&mut len, name)?;
            for item in set.iter() {
                // set elements are immutable in place; serialize a copy
                let mut item = item.clone();
                item.serialize("", s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            set.clear();
            for _ in 0..len {
                let mut item = T::default();
                item.serialize("", s)?;
                set.insert(item);
            }
            s.end_array()
        }
    }
}

pub fn serialize_btree_set<T, S>(set: &mut BTreeSet<T>, name: &str, s: &mut S) -> Result<(), Error>
where
    T: Serializable + Default + Clone + Ord,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = set.len();
            s.begin_array(&mut len, name)?;
            for item in set.iter() {
                let mut item = item.clone();
                item.serialize("", s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            set.clear();
            for _ in 0..len {
                let mut item = T::default();
                item.serialize("", s)?;
                set.insert(item);
            }
            s.end_array()
        }
    }
}
