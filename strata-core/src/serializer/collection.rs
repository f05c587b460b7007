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

//! Sequential containers: element count travels through the array scope,
//! elements are positional. Decode pre-sizes the destination to the declared
//! count, discarding prior contents; a failed `begin_array` leaves the
//! destination untouched.

use std::collections::VecDeque;

use crate::error::Error;
use crate::serializer::{Direction, Serializable, Serializer};

pub fn serialize_vec<T, S>(items: &mut Vec<T>, name: &str, s: &mut S) -> Result<(), Error>
where
    T: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = items.len();
            s.begin_array(&mut len, name)?;
            for item in items.iter_mut() {
                item.serialize("", s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            items.clear();
            items.resize_with(len, T::default);
            for item in items.iter_mut() {
                item.serialize("", s)?;
            }
            s.end_array()
        }
    }
}

pub fn serialize_deque<T, S>(items: &mut VecDeque<T>, name: &str, s: &mut S) -> Result<(), Error>
where
    T: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = items.len();
            s.begin_array(&mut len, name)?;
            for item in items.iter_mut() {
                item.serialize("", s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            items.clear();
            items.resize_with(len, T::default);
            for item in items.iter_mut() {
                item.serialize("", s)?;
            }
            s.end_array()
        }
    }
}
