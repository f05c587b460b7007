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

//! Time spans travel as whole nanosecond ticks: `u64` for the unsigned
//! standard-library duration, `i64` for the signed chrono delta. A span
//! whose tick count does not fit the integer overflows.

use chrono::TimeDelta;

use crate::error::Error;
use crate::serializer::{Direction, Serializer};

pub fn serialize_duration<S: Serializer>(
    value: &mut std::time::Duration,
    name: &str,
    s: &mut S,
) -> Result<(), Error> {
    match s.direction() {
        Direction::Output => {
            let mut ticks = u64::try_from(value.as_nanos()).map_err(|_| {
                Error::range_overflow(format!("duration '{}' exceeds u64 nanoseconds", name))
            })?;
            s.u64(&mut ticks, name)
        }
        Direction::Input => {
            let mut ticks = 0u64;
            s.u64(&mut ticks, name)?;
            *value = std::time::Duration::from_nanos(ticks);
            Ok(())
        }
    }
}

pub fn serialize_time_delta<S: Serializer>(
    value: &mut TimeDelta,
    name: &str,
    s: &mut S,
) -> Result<(), Error> {
    match s.direction() {
        Direction::Output => {
            let mut ticks = value.num_nanoseconds().ok_or_else(|| {
                Error::range_overflow(format!("time delta '{}' exceeds i64 nanoseconds", name))
            })?;
            s.i64(&mut ticks, name)
        }
        Direction::Input => {
            let mut ticks = 0i64;
            s.i64(&mut ticks, name)?;
            *value = TimeDelta::nanoseconds(ticks);
            Ok(())
        }
    }
}
