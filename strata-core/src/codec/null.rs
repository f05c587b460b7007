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

use crate::error::Error;
use crate::serializer::{Direction, Presentation, Serializer};
use crate::tag::TypeTag;

/// Always-succeeds OUTPUT sink with no backing store. Running a type's
/// serialize logic through it validates the traversal is well-formed and
/// side-effect-free against a real value, without needing a real
/// destination.
#[derive(Default)]
pub struct NullEncoder;

impl NullEncoder {
    pub fn new() -> NullEncoder {
        NullEncoder
    }
}

impl Serializer for NullEncoder {
    fn direction(&self) -> Direction {
        Direction::Output
    }

    fn presentation(&self) -> Presentation {
        Presentation::Machinery
    }

    fn begin_object(&mut self, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn begin_array(&mut self, _len: &mut usize, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn u8(&mut self, _value: &mut u8, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn u16(&mut self, _value: &mut u16, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn u32(&mut self, _value: &mut u32, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn u64(&mut self, _value: &mut u64, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn i8(&mut self, _value: &mut i8, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn i16(&mut self, _value: &mut i16, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn i32(&mut self, _value: &mut i32, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn i64(&mut self, _value: &mut i64, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn boolean(&mut self, _value: &mut bool, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn f64(&mut self, _value: &mut f64, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn string(&mut self, _value: &mut String, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn binary(&mut self, _bytes: &mut [u8], _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn blob(&mut self, _bytes: &mut Vec<u8>, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn maybe(&mut self, _present: &mut bool, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn type_tag(&mut self, _tag: &mut TypeTag, _name: &str) -> Result<(), Error> {
        Ok(())
    }

    fn flags(&mut self, _tags: &mut Vec<TypeTag>, _name: &str) -> Result<(), Error> {
        Ok(())
    }
}
