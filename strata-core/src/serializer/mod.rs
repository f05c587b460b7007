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

//! The abstract traversal protocol every codec implements and every generic
//! algorithm consumes.
//!
//! Domain code implements [`Serializable`] once per type; the active codec
//! decides how each contract call manifests on the wire. A serializer is
//! created immediately before one top-level serialize operation and discarded
//! immediately after — there is no reuse across independent calls and no
//! internal synchronization.
//!
//! Failure discipline: every method result must be checked. On the first
//! failure the composite logic stops and propagates without calling further
//! `begin*`/`end*` for the scope that failed to open, and without leaving
//! partially-applied mutations on the destination beyond what the individual
//! algorithms document.

use crate::ensure;
use crate::error::Error;
use crate::tag::TypeTag;

pub mod array;
pub mod collection;
pub mod duration;
pub mod enum_;
pub mod flags;
pub mod map;
pub mod option;
pub mod set;
pub mod variant;

/// Flag lists are capped at this many entries in both directions.
pub const MAX_FLAG_TAGS: usize = 14;

/// Whether the codec consumes a representation (decoding into the value) or
/// produces one (encoding out of it). Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Whether the codec targets humans or machines. Fixed at construction.
/// Algorithms may render differently for each (a human dump can afford
/// symbolic names where a wire format wants raw discriminators).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    HumanReadable,
    Machinery,
}

/// One concrete realization of the traversal protocol for a specific format.
///
/// Scalar accessors take `&mut` in both directions: OUTPUT only observes the
/// reference, INPUT overwrites it. Inside an array scope the `name` argument
/// is ignored everywhere — position determines identity.
pub trait Serializer {
    fn direction(&self) -> Direction;
    fn presentation(&self) -> Presentation;

    /// Opens a named nested record scope. Must be closed by exactly one
    /// matching [`end_object`](Serializer::end_object).
    fn begin_object(&mut self, name: &str) -> Result<(), Error>;
    fn end_object(&mut self) -> Result<(), Error>;

    /// OUTPUT passes the intended element count in `len`; INPUT stores the
    /// actual count into it.
    fn begin_array(&mut self, len: &mut usize, name: &str) -> Result<(), Error>;

    /// Like [`begin_array`](Serializer::begin_array), but on INPUT the wire
    /// count must equal the declared `len`; the mismatch is detected before
    /// any element is read.
    fn begin_static_array(&mut self, len: usize, name: &str) -> Result<(), Error> {
        let mut actual = len;
        self.begin_array(&mut actual, name)?;
        ensure!(
            actual == len,
            Error::range_overflow(format!(
                "static array '{}': declared {} elements, wire has {}",
                name, len, actual
            ))
        );
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Error>;

    fn u8(&mut self, value: &mut u8, name: &str) -> Result<(), Error>;
    fn u16(&mut self, value: &mut u16, name: &str) -> Result<(), Error>;
    fn u32(&mut self, value: &mut u32, name: &str) -> Result<(), Error>;
    fn u64(&mut self, value: &mut u64, name: &str) -> Result<(), Error>;
    fn i8(&mut self, value: &mut i8, name: &str) -> Result<(), Error>;
    fn i16(&mut self, value: &mut i16, name: &str) -> Result<(), Error>;
    fn i32(&mut self, value: &mut i32, name: &str) -> Result<(), Error>;
    fn i64(&mut self, value: &mut i64, name: &str) -> Result<(), Error>;
    fn boolean(&mut self, value: &mut bool, name: &str) -> Result<(), Error>;
    fn f64(&mut self, value: &mut f64, name: &str) -> Result<(), Error>;
    fn string(&mut self, value: &mut String, name: &str) -> Result<(), Error>;

    /// Opaque fixed-size byte blob. Kept distinct from the string and array
    /// accessors so raw bytes are never rendered as an array of small
    /// integers. INPUT fails if the wire blob length differs from
    /// `bytes.len()`.
    fn binary(&mut self, bytes: &mut [u8], name: &str) -> Result<(), Error>;

    /// Opaque sized byte blob; INPUT replaces the vector's contents.
    fn blob(&mut self, bytes: &mut Vec<u8>, name: &str) -> Result<(), Error>;

    /// The presence channel for optionals. OUTPUT records an explicit
    /// absence when `*present` is false (when true, the caller writes the
    /// payload next); INPUT reports whether a value exists at `name`
    /// without consuming it.
    fn maybe(&mut self, present: &mut bool, name: &str) -> Result<(), Error>;

    /// Reads or writes a discriminator. OUTPUT fails on a null tag.
    fn type_tag(&mut self, tag: &mut TypeTag, name: &str) -> Result<(), Error>;

    /// Reads or writes the list of set-bit discriminators composing a
    /// bit-flag value; at most [`MAX_FLAG_TAGS`] entries.
    fn flags(&mut self, tags: &mut Vec<TypeTag>, name: &str) -> Result<(), Error>;
}

/// The per-type hook domain code implements. `&mut self` in both directions;
/// OUTPUT only observes.
pub trait Serializable {
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error>;
}

macro_rules! impl_scalar_serializable {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Serializable for $ty {
                #[inline]
                fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
                    s.$method(self, name)
                }
            }
        )*
    };
}

impl_scalar_serializable! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    bool => boolean,
    f64 => f64,
    String => string,
    TypeTag => type_tag,
}

// Byte vectors are opaque blobs, not element arrays; use
// [`collection::serialize_vec`] explicitly for a genuine list of small
// integers.
impl Serializable for Vec<u8> {
    #[inline]
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
        s.blob(self, name)
    }
}
