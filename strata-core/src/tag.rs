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

use std::borrow::Cow;

/// Dual binary/text discriminator identifying an enum value, flag bit or
/// variant alternative across formats.
///
/// Positional formats carry the `binary` part, tree and human formats carry
/// the `text` part, so a tag decoded from one side usually arrives with only
/// one half populated. Two tags match when their binary parts are both
/// non-zero and equal, or their text parts are both non-empty and equal —
/// never a strict field-by-field compare. Binary discriminators are declared
/// starting at 1; 0 is the "no value" sentinel.
#[derive(Clone, Debug, Default)]
pub struct TypeTag {
    pub binary: u64,
    pub text: Cow<'static, str>,
}

impl TypeTag {
    /// The sentinel tag: both halves at their "no value" sentinel. Never
    /// valid for encoding.
    pub const NULL: TypeTag = TypeTag {
        binary: 0,
        text: Cow::Borrowed(""),
    };

    pub const fn new(binary: u64, text: &'static str) -> TypeTag {
        TypeTag {
            binary,
            text: Cow::Borrowed(text),
        }
    }

    pub const fn from_binary(binary: u64) -> TypeTag {
        TypeTag {
            binary,
            text: Cow::Borrowed(""),
        }
    }

    pub fn from_text<S: Into<Cow<'static, str>>>(text: S) -> TypeTag {
        TypeTag {
            binary: 0,
            text: text.into(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.binary == 0 && self.text.is_empty()
    }

    /// Fuzzy equality across halves; alias of the [`PartialEq`] impl for
    /// call sites that read better with a verb.
    pub fn matches(&self, other: &TypeTag) -> bool {
        (self.binary != 0 && self.binary == other.binary)
            || (!self.text.is_empty() && self.text == other.text)
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &TypeTag) -> bool {
        self.matches(other)
    }
}
