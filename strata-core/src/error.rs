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

use thiserror::Error;

/// Global flag to check if STRATA_PANIC_ON_ERROR environment variable is set at compile time.
/// Set STRATA_PANIC_ON_ERROR=1 at compile time to panic at the exact spot an error is created,
/// which turns a decode failure into a backtrace during debugging.
pub const PANIC_ON_ERROR: bool = option_env!("STRATA_PANIC_ON_ERROR").is_some();

/// Error type for every fallible operation of the serialization engine.
///
/// All failures are local, synchronous and non-retryable. Composite serialize
/// logic must check every nested call and stop at the first error; the engine
/// never retries and never partially recovers. Callers decide whether a
/// failure is fatal (corrupt persisted file) or recoverable (malformed RPC
/// request).
///
/// Construct variants through the static constructor functions
/// ([`Error::structure_mismatch`], [`Error::missing_field`], ...) rather than
/// directly; the constructors carry the `STRATA_PANIC_ON_ERROR` debug hook and
/// keep call sites uniform.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Unbalanced begin/end calls, or an object scope closed as an array
    /// (and vice versa).
    #[error("structure mismatch: {0}")]
    StructureMismatch(Cow<'static, str>),

    /// A required named child was absent on input. Distinct from the
    /// array-specific "absent decodes as empty" convenience.
    #[error("missing field: {0}")]
    MissingField(Cow<'static, str>),

    /// A tree-backed scalar's dynamic kind did not match the requested
    /// accessor.
    #[error("type mismatch: {0}")]
    TypeMismatch(Cow<'static, str>),

    /// A decoded integer did not fit the target width, or a static array's
    /// wire count disagreed with the declared size.
    #[error("range overflow: {0}")]
    RangeOverflow(Cow<'static, str>),

    /// A discriminator matched no declared enum value, flag bit or variant
    /// alternative.
    #[error("unknown tag: {0}")]
    UnknownTag(Cow<'static, str>),

    /// Codec-specific gap, e.g. floating point decode from the binary wire.
    #[error("unsupported: {0}")]
    Unsupported(Cow<'static, str>),

    /// Invalid or corrupted data encountered.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),
}

macro_rules! ctor {
    ($(#[$doc:meta])* $name:ident => $variant:ident) => {
        $(#[$doc])*
        #[inline(always)]
        #[cold]
        #[track_caller]
        pub fn $name<S: Into<Cow<'static, str>>>(s: S) -> Self {
            let err = Error::$variant(s.into());
            if PANIC_ON_ERROR {
                panic!("STRATA_PANIC_ON_ERROR: {}", err);
            }
            err
        }
    };
}

impl Error {
    ctor! {
        /// Creates a new [`Error::StructureMismatch`].
        structure_mismatch => StructureMismatch
    }
    ctor! {
        /// Creates a new [`Error::MissingField`].
        missing_field => MissingField
    }
    ctor! {
        /// Creates a new [`Error::TypeMismatch`].
        type_mismatch => TypeMismatch
    }
    ctor! {
        /// Creates a new [`Error::RangeOverflow`].
        range_overflow => RangeOverflow
    }
    ctor! {
        /// Creates a new [`Error::UnknownTag`].
        unknown_tag => UnknownTag
    }
    ctor! {
        /// Creates a new [`Error::Unsupported`].
        unsupported => Unsupported
    }
    ctor! {
        /// Creates a new [`Error::InvalidData`].
        invalid_data => InvalidData
    }
}

/// Ensures a condition holds; otherwise returns the given [`enum@Error`].
///
/// # Examples
/// ```
/// use strata_core::ensure;
/// use strata_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n <= 14, Error::range_overflow(format!("{} flag entries", n)));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Returns early with an [`Error::InvalidData`].
///
/// # Examples
/// ```
/// use strata_core::bail;
/// use strata_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("truncated input");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::invalid_data($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)))
    };
}
