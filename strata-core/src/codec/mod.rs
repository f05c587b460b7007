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

//! The interchangeable backends of the traversal protocol, one module per
//! wire/human format. Each codec owns its backing store (byte buffer, value
//! tree, text emitter), created at construction and never shared between
//! instances.

pub mod binary;
pub mod console;
pub mod json;
pub mod null;
pub mod yaml;

pub use binary::{BinaryDecoder, BinaryEncoder};
pub use console::ConsoleEncoder;
pub use json::{JsonDecoder, JsonEncoder};
pub use null::NullEncoder;
pub use yaml::{YamlDecoder, YamlEncoder};
