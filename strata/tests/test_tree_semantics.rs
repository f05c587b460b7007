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

use serde_json::json;
use strata::{serialize_option, serialize_vec, Error, Serializable, Serializer};

#[derive(Debug, Default, PartialEq)]
struct Summary {
    id: u32,
    notes: Vec<String>,
    archived: Option<bool>,
}

impl Serializable for Summary {
    fn serialize<S: Serializer>(&mut self, name: &str, s: &mut S) -> Result<(), Error> {
        s.begin_object(name)?;
        s.u32(&mut self.id, "id")?;
        serialize_vec(&mut self.notes, "notes", s)?;
        let has_archived = self.archived.is_some();
        serialize_option(&mut self.archived, has_archived, "archived", s)?;
        s.end_object()
    }
}

#[test]
fn test_missing_array_field_decodes_as_empty() {
    let tree = json!({"summary": {"id": 3}});
    let decoded: Summary = strata::from_json_value(&tree, "summary").unwrap();
    assert_eq!(decoded.id, 3);
    assert!(decoded.notes.is_empty());
    assert_eq!(decoded.archived, None);
}

#[test]
fn test_missing_scalar_field_is_an_error() {
    let tree = json!({"summary": {"notes": []}});
    assert!(matches!(
        strata::from_json_value::<Summary>(&tree, "summary"),
        Err(Error::MissingField(_))
    ));
}

#[test]
fn test_missing_root_entry_is_an_error() {
    let tree = json!({"other": {}});
    assert!(matches!(
        strata::from_json_value::<Summary>(&tree, "summary"),
        Err(Error::MissingField(_))
    ));
}

#[test]
fn test_null_and_missing_optionals_both_read_absent() {
    let tree = json!({"summary": {"id": 1, "archived": null}});
    let decoded: Summary = strata::from_json_value(&tree, "summary").unwrap();
    assert_eq!(decoded.archived, None);

    let tree = json!({"summary": {"id": 1}});
    let decoded: Summary = strata::from_json_value(&tree, "summary").unwrap();
    assert_eq!(decoded.archived, None);
}

#[test]
fn test_json_text_roundtrip() {
    let mut value = Summary {
        id: 12,
        notes: vec![String::from("first"), String::from("second")],
        archived: Some(false),
    };
    let text = strata::to_json_string(&mut value, "summary").unwrap();
    assert!(text.contains("\"id\": 12"));
    let decoded: Summary = strata::from_json_str(&text, "summary").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_yaml_emission_shape() {
    let mut value = Summary {
        id: 3,
        notes: vec![String::from("a")],
        archived: Some(true),
    };
    let text = strata::to_yaml_string(&mut value, "summary").unwrap();
    assert_eq!(text, "id: 3\nnotes:\n  - \"a\"\narchived: true\n");
}

#[test]
fn test_yaml_quoted_scalars_still_decode() {
    let text = "id: \"7\"\nnotes:\n  - \"x\"\narchived: ~\n";
    let decoded: Summary = strata::from_yaml_str(text, "summary").unwrap();
    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.notes, vec!["x"]);
    assert_eq!(decoded.archived, None);
}

#[test]
fn test_yaml_empty_containers_collapse() {
    let mut value = Summary {
        id: 0,
        notes: Vec::new(),
        archived: None,
    };
    let text = strata::to_yaml_string(&mut value, "summary").unwrap();
    assert_eq!(text, "id: 0\nnotes: []\narchived: ~\n");
    let decoded: Summary = strata::from_yaml_str(&text, "summary").unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_yaml_roundtrips_bare_primitives() {
    let mut height = 7u64;
    let text = strata::to_yaml_string(&mut height, "height").unwrap();
    assert_eq!(text, "height: 7\n");
    let decoded: u64 = strata::from_yaml_str(&text, "height").unwrap();
    assert_eq!(decoded, 7);

    let mut label = String::from("main");
    let text = strata::to_yaml_string(&mut label, "label").unwrap();
    let decoded: String = strata::from_yaml_str(&text, "label").unwrap();
    assert_eq!(decoded, "main");

    let mut synced = true;
    let text = strata::to_yaml_string(&mut synced, "synced").unwrap();
    let decoded: bool = strata::from_yaml_str(&text, "synced").unwrap();
    assert!(decoded);
}

#[test]
fn test_wrong_dynamic_kind_is_a_type_mismatch() {
    let tree = json!({"summary": {"id": "not-a-number", "notes": []}});
    assert!(matches!(
        strata::from_json_value::<Summary>(&tree, "summary"),
        Err(Error::TypeMismatch(_))
    ));
}

#[test]
fn test_console_dump_of_tree_shaped_value() {
    colored::control::set_override(true);
    let mut value = Summary {
        id: 9,
        notes: vec![String::from("watch")],
        archived: Some(true),
    };
    let text = strata::to_console_string(&mut value, "summary").unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("id"));
    assert!(text.contains("watch"));
}
