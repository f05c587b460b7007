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

//! Associative containers. Each entry is a two-field `{key, value}` object
//! inside the outer array scope. Decode applies map-insert semantics:
//! last-wins for unique-key maps, accumulate for the multimap.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::Error;
use crate::serializer::{Direction, Serializable, Serializer};

fn write_entry<K, V, S>(key: &mut K, value: &mut V, s: &mut S) -> Result<(), Error>
where
    K: Serializable,
    V: Serializable,
    S: Serializer,
{
    s.begin_object("")?;
    key.serialize("key", s)?;
    value.serialize("value", s)?;
    s.end_object()
}

fn read_entry<K, V, S>(s: &mut S) -> Result<(K, V), Error>
where
    K: Serializable + Default,
    V: Serializable + Default,
    S: Serializer,
{
    s.begin_object("")?;
    let mut key = K::default();
    key.serialize("key", s)?;
    let mut value = V::default();
    value.serialize("value", s)?;
    s.end_object()?;
    Ok((key, value))
}

pub fn serialize_hash_map<K, V, S>(
    map: &mut HashMap<K, V>,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    K: Serializable + Default + Clone + Eq + Hash,
    V: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = map.len();
            s.begin_array(&mut len, name)?;
            for (key, value) in map.iter_mut() {
                // keys are immutable inside the map; serialize a copy
                let mut key = key.clone();
                write_entry(&mut key, value, s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            map.clear();
            for _ in 0..len {
                let (key, value) = read_entry(s)?;
                map.insert(key, value);
            }
            s.end_array()
        }
    }
}

pub fn serialize_btree_map<K, V, S>(
    map: &mut BTreeMap<K, V>,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    K: Serializable + Default + Clone + Ord,
    V: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = map.len();
            s.begin_array(&mut len, name)?;
            for (key, value) in map.iter_mut() {
                let mut key = key.clone();
                write_entry(&mut key, value, s)?;
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            map.clear();
            for _ in 0..len {
                let (key, value) = read_entry(s)?;
                map.insert(key, value);
            }
            s.end_array()
        }
    }
}

/// Multimap flattened to one `{key, value}` entry per pair; duplicate keys
/// accumulate on decode.
pub fn serialize_btree_multi_map<K, V, S>(
    map: &mut BTreeMap<K, Vec<V>>,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    K: Serializable + Default + Clone + Ord,
    V: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = map.values().map(Vec::len).sum();
            s.begin_array(&mut len, name)?;
            for (key, values) in map.iter_mut() {
                for value in values.iter_mut() {
                    let mut key = key.clone();
                    write_entry(&mut key, value, s)?;
                }
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            map.clear();
            for _ in 0..len {
                let (key, value) = read_entry::<K, V, S>(s)?;
                map.entry(key).or_default().push(value);
            }
            s.end_array()
        }
    }
}

pub fn serialize_hash_multi_map<K, V, S>(
    map: &mut HashMap<K, Vec<V>>,
    name: &str,
    s: &mut S,
) -> Result<(), Error>
where
    K: Serializable + Default + Clone + Eq + Hash,
    V: Serializable + Default,
    S: Serializer,
{
    match s.direction() {
        Direction::Output => {
            let mut len = map.values().map(Vec::len).sum();
            s.begin_array(&mut len, name)?;
            for (key, values) in map.iter_mut() {
                for value in values.iter_mut() {
                    let mut key = key.clone();
                    write_entry(&mut key, value, s)?;
                }
            }
            s.end_array()
        }
        Direction::Input => {
            let mut len = 0;
            s.begin_array(&mut len, name)?;
            map.clear();
            for _ in 0..len {
                let (key, value) = read_entry::<K, V, S>(s)?;
                map.entry(key).or_default().push(value);
            }
            s.end_array()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{BinaryDecoder, BinaryEncoder, JsonDecoder, JsonEncoder};

    #[test]
    fn btree_map_roundtrips_through_binary() {
        let mut map = BTreeMap::new();
        map.insert(String::from("height"), 120u64);
        map.insert(String::from("weight"), 7u64);
        let mut enc = BinaryEncoder::new();
        serialize_btree_map(&mut map, "meta", &mut enc).unwrap();
        let bytes = enc.into_bytes();

        let mut out: BTreeMap<String, u64> = BTreeMap::new();
        let mut dec = BinaryDecoder::new(&bytes);
        serialize_btree_map(&mut out, "meta", &mut dec).unwrap();
        assert_eq!(out, map);
    }

    #[test]
    fn entries_are_key_value_objects_in_trees() {
        let mut map = BTreeMap::new();
        map.insert(1u32, String::from("one"));
        let mut enc = JsonEncoder::new();
        serialize_btree_map(&mut map, "names", &mut enc).unwrap();
        assert_eq!(
            enc.into_value(),
            serde_json::json!({"names": [{"key": 1, "value": "one"}]})
        );
    }

    #[test]
    fn duplicate_keys_accumulate_in_multimap() {
        let tree = serde_json::json!({
            "outputs": [
                {"key": 5, "value": "a"},
                {"key": 5, "value": "b"},
                {"key": 9, "value": "c"},
            ]
        });
        let mut dec = JsonDecoder::new(&tree).unwrap();
        let mut map: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        serialize_btree_multi_map(&mut map, "outputs", &mut dec).unwrap();
        assert_eq!(map[&5], vec!["a", "b"]);
        assert_eq!(map[&9], vec!["c"]);

        let mut dec = JsonDecoder::new(&tree).unwrap();
        let mut hashed: HashMap<u32, Vec<String>> = HashMap::new();
        serialize_hash_multi_map(&mut hashed, "outputs", &mut dec).unwrap();
        assert_eq!(hashed[&5], vec!["a", "b"]);
        assert_eq!(hashed[&9], vec!["c"]);
    }

    #[test]
    fn hash_multimap_roundtrips_through_binary() {
        let mut map: HashMap<String, Vec<u64>> = HashMap::new();
        map.insert(String::from("mined"), vec![10, 20]);
        let mut enc = BinaryEncoder::new();
        serialize_hash_multi_map(&mut map, "outputs", &mut enc).unwrap();
        let bytes = enc.into_bytes();

        let mut out: HashMap<String, Vec<u64>> = HashMap::new();
        let mut dec = BinaryDecoder::new(&bytes);
        serialize_hash_multi_map(&mut out, "outputs", &mut dec).unwrap();
        assert_eq!(out, map);
    }

    #[test]
    fn duplicate_keys_last_wins_in_unique_map() {
        let tree = serde_json::json!({
            "meta": [
                {"key": "k", "value": 1},
                {"key": "k", "value": 2},
            ]
        });
        let mut dec = JsonDecoder::new(&tree).unwrap();
        let mut map: HashMap<String, u32> = HashMap::new();
        serialize_hash_map(&mut map, "meta", &mut dec).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["k"], 2);
    }
}
