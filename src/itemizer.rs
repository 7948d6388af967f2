// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::item::Item;
use fnv::FnvHashMap;

/// Maps item tokens to dense `Item` ids and back. The whole universe is
/// known up front, so ids are assigned in sorted token order and `Item`
/// ordering agrees with lexicographic token ordering.
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn from_tokens<'a, I>(tokens: I) -> Itemizer
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut item_id_to_str: Vec<String> = tokens.into_iter().map(String::from).collect();
        item_id_to_str.sort();
        item_id_to_str.dedup();
        let item_str_to_id = item_id_to_str
            .iter()
            .enumerate()
            .map(|(index, item_str)| (item_str.clone(), Item::with_id(index as u32)))
            .collect();
        Itemizer {
            item_str_to_id,
            item_id_to_str,
        }
    }

    pub fn id_of(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index()]
    }

    pub fn to_id_vec(&self, items: &[&str]) -> Option<Vec<Item>> {
        let mut ids = items
            .iter()
            .map(|item| self.id_of(item))
            .collect::<Option<Vec<Item>>>()?;
        ids.sort();
        ids.dedup();
        Some(ids)
    }

    pub fn to_str_vec(&self, items: &[Item]) -> Vec<String> {
        items.iter().map(|&id| self.str_of(id).to_owned()).collect()
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;

    #[test]
    fn test_ids_follow_token_order() {
        let itemizer = Itemizer::from_tokens(vec!["pear", "apple", "fig", "apple"]);
        assert_eq!(itemizer.len(), 3);
        let apple = itemizer.id_of("apple").unwrap();
        let fig = itemizer.id_of("fig").unwrap();
        let pear = itemizer.id_of("pear").unwrap();
        assert!(apple < fig && fig < pear);
        assert_eq!(itemizer.str_of(fig), "fig");
        assert_eq!(itemizer.id_of("kiwi"), None);
    }

    #[test]
    fn test_to_id_vec_is_canonical() {
        let itemizer = Itemizer::from_tokens(vec!["c", "a", "b"]);
        let ids = itemizer.to_id_vec(&["c", "a", "c"]).unwrap();
        assert_eq!(itemizer.to_str_vec(&ids), vec!["a", "c"]);
        assert!(itemizer.to_id_vec(&["a", "zzz"]).is_none());
    }
}
