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

use crate::itemizer::Itemizer;

/// An interned item token. Ids are handed out in lexicographic order of
/// the tokens they stand for, so comparing two `Item`s compares their
/// tokens.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

/// A sorted, duplicate free run of items. Canonical form for hashing,
/// equality and ordering of itemsets.
pub type Itemset = Vec<Item>;

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        items
            .iter()
            .map(|&item| itemizer.str_of(item))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn test_item_order_follows_id() {
        let mut items = vec![Item::with_id(3), Item::with_id(0), Item::with_id(2)];
        items.sort();
        assert_eq!(
            items,
            vec![Item::with_id(0), Item::with_id(2), Item::with_id(3)]
        );
        assert_eq!(Item::with_id(7).as_index(), 7);
    }
}
