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
use crate::itemizer::Itemizer;

/// Normalized transactions: every transaction is sorted and duplicate
/// free. Empty transactions still count towards the number of
/// transactions (the support denominator) but are not stored.
pub struct TransactionStore {
    itemizer: Itemizer,
    transactions: Vec<Vec<Item>>,
    num_transactions: usize,
}

impl TransactionStore {
    pub fn new<S>(raw: &[Vec<S>]) -> TransactionStore
    where
        S: AsRef<str>,
    {
        let itemizer =
            Itemizer::from_tokens(raw.iter().flat_map(|tx| tx.iter().map(|s| s.as_ref())));
        let mut transactions = Vec::with_capacity(raw.len());
        for tx in raw {
            let mut items: Vec<Item> = tx
                .iter()
                .filter_map(|s| itemizer.id_of(s.as_ref()))
                .collect();
            // Some input files have transactions with duplicate items.
            items.sort();
            items.dedup();
            if !items.is_empty() {
                transactions.push(items);
            }
        }
        TransactionStore {
            itemizer,
            transactions,
            num_transactions: raw.len(),
        }
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    /// The non-empty transactions, in input order.
    pub fn transactions(&self) -> &[Vec<Item>] {
        &self.transactions
    }

    /// Number of input transactions, including empty ones.
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn is_empty(&self) -> bool {
        self.num_transactions == 0
    }

    /// Occurrence count of every item in the universe, indexed by item id.
    pub fn item_counts(&self) -> Vec<u32> {
        let mut counts = vec![0; self.itemizer.len()];
        for tx in &self.transactions {
            for item in tx {
                counts[item.as_index()] += 1;
            }
        }
        counts
    }
}
