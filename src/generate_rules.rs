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

use crate::frequent_itemsets::FrequentItemsets;
use crate::item::Itemset;
use crate::rule::Rule;
use crate::vec_sets::split_out;
use itertools::Itertools;
use tracing::debug;

/// Splits every frequent itemset of two or more items into each possible
/// antecedent and its complement, and keeps the rules meeting
/// `min_confidence`. Rules come out in the support map's iteration order,
/// then by antecedent size, then in combination order.
pub fn generate_rules(itemset_support: &FrequentItemsets, min_confidence: f64) -> Vec<Rule> {
    let mut rules: Vec<Rule> = vec![];
    for (itemset, support) in itemset_support.iter().filter(|(i, _)| i.len() > 1) {
        for size in 1..itemset.len() {
            for antecedent in itemset.iter().cloned().combinations(size) {
                let consequent: Itemset = split_out(itemset, &antecedent);
                if let Some(rule) = Rule::make(
                    antecedent,
                    consequent,
                    support,
                    itemset_support,
                    min_confidence,
                ) {
                    rules.push(rule);
                }
            }
        }
    }
    debug!(
        itemsets = itemset_support.len(),
        rules = rules.len(),
        "generated rules"
    );
    rules
}
