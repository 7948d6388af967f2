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
use crate::item::{Item, Itemset};
use crate::itemizer::Itemizer;
use std::hash::{Hash, Hasher};

/// Slack allowed when comparing confidence against its threshold, so a
/// confidence equal to the threshold is not lost to rounding.
pub const CONFIDENCE_EPSILON: f64 = 1e-12;

/// An association rule over interned items. Metrics that are undefined for
/// the rule's supports are `None`, never zero.
#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: Option<f64>,
    pub leverage: Option<f64>,
    pub conviction: Option<f64>,
    pub cosine: Option<f64>,
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

/// A rule as handed to callers: sorted item tokens plus metrics. This
/// record shape is the same whichever strategy mined the itemsets.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleRecord {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: Option<f64>,
    pub leverage: Option<f64>,
    pub conviction: Option<f64>,
    pub cosine: Option<f64>,
}

pub fn cosine(support: f64, lift: Option<f64>) -> Option<f64> {
    match lift {
        Some(lift) if support > 0.0 && lift > 0.0 => Some((support * lift).sqrt()),
        _ => None,
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the rule
    // would be above the min_confidence threshold. `support` is the
    // support of antecedent and consequent together.
    pub fn make(
        antecedent: Itemset,
        consequent: Itemset,
        support: f64,
        itemset_support: &FrequentItemsets,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let a_sup = match itemset_support.support(&antecedent) {
            Some(a_sup) if a_sup > 0.0 => a_sup,
            _ => return None,
        };

        let confidence = support / a_sup;
        if confidence + CONFIDENCE_EPSILON < min_confidence {
            return None;
        }

        let (lift, leverage, conviction) = match itemset_support.support(&consequent) {
            Some(c_sup) if c_sup > 0.0 => {
                let conviction = if 1.0 - confidence != 0.0 {
                    Some((1.0 - c_sup) / (1.0 - confidence))
                } else {
                    None
                };
                (
                    Some(confidence / c_sup),
                    Some(support - a_sup * c_sup),
                    conviction,
                )
            }
            _ => (None, None, None),
        };

        Some(Rule {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
            leverage,
            conviction,
            cosine: cosine(support, lift),
        })
    }

    pub fn items(&self) -> Itemset {
        crate::vec_sets::union(&self.antecedent, &self.consequent)
    }

    pub fn to_record(&self, itemizer: &Itemizer) -> RuleRecord {
        RuleRecord {
            antecedent: itemizer.to_str_vec(&self.antecedent),
            consequent: itemizer.to_str_vec(&self.consequent),
            support: self.support,
            confidence: self.confidence,
            lift: self.lift,
            leverage: self.leverage,
            conviction: self.conviction,
            cosine: self.cosine,
        }
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join("")
    }
}
