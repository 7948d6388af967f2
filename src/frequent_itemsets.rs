use crate::item::{Item, Itemset};
use crate::itemizer::Itemizer;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// The support map: every frequent itemset found by a mining run with its
/// support count. Iterates in insertion order, so two runs over the same
/// input iterate identically.
#[derive(Debug, Clone)]
pub struct FrequentItemsets {
    counts: IndexMap<Itemset, u32, FnvBuildHasher>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> FrequentItemsets {
        FrequentItemsets {
            counts: IndexMap::default(),
            num_transactions,
        }
    }

    pub fn insert(&mut self, itemset: Itemset, count: u32) {
        if itemset.is_empty() {
            return;
        }
        self.counts.insert(itemset, count);
    }

    pub fn count(&self, itemset: &[Item]) -> Option<u32> {
        self.counts.get(itemset).cloned()
    }

    /// Fraction of transactions containing `itemset`, or `None` if the
    /// itemset was not found frequent.
    pub fn support(&self, itemset: &[Item]) -> Option<f64> {
        self.count(itemset).map(|count| self.fraction(count))
    }

    fn fraction(&self, count: u32) -> f64 {
        count as f64 / self.num_transactions as f64
    }

    pub fn contains(&self, itemset: &[Item]) -> bool {
        self.counts.contains_key(itemset)
    }

    /// (itemset, support) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.counts
            .iter()
            .map(move |(itemset, &count)| (itemset, self.fraction(count)))
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of frequent itemsets of each size, smallest size first.
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for itemset in self.counts.keys() {
            *histogram.entry(itemset.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Keyed by sorted item tokens, for comparing runs or printing.
    pub fn to_token_map(&self, itemizer: &Itemizer) -> BTreeMap<Vec<String>, f64> {
        self.iter()
            .map(|(itemset, support)| (itemizer.to_str_vec(itemset), support))
            .collect()
    }
}
