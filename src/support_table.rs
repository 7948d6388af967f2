use crate::item::{Item, Itemset};
use fnv::FnvHasher;
use std::hash::{Hash, Hasher};

/// Prime, so itemset hashes spread over all buckets.
pub const NUM_BUCKETS: usize = 10007;

/// Itemset -> support count map over a fixed array of chained buckets.
/// Each bucket is searched linearly comparing whole keys, so colliding
/// itemsets never share a count. The table never resizes.
pub struct SupportTable {
    buckets: Vec<Vec<(Itemset, u32)>>,
    len: usize,
}

pub fn bucket_index(itemset: &[Item], num_buckets: usize) -> usize {
    let mut hasher = FnvHasher::default();
    itemset.hash(&mut hasher);
    (hasher.finish() % num_buckets as u64) as usize
}

impl SupportTable {
    pub fn new() -> SupportTable {
        SupportTable::with_buckets(NUM_BUCKETS)
    }

    pub fn with_buckets(num_buckets: usize) -> SupportTable {
        assert!(num_buckets > 0);
        SupportTable {
            buckets: vec![vec![]; num_buckets],
            len: 0,
        }
    }

    fn bucket_of(&self, itemset: &[Item]) -> usize {
        bucket_index(itemset, self.buckets.len())
    }

    fn find_mut(&mut self, itemset: &[Item]) -> Option<&mut u32> {
        let bucket = self.bucket_of(itemset);
        self.buckets[bucket]
            .iter_mut()
            .find(|(key, _)| key.as_slice() == itemset)
            .map(|(_, count)| count)
    }

    fn push(&mut self, itemset: Itemset, count: u32) {
        let bucket = self.bucket_of(&itemset);
        self.buckets[bucket].push((itemset, count));
        self.len += 1;
    }

    /// Sets the count of `itemset`. Empty itemsets are never stored.
    pub fn insert(&mut self, itemset: Itemset, count: u32) {
        if itemset.is_empty() {
            return;
        }
        match self.find_mut(&itemset) {
            Some(existing) => *existing = count,
            None => self.push(itemset, count),
        }
    }

    pub fn get(&self, itemset: &[Item]) -> u32 {
        let bucket = self.bucket_of(itemset);
        self.buckets[bucket]
            .iter()
            .find(|(key, _)| key.as_slice() == itemset)
            .map_or(0, |&(_, count)| count)
    }

    pub fn contains(&self, itemset: &[Item]) -> bool {
        let bucket = self.bucket_of(itemset);
        self.buckets[bucket]
            .iter()
            .any(|(key, _)| key.as_slice() == itemset)
    }

    /// Adds one to the count of `itemset`, inserting it at one if absent.
    pub fn increment(&mut self, itemset: &[Item]) {
        if itemset.is_empty() {
            return;
        }
        match self.find_mut(itemset) {
            Some(count) => *count += 1,
            None => self.push(itemset.to_vec(), 1),
        }
    }

    /// Entries in bucket order.
    pub fn items(&self) -> impl Iterator<Item = (&[Item], u32)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(key, count)| (key.as_slice(), *count)))
    }

    /// Keys in canonical (lexicographic) order.
    pub fn sorted_itemsets(&self) -> Vec<Itemset> {
        let mut itemsets: Vec<Itemset> = self.items().map(|(key, _)| key.to_vec()).collect();
        itemsets.sort();
        itemsets
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SupportTable {
    fn default() -> SupportTable {
        SupportTable::new()
    }
}
