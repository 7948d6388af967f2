use crate::apriori::{apriori, CandidateCounter};
use crate::frequent_itemsets::FrequentItemsets;
use crate::item::{Item, Itemset};
use crate::support_table::{bucket_index, SupportTable};
use crate::transaction_store::TransactionStore;
use crate::vec_sets::is_subset;
use itertools::Itertools;
use tracing::debug;

pub const NUM_FILTER_BUCKETS: usize = 1009;

/// Occurrence counts of every size-k combination of every transaction,
/// folded into a fixed number of buckets. A bucket's count is at least the
/// support count of any itemset hashed to it, so discarding itemsets whose
/// bucket is under the threshold never discards a frequent one.
pub struct BucketFilter {
    bucket_counts: Vec<u32>,
}

impl BucketFilter {
    pub fn build(transactions: &[Vec<Item>], size: usize, num_buckets: usize) -> BucketFilter {
        assert!(num_buckets > 0);
        let mut bucket_counts = vec![0; num_buckets];
        for transaction in transactions.iter().filter(|tx| tx.len() >= size) {
            for combination in transaction.iter().cloned().combinations(size) {
                bucket_counts[bucket_index(&combination, num_buckets)] += 1;
            }
        }
        BucketFilter { bucket_counts }
    }

    pub fn bucket_count(&self, itemset: &[Item]) -> u32 {
        self.bucket_counts[bucket_index(itemset, self.bucket_counts.len())]
    }

    pub fn admits(&self, itemset: &[Item], min_count: u32) -> bool {
        self.bucket_count(itemset) >= min_count
    }

    /// The candidates whose bucket reaches `min_count`, in input order.
    pub fn survivors<'c>(&self, candidates: &'c [Itemset], min_count: u32) -> Vec<&'c Itemset> {
        candidates
            .iter()
            .filter(|candidate| self.admits(candidate, min_count))
            .collect()
    }
}

/// Counts candidates by scanning the transactions directly, after the
/// bucket filter has thrown out candidates that cannot be frequent.
pub struct HashPrunedCounter<'a> {
    store: &'a TransactionStore,
    num_buckets: usize,
}

impl<'a> HashPrunedCounter<'a> {
    pub fn new(store: &'a TransactionStore) -> HashPrunedCounter<'a> {
        HashPrunedCounter::with_buckets(store, NUM_FILTER_BUCKETS)
    }

    pub fn with_buckets(store: &'a TransactionStore, num_buckets: usize) -> HashPrunedCounter<'a> {
        HashPrunedCounter { store, num_buckets }
    }
}

impl<'a> CandidateCounter for HashPrunedCounter<'a> {
    fn item_counts(&self) -> Vec<u32> {
        self.store.item_counts()
    }

    fn count_candidates(&self, candidates: &[Itemset], min_count: u32) -> SupportTable {
        let mut counts = SupportTable::new();
        let size = match candidates.first() {
            Some(candidate) => candidate.len(),
            None => return counts,
        };

        let filter = BucketFilter::build(self.store.transactions(), size, self.num_buckets);
        let survivors = filter.survivors(candidates, min_count);
        debug!(
            size,
            candidates = candidates.len(),
            pruned = candidates.len() - survivors.len(),
            "bucket filter"
        );

        let transactions = self.store.transactions();
        for transaction in transactions.iter().filter(|tx| tx.len() >= size) {
            for candidate in &survivors {
                if is_subset(candidate.as_slice(), transaction) {
                    counts.increment(candidate);
                }
            }
        }
        counts
    }
}

pub fn mine_hash_pruned(store: &TransactionStore, min_count: u32) -> FrequentItemsets {
    let counter = HashPrunedCounter::new(store);
    apriori(&counter, store.num_transactions(), min_count)
}

#[cfg(test)]
mod tests {
    use super::{
        mine_hash_pruned, BucketFilter, CandidateCounter, HashPrunedCounter, NUM_FILTER_BUCKETS,
    };
    use crate::apriori::{apriori, mine_cross_linked};
    use crate::transaction_store::TransactionStore;
    use crate::vec_sets::is_subset;
    use itertools::Itertools;

    fn store() -> TransactionStore {
        TransactionStore::new(&[
            vec!["milk", "bread", "eggs"],
            vec!["milk", "bread"],
            vec!["bread", "butter", "jam"],
            vec!["milk", "eggs", "jam", "butter"],
            vec!["bread"],
            vec!["eggs", "bread", "milk"],
        ])
    }

    #[test]
    fn test_bucket_counts_bound_exact_counts() {
        let store = store();
        let transactions = store.transactions();
        for &num_buckets in &[1, 3, 1009] {
            for size in 1..4 {
                let filter = BucketFilter::build(transactions, size, num_buckets);
                let universe: Vec<_> = (0..store.itemizer().len() as u32)
                    .map(crate::item::Item::with_id)
                    .collect();
                for itemset in universe.into_iter().combinations(size) {
                    let exact = transactions
                        .iter()
                        .filter(|tx| is_subset(&itemset, tx.as_slice()))
                        .count();
                    assert!(filter.bucket_count(&itemset) as usize >= exact);
                }
            }
        }
    }

    #[test]
    fn test_single_bucket_holds_every_combination() {
        let store = store();
        let filter = BucketFilter::build(store.transactions(), 2, 1);
        // 3 + 1 + 3 + 6 + 0 + 3 pairs.
        let any_pair = store.itemizer().to_id_vec(&["bread", "milk"]).unwrap();
        assert_eq!(filter.bucket_count(&any_pair), 16);
    }

    #[test]
    fn test_rare_candidates_are_dropped() {
        // {a,b}, {c,d} and {a,c} land in different buckets out of 1009.
        let store = TransactionStore::new(&[
            vec!["a", "b"],
            vec!["a", "b"],
            vec!["a", "b"],
            vec!["c", "d"],
        ]);
        let itemizer = store.itemizer();
        let a_b = itemizer.to_id_vec(&["a", "b"]).unwrap();
        let c_d = itemizer.to_id_vec(&["c", "d"]).unwrap();
        let a_c = itemizer.to_id_vec(&["a", "c"]).unwrap();

        let filter = BucketFilter::build(store.transactions(), 2, NUM_FILTER_BUCKETS);
        assert_eq!(filter.bucket_count(&a_b), 3);
        assert_eq!(filter.bucket_count(&c_d), 1);
        assert_eq!(filter.bucket_count(&a_c), 0);
        assert!(filter.admits(&a_b, 2));
        assert!(!filter.admits(&c_d, 2));
        assert!(!filter.admits(&a_c, 1));

        let candidates = vec![a_b.clone(), a_c.clone(), c_d.clone()];
        assert_eq!(filter.survivors(&candidates, 2), vec![&a_b]);
        assert_eq!(filter.survivors(&candidates, 1).len(), 2);

        // {c,d} is in a transaction, so only the filter keeps it from
        // being counted.
        let counter = HashPrunedCounter::new(&store);
        let counts = counter.count_candidates(&candidates, 2);
        assert_eq!(counts.get(&a_b), 3);
        assert!(!counts.contains(&c_d));
        assert!(!counts.contains(&a_c));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_counts_match_cross_linked() {
        let store = store();
        for min_count in 1..5 {
            let hashed = mine_hash_pruned(&store, min_count);
            let linked = mine_cross_linked(&store, min_count);
            assert_eq!(
                hashed.to_token_map(store.itemizer()),
                linked.to_token_map(store.itemizer())
            );
            // Tiny bucket arrays collide heavily; the result must not change.
            let counter = HashPrunedCounter::with_buckets(&store, 2);
            let collided = apriori(&counter, store.num_transactions(), min_count);
            assert_eq!(
                collided.to_token_map(store.itemizer()),
                linked.to_token_map(store.itemizer())
            );
        }
    }

    #[test]
    fn test_no_candidates() {
        let store = store();
        let counter = HashPrunedCounter::new(&store);
        assert!(counter.count_candidates(&[], 1).is_empty());
    }
}
