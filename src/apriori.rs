use crate::apriori_gen::apriori_gen;
use crate::cross_index::CrossIndex;
use crate::frequent_itemsets::FrequentItemsets;
use crate::item::{Item, Itemset};
use crate::support_table::SupportTable;
use crate::transaction_store::TransactionStore;
use tracing::debug;

/// Supplies support counts to the level-wise driver.
pub trait CandidateCounter {
    /// Support count of every item, indexed by item id.
    fn item_counts(&self) -> Vec<u32>;

    /// Support counts of same-sized `candidates`. Candidates the counter
    /// can already tell are below `min_count` may be left out.
    fn count_candidates(&self, candidates: &[Itemset], min_count: u32) -> SupportTable;
}

/// Counts candidates exactly by walking the cross-linked index.
pub struct CrossLinkedCounter {
    index: CrossIndex,
    num_items: usize,
}

impl CrossLinkedCounter {
    pub fn new(store: &TransactionStore) -> CrossLinkedCounter {
        CrossLinkedCounter {
            index: CrossIndex::build(store),
            num_items: store.itemizer().len(),
        }
    }
}

impl CandidateCounter for CrossLinkedCounter {
    fn item_counts(&self) -> Vec<u32> {
        (0..self.num_items)
            .map(|index| self.index.occurrences(Item::with_id(index as u32)))
            .collect()
    }

    fn count_candidates(&self, candidates: &[Itemset], _min_count: u32) -> SupportTable {
        let mut counts = SupportTable::new();
        for candidate in candidates {
            counts.insert(candidate.clone(), self.index.count_itemset(candidate));
        }
        counts
    }
}

/// Level-wise Apriori. Starts from the frequent items, then alternates
/// candidate generation and counting until a level yields no candidates
/// or none of them are frequent.
pub fn apriori<C>(counter: &C, num_transactions: usize, min_count: u32) -> FrequentItemsets
where
    C: CandidateCounter,
{
    let mut frequent = FrequentItemsets::new(num_transactions);

    let mut level = SupportTable::new();
    for (index, count) in counter.item_counts().into_iter().enumerate() {
        if count >= min_count {
            let itemset = vec![Item::with_id(index as u32)];
            frequent.insert(itemset.clone(), count);
            level.insert(itemset, count);
        }
    }
    debug!(size = 1, frequent = level.len(), "counted items");

    let mut size = 1;
    while !level.is_empty() {
        let candidates = apriori_gen(&level);
        size += 1;
        if candidates.is_empty() {
            debug!(size, "no candidates");
            break;
        }

        let counts = counter.count_candidates(&candidates, min_count);
        let mut next_level = SupportTable::new();
        for candidate in candidates.iter() {
            let count = counts.get(candidate);
            if count >= min_count {
                frequent.insert(candidate.clone(), count);
                next_level.insert(candidate.clone(), count);
            }
        }
        debug!(
            size,
            candidates = candidates.len(),
            frequent = next_level.len(),
            "counted level"
        );
        level = next_level;
    }

    frequent
}

pub fn mine_cross_linked(store: &TransactionStore, min_count: u32) -> FrequentItemsets {
    let counter = CrossLinkedCounter::new(store);
    apriori(&counter, store.num_transactions(), min_count)
}
