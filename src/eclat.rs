use crate::frequent_itemsets::FrequentItemsets;
use crate::item::{Item, Itemset};
use crate::transaction_store::TransactionStore;
use crate::vec_sets::intersection;
use tracing::debug;

/// Sorted ids of the transactions containing an itemset.
pub type TidSet = Vec<usize>;

// One level of the depth-first search: the items that may extend `prefix`,
// each with the tid-set of prefix plus that item.
struct Frame {
    prefix: Vec<Item>,
    extensions: Vec<(Item, TidSet)>,
    next: usize,
}

/// Tid-sets of the items meeting `min_count`, ordered by tid-set size and
/// then by item.
pub fn frequent_item_tidsets(store: &TransactionStore, min_count: u32) -> Vec<(Item, TidSet)> {
    let mut tidsets: Vec<TidSet> = vec![vec![]; store.itemizer().len()];
    for (tid, transaction) in store.transactions().iter().enumerate() {
        for item in transaction {
            tidsets[item.as_index()].push(tid);
        }
    }
    let mut items: Vec<(Item, TidSet)> = tidsets
        .into_iter()
        .enumerate()
        .map(|(index, tids)| (Item::with_id(index as u32), tids))
        .filter(|(_, tids)| tids.len() >= min_count as usize)
        .collect();
    items.sort_by(|(a, a_tids), (b, b_tids)| a_tids.len().cmp(&b_tids.len()).then(a.cmp(b)));
    items
}

/// Vertical-format mining. Each frequent itemset is reached exactly once,
/// depth first, by intersecting the tid-set of its prefix with that of
/// each later sibling. The search keeps its own stack rather than
/// recursing, so deep itemsets cannot exhaust the call stack.
pub fn eclat(store: &TransactionStore, min_count: u32) -> FrequentItemsets {
    let mut frequent = FrequentItemsets::new(store.num_transactions());
    let mut stack: Vec<Frame> = vec![Frame {
        prefix: vec![],
        extensions: frequent_item_tidsets(store, min_count),
        next: 0,
    }];
    let mut max_depth = 0;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.extensions.len() {
            stack.pop();
            continue;
        }
        let i = frame.next;
        frame.next += 1;

        let (item, tids) = &frame.extensions[i];
        let mut prefix = frame.prefix.clone();
        prefix.push(*item);

        let mut itemset: Itemset = prefix.clone();
        itemset.sort();
        frequent.insert(itemset, tids.len() as u32);

        let suffix: Vec<(Item, TidSet)> = frame.extensions[i + 1..]
            .iter()
            .filter_map(|(other, other_tids)| {
                let tids = intersection(tids, other_tids);
                if tids.len() >= min_count as usize {
                    Some((*other, tids))
                } else {
                    None
                }
            })
            .collect();

        if !suffix.is_empty() {
            stack.push(Frame {
                prefix,
                extensions: suffix,
                next: 0,
            });
            max_depth = max_depth.max(stack.len() - 1);
        }
    }

    debug!(itemsets = frequent.len(), max_depth, "eclat finished");
    frequent
}

#[cfg(test)]
mod tests {
    use super::{eclat, frequent_item_tidsets};
    use crate::transaction_store::TransactionStore;
    use maplit::btreemap;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_item_order() {
        let store = TransactionStore::new(&[
            vec!["b", "c"],
            vec!["a", "c"],
            vec!["c", "b"],
            vec!["d"],
        ]);
        let itemizer = store.itemizer();
        let order: Vec<&str> = frequent_item_tidsets(&store, 1)
            .iter()
            .map(|(item, _)| itemizer.str_of(*item))
            .collect();
        // Ties on tid-set size break by item.
        assert_eq!(order, vec!["a", "d", "b", "c"]);
        assert_eq!(frequent_item_tidsets(&store, 2).len(), 2);
    }

    #[test]
    fn test_eclat() {
        let store = TransactionStore::new(&[
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["a"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ]);
        let frequent = eclat(&store, 3);
        assert_eq!(
            frequent.to_token_map(store.itemizer()),
            btreemap! {
                tokens(&["a"]) => 0.8,
                tokens(&["a", "b"]) => 0.6,
                tokens(&["b"]) => 0.8,
                tokens(&["b", "c"]) => 0.6,
                tokens(&["c"]) => 0.6,
            }
        );
    }

    #[test]
    fn test_depth_first_order() {
        let store = TransactionStore::new(&[vec!["p", "q", "r"], vec!["p", "q"], vec!["p"]]);
        let frequent = eclat(&store, 1);
        let itemizer = store.itemizer();
        let visited: Vec<String> = frequent
            .iter()
            .map(|(itemset, _)| crate::item::Item::item_vec_to_string(itemset, itemizer))
            .collect();
        // r (1 tid), q (2), p (3); each subtree is finished before the next
        // sibling starts.
        assert_eq!(visited, vec!["r", "q r", "p q r", "p r", "q", "p q", "p"]);
    }
}
