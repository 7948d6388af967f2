use crate::item::Item;
use crate::transaction_store::TransactionStore;

/// One (item, transaction) occurrence. Links are indices into the arena.
#[derive(Debug)]
struct Node {
    item: Item,
    // Next item in the same transaction, in item order.
    right: Option<usize>,
    // Next occurrence of the same item, in a later transaction.
    down: Option<usize>,
}

/// Cross-linked occurrence index. Every transaction is a chain of nodes
/// linked "right" in item order, and every item is a chain of nodes linked
/// "down" in transaction order. All nodes live in one arena owned by the
/// index.
pub struct CrossIndex {
    nodes: Vec<Node>,
    // Per item id, first and last node of its down chain.
    heads: Vec<Option<usize>>,
    tails: Vec<Option<usize>>,
}

impl CrossIndex {
    pub fn new(num_items: usize) -> CrossIndex {
        CrossIndex {
            nodes: vec![],
            heads: vec![None; num_items],
            tails: vec![None; num_items],
        }
    }

    pub fn build(store: &TransactionStore) -> CrossIndex {
        let mut index = CrossIndex::new(store.itemizer().len());
        for transaction in store.transactions() {
            index.insert(transaction);
        }
        index
    }

    /// Appends a transaction. Items must be sorted and duplicate free.
    pub fn insert(&mut self, transaction: &[Item]) {
        let mut previous: Option<usize> = None;
        for &item in transaction {
            let id = self.nodes.len();
            self.nodes.push(Node {
                item,
                right: None,
                down: None,
            });
            if let Some(previous) = previous {
                self.nodes[previous].right = Some(id);
            }
            previous = Some(id);

            let index = item.as_index();
            if index >= self.heads.len() {
                self.heads.resize(index + 1, None);
                self.tails.resize(index + 1, None);
            }
            match self.tails[index] {
                Some(tail) => self.nodes[tail].down = Some(id),
                None => self.heads[index] = Some(id),
            }
            self.tails[index] = Some(id);
        }
    }

    fn down_chain(&self, item: Item) -> DownChain {
        DownChain {
            index: self,
            next: self.heads.get(item.as_index()).cloned().flatten(),
        }
    }

    /// Number of transactions containing `item`.
    pub fn occurrences(&self, item: Item) -> u32 {
        self.down_chain(item).count() as u32
    }

    /// Number of transactions containing every item of `itemset`, which
    /// must be sorted. Walks the occurrences of the first item and checks
    /// the rest of each one's transaction.
    pub fn count_itemset(&self, itemset: &[Item]) -> u32 {
        let (first, rest) = match itemset.split_first() {
            Some(split) => split,
            None => return 0,
        };
        let mut count = 0;
        for start in self.down_chain(*first) {
            if self.row_contains(start, rest) {
                count += 1;
            }
        }
        count
    }

    // Checks the nodes right of `start` hold all of `items`. Both the row
    // and `items` are sorted, so one forward pass suffices.
    fn row_contains(&self, start: usize, items: &[Item]) -> bool {
        let mut cursor = self.nodes[start].right;
        for &wanted in items {
            loop {
                let node = match cursor {
                    Some(id) => &self.nodes[id],
                    None => return false,
                };
                cursor = node.right;
                if node.item == wanted {
                    break;
                }
                if node.item > wanted {
                    return false;
                }
            }
        }
        true
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

struct DownChain<'a> {
    index: &'a CrossIndex,
    next: Option<usize>,
}

impl<'a> Iterator for DownChain<'a> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        let id = self.next?;
        self.next = self.index.nodes[id].down;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::CrossIndex;
    use crate::transaction_store::TransactionStore;

    #[test]
    fn test_index() {
        let store = TransactionStore::new(&[
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["g", "h", "i", "j", "k", "l"],
            vec!["z", "x"],
            vec!["z", "x"],
            vec!["z", "x", "y"],
            vec!["z", "x", "y", "i"],
        ]);
        let index = CrossIndex::build(&store);
        let itemizer = store.itemizer();
        let count = |items: &[&str]| index.count_itemset(&itemizer.to_id_vec(items).unwrap());

        assert_eq!(index.num_nodes(), 6 + 6 + 2 + 2 + 3 + 4);
        for &single in &["a", "b", "c", "d", "e", "f", "g", "h", "j", "k", "l"] {
            assert_eq!(count(&[single]), 1, "item {}", single);
        }
        assert_eq!(count(&["i"]), 2);
        assert_eq!(count(&["z"]), 4);
        assert_eq!(count(&["x"]), 4);
        assert_eq!(count(&["y"]), 2);
        assert_eq!(count(&["x", "z"]), 4);
        assert_eq!(count(&["x", "y", "z"]), 2);
        assert_eq!(count(&["i", "x", "y", "z"]), 1);
        assert_eq!(count(&["a", "f"]), 1);
        assert_eq!(count(&["a", "g"]), 0);
        assert_eq!(count(&["i", "l"]), 1);
        assert_eq!(index.occurrences(itemizer.id_of("z").unwrap()), 4);
        assert_eq!(index.count_itemset(&[]), 0);
    }

    #[test]
    fn test_down_chain_follows_transaction_order() {
        let store = TransactionStore::new(&[vec!["b"], vec!["a", "b"], vec!["b", "c"]]);
        let index = CrossIndex::build(&store);
        let b = store.itemizer().id_of("b").unwrap();
        let chain: Vec<usize> = index.down_chain(b).collect();
        // Node ids are allocated in transaction order, so an appended
        // chain is strictly increasing.
        assert_eq!(chain.len(), 3);
        assert!(chain.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unseen_item() {
        let mut index = CrossIndex::new(0);
        assert_eq!(index.count_itemset(&[crate::item::Item::with_id(3)]), 0);
        index.insert(&[crate::item::Item::with_id(5)]);
        assert_eq!(index.occurrences(crate::item::Item::with_id(5)), 1);
        assert_eq!(index.occurrences(crate::item::Item::with_id(4)), 0);
    }
}
