use crate::item::Itemset;
use crate::support_table::SupportTable;
use crate::vec_sets::union;
use itertools::Itertools;

/// Joins the size-k frequent itemsets in `frequent` into size-(k+1)
/// candidates. Two itemsets join when they share their first k-1 items,
/// and a join survives only if each of its size-k subsets is frequent.
/// Candidates come out in canonical order.
pub fn apriori_gen(frequent: &SupportTable) -> Vec<Itemset> {
    let itemsets = frequent.sorted_itemsets();
    let mut candidates: Vec<Itemset> = vec![];
    for (i, a) in itemsets.iter().enumerate() {
        let k = a.len();
        let prefix = &a[..k - 1];
        for b in &itemsets[i + 1..] {
            // Sorted, so once the prefix diverges it never matches again.
            if b.len() != k || &b[..k - 1] != prefix {
                break;
            }
            let candidate = union(a, b);
            if candidate.len() != k + 1 {
                continue;
            }
            if all_subsets_frequent(&candidate, frequent) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

fn all_subsets_frequent(candidate: &[crate::item::Item], frequent: &SupportTable) -> bool {
    candidate
        .iter()
        .cloned()
        .combinations(candidate.len() - 1)
        .all(|subset| frequent.contains(&subset))
}
