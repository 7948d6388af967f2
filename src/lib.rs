//! Frequent itemset mining and association rule generation.
//!
//! Three interchangeable strategies find the frequent itemsets of a
//! transaction set: level-wise Apriori counting through a cross-linked
//! occurrence index, level-wise Apriori with a hash-bucket pre-filter, and
//! depth-first Eclat over tid-sets. Rules and their interestingness
//! measures are derived the same way whichever strategy ran.

pub mod apriori;
pub mod apriori_gen;
pub mod config;
pub mod cross_index;
pub mod eclat;
pub mod error;
pub mod frequent_itemsets;
pub mod generate_rules;
pub mod hash_filter;
pub mod item;
pub mod itemizer;
pub mod rule;
pub mod summary;
pub mod support_table;
pub mod transaction_reader;
pub mod transaction_store;
pub mod vec_sets;

pub use crate::config::{Algorithm, MiningConfig};
pub use crate::error::MiningError;
pub use crate::frequent_itemsets::FrequentItemsets;
pub use crate::rule::{Rule, RuleRecord};
pub use crate::summary::RuleSummary;
pub use crate::transaction_store::TransactionStore;

use crate::generate_rules::generate_rules;
use tracing::debug;

/// Runs one mining strategy over `store`. Every strategy returns the same
/// itemsets with the same supports; only iteration order differs.
pub fn mine_frequent_itemsets(
    store: &TransactionStore,
    min_count: u32,
    algorithm: Algorithm,
) -> FrequentItemsets {
    let frequent = match algorithm {
        Algorithm::CrossLinked => apriori::mine_cross_linked(store, min_count),
        Algorithm::HashPruned => hash_filter::mine_hash_pruned(store, min_count),
        Algorithm::Eclat => eclat::eclat(store, min_count),
    };
    debug!(
        %algorithm,
        min_count,
        itemsets = frequent.len(),
        "mined frequent itemsets"
    );
    frequent
}

/// Mines `store` and derives its rules, still over interned items.
pub fn mine_store(
    store: &TransactionStore,
    config: &MiningConfig,
) -> (FrequentItemsets, Vec<Rule>) {
    if store.is_empty() {
        return (FrequentItemsets::new(0), vec![]);
    }
    let min_count = config.min_support_count(store.num_transactions());
    let frequent = mine_frequent_itemsets(store, min_count, config.algorithm);
    let rules = generate_rules(&frequent, config.min_confidence);
    (frequent, rules)
}

/// Mines association rules from raw transactions. No transactions give no
/// rules.
pub fn mine_rules<S>(
    transactions: &[Vec<S>],
    config: &MiningConfig,
) -> Result<Vec<RuleRecord>, MiningError>
where
    S: AsRef<str>,
{
    let config = MiningConfig::new(config.min_support, config.min_confidence, config.algorithm)?;
    let store = TransactionStore::new(transactions);
    let (_, rules) = mine_store(&store, &config);
    Ok(rules
        .iter()
        .map(|rule| rule.to_record(store.itemizer()))
        .collect())
}
