//! Support counting over the transaction table.
//!
//! Cost is O(transactions x itemsets x k); candidate sets are already
//! pruned to a small number per level, so the straight scan is fine.

use std::collections::BTreeMap;

use crate::data::TransactionTable;

use super::Itemset;

/// Level-1 counts: one boolean column sum per item.
pub(crate) fn count_singletons(table: &TransactionTable) -> BTreeMap<Itemset, usize> {
    (0..table.n_items())
        .map(|item| {
            let count = table.item(item).iter().filter(|&&present| present).count();
            (Itemset::single(item), count)
        })
        .collect()
}

/// Counts, for each candidate, the transactions containing every member item.
pub(crate) fn count_support(
    table: &TransactionTable,
    candidates: &[Itemset],
) -> BTreeMap<Itemset, usize> {
    candidates
        .iter()
        .map(|candidate| {
            let count = (0..table.n_rows())
                .filter(|&row| transaction_contains(table, row, candidate))
                .count();
            (candidate.clone(), count)
        })
        .collect()
}

/// Boolean AND over the candidate's columns for one transaction.
fn transaction_contains(table: &TransactionTable, row: usize, itemset: &Itemset) -> bool {
    itemset.items().iter().all(|&item| table.item(item)[row])
}
