//! Rule derivation from the frequent-itemset lattice.
//!
//! For every frequent itemset and every non-empty proper subset of it (the
//! hypothesis), confidence is `support(itemset) / support(hypothesis)`; a
//! rule `hypothesis => itemset \ hypothesis` is emitted when confidence is
//! strictly above the threshold. Evaluating all subset sizes, not just
//! singletons, captures rules with multi-item hypotheses.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{ReglasError, Result};

use super::{Itemset, SupportHistory};

/// Mines rules from the terminal frequent set against the support history.
///
/// Hypothesis supports are looked up at the history level matching their
/// cardinality. A hypothesis absent from the history (pruned at an earlier
/// level) is skipped: no rule, no abort, no stale value. When several
/// parent itemsets yield the same hypothesis, the later parent overwrites
/// the earlier rule.
///
/// # Errors
///
/// Returns [`ReglasError::MissingTransactionTable`] when the history is
/// empty, i.e. no frequency tables were ever computed to mine from.
pub fn mine_rules(
    frequent: &BTreeMap<Itemset, usize>,
    history: &SupportHistory,
    min_confidence: f64,
) -> Result<BTreeMap<Itemset, Vec<usize>>> {
    if history.is_empty() {
        return Err(ReglasError::MissingTransactionTable);
    }

    let mut rules = BTreeMap::new();

    for (itemset, &itemset_support) in frequent {
        if itemset.len() < 2 {
            continue;
        }

        for size in 1..itemset.len() {
            for combo in combinations(itemset.items(), size) {
                let hypothesis = Itemset::new(combo);

                let Some(hypothesis_support) = history.support(&hypothesis) else {
                    debug!("hypothesis {:?} has no recorded support, skipping", hypothesis.items());
                    continue;
                };
                if hypothesis_support == 0 {
                    continue;
                }

                #[allow(clippy::cast_precision_loss)]
                let confidence = itemset_support as f64 / hypothesis_support as f64;
                if confidence > min_confidence {
                    rules.insert(hypothesis.clone(), itemset.difference(&hypothesis));
                }
            }
        }
    }

    Ok(rules)
}

/// All size-k combinations of `items`, in input order.
pub(crate) fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    combine(items, k, 0, &mut current, &mut out);
    out
}

fn combine(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        combine(items, k, i + 1, current, out);
        current.pop();
    }
}
