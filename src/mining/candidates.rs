//! Level-(k+1) candidate generation: classic Apriori join plus prune.
//!
//! Join: every ordered pair (left, right) of level-k survivors whose set
//! difference `right \ left` is a single item yields the candidate
//! `left + that item`. Prune: a candidate is kept only when all of its
//! k-subsets survived level k, the anti-monotone support bound.

use std::collections::BTreeSet;

use super::Itemset;

/// Generates the candidate itemsets of the next level from the ordered
/// (sorted) list of current-level survivors. Empty input yields empty
/// output, which terminates the driver loop.
pub(crate) fn next_level(survivors: &[Itemset]) -> Vec<Itemset> {
    let mut candidates = BTreeSet::new();

    for (i, left) in survivors.iter().enumerate() {
        for right in &survivors[i + 1..] {
            let diff = right.difference(left);
            if diff.len() >= 2 {
                continue;
            }

            let candidate = left.union_with(&diff);
            if candidate.len() != left.len() + 1 {
                continue;
            }
            if has_unsupported_subset(&candidate, survivors) {
                continue;
            }

            candidates.insert(candidate);
        }
    }

    candidates.into_iter().collect()
}

/// True when some k-subset of the candidate is missing from the survivors.
fn has_unsupported_subset(candidate: &Itemset, survivors: &[Itemset]) -> bool {
    candidate
        .subsets_removing_one()
        .any(|subset| survivors.binary_search(&subset).is_err())
}
