//! Property tests for the Apriori loop and its helpers.

use proptest::prelude::*;

use crate::data::TransactionTable;

use super::{candidates, rules, support, AssociationRuleMiner, Itemset};

fn table_strategy() -> impl Strategy<Value = TransactionTable> {
    (1usize..=5, 0usize..=12).prop_flat_map(|(n_items, n_rows)| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), n_items), n_rows)
            .prop_map(move |rows| {
                let names: Vec<String> = (0..n_items).map(|j| format!("I{j}")).collect();
                let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
                let row_refs: Vec<&[bool]> = rows.iter().map(Vec::as_slice).collect();
                TransactionTable::from_rows(&name_refs, &row_refs).expect("generated table is valid")
            })
    })
}

/// A survivors list: distinct k-itemsets over a small universe, sorted.
fn survivors_strategy() -> impl Strategy<Value = Vec<Itemset>> {
    (1usize..=3).prop_flat_map(|k| {
        proptest::collection::btree_set(
            proptest::collection::btree_set(0usize..6, k..=k),
            0..=8,
        )
        .prop_map(|sets| {
            sets.into_iter()
                .map(|set| set.into_iter().collect::<Itemset>())
                .collect()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// support(A) >= support(B) whenever A is a subset of B.
    #[test]
    fn prop_support_is_monotone(table in table_strategy(), mask in proptest::collection::vec(any::<bool>(), 5)) {
        let all: Vec<usize> = (0..table.n_items()).collect();
        let sub: Vec<usize> = all
            .iter()
            .copied()
            .filter(|&j| mask.get(j).copied().unwrap_or(false))
            .collect();
        prop_assume!(!sub.is_empty());

        let superset = Itemset::new(all);
        let subset = Itemset::new(sub);
        let counts = support::count_support(&table, &[subset.clone(), superset.clone()]);
        prop_assert!(counts[&subset] >= counts[&superset]);
    }

    /// Every generated candidate has all of its k-subsets among the survivors.
    #[test]
    fn prop_candidates_have_supported_subsets(survivors in survivors_strategy()) {
        let next = candidates::next_level(&survivors);
        for candidate in &next {
            prop_assert_eq!(
                candidate.len(),
                survivors.first().map_or(0, Itemset::len) + 1
            );
            for subset in candidate.subsets_removing_one() {
                prop_assert!(survivors.binary_search(&subset).is_ok());
            }
        }
    }

    /// Percentage strings and fractions configure identical miners.
    #[test]
    fn prop_threshold_forms_are_equivalent(
        table in table_strategy(),
        sup in 0u32..=100,
        conf in 0u32..=100,
    ) {
        let from_fractions =
            AssociationRuleMiner::new(f64::from(sup) / 100.0, f64::from(conf) / 100.0).unwrap();
        let from_strings =
            AssociationRuleMiner::new(format!("{sup}%").as_str(), format!("{conf}%").as_str())
                .unwrap();

        prop_assert_eq!(
            from_fractions.apriori(&table).unwrap(),
            from_strings.apriori(&table).unwrap()
        );
    }

    /// Back-to-back runs on one miner yield identical results.
    #[test]
    fn prop_apriori_is_idempotent(table in table_strategy()) {
        let miner = AssociationRuleMiner::new(0.2, 0.5).unwrap();
        let first = miner.apriori(&table).unwrap();
        let second = miner.apriori(&table).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The level loop records at most n_items non-empty levels plus one
    /// terminal empty level.
    #[test]
    fn prop_level_loop_terminates_within_universe(table in table_strategy()) {
        let miner = AssociationRuleMiner::new(0.1, 0.5).unwrap();
        let (_, history) = miner.frequent_levels(&table);
        prop_assert!(history.len() <= table.n_items() + 1);
    }

    /// Every emitted rule satisfies the strict confidence bound against
    /// supports recomputed straight from the table.
    #[test]
    fn prop_emitted_rules_clear_confidence_strictly(
        table in table_strategy(),
        conf in 0u32..=100,
    ) {
        let min_confidence = f64::from(conf) / 100.0;
        let miner = AssociationRuleMiner::new(0.1, min_confidence).unwrap();
        let rules = miner.apriori(&table).unwrap();

        let names = table.item_names();
        let index_of = |name: &str| names.iter().position(|n| *n == name).unwrap();

        for (hypothesis, inference) in rules.iter() {
            let hyp: Itemset = hypothesis.iter().map(|n| index_of(n)).collect();
            let full: Itemset = hypothesis
                .iter()
                .chain(inference.iter())
                .map(|n| index_of(n))
                .collect();

            let counts = support::count_support(&table, &[hyp.clone(), full.clone()]);
            prop_assert!(counts[&hyp] > 0);
            #[allow(clippy::cast_precision_loss)]
            let confidence = counts[&full] as f64 / counts[&hyp] as f64;
            prop_assert!(confidence > min_confidence);
        }
    }

    /// mine_rules never aborts on hypotheses missing from the history.
    #[test]
    fn prop_rule_mining_survives_sparse_history(table in table_strategy()) {
        let miner = AssociationRuleMiner::new(0.1, 0.3).unwrap();
        let (frequent, history) = miner.frequent_levels(&table);
        prop_assume!(!history.is_empty());
        prop_assert!(rules::mine_rules(&frequent, &history, 0.3).is_ok());
    }
}
