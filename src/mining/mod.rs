//! Pattern mining algorithms for association rule discovery.
//!
//! This module provides the Apriori algorithm for discovering frequent
//! itemsets in boolean transaction tables and deriving association rules
//! from them, as used in market basket analysis.
//!
//! # Example
//!
//! ```
//! use reglas::data::TransactionTable;
//! use reglas::mining::{AssociationRuleMiner, MiningStatus};
//!
//! let table = TransactionTable::from_rows(
//!     &["milk", "bread", "butter"],
//!     &[
//!         &[true, true, true],
//!         &[true, true, false],
//!         &[true, false, true],
//!         &[false, true, true],
//!     ],
//! ).unwrap();
//!
//! // Support 25%, confidence 60%; thresholds also accept fractions.
//! let miner = AssociationRuleMiner::new("25%", "60%").unwrap();
//! let rules = miner.apriori(&table).unwrap();
//! assert_eq!(rules.status(), MiningStatus::RulesFound);
//! for (hypothesis, inference) in rules.iter() {
//!     println!("{hypothesis:?} => {inference:?}");
//! }
//! ```

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::data::TransactionTable;
use crate::error::{ReglasError, Result};
use crate::threshold::Threshold;

mod candidates;
pub mod rules;
mod support;

#[cfg(test)]
mod proptests;

/// A canonical itemset: sorted, deduplicated item column indices.
///
/// Every itemset, whatever its cardinality, uses the same representation,
/// so level-1 "bare items" and higher-level tuples hash and compare
/// uniformly.
///
/// # Examples
///
/// ```
/// use reglas::mining::Itemset;
///
/// let a = Itemset::new(vec![2, 0, 2]);
/// assert_eq!(a.items(), &[0, 2]);
/// assert!(a.contains(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset(Vec<usize>);

impl Itemset {
    /// Creates a canonical itemset from item indices (sorted, deduplicated).
    #[must_use]
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Creates a singleton itemset.
    #[must_use]
    pub fn single(item: usize) -> Self {
        Self(vec![item])
    }

    /// Returns the item indices in ascending order.
    #[must_use]
    pub fn items(&self) -> &[usize] {
        &self.0
    }

    /// Returns the cardinality.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the itemset has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `item` is a member.
    #[must_use]
    pub fn contains(&self, item: usize) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Items of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Itemset) -> Vec<usize> {
        self.0
            .iter()
            .copied()
            .filter(|&i| !other.contains(i))
            .collect()
    }

    /// Extends the itemset with extra items, keeping it canonical.
    #[must_use]
    pub fn union_with(&self, extra: &[usize]) -> Itemset {
        let mut items = self.0.clone();
        items.extend_from_slice(extra);
        Itemset::new(items)
    }

    /// Iterates over the (k-1)-subsets obtained by removing one item each.
    pub(crate) fn subsets_removing_one(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |drop| {
            let items = self
                .0
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != drop)
                .map(|(_, &item)| item)
                .collect();
            // Already sorted and distinct, Itemset::new just re-verifies.
            Itemset(items)
        })
    }
}

impl FromIterator<usize> for Itemset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Itemset::new(iter.into_iter().collect())
    }
}

/// Per-level support counts recorded during one Apriori run.
///
/// Level k (1-based cardinality) holds the k-itemsets that passed the
/// support filter at that level, with their support counts. Built once per
/// [`AssociationRuleMiner::apriori`] call and read-only afterward; the rule
/// miner looks hypothesis supports up here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportHistory {
    levels: Vec<BTreeMap<Itemset, usize>>,
}

impl SupportHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the supported k-itemsets recorded for cardinality `k`.
    #[must_use]
    pub fn level(&self, k: usize) -> Option<&BTreeMap<Itemset, usize>> {
        if k == 0 {
            return None;
        }
        self.levels.get(k - 1)
    }

    /// Looks up the recorded support count for an itemset at its own level.
    #[must_use]
    pub fn support(&self, itemset: &Itemset) -> Option<usize> {
        self.level(itemset.len())?.get(itemset).copied()
    }

    /// Number of recorded levels (trailing empty levels included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if no level has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub(crate) fn push_level(&mut self, level: BTreeMap<Itemset, usize>) {
        self.levels.push(level);
    }

    pub(crate) fn last_non_empty(&self) -> Option<&BTreeMap<Itemset, usize>> {
        self.levels.iter().rev().find(|level| !level.is_empty())
    }
}

/// Outcome classification for a mining pass.
///
/// Empty rule sets are ordinary outcomes, not errors; the status says which
/// stage came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiningStatus {
    /// At least one rule cleared the confidence threshold.
    RulesFound,
    /// No itemset cleared the support threshold.
    NoFrequentItemsets,
    /// Only single items cleared the support threshold; single-item
    /// itemsets carry no hypothesis/inference split.
    OnlySingletonItemsets,
    /// Frequent itemsets exist but no rule cleared the confidence threshold.
    NoRulesAboveConfidence,
}

/// Association rule: hypothesis => inference, by item name.
///
/// Support and confidence are not stored; only rules above the confidence
/// threshold survive into a [`RuleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRule {
    /// Items assumed present (left side), sorted by column order.
    pub hypothesis: Vec<String>,
    /// Items inferred present (right side), sorted by column order.
    pub inference: Vec<String>,
}

/// The mined rule set: hypothesis itemsets mapped to inferred items.
///
/// When several parent itemsets yield the same hypothesis, the later parent
/// overwrites the earlier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<Vec<String>, Vec<String>>,
    status: MiningStatus,
}

impl RuleSet {
    fn empty(status: MiningStatus) -> Self {
        Self {
            rules: BTreeMap::new(),
            status,
        }
    }

    /// Returns the hypothesis-to-inference mapping.
    #[must_use]
    pub fn rules(&self) -> &BTreeMap<Vec<String>, Vec<String>> {
        &self.rules
    }

    /// Returns the outcome classification.
    #[must_use]
    pub fn status(&self) -> MiningStatus {
        self.status
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule was mined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up the inferred items for a hypothesis.
    #[must_use]
    pub fn inference(&self, hypothesis: &[&str]) -> Option<&[String]> {
        let key: Vec<String> = hypothesis.iter().map(|s| (*s).to_string()).collect();
        self.rules.get(&key).map(Vec::as_slice)
    }

    /// Iterates over (hypothesis, inference) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<String>, &Vec<String>)> {
        self.rules.iter()
    }

    /// Converts the mapping into a list of [`AssociationRule`]s.
    #[must_use]
    pub fn to_rules(&self) -> Vec<AssociationRule> {
        self.rules
            .iter()
            .map(|(hypothesis, inference)| AssociationRule {
                hypothesis: hypothesis.clone(),
                inference: inference.clone(),
            })
            .collect()
    }
}

/// Apriori miner for frequent itemsets and association rules.
///
/// Configured with a minimum support threshold and a minimum confidence
/// threshold; both filters are strict (`>`), so itemsets exactly at the
/// required support count and rules exactly at the confidence threshold are
/// excluded.
///
/// The miner holds configuration only. All per-run scratch (required
/// support count, support history) lives in the call, so repeated calls on
/// the same miner never leak state between runs.
///
/// # Example
///
/// ```
/// use reglas::data::TransactionTable;
/// use reglas::mining::AssociationRuleMiner;
///
/// let table = TransactionTable::from_rows(
///     &["I1", "I2", "I3", "I4"],
///     &[
///         &[true, true, true, false],
///         &[false, false, true, false],
///         &[true, false, true, true],
///         &[true, false, false, false],
///         &[true, false, false, true],
///     ],
/// ).unwrap();
///
/// let miner = AssociationRuleMiner::new(0.2, 0.5).unwrap();
/// let rules = miner.apriori(&table).unwrap();
/// assert_eq!(rules.inference(&["I4"]), Some(&["I1".to_string()][..]));
/// ```
#[derive(Debug, Clone)]
pub struct AssociationRuleMiner {
    min_support: Threshold,
    min_confidence: Threshold,
    max_level: Option<usize>,
}

impl AssociationRuleMiner {
    /// Creates a miner from support and confidence thresholds.
    ///
    /// Each threshold is either a fraction in [0, 1] (`f64`) or a
    /// percentage string such as `"20%"`.
    ///
    /// # Errors
    ///
    /// Returns [`ReglasError::InvalidThreshold`] if either threshold fails
    /// to normalize.
    pub fn new<S, C>(support: S, confidence: C) -> Result<Self>
    where
        S: TryInto<Threshold, Error = ReglasError>,
        C: TryInto<Threshold, Error = ReglasError>,
    {
        Ok(Self {
            min_support: support.try_into()?,
            min_confidence: confidence.try_into()?,
            max_level: None,
        })
    }

    /// Caps the itemset cardinality explored by the level loop.
    ///
    /// The loop is already bounded by the item universe size; the cap is a
    /// guard against candidate blow-up on wide, highly-supported tables.
    #[must_use]
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Returns the normalized minimum support fraction.
    #[must_use]
    pub fn min_support(&self) -> f64 {
        self.min_support.value()
    }

    /// Returns the normalized minimum confidence fraction.
    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence.value()
    }

    /// Mines association rules from a transaction table.
    ///
    /// Runs the level-by-level Apriori loop (count, filter by support,
    /// generate next candidates) until no itemset survives, takes the last
    /// non-empty level as the frequent itemset set, and derives rules from
    /// it against the recorded support history.
    ///
    /// An empty [`RuleSet`] is an ordinary outcome; its
    /// [`status`](RuleSet::status) distinguishes which stage came up empty.
    ///
    /// # Errors
    ///
    /// Currently infallible for a valid table; returns `Result` to keep the
    /// mining entry points uniform.
    pub fn apriori(&self, table: &TransactionTable) -> Result<RuleSet> {
        let (frequent, history) = self.frequent_levels(table);

        if frequent.is_empty() {
            info!("no itemset cleared the support threshold");
            return Ok(RuleSet::empty(MiningStatus::NoFrequentItemsets));
        }
        if frequent.keys().all(|itemset| itemset.len() == 1) {
            info!("only single items cleared the support threshold; nothing to mine rules from");
            return Ok(RuleSet::empty(MiningStatus::OnlySingletonItemsets));
        }

        let mined = rules::mine_rules(&frequent, &history, self.min_confidence.value())?;

        let names = table.item_names();
        let named = |indices: &[usize]| -> Vec<String> {
            indices.iter().map(|&i| names[i].to_string()).collect()
        };

        let mut out = BTreeMap::new();
        for (hypothesis, inference) in &mined {
            out.insert(named(hypothesis.items()), named(inference));
        }

        let status = if out.is_empty() {
            info!("no rule cleared the confidence threshold");
            MiningStatus::NoRulesAboveConfidence
        } else {
            MiningStatus::RulesFound
        };

        Ok(RuleSet { rules: out, status })
    }

    /// Returns the frequent itemsets of the terminal level, by item name.
    ///
    /// This is the same set `apriori` derives rules from: the last level at
    /// which at least one itemset cleared the support threshold.
    #[must_use]
    pub fn frequent_itemsets(&self, table: &TransactionTable) -> Vec<(Vec<String>, usize)> {
        let (frequent, _) = self.frequent_levels(table);
        let names = table.item_names();
        frequent
            .into_iter()
            .map(|(itemset, count)| {
                let named = itemset.items().iter().map(|&i| names[i].to_string()).collect();
                (named, count)
            })
            .collect()
    }

    /// FP-Growth is declared but not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`ReglasError::Unsupported`].
    pub fn fp_growth(&self, _table: &TransactionTable) -> Result<RuleSet> {
        Err(ReglasError::Unsupported {
            algorithm: "fp-growth".to_string(),
        })
    }

    /// The level loop: count, filter strictly above the required support
    /// count, record, generate the next candidates. Returns the terminal
    /// frequent set (last non-empty level) and the full history.
    fn frequent_levels(
        &self,
        table: &TransactionTable,
    ) -> (BTreeMap<Itemset, usize>, SupportHistory) {
        // Required count rounds down, so the strict filter needs count >= floor + 1.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let required = (self.min_support.value() * table.n_rows() as f64).floor() as usize;

        debug!(
            "apriori: support {:.1}%, confidence {:.1}%, required support count {required}",
            self.min_support.value() * 100.0,
            self.min_confidence.value() * 100.0,
        );

        let mut history = SupportHistory::new();
        let mut counts = support::count_singletons(table);
        let mut level = 1usize;

        loop {
            let filtered: BTreeMap<Itemset, usize> = counts
                .into_iter()
                .filter(|&(_, count)| count > required)
                .collect();
            debug!(
                "level {level}: {} itemsets above the support threshold",
                filtered.len()
            );
            history.push_level(filtered.clone());

            if filtered.is_empty() {
                break;
            }
            if self.max_level.is_some_and(|cap| level >= cap) {
                debug!("level cap {level} reached, stopping");
                break;
            }

            let survivors: Vec<Itemset> = filtered.into_keys().collect();
            let next = candidates::next_level(&survivors);
            counts = support::count_support(table, &next);
            level += 1;
        }

        let frequent = history.last_non_empty().cloned().unwrap_or_default();
        (frequent, history)
    }
}
