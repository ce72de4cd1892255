//! Reglas: association rule mining over boolean transaction tables.
//!
//! Reglas computes frequent itemsets with the Apriori algorithm and derives
//! association rules from them, parameterized by a minimum support
//! threshold and a minimum confidence threshold. Thresholds are accepted as
//! fractions in [0, 1] or as percentage strings such as `"20%"`.
//!
//! # Quick Start
//!
//! ```
//! use reglas::prelude::*;
//!
//! // Transactions (rows) over a fixed universe of items (columns).
//! let table = TransactionTable::from_rows(
//!     &["I1", "I2", "I3", "I4"],
//!     &[
//!         &[true, true, true, false],
//!         &[false, false, true, false],
//!         &[true, false, true, true],
//!         &[true, false, false, false],
//!         &[true, false, false, true],
//!     ],
//! ).unwrap();
//!
//! // Itemsets must appear in more than 20% of transactions; rules must
//! // hold with probability strictly above 50%.
//! let miner = AssociationRuleMiner::new(0.2, 0.5).unwrap();
//! let rules = miner.apriori(&table).unwrap();
//!
//! assert_eq!(rules.status(), MiningStatus::RulesFound);
//! assert_eq!(rules.inference(&["I4"]), Some(&["I1".to_string()][..]));
//! ```
//!
//! # Modules
//!
//! - [`data`]: [`TransactionTable`] of named boolean columns
//! - [`threshold`]: support/confidence threshold normalization
//! - [`mining`]: the Apriori driver, frequent-itemset lattice, and rule miner
//! - [`error`]: error types

pub mod data;
pub mod error;
pub mod mining;
pub mod prelude;
pub mod threshold;

pub use data::TransactionTable;
pub use error::{ReglasError, Result};
pub use mining::{AssociationRule, AssociationRuleMiner, MiningStatus, RuleSet};
pub use threshold::Threshold;
