//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use reglas::prelude::*;
//! ```

pub use crate::data::TransactionTable;
pub use crate::error::{ReglasError, Result};
pub use crate::mining::{
    AssociationRule, AssociationRuleMiner, Itemset, MiningStatus, RuleSet, SupportHistory,
};
pub use crate::threshold::Threshold;
