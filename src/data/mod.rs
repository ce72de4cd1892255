//! Transaction table module for named boolean columns.
//!
//! Provides a minimal transaction container for mining workflows. Heavy
//! data wrangling should be delegated to an external loader; the miner only
//! needs named boolean presence flags.

use crate::error::{ReglasError, Result};

/// A table of transactions (rows) versus items (named boolean columns).
///
/// The column universe is fixed for the table's lifetime and every cell is
/// a presence flag. Rows are identified by index.
///
/// # Examples
///
/// ```
/// use reglas::data::TransactionTable;
///
/// let table = TransactionTable::from_rows(
///     &["milk", "bread"],
///     &[&[true, true], &[true, false], &[false, true]],
/// ).expect("valid table");
/// assert_eq!(table.shape(), (3, 2));
/// assert_eq!(table.column("milk").unwrap(), &[true, true, false]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTable {
    columns: Vec<(String, Vec<bool>)>,
    n_rows: usize,
}

impl TransactionTable {
    /// Creates a new table from named boolean columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, columns have different
    /// lengths, or names are empty or duplicated.
    pub fn new(columns: Vec<(String, Vec<bool>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("TransactionTable must have at least one item column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All item columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Item names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate item names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Creates a table from transaction rows over a fixed item universe.
    ///
    /// # Errors
    ///
    /// Returns an error if any row length differs from the number of item
    /// names, or if the names fail [`TransactionTable::new`] validation.
    pub fn from_rows(names: &[&str], rows: &[&[bool]]) -> Result<Self> {
        for row in rows {
            if row.len() != names.len() {
                return Err("Every transaction row must cover the full item universe".into());
            }
        }

        let columns = names
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let col: Vec<bool> = rows.iter().map(|row| row[j]).collect();
                ((*name).to_string(), col)
            })
            .collect();

        Self::new(columns)
    }

    /// Returns the shape as (`n_rows`, `n_items`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of transactions.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of items in the universe.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.columns.len()
    }

    /// Returns the item names in column order.
    #[must_use]
    pub fn item_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a reference to an item column by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the item doesn't exist.
    pub fn column(&self, name: &str) -> Result<&[bool]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| "Item not found".into())
    }

    /// Returns an item column by index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_items()`.
    #[must_use]
    pub fn item(&self, index: usize) -> &[bool] {
        &self.columns[index].1
    }

    /// Returns a transaction row as presence flags in column order.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds.
    pub fn row(&self, idx: usize) -> Result<Vec<bool>> {
        if idx >= self.n_rows {
            return Err(ReglasError::index_out_of_bounds(idx, self.n_rows));
        }

        Ok(self.columns.iter().map(|(_, col)| col[idx]).collect())
    }

    /// Returns an iterator over columns as (name, flags) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}
