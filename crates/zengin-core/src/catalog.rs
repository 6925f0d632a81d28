//! The loaded dataset and its queries.

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::Regex;

use crate::builder;
use crate::error::{Error, Result};
use crate::model::{Bank, Branch};
use crate::source::{DataSource, DirSource};

/// Immutable, fully linked set of banks.
///
/// A catalog is never modified after it is built, so it can be shared
/// between threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    banks: BTreeMap<String, Arc<Bank>>,
}

impl Catalog {
    /// Build a fresh catalog from the directory named by `ZENGIN_DATA_DIR`
    /// (default `./source-data`).
    pub fn new() -> Result<Self> {
        Self::from_source(&DirSource::from_env())
    }

    pub fn from_source<S: DataSource + ?Sized>(source: &S) -> Result<Self> {
        builder::build(source)
    }

    pub(crate) fn from_banks(banks: BTreeMap<String, Arc<Bank>>) -> Self {
        Self { banks }
    }

    /// Number of banks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Total number of branches across all banks.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.banks.values().map(|bank| bank.branches.len()).sum()
    }

    pub fn bank_codes(&self) -> impl Iterator<Item = &str> {
        self.banks.keys().map(String::as_str)
    }

    pub fn banks(&self) -> impl Iterator<Item = &Arc<Bank>> {
        self.banks.values()
    }

    pub fn get_bank(&self, code: &str) -> Result<Arc<Bank>> {
        self.bank(code).map(Arc::clone)
    }

    pub fn get_branch(&self, bank_code: &str, branch_code: &str) -> Result<&Branch> {
        self.bank(bank_code)?
            .branch(branch_code)
            .ok_or_else(|| Error::BranchNotFound {
                bank_code: bank_code.to_string(),
                branch_code: branch_code.to_string(),
            })
    }

    /// Every bank, keyed by code. The map is the caller's own; the banks in
    /// it are shared and immutable.
    #[must_use]
    pub fn get_all_banks(&self) -> BTreeMap<String, Arc<Bank>> {
        self.banks.clone()
    }

    pub fn get_all_branches(&self, bank_code: &str) -> Result<&BTreeMap<String, Branch>> {
        self.bank(bank_code).map(|bank| &bank.branches)
    }

    /// Banks whose `name` matches the regular expression `pattern` anywhere.
    ///
    /// No match yields an empty `Vec`; only an invalid pattern is an error.
    pub fn find_banks_by_name(&self, pattern: &str) -> Result<Vec<Arc<Bank>>> {
        let re = Regex::new(pattern)?;
        Ok(self
            .banks
            .values()
            .filter(|bank| re.is_match(&bank.name))
            .map(Arc::clone)
            .collect())
    }

    /// Branches of one bank whose `name` matches `pattern`.
    ///
    /// The bank is looked up before the pattern is compiled, so an unknown
    /// bank reports [`Error::BankNotFound`] even for a bad pattern.
    pub fn find_branches_by_name(&self, bank_code: &str, pattern: &str) -> Result<Vec<&Branch>> {
        let bank = self.bank(bank_code)?;
        let re = Regex::new(pattern)?;
        Ok(bank
            .branches
            .values()
            .filter(|branch| re.is_match(&branch.name))
            .collect())
    }

    fn bank(&self, code: &str) -> Result<&Arc<Bank>> {
        self.banks.get(code).ok_or_else(|| Error::BankNotFound {
            code: code.to_string(),
        })
    }
}
