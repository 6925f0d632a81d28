use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use serde::Serialize;

use crate::model::Branch;
use crate::record::{BankRecord, BranchRecord};

/// A financial institution and the branches it owns.
///
/// Banks are only handed out behind an [`Arc`], so a loaded bank can never
/// be modified.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Bank {
    /// Four-digit institution code, e.g. `"0001"`.
    pub code: String,
    pub name: String,
    pub kana: String,
    pub hira: String,
    pub roma: String,

    /// Branches keyed by branch code. Empty when the institution publishes
    /// no branch data.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub branches: BTreeMap<String, Branch>,
}

impl Bank {
    /// Assemble a bank from its record and its decoded branch records.
    ///
    /// Every branch receives a back-reference to the returned allocation.
    #[must_use]
    pub fn with_branches(
        record: BankRecord,
        branches: BTreeMap<String, BranchRecord>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|bank| {
            let branches = branches
                .into_iter()
                .map(|(key, branch)| (key, Branch::new(branch, &record.code, Weak::clone(bank))))
                .collect();

            Self {
                code: record.code,
                name: record.name,
                kana: record.kana,
                hira: record.hira,
                roma: record.roma,
                branches,
            }
        })
    }

    /// Build a bank with no branches.
    #[must_use]
    pub fn new(record: BankRecord) -> Arc<Self> {
        Self::with_branches(record, BTreeMap::new())
    }

    #[must_use]
    pub fn branch(&self, code: &str) -> Option<&Branch> {
        self.branches.get(code)
    }

    #[must_use]
    pub fn has_branches(&self) -> bool {
        !self.branches.is_empty()
    }
}
