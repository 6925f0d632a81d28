use std::fmt;
use std::sync::{Arc, Weak};

use serde::Serialize;

use crate::model::Bank;
use crate::record::BranchRecord;

/// A branch of a [`Bank`].
///
/// The branch code is unique only within its bank. The link back to the
/// owning bank is a [`Weak`] handle: the bank owns its branches, never the
/// other way round, and the link is not serialized.
#[derive(Clone, Serialize)]
pub struct Branch {
    /// Three-digit branch code, e.g. `"001"`.
    pub code: String,
    pub name: String,
    pub kana: String,
    pub hira: String,
    pub roma: String,

    #[serde(skip)]
    bank_code: String,
    #[serde(skip)]
    bank: Weak<Bank>,
}

impl Branch {
    pub(crate) fn new(record: BranchRecord, bank_code: &str, bank: Weak<Bank>) -> Self {
        Self {
            code: record.code,
            name: record.name,
            kana: record.kana,
            hira: record.hira,
            roma: record.roma,
            bank_code: bank_code.to_string(),
            bank,
        }
    }

    /// Code of the owning bank.
    #[must_use]
    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    /// The owning bank, or `None` once its catalog has been dropped.
    #[must_use]
    pub fn bank(&self) -> Option<Arc<Bank>> {
        self.bank.upgrade()
    }
}

// Equality and Debug cover field values only; following the back-reference
// would recurse into the bank.
impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.kana == other.kana
            && self.hira == other.hira
            && self.roma == other.roma
            && self.bank_code == other.bank_code
    }
}

impl Eq for Branch {}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("kana", &self.kana)
            .field("hira", &self.hira)
            .field("roma", &self.roma)
            .field("bank_code", &self.bank_code)
            .finish_non_exhaustive()
    }
}
