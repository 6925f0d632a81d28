//! Decoding of raw zengin-code collections.
//!
//! Both `banks.json` and every `branches/<bank>.json` document share one
//! shape: a JSON object mapping a code to a record with the string fields
//! `code`, `name`, `kana`, `hira` and `roma`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One serialized bank or branch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    pub name: String,
    pub kana: String,
    pub hira: String,
    pub roma: String,
}

pub type BankRecord = Record;
pub type BranchRecord = Record;

/// Decode a collection document into a map keyed exactly as the document
/// is keyed.
///
/// When a key repeats within one document the last entry wins. `resource`
/// only labels the error.
pub fn decode_collection(bytes: &[u8], resource: &str) -> Result<BTreeMap<String, Record>> {
    serde_json::from_slice(bytes).map_err(|source| Error::MalformedData {
        resource: resource.to_string(),
        source,
    })
}
