//! Loading a [`Catalog`] from a [`DataSource`].

use std::collections::BTreeMap;
use std::io;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::Bank;
use crate::record::{decode_collection, BranchRecord};
use crate::source::DataSource;

/// Read, decode and link the whole dataset.
///
/// The build is all-or-nothing: an unreadable or malformed bank collection,
/// or a branch collection that exists but does not decode, fails the whole
/// build. A bank whose branch collection is absent is kept with no
/// branches. Every record must be keyed by its own `code`.
pub fn build<S: DataSource + ?Sized>(source: &S) -> Result<Catalog> {
    let resource = source.bank_resource();
    let bytes = source
        .read_bank_collection()
        .map_err(|e| Error::SourceUnavailable {
            resource: resource.clone(),
            source: e,
        })?;
    let records = decode_collection(&bytes, &resource)?;

    let mut banks = BTreeMap::new();
    let mut without_branches = 0usize;

    for (code, record) in records {
        check_key(&resource, &code, &record.code)?;

        let branches = match load_branches(source, &code)? {
            Some(branches) => branches,
            None => {
                without_branches += 1;
                BTreeMap::new()
            }
        };

        banks.insert(code, Bank::with_branches(record, branches));
    }

    let catalog = Catalog::from_banks(banks);
    log::info!(
        "Loaded {} banks with {} branches ({} banks without branch data)",
        catalog.len(),
        catalog.branch_count(),
        without_branches
    );

    Ok(catalog)
}

/// `Ok(None)` when the source has no branch collection for the bank.
fn load_branches<S: DataSource + ?Sized>(
    source: &S,
    bank_code: &str,
) -> Result<Option<BTreeMap<String, BranchRecord>>> {
    let resource = source.branch_resource(bank_code);

    let bytes = match source.read_branch_collection(bank_code) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No branch data for bank {}", bank_code);
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::SourceUnavailable {
                resource,
                source: e,
            })
        }
    };

    let branches = decode_collection(&bytes, &resource)?;
    for (code, branch) in &branches {
        check_key(&resource, code, &branch.code)?;
    }

    Ok(Some(branches))
}

fn check_key(resource: &str, key: &str, code: &str) -> Result<()> {
    if key == code {
        return Ok(());
    }
    log::error!("Record keyed {} in {} carries code {}", key, resource, code);
    Err(Error::InconsistentData {
        resource: resource.to_string(),
        key: key.to_string(),
        code: code.to_string(),
    })
}
