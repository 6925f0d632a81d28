//! Process-wide catalog with free-function queries.
//!
//! The shared catalog is built once. Call [`init`] at startup to choose the
//! data source explicitly; otherwise the first query builds it from
//! [`DirSource::from_env`]. Code that can pass a [`Catalog`] around should
//! prefer doing so.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::{Bank, Branch};
use crate::source::{DataSource, DirSource};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Build the shared catalog from `source`.
///
/// Fails with [`Error::AlreadyInitialized`] if the shared catalog already
/// exists, including when an earlier query initialized it lazily.
pub fn init<S: DataSource + ?Sized>(source: &S) -> Result<&'static Catalog> {
    if CATALOG.get().is_some() {
        return Err(Error::AlreadyInitialized);
    }
    let catalog = Catalog::from_source(source)?;
    CATALOG
        .set(catalog)
        .map_err(|_rejected| Error::AlreadyInitialized)?;
    CATALOG.get().ok_or(Error::AlreadyInitialized)
}

#[must_use]
pub fn is_initialized() -> bool {
    CATALOG.get().is_some()
}

/// The shared catalog, building it from the environment on first use.
///
/// # Panics
///
/// Panics when the lazy build fails: the shared catalog is a startup
/// requirement, not a recoverable condition.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let source = DirSource::from_env();
        match Catalog::from_source(&source) {
            Ok(catalog) => catalog,
            Err(e) => panic!(
                "failed to load zengin catalog from {}: {e}",
                source.root().display()
            ),
        }
    })
}

pub fn get_bank(code: &str) -> Result<Arc<Bank>> {
    catalog().get_bank(code)
}

pub fn get_branch(bank_code: &str, branch_code: &str) -> Result<&'static Branch> {
    catalog().get_branch(bank_code, branch_code)
}

pub fn get_all_banks() -> BTreeMap<String, Arc<Bank>> {
    catalog().get_all_banks()
}

pub fn get_all_branches(bank_code: &str) -> Result<&'static BTreeMap<String, Branch>> {
    catalog().get_all_branches(bank_code)
}

pub fn find_banks_by_name(pattern: &str) -> Result<Vec<Arc<Bank>>> {
    catalog().find_banks_by_name(pattern)
}

pub fn find_branches_by_name(bank_code: &str, pattern: &str) -> Result<Vec<&'static Branch>> {
    catalog().find_branches_by_name(bank_code, pattern)
}
