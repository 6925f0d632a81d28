//! Core catalog for zengin bank and branch codes.
//!
//! This crate loads the zengin-code dataset (one collection of banks plus
//! one branch collection per bank) from a [`DataSource`], links every
//! branch back to its owning bank, and answers point lookups and name
//! searches over the resulting immutable [`Catalog`].
//!
//! ```no_run
//! use zengin_core::{Catalog, DirSource};
//!
//! # fn main() -> zengin_core::Result<()> {
//! let catalog = Catalog::from_source(&DirSource::new("source-data"))?;
//! let branch = catalog.get_branch("0001", "001")?;
//! println!("{} / {}", branch.bank_code(), branch.name);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod catalog;
pub mod error;
pub mod model;
pub mod record;
pub mod shared;
pub mod source;

pub use builder::build;
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Bank, Branch};
pub use record::{BankRecord, BranchRecord, Record};
pub use source::{DataSource, DirSource, MemorySource};
