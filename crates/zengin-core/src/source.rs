//! Where the raw collections come from.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the root of a `source-data` checkout.
pub const DATA_DIR_ENV: &str = "ZENGIN_DATA_DIR";

/// Root used when [`DATA_DIR_ENV`] is unset.
pub const DEFAULT_DATA_DIR: &str = "source-data";

/// Supplies the serialized bank collection and per-bank branch collections.
///
/// `read_branch_collection` must fail with [`io::ErrorKind::NotFound`] when
/// a bank simply has no branch data; any other error aborts the build.
pub trait DataSource {
    fn read_bank_collection(&self) -> io::Result<Vec<u8>>;

    fn read_branch_collection(&self, bank_code: &str) -> io::Result<Vec<u8>>;

    /// Label for the bank collection in errors and logs.
    fn bank_resource(&self) -> String {
        "banks".to_string()
    }

    /// Label for one bank's branch collection in errors and logs.
    fn branch_resource(&self, bank_code: &str) -> String {
        format!("branches/{bank_code}")
    }
}

/// Reads the zengin-code `source-data` layout from disk:
///
/// ```text
/// <root>/data/banks.json
/// <root>/data/branches/<bank_code>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root taken from `ZENGIN_DATA_DIR`, falling back to `./source-data`.
    pub fn from_env() -> Self {
        let root = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(root)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn banks_path(&self) -> PathBuf {
        self.root.join("data").join("banks.json")
    }

    /// Path of a bank's branch file, or `None` when the code cannot name a
    /// file inside the branches directory.
    #[must_use]
    pub fn branches_path(&self, bank_code: &str) -> Option<PathBuf> {
        if bank_code.is_empty() || !bank_code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(
            self.root
                .join("data")
                .join("branches")
                .join(format!("{bank_code}.json")),
        )
    }
}

impl DataSource for DirSource {
    fn read_bank_collection(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.banks_path())
    }

    fn read_branch_collection(&self, bank_code: &str) -> io::Result<Vec<u8>> {
        match self.branches_path(bank_code) {
            Some(path) => std::fs::read(path),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no branch file for bank code {bank_code:?}"),
            )),
        }
    }

    fn bank_resource(&self) -> String {
        self.banks_path().display().to_string()
    }

    fn branch_resource(&self, bank_code: &str) -> String {
        self.branches_path(bank_code)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| format!("branches/{bank_code}"))
    }
}

/// Collections held in memory, for tests and for callers that bundle or
/// fetch the dataset themselves.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    banks: Option<Vec<u8>>,
    branches: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_banks(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.banks = Some(bytes.into());
        self
    }

    #[must_use]
    pub fn with_branches(mut self, bank_code: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.branches.insert(bank_code.into(), bytes.into());
        self
    }
}

impl DataSource for MemorySource {
    fn read_bank_collection(&self) -> io::Result<Vec<u8>> {
        self.banks
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no bank collection"))
    }

    fn read_branch_collection(&self, bank_code: &str) -> io::Result<Vec<u8>> {
        self.branches.get(bank_code).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no branch collection for bank {bank_code}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_source_paths() {
        let source = DirSource::new("/data/zengin");

        assert_eq!(source.root(), Path::new("/data/zengin"));
        assert_eq!(
            source.banks_path(),
            PathBuf::from("/data/zengin/data/banks.json")
        );
        assert_eq!(
            source.branches_path("0001"),
            Some(PathBuf::from("/data/zengin/data/branches/0001.json"))
        );
    }

    #[test]
    fn test_dir_source_rejects_unsafe_codes() {
        let source = DirSource::new("/data/zengin");

        assert_eq!(source.branches_path(""), None);
        assert_eq!(source.branches_path("../banks"), None);
        assert_eq!(source.branches_path("00/01"), None);

        let err = source.read_branch_collection("../banks").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dir_source_reads_files() {
        let temp_dir = TempDir::new().unwrap();
        let branches_dir = temp_dir.path().join("data").join("branches");
        std::fs::create_dir_all(&branches_dir).unwrap();
        std::fs::write(temp_dir.path().join("data").join("banks.json"), b"{}").unwrap();
        std::fs::write(branches_dir.join("0001.json"), b"{\"x\": 1}").unwrap();

        let source = DirSource::new(temp_dir.path());
        assert_eq!(source.read_bank_collection().unwrap(), b"{}");
        assert_eq!(source.read_branch_collection("0001").unwrap(), b"{\"x\": 1}");

        let missing = source.read_branch_collection("0005").unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with_banks("{}")
            .with_branches("0001", "{}");

        assert_eq!(source.read_bank_collection().unwrap(), b"{}");
        assert_eq!(source.read_branch_collection("0001").unwrap(), b"{}");
        assert_eq!(
            source.read_branch_collection("0005").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(source.branch_resource("0005"), "branches/0005");
    }

    #[test]
    fn test_empty_memory_source_has_no_banks() {
        let err = MemorySource::new().read_bank_collection().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
