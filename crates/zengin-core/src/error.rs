use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A collection could not be read from the data source.
    #[error("source unavailable: {resource}: {source}")]
    SourceUnavailable {
        resource: String,
        source: std::io::Error,
    },

    /// A collection was read but is not a mapping of code to record.
    #[error("malformed data in {resource}: {source}")]
    MalformedData {
        resource: String,
        source: serde_json::Error,
    },

    /// A record is filed under a key other than its own `code`.
    #[error("inconsistent data in {resource}: record keyed {key} has code {code}")]
    InconsistentData {
        resource: String,
        key: String,
        code: String,
    },

    #[error("bank not found: {code}")]
    BankNotFound { code: String },

    #[error("branch not found: {branch_code} in bank {bank_code}")]
    BranchNotFound {
        bank_code: String,
        branch_code: String,
    },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("shared catalog is already initialized")]
    AlreadyInitialized,
}

impl Error {
    /// Returns `true` when a query referenced a bank or branch code that is
    /// not in the catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BankNotFound { .. } | Self::BranchNotFound { .. })
    }

    /// Returns `true` for errors that abort catalog construction.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. }
                | Self::MalformedData { .. }
                | Self::InconsistentData { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
