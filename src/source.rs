use std::io;

use thiserror::Error;

/// A single DER-encoded X.509 certificate as handed over by a trust
/// store. The bytes are opaque to the source; structural checks happen
/// later in the export pipeline.
pub type RawCertificate = Vec<u8>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while enumerating a backing trust store. None of these
/// ever reach the callers of [`TrustStoreExporter`]; the exporter logs
/// them and falls back to an empty certificate list.
///
/// [`TrustStoreExporter`]: crate::export::TrustStoreExporter
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform store could not be opened or produced nothing
    /// but errors.
    #[error("trust store unavailable: {0}")]
    Unavailable(String),

    /// Reading a bundle file from disk failed.
    #[error("failed to read trust bundle: {0}")]
    Io(#[from] io::Error),

    /// A bundle file was not parsable as a stack of PEM blocks.
    #[error("malformed trust bundle: {0}")]
    MalformedBundle(#[from] pem::PemError),
}

/// A provider of trust anchors. One implementation exists per backing
/// store; the exporter takes whichever implementation the host injects
/// and never caches the result, so every call observes the store as it
/// currently is.
pub trait TrustAnchorSource {
    /// Takes a snapshot of the store, returning every anchor as raw
    /// DER bytes. Entries are returned in store order and may contain
    /// duplicates or malformed data; filtering is the exporter's job.
    fn trust_anchors(&self) -> StoreResult<Vec<RawCertificate>>;
}
