use std::collections::HashSet;

use der::Decode;
use log::{debug, warn};
use sha2::{Digest, Sha256};
use x509_cert::Certificate;

use crate::encode::{pem_encode, PemCertificate};
use crate::native::NativeTrustStore;
use crate::source::TrustAnchorSource;

/// The outcome of one export pass: the retained certificates in
/// first-seen order, plus counters for everything that was dropped on
/// the way. The counters are diagnostics only and never turn into
/// errors.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ExportResult {
    pub certificates: Vec<PemCertificate>,
    /// Entries that were not structurally valid DER X.509.
    pub skipped_invalid: usize,
    /// Entries whose DER bytes matched an earlier entry.
    pub skipped_duplicates: usize,
}

impl ExportResult {
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Flattens into the plain string list handed to host applications.
    pub fn into_strings(self) -> Vec<String> {
        self.certificates
            .into_iter()
            .map(PemCertificate::into_string)
            .collect()
    }
}

/// Transforms raw trust anchor bytes into PEM blocks.
///
/// Each buffer is kept only if it parses as a DER-encoded X.509
/// certificate (structure only, no signature or chain checks) and its
/// exact byte content has not been seen earlier in the sequence. The
/// surviving entries are PEM-encoded in input order, so the result is
/// identical across calls for the same input sequence.
///
/// Buffers that fail either check are skipped and counted; this
/// function has no error path.
pub fn export<I, B>(raw_certificates: I) -> ExportResult
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut result = ExportResult::default();
    let mut seen: HashSet<[u8; 32]> = HashSet::new();

    for raw in raw_certificates {
        let der = raw.as_ref();
        if let Err(err) = Certificate::from_der(der) {
            debug!("skipping malformed certificate entry: {err}");
            result.skipped_invalid += 1;
            continue;
        }
        let fingerprint: [u8; 32] = Sha256::digest(der).into();
        if !seen.insert(fingerprint) {
            debug!(
                "skipping duplicate certificate {}",
                hex::encode(&fingerprint[..8])
            );
            result.skipped_duplicates += 1;
            continue;
        }
        result.certificates.push(pem_encode(der));
    }

    debug!(
        "exported {} certificates ({} malformed, {} duplicates skipped)",
        result.len(),
        result.skipped_invalid,
        result.skipped_duplicates
    );
    result
}

/// Exports a trust store as PEM text.
///
/// The store itself is abstracted behind [`TrustAnchorSource`]; the
/// exporter snapshots it on every call and keeps no state in between,
/// so a single instance may be shared freely across threads.
pub struct TrustStoreExporter<S> {
    source: S,
}

impl TrustStoreExporter<NativeTrustStore> {
    /// An exporter over the operating system's own trust store.
    pub fn native() -> Self {
        Self::new(NativeTrustStore)
    }
}

impl<S> TrustStoreExporter<S>
where
    S: TrustAnchorSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs one export pass over the current store contents.
    ///
    /// A store that cannot be enumerated yields an empty result; the
    /// failure is logged but never surfaced, matching the caller
    /// contract of [`ca_certificates`](Self::ca_certificates).
    pub fn export(&self) -> ExportResult {
        match self.source.trust_anchors() {
            Ok(raw) => export(raw),
            Err(err) => {
                warn!("failed to enumerate trust anchors, returning empty list: {err}");
                ExportResult::default()
            }
        }
    }

    /// The host-facing operation: a best-effort, possibly empty list of
    /// PEM strings for the trust anchors currently in the store. Never
    /// fails and never panics; callers can rely on always receiving a
    /// list.
    pub fn ca_certificates(&self) -> Vec<String> {
        self.export().into_strings()
    }
}
