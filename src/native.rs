use log::warn;

use crate::source::{RawCertificate, StoreError, StoreResult, TrustAnchorSource};

/// The trust anchors designated by the operating system: the Windows
/// certificate store, the macOS keychain, or the distribution's CA
/// bundle on Linux and the BSDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeTrustStore;

impl TrustAnchorSource for NativeTrustStore {
    fn trust_anchors(&self) -> StoreResult<Vec<RawCertificate>> {
        let loaded = rustls_native_certs::load_native_certs();

        // Unreadable entries are reported alongside the readable ones;
        // a partially readable store still counts as a snapshot.
        for err in &loaded.errors {
            warn!("trust store entry skipped: {err}");
        }
        if loaded.certs.is_empty() && !loaded.errors.is_empty() {
            let detail = loaded
                .errors
                .iter()
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StoreError::Unavailable(detail));
        }

        Ok(loaded
            .certs
            .into_iter()
            .map(|cert| cert.as_ref().to_vec())
            .collect())
    }
}

#[cfg(test)]
mod test {
    use crate::export::TrustStoreExporter;

    // Exercises the real platform store. The host may legitimately have
    // no readable anchors, so only the caller contract is asserted.
    #[test]
    fn native_export_upholds_the_list_contract() {
        let certificates = TrustStoreExporter::native().ca_certificates();
        for pem_text in &certificates {
            assert!(pem_text.starts_with("-----BEGIN CERTIFICATE-----\n"));
            assert!(pem_text.ends_with("-----END CERTIFICATE-----\n"));
        }
    }
}
