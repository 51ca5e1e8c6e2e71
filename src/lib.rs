//! Export of operating system trust anchors as deterministic PEM text.
//!
//! The pipeline is a single pure pass over the anchors a
//! [`TrustAnchorSource`] hands out: each raw DER certificate is checked
//! for structural validity and deduplicated by content, then rendered as
//! a canonical PEM block in first-seen order. Failures never propagate
//! to the caller; the result is always a list, possibly empty.
//!
//! ```no_run
//! use trust_export::TrustStoreExporter;
//!
//! let certificates = TrustStoreExporter::native().ca_certificates();
//! for block in &certificates {
//!     print!("{block}");
//! }
//! ```

pub mod bundle;
pub mod encode;
pub mod export;
pub mod native;
pub mod source;

pub use bundle::PemBundleStore;
pub use encode::{pem_encode, PemCertificate};
pub use export::{export, ExportResult, TrustStoreExporter};
pub use native::NativeTrustStore;
pub use source::{RawCertificate, StoreError, StoreResult, TrustAnchorSource};
