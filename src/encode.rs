//! Deterministic DER to PEM conversion.

use std::fmt;

use base64::{engine::general_purpose, Engine as _};

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// RFC 7468 line width for the base64 body.
const LINE_WIDTH: usize = 64;

/// A complete PEM block for one certificate, including the BEGIN/END
/// marker lines and the trailing newline.
#[derive(Debug, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PemCertificate(pub String);

impl PemCertificate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PemCertificate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PemCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes DER bytes into a PEM certificate block. The output is a pure
/// function of the input bytes: standard (non-URL, padded) base64, split
/// into 64-character lines, each line ending in a single `\n`, with a
/// final newline after the END marker.
///
/// No validation happens here; callers are expected to have checked the
/// bytes already.
pub fn pem_encode(der: &[u8]) -> PemCertificate {
    let body = general_purpose::STANDARD.encode(der);
    let mut out = String::with_capacity(
        PEM_BEGIN.len() + PEM_END.len() + body.len() + body.len() / LINE_WIDTH + 4,
    );
    out.push_str(PEM_BEGIN);
    out.push('\n');
    append_wrapped(&body, &mut out);
    out.push_str(PEM_END);
    out.push('\n');
    PemCertificate(out)
}

/// Appends `body` split into LINE_WIDTH-character lines. The body is
/// base64 and therefore ASCII, so splitting on byte positions is safe.
fn append_wrapped(body: &str, out: &mut String) {
    let mut rest = body;
    while rest.len() > LINE_WIDTH {
        let (line, tail) = rest.split_at(LINE_WIDTH);
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    if !rest.is_empty() {
        out.push_str(rest);
        out.push('\n');
    }
}

#[cfg(test)]
mod test {
    use super::{append_wrapped, pem_encode};

    #[test]
    fn wraps_130_chars_as_two_full_lines_and_a_tail() {
        let body = "A".repeat(130);
        let mut out = String::new();
        append_wrapped(&body, &mut out);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 64);
        assert_eq!(lines[1].len(), 64);
        assert_eq!(lines[2].len(), 2);
    }

    #[test]
    fn exact_block_for_known_bytes() {
        let block = pem_encode(&[0x01, 0x02, 0x03]);
        assert_eq!(
            block.as_str(),
            "-----BEGIN CERTIFICATE-----\nAQID\n-----END CERTIFICATE-----\n"
        );
    }

    #[test]
    fn body_lines_are_wrapped_and_round_trip() {
        // 97 bytes encode to 132 base64 characters: 64 + 64 + 4.
        let der = vec![0xABu8; 97];
        let block = pem_encode(&der);

        let lines: Vec<&str> = block.as_str().lines().collect();
        assert_eq!(lines.first(), Some(&"-----BEGIN CERTIFICATE-----"));
        assert_eq!(lines.last(), Some(&"-----END CERTIFICATE-----"));
        let body = &lines[1..lines.len() - 1];
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].len(), 64);
        assert_eq!(body[1].len(), 64);
        assert_eq!(body[2].len(), 4);
        assert!(block.as_str().ends_with("-----END CERTIFICATE-----\n"));

        let parsed = pem::parse(block.as_str()).expect("produced PEM must parse");
        assert_eq!(parsed.tag, "CERTIFICATE");
        assert_eq!(parsed.contents, der);
    }

    #[test]
    fn encoding_is_deterministic() {
        let der = vec![0x30u8, 0x82, 0x01, 0x0A, 0xFF, 0x00];
        assert_eq!(pem_encode(&der), pem_encode(&der));
    }
}
