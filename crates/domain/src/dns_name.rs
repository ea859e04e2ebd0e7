//! DNS wire-format names (RFC 1035 §3.1) as carried in `resolve(bytes,bytes)`.
//!
//! ```text
//! 3 f o o 3 e t h 0   ->  "foo.eth"
//! ```

use crate::DomainError;

const MAX_LABEL_LEN: usize = 63;

/// Decode a length-prefixed, zero-terminated name into its dotted form.
///
/// The buffer is untrusted: every length byte is bounds-checked and a
/// missing terminator is an error rather than a short read.
pub fn decode_dns_name(wire: &[u8]) -> Result<String, DomainError> {
    let mut labels: Vec<&str> = Vec::new();
    let mut idx = 0usize;

    loop {
        let len = *wire.get(idx).ok_or_else(|| {
            DomainError::MalformedName(format!("missing terminator at offset {}", idx))
        })? as usize;

        if len == 0 {
            break;
        }

        let start = idx + 1;
        let end = start + len;
        let bytes = wire.get(start..end).ok_or_else(|| {
            DomainError::MalformedName(format!(
                "label of length {} at offset {} overruns {} byte buffer",
                len,
                idx,
                wire.len()
            ))
        })?;

        let label = std::str::from_utf8(bytes)
            .map_err(|e| DomainError::MalformedName(format!("label is not UTF-8: {}", e)))?;
        labels.push(label);
        idx = end;
    }

    Ok(labels.join("."))
}

/// Encode a dotted name into DNS wire format.
pub fn encode_dns_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(name.len() + 2);
    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::MalformedName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::MalformedName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
    }
    out.push(0);
    Ok(out)
}
