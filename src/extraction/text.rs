use super::ParseError;

/// Plain text uploads are decoded as strict UTF-8.
pub fn extract(bytes: &[u8]) -> Result<String, ParseError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
