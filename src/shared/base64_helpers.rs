//! Base64 codec
//!
//! Thin wrapper over the standard, padded base64 alphabet. Every caller that
//! needs to know whether a string "is base64" goes through [`decode`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode bytes with the standard alphabet and `=` padding. Never fails.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Append the encoding of `data` to `out`
///
/// Appending the encodings of consecutive slices equals encoding their
/// concatenation as long as every slice but the last is a multiple of 3 bytes.
pub fn encode_into(data: &[u8], out: &mut String) {
    STANDARD.encode_string(data, out);
}

/// Decode a standard, padded base64 string
///
/// Rejects characters outside the alphabet (whitespace included) and
/// incorrect padding. An empty string decodes to an empty buffer; callers
/// treat that as "no content yet" rather than a failure.
///
/// # Example
/// ```
/// use fb64::shared::base64_helpers::decode;
/// assert_eq!(decode("aGk=").unwrap(), b"hi");
/// assert!(decode("").unwrap().is_empty());
/// assert!(decode("not-base64!!").is_err());
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(input)
}

/// Length of the padded encoding of `len` input bytes
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}
