//! Transport encoding for rendered artifacts.
//!
//! Every file-content renderer returns its payload as standard, padded,
//! unwrapped base64 so it can be embedded verbatim in a larger document.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::error::RenderError;

/// Base64-encode a rendered text payload.
#[must_use]
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a payload produced by [`encode`] back into its text.
///
/// # Errors
///
/// Returns an error if the input is not valid base64 or not UTF-8.
pub fn decode(encoded: &str) -> Result<String, RenderError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    String::from_utf8(bytes).map_err(|e| RenderError::NotUtf8(e.to_string()))
}
