//! Response body decoding: charset from `Content-Type`, UTF-8 otherwise.

use encoding_rs::{Encoding, UTF_8};

/// Extracts the `charset` parameter of a `Content-Type` value and resolves it
/// to a known encoding (WHATWG labels, case-insensitive).
pub(crate) fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let label = value.trim().trim_matches(|c| c == '"' || c == '\'');
        Encoding::for_label(label.as_bytes())
    })
}

/// Decodes a body to a `String`. A BOM wins over the header charset; invalid
/// sequences become U+FFFD rather than failing.
pub(crate) fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "body contained malformed sequences");
    }
    text.into_owned()
}
