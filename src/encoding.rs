use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::Error;

pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes())
}

/// Decode markup bytes to text, sniffing the charset from a BOM, an XML
/// declaration or a `<meta>` declaration.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<str>, Error> {
    let encoding = encoding(data, None).ok_or(Error::UnknownEncoding)?;
    let (text, used, had_errors) = encoding.decode(data);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    Ok(text)
}
