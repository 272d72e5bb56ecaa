// ABOUTME: Input normalization for markup handed over by fetchers and proxies.
// ABOUTME: Unwraps JSON proxy envelopes and decodes raw bytes using charset hints or detection.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use serde_json::Value;

/// Envelope fields that carry the page markup, checked in order.
const ENVELOPE_FIELDS: &[&str] = &["contents", "html"];

/// Return the HTML inside a JSON proxy envelope, or the input unchanged.
///
/// Some fetch proxies answer with `{"contents": "<html>..."}` or
/// `{"html": "..."}` instead of the page itself. Anything that is not a
/// JSON object with one of those string fields is passed through.
pub fn unwrap_envelope(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_start();
    if !trimmed.starts_with('{') {
        return Cow::Borrowed(input);
    }

    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) else {
        return Cow::Borrowed(input);
    };

    ENVELOPE_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(Value::as_str))
        .map(|html| Cow::Owned(html.to_string()))
        .unwrap_or(Cow::Borrowed(input))
}

/// Decode a response body to a string.
///
/// A `charset=` parameter in `content_type` wins when it names a known
/// encoding; otherwise the encoding is sniffed from the bytes.
pub fn decode_html_bytes(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| sniff_encoding(body));
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

fn sniff_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}

/// The `charset` parameter of a media type, unquoted.
///
/// Parameter names are matched case-insensitively and may be padded with
/// spaces, as in `text/html; Charset = "utf-8"`.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
            .filter(|value| !value.is_empty())
    })
}
