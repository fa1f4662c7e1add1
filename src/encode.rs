//! Percent-encoding and URL helpers shared by the signer and the endpoint builders.

use std::str::Utf8Error;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::form_urlencoded;

use crate::Result;

/// Everything but the RFC 3986 unreserved characters `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
const RFC3986_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string the way OAuth 1.0a expects (space becomes `%20`, never `+`).
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986_RESERVED).to_string()
}

/// Reverse [`percent_encode`].
///
/// Fails when the decoded bytes are not valid UTF-8.
pub fn percent_decode(input: &str) -> std::result::Result<String, Utf8Error> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}

/// Append parameters to a url or path, encoded with [`percent_encode`].
///
/// The separator is `?` unless the url already carries a query. Nothing is
/// appended when `params` serializes to an empty string.
pub fn add_params<T>(url: &str, params: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    // serde_urlencoded writes spaces as `+`; re-encode each pair as RFC 3986
    let form = serde_urlencoded::to_string(params)?;
    let query = form_urlencoded::parse(form.as_bytes())
        .map(|(key, value)| format!("{}={}", percent_encode(&key), percent_encode(&value)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        return Ok(url.to_string());
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", url, separator, query))
}

/// Strip the disambiguation suffix Discogs adds to artist names: `"Artist (2)"` -> `"Artist"`.
pub fn strip_variation(name: &str) -> &str {
    let stripped = name
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once(" ("))
        .filter(|(_, digits)| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    match stripped {
        Some((base, _)) => base,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn encode_reserved_characters() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("-._~"), "-._~");
        assert_eq!(percent_encode("https://cb"), "https%3A%2F%2Fcb");
        assert_eq!(percent_encode("+!*'()"), "%2B%21%2A%27%28%29");
    }

    #[test]
    fn encode_unicode() {
        assert_eq!(percent_encode("少女"), "%E5%B0%91%E5%A5%B3");
    }

    #[test]
    fn decode_reverses_encode() {
        for sample in &[
            "",
            "plain",
            "a b&c=d",
            "http://printer.example.com/ready?x=1&y=2",
            "終末旅行 ~ 100%",
            "Hello Ladies + Gentlemen, a signed OAuth request!",
        ] {
            assert_eq!(percent_decode(&percent_encode(sample)).unwrap(), *sample);
        }
    }

    proptest! {
        #[test]
        fn decode_reverses_encode_for_any_string(sample in any::<String>()) {
            let encoded = percent_encode(&sample);
            prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));
            prop_assert_eq!(percent_decode(&encoded).unwrap(), sample);
        }
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(percent_decode("%FF%FE").is_err());
    }

    #[test]
    fn add_params_picks_separator() {
        let params = [("page", "2"), ("per_page", "50")];
        assert_eq!(
            add_params("/users/me/wants", &params).unwrap(),
            "/users/me/wants?page=2&per_page=50"
        );
        assert_eq!(
            add_params("/users/me/wants?sort=added", &params).unwrap(),
            "/users/me/wants?sort=added&page=2&per_page=50"
        );
    }

    #[test]
    fn add_params_encodes_like_the_signer() {
        let params = [("notes", "first press"), ("q", "a+b&c=d/é")];
        assert_eq!(
            add_params("/users/me/wants/1", &params).unwrap(),
            "/users/me/wants/1?notes=first%20press&q=a%2Bb%26c%3Dd%2F%C3%A9"
        );
    }

    #[test]
    fn add_params_skips_empty() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(add_params("/users/me", &params).unwrap(), "/users/me");
    }

    #[test]
    fn strip_variation_suffix() {
        assert_eq!(strip_variation("Artist (2)"), "Artist");
        assert_eq!(strip_variation("Artist (12)"), "Artist");
        assert_eq!(strip_variation("Artist"), "Artist");
        assert_eq!(strip_variation("Artist (Live)"), "Artist (Live)");
        assert_eq!(strip_variation("Artist ()"), "Artist ()");
    }
}
