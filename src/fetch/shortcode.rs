//! Shortcode parsing

use crate::error::{Error, Result};
use url::Url;

/// Path segments that introduce a shortcode in post URLs
const POST_PREFIXES: [&str; 3] = ["p", "reel", "tv"];

/// Whether `code` looks like a shortcode: URL-safe base64 characters only
pub fn is_valid_shortcode(code: &str) -> bool {
    !code.is_empty()
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Extract the shortcode from a post URL such as
/// `https://www.instagram.com/p/BaW0x1/?taken-by=someone`.
pub fn shortcode_from_url(input: &str) -> Result<String> {
    let url = Url::parse(input)?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    segments
        .windows(2)
        .find(|pair| POST_PREFIXES.contains(&pair[0]))
        .map(|pair| pair[1])
        .filter(|code| is_valid_shortcode(code))
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_shortcode(input))
}
