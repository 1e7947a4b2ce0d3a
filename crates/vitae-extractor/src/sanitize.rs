//! Response cleanup before JSON decoding

use once_cell::sync::Lazy;
use regex::Regex;

/// Greedy span from the first `{` to the last `}`
static OBJECT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// A run of commas (with whitespace) right before a closing bracket
static TRAILING_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:,\s*)+([}\]])").unwrap());

/// Clean a raw completion into something `serde_json` can usually decode
///
/// Strips prose around the outermost braces and trailing commas. No other
/// repair is attempted, and the output may still be invalid JSON.
///
/// ```
/// use vitae_extractor::clean;
///
/// assert_eq!(clean("Sure! {\"a\": [1, 2,],} Hope this helps."), "{\"a\": [1, 2]}");
/// ```
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    let span = OBJECT_SPAN
        .find(trimmed)
        .map(|m| m.as_str())
        .unwrap_or(trimmed);
    TRAILING_COMMAS.replace_all(span, "$1").into_owned()
}
