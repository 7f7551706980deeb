use once_cell::sync::Lazy;
use regex::Regex;

/// Line-leading comment decoration: optional indentation, one `*`, and the
/// single whitespace character that separates it from the line's content.
static DECORATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\*\s").unwrap());

/// An inline `*<ws>` pair. Only shows up mid-line after param fragments
/// have been cut out of a function body.
static INLINE_DECORATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\s").unwrap());

/// Strips line-leading comment decoration from a fragment and trims the
/// surrounding whitespace. Every extracted field passes through here before
/// it is stored. Normalizing an already-normalized fragment is a no-op.
pub fn normalize(fragment: &str) -> String {
    DECORATION_RE.replace_all(fragment, "").trim().to_string()
}

/// Removes every inline `*<ws>` decoration pair, wherever it sits on the
/// line. Used on the residual function description, where excising matched
/// `@param` fragments leaves decoration stranded mid-line out of reach of
/// the line-anchored pass in [`normalize`].
pub fn strip_decoration(fragment: &str) -> String {
    INLINE_DECORATION_RE.replace_all(fragment, "").to_string()
}
