use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// An inline `{@link TARGET [DISPLAY TEXT]}` reference. TARGET carries no
/// whitespace; DISPLAY TEXT is optional and runs up to the closing brace.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{@link ([^\s}]+)( [^}]+)?\}").unwrap());

/// How a rewritten link navigates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkMode {
    /// Target begins with `#`: an anchor within the same document.
    SameDocument,
    /// Any other target: opened in a new browsing context.
    NewContext,
}

impl LinkMode {
    pub fn of_target(target: &str) -> Self {
        if target.starts_with('#') {
            LinkMode::SameDocument
        } else {
            LinkMode::NewContext
        }
    }

    /// The HTML `target` attribute value for this mode.
    pub fn attr(self) -> &'static str {
        match self {
            LinkMode::SameDocument => "_self",
            LinkMode::NewContext => "_blank",
        }
    }
}

/// Rewrites every `{@link ...}` occurrence in a fragment into an HTML
/// anchor. Visible text is the display text when present, otherwise the
/// target itself, trimmed either way. Text without link tags passes
/// through unchanged. Stateless across calls.
pub fn rewrite_links(fragment: &str) -> String {
    LINK_RE
        .replace_all(fragment, |caps: &Captures| {
            let href = &caps[1];
            let text = caps
                .get(2)
                .map_or(href, |display| display.as_str())
                .trim();
            let mode = LinkMode::of_target(href);
            format!("<a href=\"{}\" target=\"{}\">{}</a>", href, mode.attr(), text)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_link_is_untouched() {
        let fragment = "plain description with {braces} and @tags";
        assert_eq!(rewrite_links(fragment), fragment);
    }

    #[test]
    fn test_same_document_link() {
        assert_eq!(
            rewrite_links("see {@link #foo}"),
            "see <a href=\"#foo\" target=\"_self\">#foo</a>"
        );
    }

    #[test]
    fn test_external_link_with_display_text() {
        assert_eq!(
            rewrite_links("see {@link http://x bar}"),
            "see <a href=\"http://x\" target=\"_blank\">bar</a>"
        );
    }

    #[test]
    fn test_display_text_may_span_words() {
        assert_eq!(
            rewrite_links("{@link Foo.Bar the Foo bar}"),
            "<a href=\"Foo.Bar\" target=\"_blank\">the Foo bar</a>"
        );
    }

    #[test]
    fn test_multiple_links_in_one_fragment() {
        let rewritten = rewrite_links("{@link #a} and {@link #b two}");
        assert_eq!(
            rewritten,
            "<a href=\"#a\" target=\"_self\">#a</a> and <a href=\"#b\" target=\"_self\">two</a>"
        );
    }

    #[test]
    fn test_mode_of_target() {
        assert_eq!(LinkMode::of_target("#section"), LinkMode::SameDocument);
        assert_eq!(LinkMode::of_target("http://example.com"), LinkMode::NewContext);
        assert_eq!(LinkMode::of_target("Other.Class"), LinkMode::NewContext);
    }
}
