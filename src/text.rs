//! Helpful utilities for working with text.
//!
//! WordPress returns titles and post bodies as rendered HTML. The functions
//! here reduce that HTML to plain text without parsing it: tags are removed
//! with a simple pattern, so malformed markup is stripped on a best-effort
//! basis only.

use htmlentity::entity::{self, CharacterSet, EncodeType, ICodedDataTrait};
use itertools::Itertools;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

// Block-level tags and comments separate words; anything else (`<em>`,
// `<a>`, ...) can sit in the middle of a word or before punctuation.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|</?(?:address|article|aside|blockquote|br|dd|div|dl|dt|figcaption|figure|footer|h[1-6]|header|hr|li|main|nav|ol|p|pre|section|table|td|th|tr|ul)\b[^>]*>",
    )
    .expect("block pattern is a valid regex")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

/// Reduces rendered HTML to plain text.
///
/// Tags are stripped, entities are decoded, and runs of whitespace are
/// collapsed into single spaces.
///
/// # Examples
///
/// ```
/// use wpstats::text::normalize;
/// let html = "<p>Fish &amp; Chips</p>\n<p>are <em>great</em></p>";
/// assert_eq!(normalize(html), "Fish & Chips are great");
/// ```
pub fn normalize(html: &str) -> String {
    let text = collapse_whitespace(&convert_html_entities(&strip_tags(html)));
    trace!("normalized {} bytes of markup to {} bytes", html.len(), text.len());
    text
}

/// Removes anything that looks like a tag, including HTML comments.
///
/// Block-level tags and comments are replaced with a space so that text
/// from adjacent paragraphs does not run together; inline tags are simply
/// dropped.
///
/// # Examples
///
/// ```
/// use wpstats::text::strip_tags;
/// let stripped = strip_tags("<p>one</p><p>two</p>");
/// assert_eq!(stripped.split_whitespace().collect::<Vec<_>>(), ["one", "two"]);
///
/// let stripped = strip_tags("<p>a <a href=\"/x\">link</a>.</p>");
/// assert_eq!(stripped.trim(), "a link.");
/// ```
pub fn strip_tags(html: &str) -> String {
    let html = BLOCK_RE.replace_all(html, " ");
    TAG_RE.replace_all(&html, "").into_owned()
}

/// Joins whitespace-delimited runs of text with single spaces and trims
/// the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Converts HTML entities into their single-character equivalents.
///
/// For example, WordPress returns "&" as "&amp;" and typographic quotes as
/// "&#8217;"; this function will convert those HTML entities into single,
/// human-readable characters.
///
/// Leading and trailing whitespace will also be trimmed from the string.
///
/// # Examples
///
/// ```
/// use wpstats::text::convert_html_entities;
/// let raw = "&lt;This &amp; That&gt;";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "<This & That>");
/// ```
///
/// ```
/// use wpstats::text::convert_html_entities;
/// let raw = "  It&#8217;s here  ";
/// let converted = convert_html_entities(raw);
/// assert_eq!(converted, "It\u{2019}s here");
/// ```
pub fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}

/// Escapes text for safe inclusion in an HTML document or attribute.
///
/// # Examples
///
/// ```
/// use wpstats::text::escape_html;
/// assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> String {
    entity::encode(
        text.as_bytes(),
        &EncodeType::NamedOrHex,
        &CharacterSet::SpecialChars,
    )
    .to_string()
    .unwrap_or(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod strip_tags {
        use super::*;
        use pretty_assertions::assert_eq;

        seq_macro::seq!(N in 1..=6 {
            #[test]
            fn it_removes_header_~N() {
                let html = format!("<h{n}>Some Text</h{n}>", n = N);
                assert_eq!(collapse_whitespace(&strip_tags(&html)), "Some Text");
            }
        });

        #[test]
        fn it_removes_tags_with_attributes() {
            let html = r#"<a href="https://example.com/" class="link">a link</a>"#;
            assert_eq!(strip_tags(html).trim(), "a link");
        }

        #[test]
        fn it_removes_block_comments() {
            let html = "<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->";
            assert_eq!(collapse_whitespace(&strip_tags(html)), "Hello");
        }

        #[test]
        fn it_keeps_words_in_adjacent_blocks_apart() {
            let html = "<p>end.</p><p>Start</p>";
            assert_eq!(collapse_whitespace(&strip_tags(html)), "end. Start");
        }

        #[test]
        fn it_drops_inline_tags_without_splitting_words() {
            let html = "<p>un<em>believ</em>able, <strong>really</strong>.</p>";
            assert_eq!(collapse_whitespace(&strip_tags(html)), "unbelievable, really.");
        }

        #[test]
        fn it_separates_line_breaks() {
            let html = "one<br/>two<BR>three";
            assert_eq!(collapse_whitespace(&strip_tags(html)), "one two three");
        }

        #[test]
        fn it_leaves_plain_text_alone() {
            assert_eq!(strip_tags("A Plaintext Post"), "A Plaintext Post");
        }

        #[test]
        fn it_keeps_script_bodies() {
            let html = "<script>var x = 1;</script>";
            assert_eq!(collapse_whitespace(&strip_tags(html)), "var x = 1;");
        }
    }

    mod normalize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_decodes_entities_after_stripping_tags() {
            let html = "<p>&lt;b&gt; is bold</p>";
            assert_eq!(normalize(html), "<b> is bold");
        }

        #[test]
        fn it_decodes_numeric_entities() {
            let html = "<p>Caf&#233; &#8211; open</p>";
            assert_eq!(normalize(html), "Café – open");
        }

        #[test]
        fn it_collapses_whitespace() {
            let html = "\n<p>lots   of\n\n\tspace</p>\n";
            assert_eq!(normalize(html), "lots of space");
        }

        #[test]
        fn it_normalizes_an_empty_string() {
            assert_eq!(normalize(""), "");
        }

        #[test]
        fn it_normalizes_markup_with_no_text() {
            assert_eq!(normalize("<p></p><br/>"), "");
        }
    }

    mod escape_html {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_escapes_angle_brackets() {
            assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        }

        #[test]
        fn it_round_trips_through_decoding() {
            let raw = r#"5 < 6 & "quotes""#;
            assert_eq!(convert_html_entities(&escape_html(raw)), raw);
        }
    }
}
