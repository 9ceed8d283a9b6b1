use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^>\r\n]?)(\r\n|\n\r|\r|\n)").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:http|https)://[a-z0-9/?=_#&%~\-]+(\.[a-z0-9/?=_#&%~;\-]+)+)|(www(\.[a-z0-9/?=_#&%~\-]+){2,})",
    )
    .unwrap()
});

/// Escape `& < > " '` to their HTML entities.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse of [`escape_html`].
pub fn unescape_html(s: &str) -> String {
    // &amp; goes last so "&amp;lt;" decodes to "&lt;", not "<"
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Insert `<br />` before every line break.
pub fn nl2br(s: &str) -> String {
    LINE_BREAK
        .replace_all(s, |caps: &Captures<'_>| format!("{}<br />{}", &caps[1], &caps[2]))
        .into_owned()
}

/// Drop all markup and return the decoded text content.
pub fn strip_tags(s: &str) -> String {
    unescape_html(&TAG.replace_all(s, ""))
}

/// Wrap bare `http(s)://` and `www.` URLs in anchors opening a new window.
pub fn parse_links(s: &str) -> String {
    URL.replace_all(s, |caps: &Captures<'_>| {
        let url = &caps[0];
        let lower = url.to_ascii_lowercase();
        let href = if lower.starts_with("http://") || lower.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{url}")
        };
        format!(r#"<a href="{href}" target="_blank">{url}</a>"#)
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_round_trip() {
        let original = r#"if (a < b && c > "d") { 'e' }"#;
        assert_eq!(unescape_html(&escape_html(original)), original);
    }

    #[test]
    fn test_unescape_ampersand_last() {
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_nl2br() {
        assert_eq!(nl2br("a\nb"), "a<br />\nb");
        assert_eq!(nl2br("a\r\nb"), "a<br />\r\nb");
        assert_eq!(nl2br("a\n\nb"), "a<br />\n<br />\nb");
        assert_eq!(nl2br("no breaks"), "no breaks");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("a &amp; b<br/>"), "a & b");
        assert_eq!(strip_tags("x<!-- <p>hidden</p> -->y"), "xy");
    }

    #[test]
    fn test_parse_links() {
        assert_eq!(
            parse_links("see http://example.com/page now"),
            r#"see <a href="http://example.com/page" target="_blank">http://example.com/page</a> now"#
        );
        assert_eq!(
            parse_links("www.example.com"),
            r#"<a href="http://www.example.com" target="_blank">www.example.com</a>"#
        );
        assert_eq!(parse_links("nothing here"), "nothing here");
    }
}
