/// Characters stripped by [`trim`] when no charlist is given
pub const DEFAULT_CHARLIST: &str = " \n\r\t\u{0c}\u{0b}\u{a0}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200a}\u{200b}\u{2028}\u{2029}\u{3000}";

/// Trim whitespace, or the characters in `chars`, from both ends.
///
/// A custom charlist replaces the default one entirely, so whitespace
/// survives unless it is listed. An empty charlist counts as no charlist.
pub fn trim(s: &str, chars: Option<&str>) -> String {
    let list = match chars {
        Some(list) if !list.is_empty() => list,
        _ => DEFAULT_CHARLIST,
    };
    s.trim_matches(|c: char| list.contains(c)).to_string()
}
