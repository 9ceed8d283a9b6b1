//! A small CSS selector subset: `tag`, `*`, `#id`, `.class`, `[attr]`,
//! `[attr=value]`, compounds of those, descendant and `>` combinators,
//! and `,` groups.

use super::tree::ElementData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Part {
    pub(crate) compound: Compound,
    // Relation to the part on the left
    pub(crate) combinator: Option<Combinator>,
}

/// One comma-separated alternative, left to right
pub(crate) type Chain = Vec<Part>;

/// Parse a selector into its comma-separated chains.
/// `None` if any part is outside the supported subset.
pub(crate) fn parse(selector: &str) -> Option<Vec<Chain>> {
    let groups: Option<Vec<Chain>> = selector.split(',').map(parse_chain).collect();
    groups.filter(|groups| !groups.is_empty())
}

fn parse_chain(selector: &str) -> Option<Chain> {
    let spaced = selector.replace('>', " > ");
    let mut parts = Vec::new();
    let mut pending = None;

    for token in spaced.split_whitespace() {
        if token == ">" {
            if pending.is_some() || parts.is_empty() {
                return None;
            }
            pending = Some(Combinator::Child);
            continue;
        }

        let compound = parse_compound(token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(Combinator::Descendant))
        };
        parts.push(Part {
            compound,
            combinator,
        });
    }

    if parts.is_empty() || pending.is_some() {
        return None;
    }
    Some(parts)
}

fn parse_compound(token: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = token;

    let tag_end = rest
        .find(|c: char| !(is_name_char(c) || c == '*'))
        .unwrap_or(rest.len());
    let tag = &rest[..tag_end];
    match tag {
        "" | "*" => {}
        tag if tag.contains('*') => return None,
        tag => compound.tag = Some(tag.to_ascii_lowercase()),
    }
    rest = &rest[tag_end..];

    while let Some(marker) = rest.chars().next() {
        rest = &rest[marker.len_utf8()..];
        match marker {
            '#' | '.' => {
                let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                let name = rest[..end].to_string();
                rest = &rest[end..];
                if marker == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
            }
            '[' => {
                let end = rest.find(']')?;
                let inner = &rest[..end];
                rest = &rest[end + 1..];
                let (name, value) = match inner.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                        (name.trim(), Some(value.to_string()))
                    }
                    None => (inner.trim(), None),
                };
                if name.is_empty() || !name.chars().all(is_name_char) {
                    return None;
                }
                compound.attrs.push((name.to_ascii_lowercase(), value));
            }
            _ => return None,
        }
    }

    Some(compound)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Compound {
    pub(crate) fn matches(&self, element: &ElementData) -> bool {
        if self.tag.as_deref().is_some_and(|tag| tag != element.tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if element.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let classes: Vec<&str> = element
                .attr("class")
                .map(|list| list.split_whitespace().collect())
                .unwrap_or_default();
            if !self.classes.iter().all(|class| classes.contains(&class.as_str())) {
                return false;
            }
        }
        self.attrs.iter().all(|(name, expected)| match (element.attr(name), expected) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == expected,
        })
    }
}
