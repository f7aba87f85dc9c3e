//! Attribute parsing.
//!
//! Deliberately minimal: a value only ends at a space once it ends with `"`,
//! so `class="a b"` keeps its inner space, while an unquoted value runs on
//! until the end of the tag. Single quotes and escapes get no special
//! treatment.

use crate::node::{AttrValue, Attributes};

/// The attribute text of the tag starting at `start` in `source`: everything
/// between the first space and the first `>`.
///
/// Returns `None` when the tag has no space before its `>`.
pub fn attribute_text(source: &str, start: usize) -> Option<&str> {
    let tag = source.get(start..)?;
    let mut attrs_start = None;

    for (i, ch) in tag.char_indices() {
        if ch == '>' {
            return attrs_start.map(|s| &tag[s..i]);
        }
        if attrs_start.is_none() && ch == ' ' {
            attrs_start = Some(i + 1);
        }
    }

    None
}

/// Parse the attributes of the tag starting at `start` in `source`.
pub fn from_tag(source: &str, start: usize) -> Attributes {
    attribute_text(source, start)
        .map(parse)
        .unwrap_or_default()
}

/// Parse attribute text such as `type="radio" checked`.
///
/// Later duplicates overwrite earlier values but keep their first position.
pub fn parse(text: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut name = String::new();
    let mut value: Option<String> = None;
    let last = text.char_indices().last().map(|(i, _)| i);

    for (i, ch) in text.char_indices() {
        let is_last = Some(i) == last;

        match value.take() {
            // A space after a closing quote ends the value
            Some(v) if ch == ' ' && v.ends_with('"') => {
                insert(&mut attributes, &name, AttrValue::String(unquote(&v)));
                name.clear();
            }
            Some(mut v) if is_last => {
                v.push(ch);
                insert(&mut attributes, &name, AttrValue::String(unquote(&v)));
                name.clear();
            }
            Some(mut v) => {
                v.push(ch);
                value = Some(v);
            }
            None if ch == ' ' || is_last => {
                name.push(ch);
                insert(&mut attributes, &name, AttrValue::True);
                name.clear();
            }
            None if ch == '=' => value = Some(String::new()),
            None => name.push(ch),
        }
    }

    attributes
}

fn insert(attributes: &mut Attributes, name: &str, value: AttrValue) {
    let key = name.trim();
    if !key.is_empty() {
        attributes.insert(key.to_string(), value);
    }
}

/// Strip one pair of wrapping double quotes.
fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: parse and flatten to (key, Some(value) | None for `true`).
    fn pairs(text: &str) -> Vec<(String, Option<String>)> {
        parse(text)
            .into_iter()
            .map(|(k, v)| (k, v.as_str().map(str::to_string)))
            .collect()
    }

    fn string(key: &str, value: &str) -> (String, Option<String>) {
        (key.to_string(), Some(value.to_string()))
    }

    fn flag(key: &str) -> (String, Option<String>) {
        (key.to_string(), None)
    }

    // =========================================================================
    // Attribute text extraction
    // =========================================================================

    #[test]
    fn test_attribute_text() {
        let source = "<div class=\"a\">x</div>";
        assert_eq!(attribute_text(source, 0), Some("class=\"a\""));
    }

    #[test]
    fn test_attribute_text_without_attributes() {
        assert_eq!(attribute_text("<div>x</div>", 0), None);
        // the space after `>` belongs to the content, not the tag
        assert_eq!(attribute_text("<p>a b</p>", 0), None);
    }

    #[test]
    fn test_attribute_text_trailing_space() {
        assert_eq!(attribute_text("<div >", 0), Some(""));
    }

    #[test]
    fn test_attribute_text_offset() {
        let source = "<p>x</p><img src=\"a.png\">";
        assert_eq!(attribute_text(source, 8), Some("src=\"a.png\""));
    }

    #[test]
    fn test_attribute_text_unterminated() {
        assert_eq!(attribute_text("<div class=\"a\"", 0), None);
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_quoted_values() {
        assert_eq!(
            pairs("class=\"container\" id=\"main\""),
            vec![string("class", "container"), string("id", "main")]
        );
    }

    #[test]
    fn test_quoted_value_with_space() {
        assert_eq!(
            pairs("class=\"btn primary\" type=\"submit\""),
            vec![string("class", "btn primary"), string("type", "submit")]
        );
    }

    #[test]
    fn test_boolean_attributes() {
        assert_eq!(
            pairs("required readonly"),
            vec![flag("required"), flag("readonly")]
        );
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            pairs("type=\"radio\" checked"),
            vec![string("type", "radio"), flag("checked")]
        );
        assert_eq!(
            pairs("checked type=\"radio\""),
            vec![flag("checked"), string("type", "radio")]
        );
    }

    #[test]
    fn test_unquoted_value_runs_to_end() {
        assert_eq!(pairs("href=/x"), vec![string("href", "/x")]);
        assert_eq!(
            pairs("type=radio checked"),
            vec![string("type", "radio checked")]
        );
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(pairs("title='hi'"), vec![string("title", "'hi'")]);
    }

    #[test]
    fn test_empty_quoted_value() {
        assert_eq!(pairs("alt=\"\""), vec![string("alt", "")]);
    }

    #[test]
    fn test_last_duplicate_wins_in_first_position() {
        assert_eq!(
            pairs("id=\"a\" class=\"b\" id=\"c\""),
            vec![string("id", "c"), string("class", "b")]
        );
    }

    #[test]
    fn test_extra_spaces_are_ignored() {
        assert_eq!(
            pairs(" disabled  id=\"x\" "),
            vec![flag("disabled"), string("id", "x")]
        );
    }

    #[test]
    fn test_trailing_equals_is_a_flag() {
        assert_eq!(pairs("a="), vec![flag("a=")]);
    }

    #[test]
    fn test_from_tag() {
        let attrs = from_tag("<input type=\"radio\" checked>", 0);
        assert_eq!(attrs.get("type"), Some(&AttrValue::string("radio")));
        assert_eq!(attrs.get("checked"), Some(&AttrValue::True));
        assert!(from_tag("<br>", 0).is_empty());
    }
}
