use std::{collections::HashMap, fmt::Write};

use crate::error::{Error, Result};

/// An ordered list of CSS declarations, used both for inline `style`
/// attributes and for global rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styles(pub Vec<(String, String)>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((property.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flatten into `prop: value; prop2: value2;`
    pub fn declarations(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (property, value) in self.iter() {
            if property.is_empty() {
                return Err(invalid(property, "empty style property"));
            }
            if property
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ':' | ';' | '{' | '}'))
            {
                return Err(invalid(property, "style property contains a reserved character"));
            }
            if let Some(reason) = check_value(value) {
                return Err(invalid(property, reason));
            }
        }
        Ok(())
    }
}

/// `</` would close the surrounding `<style>` element
fn closes_element(s: &str) -> bool {
    s.contains("</")
}

/// Values may hold `;` and braces only inside quotes or parentheses, as in
/// `url("data:image/png;base64,..")`
fn check_value(value: &str) -> Option<&'static str> {
    if closes_element(value) {
        return Some("style value contains `</`");
    }
    let mut quote = None;
    let mut depth = 0usize;
    let mut escaped = false;
    for c in value.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return Some("unbalanced parentheses in style value"),
                }
            }
            (None, ';' | '{' | '}') if depth == 0 => {
                return Some("style value contains a reserved character")
            }
            _ => {}
        }
    }
    if quote.is_some() || depth > 0 {
        return Some("unterminated quote or parenthesis in style value");
    }
    None
}

fn invalid(property: &str, reason: &'static str) -> Error {
    Error::InvalidAttribute {
        name: property.to_string(),
        reason,
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Styles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Styles {
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Styles {
    fn from(declarations: Vec<(K, V)>) -> Self {
        declarations.into_iter().collect()
    }
}

/// Hash maps have no order, so declarations are sorted by property name
impl<K: Into<String>, V: Into<String>, S> From<HashMap<K, V, S>> for Styles {
    fn from(declarations: HashMap<K, V, S>) -> Self {
        let mut styles: Styles = declarations.into_iter().collect();
        styles.0.sort_by(|a, b| a.0.cmp(&b.0));
        styles
    }
}

/// A global rule emitted into the document's `<style>` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    selector: String,
    styles: Styles,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, styles: impl Into<Styles>) -> Result<Self> {
        let selector = selector.into();
        if selector.trim().is_empty()
            || selector.contains(['{', '}'])
            || closes_element(&selector)
        {
            return Err(Error::InvalidSelector { selector });
        }
        let styles = styles.into();
        styles.validate()?;
        Ok(Self { selector, styles })
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Writes `selector { prop: value; }`
    pub fn write_to(&self, out: &mut impl Write) -> std::fmt::Result {
        write!(out, "{} {{", self.selector)?;
        for (property, value) in self.styles.iter() {
            write!(out, " {}: {};", property, value)?;
        }
        out.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn declarations_keep_insertion_order() {
        let styles = Styles::new().with("color", "red").with("margin", "0 auto");
        assert_eq!(styles.declarations(), "color: red; margin: 0 auto;");
        assert_eq!(Styles::new().declarations(), "");
    }

    #[rstest]
    fn hash_maps_are_sorted() {
        let styles: Styles = HashMap::from([("z-index", "1"), ("color", "red")]).into();
        assert_eq!(styles.declarations(), "color: red; z-index: 1;");
    }

    #[rstest]
    fn rule_formatting() {
        let mut out = String::new();
        StyleRule::new(".mystyle", [("color", "green")])
            .unwrap()
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, ".mystyle { color: green; }");

        let mut out = String::new();
        StyleRule::new("p", Styles::new())
            .unwrap()
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, "p { }");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a { color: red }")]
    #[case("</style>")]
    #[case("p</STYLE><script>")]
    fn bad_selectors(#[case] selector: &str) {
        let err = StyleRule::new(selector, [("color", "red")]).unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[rstest]
    #[case("", "red")]
    #[case("font size", "2em")]
    #[case("color:", "red")]
    #[case("color", "red; background: blue")]
    #[case("color", "}</style>")]
    #[case("color", "red</style>")]
    #[case("background", "url(\"a.png\"")]
    #[case("content", "\"open")]
    #[case("margin", "0) ; top: 0")]
    fn bad_declarations(#[case] property: &str, #[case] value: &str) {
        let err = StyleRule::new("p", [(property, value)]).unwrap_err();
        assert!(matches!(err, Error::InvalidAttribute { .. }));
    }

    #[rstest]
    #[case("ul > li")]
    #[case("a + b ~ c")]
    #[case("input[type=\"text\"]")]
    #[case("a:hover, a:focus")]
    fn valid_selectors(#[case] selector: &str) {
        let rule = StyleRule::new(selector, [("color", "red")]).unwrap();
        assert_eq!(rule.selector(), selector);
    }

    #[rstest]
    #[case("background", "url(\"data:image/png;base64,AAAA\")")]
    #[case("background", "url(data:image/png;base64,AAAA)")]
    #[case("content", "\"a; b { }\"")]
    #[case("content", "'\\'' ")]
    #[case("font-family", "\"Fira Sans\", sans-serif")]
    #[case("width", "calc(100% - (2 * 1em))")]
    #[case("content", "\"<\"")]
    fn valid_declarations(#[case] property: &str, #[case] value: &str) {
        let rule = StyleRule::new("p", [(property, value)]).unwrap();
        assert_eq!(rule.styles().iter().next(), Some((property, value)));
    }
}
