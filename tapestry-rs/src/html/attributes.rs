use std::borrow::Cow;

use super::styles::Styles;
use crate::error::{Error, Result};

/// Value of a single attribute. Only `Style` is structured, it is flattened
/// to a declaration string when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Style(Styles),
}

impl AttrValue {
    pub fn as_value(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(text) => Cow::Borrowed(text),
            AttrValue::Style(styles) => Cow::Owned(styles.declarations()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Styles> for AttrValue {
    fn from(value: Styles) -> Self {
        AttrValue::Style(value)
    }
}

/// Attributes of a node, rendered in the order they were added.
/// Names aren't deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(pub Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.with("class", class.into())
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.with("id", id.into())
    }

    /// Structured inline style
    pub fn style(self, styles: impl Into<Styles>) -> Self {
        self.with("style", AttrValue::Style(styles.into()))
    }

    /// Event handler attribute, `on("Click", ..)` becomes `onClick`
    pub fn on(self, event: &str, handler: impl Into<String>) -> Self {
        self.with(format!("on{event}"), handler.into())
    }

    /// First value added under `name`
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (name, value) in self.iter() {
            validate_name(name)?;
            if let AttrValue::Style(styles) = value {
                styles.validate()?;
            }
        }
        Ok(())
    }
}

/// Names follow the HTML attribute name production
pub(crate) fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "empty name"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else if name
        .chars()
        .any(|c| c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '&'))
    {
        "name contains a reserved character"
    } else {
        return Ok(());
    };
    Err(Error::InvalidAttribute {
        name: name.to_string(),
        reason,
    })
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(attributes: [(K, V); N]) -> Self {
        attributes.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> From<Vec<(K, V)>> for Attributes {
    fn from(attributes: Vec<(K, V)>) -> Self {
        attributes.into_iter().collect()
    }
}
