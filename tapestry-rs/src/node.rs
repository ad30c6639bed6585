use crate::{
    error::{Error, Result},
    html::{attributes::validate_name, tag, AttrValue, Attributes},
};

/// What sits between a node's open and close tags. Text and child nodes are
/// never mixed at the same level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Children(Vec<Node>),
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::Empty
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Node> for Content {
    fn from(child: Node) -> Self {
        Content::Children(vec![child])
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Content::Children(children)
    }
}

impl<const N: usize> From<[Node; N]> for Content {
    fn from(children: [Node; N]) -> Self {
        Content::Children(children.into())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(content: Option<T>) -> Self {
        content.map(Into::into).unwrap_or_default()
    }
}

/// A single element of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    content: Content,
    attributes: Attributes,
}

impl Node {
    /// Build a node, rejecting bad tag or attribute names up front
    pub fn new(
        tag: impl Into<String>,
        content: impl Into<Content>,
        attributes: impl Into<Attributes>,
    ) -> Result<Self> {
        let tag = tag.into();
        tag::validate_tag(&tag)?;
        let attributes = attributes.into();
        attributes.validate()?;
        Ok(Self {
            tag,
            content: content.into(),
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_void(&self) -> bool {
        tag::is_void(&self.tag)
    }

    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<&mut Self> {
        let name = name.into();
        validate_name(&name)?;
        let value = value.into();
        if let AttrValue::Style(styles) = &value {
            styles.validate()?;
        }
        self.attributes.0.push((name, value));
        Ok(self)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.content = Content::Text(text.into());
        self
    }

    pub(crate) fn child_nodes_mut(&mut self) -> Result<&mut Vec<Node>> {
        if self.content == Content::Empty {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => Ok(children),
            _ => Err(Error::MixedContent {
                tag: self.tag.clone(),
            }),
        }
    }
}
