use super::attributes::Attributes;
use crate::{
    error::{Error, Result},
    node::{Content, Node},
};

/// Elements that have no content and no closing tag
pub static VOID_TAGS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// A tag is a letter followed by letters, digits or dashes, which covers
/// custom elements like `my-widget`
pub(crate) fn validate_tag(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

macro_rules! make_tags {
    ($($name:ident => $tag:literal),+ $(,)?) => {
        /// Every tag with a shorthand method on [`Tags`]
        pub static KNOWN_TAGS: &[&str] = &[$($tag),+];

        /// Construction surface shared by the document and by nodes.
        ///
        /// Every method appends to the end of the container and hands back
        /// the new node so children can be added to it in turn.
        pub trait Tags {
            /// The sequence new nodes are appended to
            fn children_mut(&mut self) -> Result<&mut Vec<Node>>;

            /// Append an already built node
            fn add(&mut self, node: Node) -> Result<&mut Node> {
                let children = self.children_mut()?;
                let index = children.len();
                children.push(node);
                tracing::trace!(tag = children[index].tag(), index, "appended node");
                Ok(&mut children[index])
            }

            /// Append a node with any tag
            fn element(
                &mut self,
                tag: &str,
                content: impl Into<Content>,
                attributes: impl Into<Attributes>,
            ) -> Result<&mut Node> {
                let node = Node::new(tag, content, attributes)?;
                self.add(node)
            }

            $(
                #[doc = concat!("Append a `<", $tag, ">` element")]
                fn $name(
                    &mut self,
                    content: impl Into<Content>,
                    attributes: impl Into<Attributes>,
                ) -> Result<&mut Node> {
                    self.element($tag, content, attributes)
                }
            )+
        }
    };
}

// `html`, `head`, `body`, `title` and `style` belong to the document shell
make_tags!(
    div => "div",
    span => "span",
    p => "p",
    a => "a",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    hr => "hr",
    br => "br",
    wbr => "wbr",
    img => "img",
    button => "button",
    input => "input",
    label => "label",
    select => "select",
    option => "option",
    textarea => "textarea",
    form => "form",
    fieldset => "fieldset",
    legend => "legend",
    table => "table",
    caption => "caption",
    colgroup => "colgroup",
    col => "col",
    tr => "tr",
    td => "td",
    th => "th",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    ul => "ul",
    ol => "ol",
    li => "li",
    dl => "dl",
    dt => "dt",
    dd => "dd",
    section => "section",
    header => "header",
    footer => "footer",
    main => "main",
    article => "article",
    aside => "aside",
    nav => "nav",
    address => "address",
    blockquote => "blockquote",
    details => "details",
    summary => "summary",
    dialog => "dialog",
    menu => "menu",
    figure => "figure",
    figcaption => "figcaption",
    audio => "audio",
    video => "video",
    source => "source",
    track => "track",
    canvas => "canvas",
    embed => "embed",
    object => "object",
    map => "map",
    area => "area",
    iframe => "iframe",
    svg => "svg",
    math => "math",
    b => "b",
    strong => "strong",
    i => "i",
    em => "em",
    mark => "mark",
    small => "small",
    del => "del",
    ins => "ins",
    sub => "sub",
    sup => "sup",
    pre => "pre",
    code => "code",
    var => "var",
    samp => "samp",
    kbd => "kbd",
    q => "q",
    cite => "cite",
    abbr => "abbr",
    dfn => "dfn",
    time => "time",
    progress => "progress",
    meter => "meter",
    template => "template",
    slot => "slot",
    script => "script",
    noscript => "noscript",
);

impl Tags for Node {
    fn children_mut(&mut self) -> Result<&mut Vec<Node>> {
        self.child_nodes_mut()
    }
}
