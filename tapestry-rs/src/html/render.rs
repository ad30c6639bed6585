use std::{borrow::Cow, fmt::Write};

use super::styles::StyleRule;
use crate::{
    error::{Error, Result},
    node::{Content, Node},
};

/// Escape text content: `&`, `<` and `>`
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// Escape a quoted attribute value, which also covers both quote kinds
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\''));
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            '\'' if quotes => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Elements whose text is taken verbatim by the browser
pub static RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Raw text can't be escaped, so it must not contain its own end tag
fn ends_raw_text(tag: &str, text: &str) -> bool {
    let closing = format!("</{}", tag.to_ascii_lowercase());
    text.to_ascii_lowercase().contains(&closing)
}

/// Content a void or raw text element can't hold
fn check_shape(node: &Node) -> Result<()> {
    if is_raw_text(node.tag()) {
        let reason = match node.content() {
            Content::Text(text) if ends_raw_text(node.tag(), text) => {
                "raw text contains its own end tag"
            }
            Content::Children(children) if !children.is_empty() => {
                "raw text element carries child nodes"
            }
            _ => return Ok(()),
        };
        return Err(Error::MalformedNode {
            tag: node.tag().to_string(),
            reason,
        });
    }
    if !node.is_void() {
        return Ok(());
    }
    let reason = match node.content() {
        Content::Empty => return Ok(()),
        Content::Children(children) if children.is_empty() => return Ok(()),
        Content::Text(_) => "void element carries text",
        Content::Children(_) => "void element carries child nodes",
    };
    Err(Error::MalformedNode {
        tag: node.tag().to_string(),
        reason,
    })
}

/// Serialize a node and its descendants depth first.
///
/// Void elements render as `<hr>`, other empty elements as `<div></div>`.
/// Text inside `script` and `style` is written unescaped.
pub fn render_node(out: &mut impl Write, node: &Node) -> Result<()> {
    check_shape(node)?;
    write!(out, "<{}", node.tag())?;
    for (name, value) in node.attributes().iter() {
        write!(out, " {}=\"{}\"", name, escape_attribute(&value.as_value()))?;
    }
    out.write_char('>')?;
    if node.is_void() {
        return Ok(());
    }
    match node.content() {
        Content::Empty => {}
        Content::Text(text) if is_raw_text(node.tag()) => out.write_str(text)?,
        Content::Text(text) => out.write_str(&escape_text(text))?,
        Content::Children(children) => {
            for child in children {
                render_node(out, child)?;
            }
        }
    }
    write!(out, "</{}>", node.tag())?;
    Ok(())
}

/// Wrap rendered rules and nodes in the `<html>` shell
pub(crate) fn render_document(title: &str, rules: &[StyleRule], nodes: &[Node]) -> Result<String> {
    let mut out = String::new();
    write!(
        out,
        "<html><head><title>{}</title><style>",
        escape_text(title)
    )?;
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        rule.write_to(&mut out)?;
    }
    out.push_str("</style></head><body>");
    for node in nodes {
        render_node(&mut out, node)?;
    }
    out.push_str("</body></html>");
    Ok(out)
}
