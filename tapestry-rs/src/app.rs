use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    config::BuildConfig,
    error::{Error, Result},
    html::{render::render_document, StyleRule, Styles, Tags},
    node::Node,
};

pub const DEFAULT_TITLE: &str = "Tapestry";

/// The document: top level nodes plus the global style rules that end up in
/// its `<style>` block. Rendering only ever borrows it, so the same App can
/// be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    title: String,
    nodes: Vec<Node>,
    rules: Vec<StyleRule>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            nodes: Vec::new(),
            rules: Vec::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Register a global rule, e.g. `app.style(".mystyle", [("color", "green")])`.
    /// Rules are emitted in registration order; the same selector may appear
    /// more than once.
    pub fn style(
        &mut self,
        selector: impl Into<String>,
        styles: impl Into<Styles>,
    ) -> Result<&mut Self> {
        let rule = StyleRule::new(selector, styles)?;
        debug!(selector = rule.selector(), "registered style rule");
        self.rules.push(rule);
        Ok(self)
    }

    /// Serialize the whole document
    pub fn render(&self) -> Result<String> {
        let page = render_document(&self.title, &self.rules, &self.nodes)?;
        debug!(
            nodes = self.nodes.len(),
            rules = self.rules.len(),
            bytes = page.len(),
            "rendered document"
        );
        Ok(page)
    }

    /// Static build to `TAPESTRY_OUTPUT`, or `./index.html` when unset.
    /// Returns the path written.
    pub fn build(&self) -> Result<PathBuf> {
        self.build_with(&BuildConfig::from_env())
    }

    /// Static build to `config.output`, returning the path written
    pub fn build_with(&self, config: &BuildConfig) -> Result<PathBuf> {
        self.build_to(&config.output)?;
        Ok(config.output.clone())
    }

    /// Static build to `path`, replacing any existing file
    pub fn build_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let page = self.render()?;
        std::fs::write(path, page).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "wrote static page");
        Ok(())
    }
}

impl Tags for App {
    fn children_mut(&mut self) -> Result<&mut Vec<Node>> {
        Ok(&mut self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{html::Attributes, node::Content};
    use rstest::{fixture, rstest};

    fn strip_whitespace(s: &str) -> String {
        s.split_whitespace().collect()
    }

    #[fixture]
    fn sample() -> App {
        let mut app = App::new();
        app.style(".a", [("color", "blue")]).unwrap();
        app.span("hi", [("style", "color:red")]).unwrap();
        app.hr((), Attributes::new()).unwrap();
        app
    }

    #[rstest]
    fn end_to_end(sample: App) {
        let page = sample.render().unwrap();
        let expected = "<html><head><title>Tapestry</title><style>.a { color: blue; }</style></head>\
            <body><span style=\"color:red\">hi</span><hr></body></html>";
        assert_eq!(strip_whitespace(&page), strip_whitespace(expected));

        let style = page.find(".a { color: blue; }").unwrap();
        let span = page.find("<span style=\"color:red\">hi</span>").unwrap();
        let hr = page.find("<hr>").unwrap();
        assert!(style < span && span < hr);
    }

    #[rstest]
    fn rendering_is_idempotent(sample: App) {
        let before = sample.clone();
        assert_eq!(sample.render().unwrap(), sample.render().unwrap());
        assert_eq!(sample, before);
    }

    #[rstest]
    fn append_order_is_document_order() {
        let mut app = App::new();
        for i in 0..5 {
            app.p(format!("item {i}"), Attributes::new()).unwrap();
        }
        app.style("b", [("x", "1")]).unwrap();
        app.style("a", [("x", "2")]).unwrap();
        let page = app.render().unwrap();
        let positions: Vec<_> = (0..5)
            .map(|i| page.find(&format!("<p>item {i}</p>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(page.find("b { x: 1; }").unwrap() < page.find("a { x: 2; }").unwrap());
    }

    #[rstest]
    fn class_attribute_and_rule() {
        let mut app = App::new();
        app.style(".mystyle", [("color", "green")]).unwrap();
        app.span("colored text", Attributes::new().class("mystyle"))
            .unwrap();
        let page = app.render().unwrap();
        assert!(page.contains("<span class=\"mystyle\">colored text</span>"));
        assert_eq!(page.matches(".mystyle { color: green; }").count(), 1);
    }

    #[rstest]
    fn nested_construction() {
        let mut app = App::new();
        app.div(
            vec![
                Node::new("span", "div el 1", Attributes::new()).unwrap(),
                Node::new("span", "div el 2", Attributes::new()).unwrap(),
            ],
            Attributes::new(),
        )
        .unwrap()
        .span("div el 3", Attributes::new())
        .unwrap();
        app.add(Node::new("hr", Content::Empty, Attributes::new()).unwrap())
            .unwrap();
        app.button("click me", Attributes::new().on("Click", "alert(1)"))
            .unwrap();
        let page = app.render().unwrap();
        assert!(page.contains(
            "<body><div><span>div el 1</span><span>div el 2</span><span>div el 3</span></div>\
             <hr><button onClick=\"alert(1)\">click me</button></body>"
        ));
    }

    #[rstest]
    fn invalid_input_is_rejected_immediately() {
        let mut app = App::new();
        assert!(matches!(
            app.span("x", [("bad name", "1")]),
            Err(Error::InvalidAttribute { .. })
        ));
        assert!(matches!(
            app.style("", [("color", "red")]),
            Err(Error::InvalidSelector { .. })
        ));
        assert!(matches!(
            app.style("p", [("color", "red;}")]),
            Err(Error::InvalidAttribute { .. })
        ));
        assert!(app.nodes().is_empty());
        assert!(app.rules().is_empty());
    }

    #[rstest]
    fn malformed_node_fails_render() {
        let mut app = App::new();
        app.hr("not allowed", Attributes::new()).unwrap();
        assert!(matches!(app.render(), Err(Error::MalformedNode { .. })));
    }

    #[rstest]
    fn build_to_writes_the_rendered_page(sample: App) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        sample.build_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), sample.render().unwrap());
    }

    #[rstest]
    fn build_with_uses_the_configured_output(sample: App) {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::new(dir.path().join("page.html"));
        let written = sample.build_with(&config).unwrap();
        assert_eq!(written, config.output);
        assert_eq!(std::fs::read_to_string(&written).unwrap(), sample.render().unwrap());
    }

    #[rstest]
    fn build_to_missing_directory_fails(sample: App) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");
        let err = sample.build_to(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: p, .. } if p == path));
    }

    #[rstest]
    fn custom_title() {
        let app = App::new().with_title("Preview");
        assert!(app.render().unwrap().contains("<title>Preview</title>"));
    }
}
