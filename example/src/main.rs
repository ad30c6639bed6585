use map_macro::hash_map;
use tapestry_rs::prelude::*;

#[tokio::main]
async fn main() -> tapestry_rs::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let mut ui = App::new();

    ui.style(".mystyle", hash_map! {"color" => "green"})?;

    ui.span("colored text", Attributes::new().with("style", "color: red"))?;
    ui.span("colored text", Attributes::new().class("mystyle"))?;
    ui.div(
        vec![
            Node::new("span", "div el 1", Attributes::new())?,
            Node::new("span", "div el 2", Attributes::new())?,
        ],
        Attributes::new(),
    )?;
    ui.add(Node::new("hr", Content::Empty, Attributes::new())?)?;
    ui.button("click me", Attributes::new().on("Click", "alert(1)"))?;

    let path = ui.build()?;
    tracing::info!(path = %path.display(), "static page ready");

    ui.run(&ServeConfig::from_env()?).await
}
