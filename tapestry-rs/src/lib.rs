//! Build an HTML document with tag-named method calls, then write it out
//! once or serve it as a live preview.
//!
//! ```no_run
//! use tapestry_rs::prelude::*;
//!
//! # async fn demo() -> tapestry_rs::Result<()> {
//! let mut ui = App::new();
//! ui.style(".mystyle", [("color", "green")])?;
//! ui.span("colored text", Attributes::new().class("mystyle"))?;
//! ui.hr((), Attributes::new())?;
//! ui.build()?;
//! ui.run(&ServeConfig::default()).await?;
//! # Ok(())
//! # }
//! ```
pub mod app;
pub mod axum_html;
pub mod config;
pub mod error;
pub mod html;
pub mod node;
pub mod server;

pub use app::App;
pub use error::{Error, Result};
pub use node::{Content, Node};

pub mod prelude {
    pub use crate::{
        app::App,
        axum_html::SharedApp,
        config::{BuildConfig, ServeConfig},
        html::{AttrValue, Attributes, StyleRule, Styles, Tags},
        node::{Content, Node},
        server::LiveServer,
    };
}
