pub mod attributes;
pub mod render;
pub mod styles;
pub mod tag;

pub use attributes::{AttrValue, Attributes};
pub use render::{escape_attribute, escape_text, render_node};
pub use styles::*;
pub use tag::*;
