use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid tag name {tag:?}")]
    InvalidTag { tag: String },
    #[error("invalid attribute {name:?}: {reason}")]
    InvalidAttribute { name: String, reason: &'static str },
    #[error("invalid style selector {selector:?}")]
    InvalidSelector { selector: String },
    #[error("<{tag}> holds text, child nodes can't be appended to it")]
    MixedContent { tag: String },
    #[error("malformed <{tag}>: {reason}")]
    MalformedNode { tag: String, reason: &'static str },
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("live server stopped with an error")]
    Serve(#[source] std::io::Error),
    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
