use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::{app::App, error::Error};

/// An App shared with the live server. Writes made through it show up in
/// the next response.
pub type SharedApp = Arc<RwLock<App>>;

impl App {
    pub fn into_shared(self) -> SharedApp {
        Arc::new(RwLock::new(self))
    }
}

/// Every path and method renders the current document
pub fn router(app: SharedApp) -> Router {
    Router::new()
        .fallback(render_page)
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

#[axum::debug_handler]
async fn render_page(State(app): State<SharedApp>) -> Result<Html<String>, Error> {
    let app = app.read().await;
    Ok(Html(app.render()?))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
