use std::{future::Future, net::SocketAddr};

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tracing::{error, info};

use crate::{
    app::App,
    axum_html::{router, SharedApp},
    config::ServeConfig,
    error::{Error, Result},
};

/// A running live preview. Dropping it shuts the server down.
#[derive(Debug)]
pub struct LiveServer {
    addr: SocketAddr,
    app: SharedApp,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl LiveServer {
    /// Bind the configured address and start serving `app` in the background
    pub async fn start(app: SharedApp, config: &ServeConfig) -> Result<Self> {
        let addr = config.addr();
        let bind_error = |source| Error::Bind {
            addr: addr.clone(),
            source,
        };
        let listener = TcpListener::bind(&addr).await.map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;

        let (shutdown, signal) = oneshot::channel::<()>();
        let service = router(app.clone());
        let task = tokio::spawn(async move {
            axum::serve(listener, service)
                .with_graceful_shutdown(async move {
                    // Either an explicit stop or the handle being dropped
                    let _ = signal.await;
                })
                .await
        });
        info!(%local_addr, "serving live preview");
        Ok(Self {
            addr: local_addr,
            app,
            shutdown,
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Handle to the document being served
    pub fn app(&self) -> SharedApp {
        self.app.clone()
    }

    /// Serve until `until` resolves, then shut down gracefully.
    /// Returns early if the server itself fails.
    pub async fn run_until(self, until: impl Future<Output = ()>) -> Result<()> {
        let Self {
            addr,
            shutdown,
            mut task,
            ..
        } = self;
        tokio::select! {
            joined = &mut task => return finish(joined),
            () = until => {}
        }
        info!(%addr, "stopping live preview");
        let _ = shutdown.send(());
        finish(task.await)
    }

    pub async fn stop(self) -> Result<()> {
        self.run_until(std::future::ready(())).await
    }

    /// Serve until the server fails
    pub async fn wait(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }
}

fn finish(joined: std::result::Result<std::io::Result<()>, tokio::task::JoinError>) -> Result<()> {
    match joined {
        Ok(served) => served.map_err(Error::Serve),
        Err(join_error) => Err(Error::Serve(std::io::Error::other(join_error))),
    }
}

impl App {
    /// Start serving this document in the background. Use
    /// [`LiveServer::app`] to change it between requests.
    pub async fn serve(self, config: &ServeConfig) -> Result<LiveServer> {
        LiveServer::start(self.into_shared(), config).await
    }

    /// Serve until Ctrl-C
    pub async fn run(self, config: &ServeConfig) -> Result<()> {
        let server = self.serve(config).await?;
        info!(url = %server.url(), "press ctrl-c to stop");
        server
            .run_until(async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    error!(error = %err, "failed to listen for ctrl-c, serving until killed");
                    std::future::pending::<()>().await;
                }
            })
            .await
    }
}
