//! Listener ownership and serving.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use changelog_adapter_http_axum::router;
use changelog_adapter_http_axum::state::AppState;
use changelog_app::ports::NotificationSink;
use changelog_app::services::changelog_service::ChangelogService;

use crate::config::Config;

/// Build the full application router around `sink`.
pub fn app<S>(sink: S) -> Router
where
    S: NotificationSink + Send + Sync + 'static,
{
    router::build(AppState::new(ChangelogService::new(sink)))
}

/// A bound listener plus the router it serves.
///
/// The socket is owned for the lifetime of the value and released when
/// [`Server::run`] returns.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the configured address and prepare to serve `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind<S>(config: &Config, sink: S) -> io::Result<Self>
    where
        S: NotificationSink + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        Ok(Self {
            listener,
            router: app(sink),
        })
    }

    /// Address actually bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be queried.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while accepting connections.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
