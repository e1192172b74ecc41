//! `changelog-stubd` entry point.

use changelog_adapter_console::{ConsoleSink, print_banner};
use changelog_stubd::config::Config;
use changelog_stubd::server::Server;
use changelog_stubd::telemetry;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_filter);

    let server = Server::bind(&config, ConsoleSink::stdio()).await?;
    let addr = server.local_addr()?;
    print_banner(addr.port())?;
    tracing::info!(%addr, "changelog stub listening");

    server.run(shutdown_signal()).await?;
    Ok(())
}
