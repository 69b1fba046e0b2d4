use anyhow::Context as _;
use clap::Parser as _;
use mcp_http_tools::HttpVerbAdapter;
use mcp_http_tools_adapter::build_router;
use mcp_http_tools_adapter::config::Args;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    mcp_http_tools_adapter::logging::init(&args.log_level, args.log_format)?;

    let options = args.transport_options();
    info!(
        redirects = ?options.redirects,
        timeout = ?options.timeout,
        max_response_bytes = ?options.max_response_bytes,
        "outbound transport configured"
    );
    let adapter = HttpVerbAdapter::with_options(options)
        .map_err(mcp_http_tools_adapter::AdapterError::from)?;

    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("bind {}", args.bind))?;
    info!(bind = %args.bind, "serving MCP on /mcp");

    axum::serve(listener, build_router(adapter))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot install SIGTERM handler");
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
    info!("shutdown signal received");
}
