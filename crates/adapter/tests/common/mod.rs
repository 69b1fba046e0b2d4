use anyhow::Context as _;
use std::process::{Child, Command};
use std::time::Duration;

pub use mcp_http_tools_test_support::KillOnDrop;

pub fn pick_unused_port() -> anyhow::Result<u16> {
    mcp_http_tools_test_support::pick_unused_port()
}

pub async fn wait_http_ok(url: &str, timeout_dur: Duration) -> anyhow::Result<()> {
    mcp_http_tools_test_support::wait_http_ok(url, timeout_dur).await
}

pub fn spawn_adapter(port: u16, extra_args: &[&str]) -> anyhow::Result<Child> {
    let bin = env!("CARGO_BIN_EXE_mcp-http-tools-adapter");
    Command::new(bin)
        .arg("--bind")
        .arg(format!("127.0.0.1:{port}"))
        .arg("--log-level")
        .arg("info")
        .args(extra_args)
        .spawn()
        .context("spawn adapter")
}

/// Spawn the adapter and wait until `/health` answers. Returns its base URL.
pub async fn start_adapter(extra_args: &[&str]) -> anyhow::Result<(String, KillOnDrop)> {
    let port = pick_unused_port()?;
    let child = KillOnDrop(spawn_adapter(port, extra_args)?);

    let base_url = format!("http://127.0.0.1:{port}");
    wait_http_ok(&format!("{base_url}/health"), Duration::from_secs(20)).await?;

    Ok((base_url, child))
}
