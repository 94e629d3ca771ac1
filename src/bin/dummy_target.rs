use anyhow::Result;
use loadburst::{config::Config, target, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load()?;
    telemetry::init_tracing(&cfg.log);

    let listener = tokio::net::TcpListener::bind(target::BIND).await?;
    let addr = listener.local_addr()?;
    target::serve(listener, telemetry::shutdown_signal(addr)).await?;

    Ok(())
}
