use anyhow::Result;
use clap::Parser;
use loadburst::{cli::Args, config::Config, driver, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = Config::load()?;
    telemetry::init_tracing(&cfg.log);

    let plan = driver::RunPlan::new(args.requests());
    let client = driver::build_client()?;
    driver::run(&plan, client, std::io::stdout()).await?;

    Ok(())
}
