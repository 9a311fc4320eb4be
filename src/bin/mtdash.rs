use anyhow::Result;
use clap::Parser;

use mtrelay::dashboard::{self, DashboardOptions};
use mtrelay::logging;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal dashboard for Monkeytype typing stats, fetched through mtrelay")]
struct Args {
    /// Base URL of the relay service
    #[arg(long, env = "MTRELAY_URL", default_value = "http://localhost:3001")]
    relay_url: String,

    /// Candidate endpoint to probe through the relay; repeat to replace the
    /// default list
    #[arg(long = "endpoint")]
    endpoints: Vec<String>,

    /// Print the stats summary as JSON instead of animating it
    #[arg(long, action)]
    json: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, false);

    dashboard::run(DashboardOptions {
        relay_url: args.relay_url,
        endpoints: args.endpoints,
        json: args.json,
    })
    .await
}
