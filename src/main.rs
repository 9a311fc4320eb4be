use anyhow::Result;
use clap::Parser;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mtrelay::config::RelayConfig;
use mtrelay::handler::router;
use mtrelay::handler::state::RelayState;
use mtrelay::{logging, metrics};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, action)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, args.json);

    let config = RelayConfig::from_env();
    config.validate()?;

    let loopback_address = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
    let metrics_socket_addr =
        SocketAddr::new(loopback_address, config.metrics_port);
    metrics::init(metrics_socket_addr);

    // Browsers and the Vercel frontend reach this from outside, so the
    // relay itself binds all interfaces; the metrics listener stays on
    // loopback.
    let relay_socket_addr =
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), config.port);

    tracing::info!(
        api_key = ?config.api_key,
        allowed_origins = ?config.allowed_origins,
        "Starting relay on {relay_socket_addr}..."
    );

    let state = RelayState::new(config)?;

    let listener = tokio::net::TcpListener::bind(relay_socket_addr).await?;

    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}
