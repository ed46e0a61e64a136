use std::sync::Arc;

use clap::Parser;
use mealcheck_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app = router(state(args.clone())).inspect_err(|e| error!("Failed to build router: {e}"))?;

    let address = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Mealcheck API listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
