use tokio::net::TcpListener;

use greeting_relay::config::schema::LISTEN_ADDR;
use greeting_relay::observability::logging::init_logging;
use greeting_relay::{Environment, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();
    init_logging();

    let environment = Environment::from_env();
    tracing::info!(
        listen_addr = LISTEN_ADDR,
        environment = ?environment,
        "greeting-relay starting"
    );

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    let server = HttpServer::new(environment);
    server.run(listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
