use std::error::Error;

use axum::serve;
use news_backend::{routes::make_app, utils::config::Config};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init()?;
    let bind_addr = config.bind_addr;

    let app = make_app(config).await?;

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", bind_addr);

    serve(listener, app).await?;
    Ok(())
}
