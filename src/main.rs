mod api;
mod domain;
mod error;
mod logger;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use crate::domain::booking_service::BookingService;
use crate::domain::booking_store::BookingStore;
use crate::domain::clock::SystemClock;

#[derive(Parser, Debug)]
#[command(about = "Meeting room booking API server")]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    logger::init();

    let args = Args::parse();

    log::info!("Logger initialized. Starting booking service.");

    // Store and service are built once and shared by every request handler.
    let store = BookingStore::new();
    let service = Arc::new(BookingService::new(store, Arc::new(SystemClock)));

    let app = api::routes::router(service);

    let addr: SocketAddr = match format!("{}:{}", args.host, args.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Invalid bind address {}:{}: {}", args.host, args.port, e);
            std::process::exit(1);
        }
    };

    log::info!("Listening on http://{}", addr);

    if let Err(e) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
