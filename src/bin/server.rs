// src/bin/server.rs
use draw_scrape::server::{self, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    draw_scrape::log::init(false);

    let result = match ServerConfig::from_env() {
        Ok(cfg) => server::serve(cfg).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("Server failed: {}", e);
        std::process::exit(1);
    }
}
