//! skillswap-web: serves the marketplace REST API on a local port.

#[tokio::main]
async fn main() {
    if let Err(error) = skillswap::web_client::run().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
