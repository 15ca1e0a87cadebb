//! rponto main entrypoint.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!();
    if let Err(e) = rponto::run().await {
        rponto::ui::messages::error(&e);
        std::process::exit(1);
    }
}
