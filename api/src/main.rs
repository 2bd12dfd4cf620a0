use api::create_app;
use paper_synthesis::Config;

#[tokio::main]
async fn main() {
    // Reads .env first so RUST_LOG set there reaches the logger.
    let config = Config::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("CRITICAL: Failed to configure Gemini AI. {:#}", e);
            std::process::exit(1);
        }
    };

    let app = create_app(&config);

    let listener = match tokio::net::TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on {}", addr);
    }

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
