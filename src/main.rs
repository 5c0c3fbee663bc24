use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use reportgen::{config::Config, llm::GoogleAdapter, routes::create_router, utils::init_logger, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Missing API key aborts here, before anything binds
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);
    info!(model = %config.llm.model, "Using Gemini model");

    let llm = GoogleAdapter::new(&config.llm)?;
    let state = AppState::new(config.clone(), Arc::new(llm));

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
