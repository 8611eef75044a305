mod checklist;
mod config;
mod html;
mod registry;
mod routes;
mod state;
mod views;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Registry and checklist are loaded once and never change afterwards.
    let state = match state::AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to load registry or checklist");
            std::process::exit(1);
        }
    };
    tracing::info!(
        workers = state.registry.list().len(),
        registry = %config.registry_path.as_ref().map_or("builtin".to_owned(), |p| p.display().to_string()),
        "worker registry loaded"
    );

    let app = routes::app(state);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "aserradero dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
