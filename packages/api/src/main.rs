use tracing::info;
use tracing_subscriber::EnvFilter;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = api::ApiConfig::from_env()?;
    let state = api::AppState::from_config(&config);
    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
