use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinematch_api::api::{create_router, AppState};
use cinematch_api::config::Config;
use cinematch_api::dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the dataset into the immutable in-memory tables
    let catalog = dataset::load_movies(&config.movies_path)?;
    let table = dataset::load_ratings(&config.ratings_path, &catalog)?;
    tracing::info!(
        movies = catalog.len(),
        users = table.user_count(),
        ratings = table.rating_count(),
        "Dataset loaded"
    );

    let mut state = AppState::new(catalog, table);
    if let Some(test_path) = &config.test_ratings_path {
        let test_set = dataset::load_rating_events(test_path, &state.catalog)?;
        tracing::info!(cases = test_set.len(), "Test ratings loaded");
        state = state.with_test_set(test_set);
    }

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
