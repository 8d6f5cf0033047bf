use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use cart_store::modules::cart::adapters::outbound::inventory::http::HttpInventory;
use cart_store::modules::cart::application::store::CartStore;
use cart_store::shared::infrastructure::notifier::tracing_notifier::TracingNotifier;
use cart_store::shared::infrastructure::storage::json_file::JsonFileStorage;
use cart_store::shell::config::Config;
use cart_store::shell::graphql::{AppSchema, build_schema};
use cart_store::shell::http::router;
use cart_store::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the process environment still applies.
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let inventory = Arc::new(HttpInventory::new(&config.api_url, config.api_timeout)?);
    let storage = Arc::new(JsonFileStorage::new(&config.storage_path));
    let store = CartStore::load(
        config.storage_key(),
        inventory,
        storage,
        Arc::new(TracingNotifier),
    )
    .await?;

    let state = AppState {
        store: Arc::new(store),
    };
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(api_url = %config.api_url, "inventory endpoint");
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
