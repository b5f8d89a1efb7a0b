//! Folio Backend
//!
//! REST backend for a personal blog and portfolio site: SQLite-backed
//! content collections, a filter/sort/paginate query layer, and aggregation
//! endpoints for tags, series and the stack catalog.

mod aggregate;
mod api;
mod auth;
mod config;
mod content;
mod errors;
mod models;
mod query;
mod stacks;
mod widgets;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use content::{ContentSource, SqliteContentStore};
use query::{
    ActivityRepository, CareerRepository, PostRepository, ProjectRepository, SeriesRepository,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteContentStore>,
    pub posts: PostRepository,
    pub projects: ProjectRepository,
    pub series: SeriesRepository,
    pub activities: ActivityRepository,
    pub careers: CareerRepository,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the repositories to a content store.
    pub fn new(store: Arc<SqliteContentStore>, config: Arc<Config>) -> Self {
        let source: Arc<dyn ContentSource> = store.clone();

        Self {
            store,
            posts: PostRepository::new(source.clone()),
            projects: ProjectRepository::new(source.clone()),
            series: SeriesRepository::new(source.clone()),
            activities: ActivityRepository::new(source.clone()),
            careers: CareerRepository::new(source),
            config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (FOLIO_API_PSK). Admin routes are unauthenticated!");
    }

    // Initialize database
    let pool = content::init_database(&config.db_path).await?;
    let store = Arc::new(SqliteContentStore::new(pool));

    // Create application state
    let state = AppState::new(store, Arc::new(config.clone()));

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // Public read routes
    let read_routes = Router::new()
        // Posts
        .route("/posts", get(api::list_posts))
        .route("/posts/{title}", get(api::get_post))
        // Projects
        .route("/projects", get(api::list_projects))
        .route("/projects/{name}", get(api::get_project))
        .route("/projects/{name}/stacks", get(api::get_project_stacks))
        // Series
        .route("/series", get(api::list_series))
        .route("/series/overview", get(api::series_overview))
        .route("/series/{id}", get(api::get_series))
        // Aggregations
        .route("/tags", get(api::list_tags))
        // Timeline
        .route("/activities", get(api::list_activities))
        .route("/careers", get(api::list_careers))
        // Stacks
        .route("/stacks", get(api::list_stacks))
        // Search
        .route("/search", get(api::search));

    // Admin write routes behind PSK auth
    let admin_routes = Router::new()
        .route("/posts", put(api::create_post))
        .route("/projects", put(api::create_project))
        .route("/series", put(api::save_all_series))
        // Autosave drafts
        .route("/drafts", get(api::list_drafts))
        .route("/drafts/{content_id}", get(api::get_draft))
        .route("/drafts/{content_id}", put(api::save_draft))
        .route("/drafts/{content_id}", delete(api::delete_draft))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", read_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
