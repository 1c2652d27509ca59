//! Catalog API Server
//!
//! Product catalog for the ordering platform: categories and the products
//! sold under them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod presenters;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresCategoryGateway, PostgresProductGateway};
use app::{CategoryUseCase, ProductUseCase};
use auth::AdminAuth;
use config::Config;
use domain::ports::{CategoryGateway, ProductGateway};

/// Application state shared across all handlers
pub struct AppState<CG, PG>
where
    CG: CategoryGateway,
    PG: ProductGateway,
{
    pub category_use_case: Arc<CategoryUseCase<CG>>,
    pub product_use_case: Arc<ProductUseCase<PG, CG>>,
    pub admin_auth: AdminAuth,
}

impl<CG, PG> AppState<CG, PG>
where
    CG: CategoryGateway,
    PG: ProductGateway,
{
    pub fn new(categories: Arc<CG>, products: Arc<PG>, admin_auth: AdminAuth) -> Self {
        Self {
            category_use_case: Arc::new(CategoryUseCase::new(categories.clone())),
            product_use_case: Arc::new(ProductUseCase::new(products, categories)),
            admin_auth,
        }
    }
}

// Derived Clone would require the gateways themselves to be Clone
impl<CG, PG> Clone for AppState<CG, PG>
where
    CG: CategoryGateway,
    PG: ProductGateway,
{
    fn clone(&self) -> Self {
        Self {
            category_use_case: self.category_use_case.clone(),
            product_use_case: self.product_use_case.clone(),
            admin_auth: self.admin_auth.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
///
/// `rate_limit` puts the write routes behind a per-peer-IP governor, which
/// needs the server to be started with connect info.
pub fn build_router<CG, PG>(state: AppState<CG, PG>, rate_limit: bool) -> Router
where
    CG: CategoryGateway + 'static,
    PG: ProductGateway + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/categories", get(handlers::list_categories::<CG, PG>))
        .route("/categories/:id", get(handlers::get_category::<CG, PG>))
        .route("/products", get(handlers::list_products::<CG, PG>))
        .route("/products/:id", get(handlers::get_product::<CG, PG>));

    let mut admin_routes = Router::new()
        .route("/categories", post(handlers::create_category::<CG, PG>))
        .route(
            "/categories/:id",
            put(handlers::update_category::<CG, PG>)
                .delete(handlers::deactivate_category::<CG, PG>),
        )
        .route(
            "/categories/:id/reactivate",
            post(handlers::reactivate_category::<CG, PG>),
        )
        .route("/products", post(handlers::create_product::<CG, PG>))
        .route(
            "/products/:id",
            put(handlers::update_product::<CG, PG>)
                .delete(handlers::deactivate_product::<CG, PG>),
        )
        .route(
            "/products/:id/reactivate",
            post(handlers::reactivate_product::<CG, PG>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.admin_auth.clone(),
            auth::require_admin,
        ));

    if rate_limit {
        // 2 req/sec sustained, burst of 5, keyed on the socket peer address
        match GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
        {
            Some(config) => {
                admin_routes = admin_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => tracing::warn!("Invalid rate limit settings, admin routes are not limited"),
        }
    }

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Catalog API...");

    // Load configuration
    let config = Config::from_env()?;
    if !config.writes_enabled() {
        tracing::warn!("ADMIN_API_KEY is not set, all mutating requests will be rejected");
    }

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let category_gateway = Arc::new(PostgresCategoryGateway::new(db.clone()));
    let product_gateway = Arc::new(PostgresProductGateway::new(db));

    let state = AppState::new(
        category_gateway,
        product_gateway,
        AdminAuth::new(config.admin_api_key.as_deref()),
    );

    let app = build_router(state, true);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
