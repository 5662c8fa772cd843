//! Shop API Server
//!
//! HTTP backend for users, orders, products, categories and suppliers.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
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
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::{
    ensure_schema, PostgresOrderRepository, PostgresProductRepository,
    PostgresSupplierRepository, PostgresUserRepository,
};
use app::{CatalogService, OrderService, PasswordHasher, SupplierService, UserService};
use config::Config;
use domain::ports::{OrderRepository, ProductRepository, SupplierRepository, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub order_service: Arc<OrderService>,
    pub catalog_service: Arc<CatalogService>,
    pub supplier_service: Arc<SupplierService>,
}

impl AppState {
    /// Wire the services over the given repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        suppliers: Arc<dyn SupplierRepository>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users, hasher)),
            order_service: Arc::new(OrderService::new(orders)),
            catalog_service: Arc::new(CatalogService::new(products)),
            supplier_service: Arc::new(SupplierService::new(suppliers)),
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

/// Build the router with all routes and shared middleware.
/// Rate limiting is added in `main` since it needs the peer address.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Users
        .route("/users", post(handlers::create_user).get(handlers::list_users))
        .route("/users/by-email/:email", get(handlers::get_user_by_email))
        .route(
            "/users/:id",
            get(handlers::get_user).put(handlers::update_user),
        )
        // Orders
        .route("/orders", post(handlers::create_order))
        .route(
            "/orders/:id",
            get(handlers::get_order).put(handlers::update_order),
        )
        // Catalog
        .route("/products", get(handlers::list_products))
        .route("/products/:id", get(handlers::get_product))
        .route(
            "/categories/:id/products/:product_id",
            post(handlers::add_product_to_category)
                .delete(handlers::remove_product_from_category),
        )
        // Suppliers
        .route(
            "/suppliers/:id",
            get(handlers::get_supplier).delete(handlers::delete_supplier),
        )
        // Middleware
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
                .unwrap_or_else(|_| "info,shop_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shop API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    // Create adapters and services
    let state = AppState::new(
        Arc::new(PostgresUserRepository::new(db.clone())),
        Arc::new(PostgresOrderRepository::new(db.clone())),
        Arc::new(PostgresProductRepository::new(db.clone())),
        Arc::new(PostgresSupplierRepository::new(db)),
        PasswordHasher::new(config.password_salt.clone()),
    );

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

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
