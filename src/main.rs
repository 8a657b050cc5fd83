use axum::{routing::get, Router};
use std::net::SocketAddr;
use storefront_backend::{
    config::Config, database::pool::create_pool, middleware::cors::cors_layer, routes, AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    if config.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let pool = create_pool(&config).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let app = Router::new()
        .route("/", get(routes::meta::root))
        .route("/health", get(routes::health::health))
        .route("/api/data", get(routes::meta::get_data))
        .route(
            "/api/users",
            get(routes::user::list_users).post(routes::user::create_user),
        )
        .route("/api/users/:id", get(routes::user::get_user))
        .route(
            "/api/products",
            get(routes::product::list_products).post(routes::product::create_product),
        )
        .route(
            "/api/products/:id",
            get(routes::product::get_product)
                .put(routes::product::update_product)
                .delete(routes::product::delete_product),
        )
        .with_state(app_state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
