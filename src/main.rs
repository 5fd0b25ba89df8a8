use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use contractor_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::auth::require_bearer_auth,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let public_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/register", post(routes::auth_routes::register))
        .route("/login", post(routes::auth_routes::login))
        .route("/add-emp", post(routes::employee_routes::add_employee))
        .route("/employee/:id", get(routes::employee_routes::get_employee));

    let protected_routes = Router::new()
        .route("/employee", get(routes::employee_routes::list_employees))
        .route(
            "/employee/:id",
            delete(routes::employee_routes::delete_employee),
        )
        .route(
            "/emp-update/:id",
            put(routes::employee_routes::update_employee),
        )
        .route(
            "/search/:key",
            get(routes::employee_routes::search_employees),
        )
        .layer(axum::middleware::from_fn(require_bearer_auth));

    info!("Serving uploads from: {}", config.uploads_dir);

    let app = public_routes
        .merge(protected_routes)
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
