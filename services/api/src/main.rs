mod comments;
mod error;
mod extractors;
mod projects;
mod tickets;
mod workspaces;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use ticketry_common::types::ServiceInfo;
use ticketry_config::{init_tracing, AppConfig};
use ticketry_db::authz::pg_repository::PgAuthzRepository;
use ticketry_db::comment::pg_repository::PgCommentRepository;
use ticketry_db::project::pg_repository::PgProjectRepository;
use ticketry_db::ticket::pg_repository::PgTicketRepository;
use ticketry_db::workspace::pg_repository::PgWorkspaceRepository;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub authz: PgAuthzRepository,
    pub workspace_repo: PgWorkspaceRepository,
    pub project_repo: PgProjectRepository,
    pub ticket_repo: PgTicketRepository,
    pub comment_repo: PgCommentRepository,
}

impl AppState {
    fn new(pool: sqlx::PgPool) -> Self {
        Self {
            authz: PgAuthzRepository::new(pool.clone()),
            workspace_repo: PgWorkspaceRepository::new(pool.clone()),
            project_repo: PgProjectRepository::new(pool.clone()),
            ticket_repo: PgTicketRepository::new(pool.clone()),
            comment_repo: PgCommentRepository::new(pool),
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("ticketry-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = "\
# HELP ticketry_up Service up indicator\n\
# TYPE ticketry_up gauge\n\
ticketry_up 1\n\
# HELP ticketry_info Service info\n\
# TYPE ticketry_info gauge\n\
ticketry_info{service=\"ticketry-api\",version=\"0.1.0\"} 1\n";

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            "x-user-id".parse().unwrap(),
        ]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(workspaces::router())
        .merge(projects::router())
        .merge(tickets::router())
        .merge(comments::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "ticketry-api", "starting");

    let pool = ticketry_db::create_pool(&config.database_url)
        .await
        .expect("failed to create database pool");
    ticketry_db::run_migrations(&pool)
        .await
        .expect("failed to apply migrations");

    let state = AppState::new(pool);

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
