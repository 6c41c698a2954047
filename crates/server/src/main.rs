// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{FromRequest, Path, Request, State as AxumState, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use repairdesk_api::{
    ApiError, AuthenticationService, CreateTicketRequest, CreateUserRequest, ListTicketsResponse,
    ListUsersResponse, LoginRequest, LoginResponse, TicketInfo, TicketStatsResponse,
    UpdateTicketRequest, UserInfo, create_ticket, create_user, get_ticket, list_tickets,
    list_users, login, logout, ticket_stats, update_ticket, whoami,
};
use repairdesk_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::session::{OptionalSessionUser, SessionUser, bearer_token};

/// `RepairDesk` Server - HTTP server for the repair-shop backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[cfg(feature = "mysql")]
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How long a login session stays valid, in hours
    #[arg(long, default_value_t = 168)]
    session_ttl_hours: u32,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer for accounts, sessions, and tickets.
    persistence: Arc<Mutex<Persistence>>,
    /// Lifetime of sessions created at login.
    session_ttl: Duration,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Machine-readable error kind.
    pub kind: String,
    /// Error message.
    pub message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The machine-readable error kind.
    kind: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, kind): (StatusCode, &'static str) = match &err {
            ApiError::AlreadyExists { .. } => (StatusCode::CONFLICT, "already_exists"),
            ApiError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::AuthenticationFailed { .. } => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized"),
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        Self {
            status,
            kind,
            message: err.to_string(),
        }
    }
}

/// JSON request body extractor.
///
/// Wraps `axum::Json` so that a body which does not match the request
/// type (wrong content type, bad syntax, a fractional cost, a missing
/// field) is answered with the usual `invalid_input` error and status
/// 400 instead of axum's plain-text rejection.
struct JsonBody<T>(T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "Rejected request body");
                Err(HttpError {
                    status: StatusCode::BAD_REQUEST,
                    kind: "invalid_input",
                    message: rejection.body_text(),
                })
            }
        }
    }
}

// ========================================================================
// Account Handlers
// ========================================================================

/// Handler for POST `/auth/users` endpoint.
///
/// Unauthenticated while no account exists (first admin), admin-only after.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    OptionalSessionUser(actor): OptionalSessionUser,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<UserInfo>, HttpError> {
    info!(role = %req.role, "Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let user: UserInfo = create_user(
        &mut persistence,
        req,
        actor.as_ref(),
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    info!(user_id = user.id, role = %user.role, "Created user");
    Ok(Json(user))
}

/// Handler for GET `/auth/users` endpoint.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<ListUsersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListUsersResponse = list_users(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/auth/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(
        &mut persistence,
        &req,
        OffsetDateTime::now_utc(),
        app_state.session_ttl,
    )?;
    Ok(Json(response))
}

/// Handler for POST `/auth/logout` endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    headers: HeaderMap,
) -> Result<StatusCode, Response> {
    let token: &str = bearer_token(&headers).map_err(IntoResponse::into_response)?;

    let mut persistence = app_state.persistence.lock().await;
    logout(&mut persistence, token).map_err(|e| HttpError::from(e).into_response())?;

    info!(user_id = actor.user_id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/auth/me` endpoint.
async fn handle_whoami(SessionUser(_actor, user): SessionUser) -> Json<UserInfo> {
    Json(whoami(&user))
}

// ========================================================================
// Ticket Handlers
// ========================================================================

/// Handler for POST `/service/create` endpoint.
async fn handle_create_ticket(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    JsonBody(req): JsonBody<CreateTicketRequest>,
) -> Result<Json<TicketInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let ticket: TicketInfo = create_ticket(&mut persistence, req, &actor, OffsetDateTime::now_utc())?;
    Ok(Json(ticket))
}

/// Handler for GET `/service/list` endpoint.
async fn handle_list_tickets(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<ListTicketsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListTicketsResponse = list_tickets(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/service/stats` endpoint.
async fn handle_ticket_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<TicketStatsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TicketStatsResponse = ticket_stats(&mut persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/service/{service_code}` endpoint.
///
/// Public: customers check their ticket status with the code alone.
async fn handle_get_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(service_code): Path<String>,
) -> Result<Json<TicketInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let ticket: TicketInfo = get_ticket(&mut persistence, &service_code)?;
    Ok(Json(ticket))
}

/// Handler for PUT `/service/update` endpoint.
async fn handle_update_ticket(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    JsonBody(req): JsonBody<UpdateTicketRequest>,
) -> Result<Json<TicketInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let ticket: TicketInfo = update_ticket(&mut persistence, req, &actor, OffsetDateTime::now_utc())?;
    Ok(Json(ticket))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> &'static str {
    "ok"
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/users", post(handle_create_user).get(handle_list_users))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/me", get(handle_whoami))
        .route("/service/create", post(handle_create_ticket))
        .route("/service/list", get(handle_list_tickets))
        .route("/service/stats", get(handle_ticket_stats))
        .route("/service/update", put(handle_update_ticket))
        .route("/service/{service_code}", get(handle_get_ticket))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

/// Opens the database selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    #[cfg(feature = "mysql")]
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        return Ok(Persistence::new_with_mysql(url)?);
    }

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database; data is lost on exit");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing RepairDesk Server");

    let mut persistence: Persistence = open_persistence(&args)?;
    AuthenticationService::purge_expired_sessions(&mut persistence, OffsetDateTime::now_utc())?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        session_ttl: Duration::hours(i64::from(args.session_ttl_hours)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
