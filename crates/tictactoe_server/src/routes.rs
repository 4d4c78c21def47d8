//! Axum router and handlers.

use crate::api::{GameSnapshot, MoveRecord, MoveRequest, MoveResponse, NewGameRequest};
use crate::error::ApiError;
use crate::session::GameSession;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Builds the application: game routes under `/api/game`, `/health`, and
/// per-request logging.
pub fn app(session: GameSession) -> Router {
    let game_routes = Router::new()
        .route("/status", get(status))
        .route("/move", post(make_move))
        .route("/reset", post(reset))
        .route("/new", post(new_game))
        .route("/undo", post(undo))
        .route("/history", get(history));

    Router::new()
        .nest("/api/game", game_routes)
        .route("/health", get(health))
        .with_state(session)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(
                method = %req.method(),
                uri = %req.uri(),
                "Incoming HTTP request"
            );
            req
        }))
}

#[instrument(skip_all)]
async fn status(State(session): State<GameSession>) -> Json<GameSnapshot> {
    Json(session.status())
}

#[instrument(skip_all, fields(row = request.row, col = request.col))]
async fn make_move(
    State(session): State<GameSession>,
    Json(request): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let response = session.make_move(request.row, request.col);
    debug!(success = response.success, "Move handled");
    Json(response)
}

#[instrument(skip_all)]
async fn reset(State(session): State<GameSession>) -> Json<GameSnapshot> {
    Json(session.reset())
}

/// The body is optional; an empty body starts a game of the default size.
#[instrument(skip_all, fields(body_len = body.len()))]
async fn new_game(
    State(session): State<GameSession>,
    body: Bytes,
) -> Result<Json<GameSnapshot>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        NewGameRequest::default()
    } else {
        serde_json::from_slice::<NewGameRequest>(&body)
            .map_err(|e| ApiError::bad_request(e.to_string()))?
    };
    Ok(Json(session.new_game(request.size)?))
}

#[instrument(skip_all)]
async fn undo(State(session): State<GameSession>) -> Json<MoveResponse> {
    Json(session.undo())
}

#[instrument(skip_all)]
async fn history(State(session): State<GameSession>) -> Json<Vec<MoveRecord>> {
    Json(session.history())
}

async fn health() -> &'static str {
    "ok"
}
