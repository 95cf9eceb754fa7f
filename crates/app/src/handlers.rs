//! HTTP handlers for the admin gateway
//!
//! Every protected view is one fetch against the platform API with the stored
//! bearer token; responses pass through as opaque JSON. No business logic
//! lives here.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use toptop_client::ApiError;
use toptop_common::{Error, Result};
use toptop_session::{ACCESS_TOKEN, REFRESH_TOKEN};

use crate::gate::Gate;
use crate::state::AppState;

/// Body of `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Path the user originally asked for, carried over by the login redirect.
    pub from: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub redirect_to: String,
}

/// GET /login — landing view for redirected navigations.
pub async fn login_page(Query(query): Query<LoginQuery>) -> Json<Value> {
    Json(json!({
        "message": "authentication required",
        "from": query.from.unwrap_or_else(|| "/overview".to_string()),
    }))
}

/// POST /login — exchange credentials with the platform and persist the
/// returned token pair.
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginReply>> {
    body.validate()
        .map_err(|e| Error::Validation(format!("invalid login request: {e}")))?;

    let tokens = state
        .api
        .login(&body.email, &body.password)
        .await
        .map_err(map_api_error)?;

    state.store.set(ACCESS_TOKEN, &tokens.access_token);
    state.store.set(REFRESH_TOKEN, &tokens.refresh_token);
    tracing::info!(email = %body.email, "staff session established");

    Ok(Json(LoginReply {
        redirect_to: query.from.unwrap_or_else(|| "/overview".to_string()),
    }))
}

/// POST /logout — drop both tokens.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.store.remove(ACCESS_TOKEN);
    state.store.remove(REFRESH_TOKEN);
    tracing::info!("staff session cleared");
    StatusCode::NO_CONTENT
}

pub async fn overview(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state.api.overview(&token).await.map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn matches(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state.api.list_matches(&token).await.map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn match_detail(
    _: Gate,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .get_match(&token, &id)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn organizers(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .list_organizers(&token)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn tournaments(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .list_tournaments(&token)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn users(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state.api.list_users(&token).await.map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn block_user(
    _: Gate,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .set_user_blocked(&token, &id, true)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn unblock_user(
    _: Gate,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .set_user_blocked(&token, &id, false)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn payments(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state
        .api
        .list_payments(&token)
        .await
        .map_err(map_api_error)?;
    Ok(Json(body))
}

pub async fn refunds(_: Gate, State(state): State<AppState>) -> Result<Json<Value>> {
    let token = session_token(&state)?;
    let body = state.api.list_refunds(&token).await.map_err(map_api_error)?;
    Ok(Json(body))
}

/// The guard has already admitted the request; the token must still be read
/// for the upstream call.
fn session_token(state: &AppState) -> Result<String> {
    state
        .store
        .get(ACCESS_TOKEN)
        .ok_or_else(|| Error::Authentication("no session token".to_string()))
}

fn map_api_error(e: ApiError) -> Error {
    match e {
        ApiError::Status { status: 404, body } => Error::NotFound(body),
        ApiError::Status { status, body } => {
            Error::Upstream(format!("platform API returned {status}: {body}"))
        }
        ApiError::Transport(e) => Error::Upstream(format!("platform API unreachable: {e}")),
        ApiError::Decode(e) => Error::Upstream(format!("platform API returned malformed JSON: {e}")),
    }
}
