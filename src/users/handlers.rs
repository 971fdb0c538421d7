use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    state::AppState,
    users::{
        dto::{EmailQuery, PublicUser, SaveUserRequest},
        password::hash_password,
        repo::RepoError,
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/lookup", get(find_user_by_email))
        .route(
            "/users/:id",
            get(get_user).put(replace_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, (StatusCode, String)> {
    let users = state.users.find_all().await.map_err(internal)?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    match state.users.find_by_id(id).await.map_err(internal)? {
        Some(user) => Ok(Json(user.into())),
        None => {
            warn!(user_id = %id, "user not found");
            Err((StatusCode::NOT_FOUND, "User not found".into()))
        }
    }
}

#[instrument(skip(state))]
pub async fn find_user_by_email(
    State(state): State<AppState>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    state
        .users
        .find_by_email(&q.email)
        .await
        .map_err(internal)?
        .map(|u| Json(u.into()))
        .ok_or((StatusCode::NOT_FOUND, "User not found".into()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<SaveUserRequest>,
) -> Result<(StatusCode, HeaderMap, Json<PublicUser>), (StatusCode, String)> {
    let user = to_user(payload)?;
    let saved = state.users.save(&user).await.map_err(internal)?;

    let mut headers = HeaderMap::new();
    if let Some(id) = saved.id {
        info!(user_id = %id, "user created");
        if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/users/{}", id)) {
            headers.insert(header::LOCATION, location);
        }
    }
    Ok((StatusCode::CREATED, headers, Json(saved.into())))
}

/// Insert-or-overwrite under a caller-chosen id.
#[instrument(skip(state, payload))]
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveUserRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let user = to_user(payload)?.with_id(id);
    let saved = state.users.save(&user).await.map_err(internal)?;
    info!(user_id = %id, "user saved");
    Ok(Json(saved.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.users.delete_by_id(id).await.map_err(internal)?;
    Ok(StatusCode::NO_CONTENT)
}

fn to_user(req: SaveUserRequest) -> Result<User, (StatusCode, String)> {
    let hash = hash_password(&req.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(User::new(
        req.first_name,
        req.last_name,
        req.date_of_birth,
        req.phone,
        req.occupation,
        req.email,
        hash,
    ))
}

fn internal(e: RepoError) -> (StatusCode, String) {
    error!(error = %e, "user repository failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
