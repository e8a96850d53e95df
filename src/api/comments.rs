//! Guestbook comments API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{CommentResponse, CreateComment},
};

use super::AppJson;

/// List approved comments, newest first
#[utoipa::path(
    get,
    path = "/comments",
    tag = "comments",
    responses(
        (status = 200, description = "Approved comments", body = Vec<CommentResponse>)
    )
)]
pub async fn list_comments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.services.comments.list().await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// Add a comment
#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    request_body = CreateComment,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid name or comment", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_comment(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateComment>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state.services.comments.create(data).await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}
