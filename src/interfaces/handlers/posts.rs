use actix_web::{HttpResponse, Responder, web};
use tracing::instrument;

use crate::entities::auth::AdminSession;
use crate::entities::post::{NewPostRequest, UpdatePostRequest};
use crate::errors::AppError;
use crate::AppState;

#[instrument(skip(state))]
pub async fn list_published_posts(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.post_handler.list_posts(true).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_published_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.post_handler.get_published_post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_session, state))]
pub async fn admin_list_posts(
    _session: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let posts = state.post_handler.list_posts(false).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(_session, state))]
pub async fn admin_get_post(
    _session: AdminSession,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.post_handler.get_post_by_id(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_session, state, data))]
pub async fn create_post(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<NewPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state.post_handler.create_post(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

#[instrument(skip(_session, state, data))]
pub async fn update_post(
    _session: AdminSession,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdatePostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state
        .post_handler
        .update_post(&post_id, &data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_session, state))]
pub async fn delete_post(
    _session: AdminSession,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.post_handler.delete_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}
