use actix_web::error::ResponseError;
use actix_web::{HttpResponse, Responder, post, web};
use tracing::instrument;

use crate::entities::auth::LoginRequest;
use crate::errors::AppError;
use crate::AppState;

#[instrument(skip(state, credentials))]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(AppError::UnauthorizedAccess) => {
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "message": "Invalid username or password"
            }))
        }
        Err(e) => e.error_response(),
    }
}
