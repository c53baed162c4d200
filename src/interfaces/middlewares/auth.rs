use std::{
    rc::Rc,
    task::{Context, Poll},
};

use actix_web::{
    Error, HttpMessage, HttpResponse, web,
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
};
use futures_util::future::{LocalBoxFuture, Ready, ok};

use crate::entities::auth::AdminSession;
use crate::errors::AppError;
use crate::AppState;

/// Guards the admin surface: requests under `/api/v1/admin` must carry a
/// bearer token accepted by the `AuthHandler`. Everything else passes
/// through untouched; the store itself never checks authorization.
pub struct AdminAuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AdminAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminAuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AdminAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !is_admin_route(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let Some(state) = req.app_data::<web::Data<AppState>>() else {
                tracing::error!("AppState missing in admin middleware");
                let err = AppError::InternalError("application state not configured".into());
                return Ok(req.into_response(err.error_response()));
            };

            let Some(token) = extract_token(&req) else {
                tracing::warn!("missing or malformed Authorization header");
                return Ok(unauthorized(req, "Missing or invalid credentials"));
            };

            if !state.auth_handler.verify_token(&token) {
                tracing::warn!("rejected admin token");
                return Ok(unauthorized(req, "Missing or invalid credentials"));
            }

            let session = AdminSession {
                username: state.auth_handler.admin_username().to_string(),
            };
            req.extensions_mut().insert(session);

            service.call(req).await
        })
    }
}

fn is_admin_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return false;
    }
    path.starts_with("/api/v1/admin")
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn unauthorized(req: ServiceRequest, message: &str) -> ServiceResponse<BoxBody> {
    req.into_response(HttpResponse::Unauthorized().json(serde_json::json!({
        "error": message
    })))
}
