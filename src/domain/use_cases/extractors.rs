use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::entities::auth::AdminSession;
use crate::errors::AppError;

/// Extractor proving the admin middleware accepted the request's bearer
/// token. Returns 401 when no session was attached.
/// Usage: add `_session: AdminSession` as a handler parameter.
impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AdminSession>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(AppError::UnauthorizedAccess.into())),
        }
    }
}
