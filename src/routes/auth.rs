use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::ADMIN_SESSION_KEY;
use crate::dto::auth::{AuthResponseDto, SessionDto};
use crate::forms::auth::{LoginForm, LoginFormPayload};
use crate::repository::DieselRepository;
use crate::routes::session_admin;
use crate::services::auth::{authenticate_admin, login_admin};
use crate::services::ServiceError;

#[post("/auth/admin/login")]
pub async fn admin_login(
    form: web::Json<LoginForm>,
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: LoginFormPayload = match form.into_inner().try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(AuthResponseDto::failure(e.to_string())),
    };

    match login_admin(&payload, repo.get_ref()) {
        Ok(admin) => {
            // A fresh session id on privilege change.
            session.renew();
            if let Err(e) = session.insert(ADMIN_SESSION_KEY, &admin) {
                log::error!("Failed to store session: {e}");
                return HttpResponse::InternalServerError()
                    .json(AuthResponseDto::failure("internal error"));
            }
            HttpResponse::Ok().json(AuthResponseDto::success("login successful", Some(admin)))
        }
        Err(e @ (ServiceError::InvalidCredentials | ServiceError::NotAnAdmin)) => {
            HttpResponse::Unauthorized().json(AuthResponseDto::failure(e.to_string()))
        }
        Err(e) => {
            HttpResponse::InternalServerError().json(AuthResponseDto::failure(e.to_string()))
        }
    }
}

#[post("/auth/logout")]
pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    HttpResponse::Ok().json(AuthResponseDto::success("logged out", None))
}

/// Reports who is logged in, re-validated against the user store. A claim
/// that fails validation also clears the cookie so clients stop sending it.
#[get("/auth/session")]
pub async fn current_session(
    session: Session,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Some(claim) = session_admin(&session) else {
        return HttpResponse::Unauthorized().json(SessionDto {
            user: None,
            message: Some("unauthorized".to_string()),
        });
    };

    match authenticate_admin(&claim, repo.get_ref()) {
        Ok(admin) => HttpResponse::Ok().json(SessionDto {
            user: Some(admin),
            message: None,
        }),
        Err(e) => {
            session.purge();
            HttpResponse::Unauthorized().json(SessionDto {
                user: None,
                message: Some(e.to_string()),
            })
        }
    }
}
