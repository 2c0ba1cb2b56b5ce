use crate::{
    auth::{verify_access_token, AuthService, SignUpRequest, TokenRequest, VerifyTokenRequest},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user
///
/// Creates the user document and returns a first access token.
#[post("/sign-up")]
pub async fn sign_up(request: web::Json<SignUpRequest>) -> Result<impl Responder, AppError> {
    request.validate()?;

    let auth = AuthService::connect().await?;
    let response = auth.sign_up(&request).await?;

    Ok(HttpResponse::Created().json(response))
}

/// Sign in with the OAuth2 password form (username = email)
///
/// Checks credentials and returns a fresh access token.
#[post("/token")]
pub async fn token(form: web::Form<TokenRequest>) -> Result<impl Responder, AppError> {
    form.validate()?;

    let auth = AuthService::connect().await?;
    let response = auth.sign_in(&form.email, &form.password).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Check a token's signature and expiry without touching the database.
#[post("/verify-token")]
pub async fn verify_token(
    request: web::Query<VerifyTokenRequest>,
) -> Result<impl Responder, AppError> {
    verify_access_token(&request.token)?;

    Ok(HttpResponse::Ok().json(json!({ "detail": "Token is valid" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::{test_support::JWT_ENV_LOCK, JWT_SECRET_VAR};
    use actix_web::test;
    use serde_json::json;

    // These cases fail before any service is constructed, so they need no
    // running database.

    #[actix_rt::test]
    async fn test_sign_up_validation_failures() {
        let app = test::init_service(actix_web::App::new().service(sign_up)).await;

        // Invalid email
        let req = test::TestRequest::post()
            .uri("/sign-up")
            .set_json(json!({
                "name": "Test User",
                "email": "invalid-email",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        // Short password
        let req = test::TestRequest::post()
            .uri("/sign-up")
            .set_json(json!({
                "name": "Test User",
                "email": "test@example.com",
                "password": "short"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
    }

    #[actix_rt::test]
    async fn test_token_route_rejects_invalid_email() {
        let app = test::init_service(actix_web::App::new().service(token)).await;

        let req = test::TestRequest::post()
            .uri("/token")
            .set_form(&[("username", "not-an-email"), ("password", "password123")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
    }

    #[actix_rt::test]
    async fn test_verify_token_route_valid_token() {
        let _guard = JWT_ENV_LOCK.lock().unwrap();
        std::env::set_var(JWT_SECRET_VAR, "route_test_secret");

        let app = test::init_service(actix_web::App::new().service(verify_token)).await;

        let access_token = crate::auth::create_access_token().unwrap();
        let req = test::TestRequest::post()
            .uri(&format!("/verify-token?token={}", access_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Token is valid");
    }

    #[actix_rt::test]
    async fn test_verify_token_route_invalid_token() {
        let _guard = JWT_ENV_LOCK.lock().unwrap();
        std::env::set_var(JWT_SECRET_VAR, "route_test_secret");

        let app = test::init_service(actix_web::App::new().service(verify_token)).await;

        let req = test::TestRequest::post()
            .uri("/verify-token?token=not_a_real_token")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Token verification failed");
    }
}
