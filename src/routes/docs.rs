use actix_web::http::header;
use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Redirects to the API documentation page.
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, "/docs"))
        .finish()
}

/// A minimal, self-served endpoint index.
#[get("/docs")]
pub async fn docs() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /auth/sign-up": "Register a user; returns an access token",
            "POST /auth/token": "Sign in with the OAuth2 password form; returns an access token",
            "POST /auth/verify-token": "Check a token's signature and expiry",
            "POST /tasks/add-task": "Append a task to a user's list (bearer token required)",
            "GET /tasks/get-tasks": "List a user's tasks (bearer token required)",
            "GET /health": "Liveness probe"
        }
    }))
}
