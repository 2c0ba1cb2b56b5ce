use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// Extracts the raw bearer token from the `Authorization` header.
///
/// Routes that require authentication take this extractor and then verify
/// the token explicitly. A request without a `Bearer` credential is rejected
/// with `AppError::MissingToken` before the handler body runs; whether the
/// token actually verifies is the handler's decision.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match bearer {
            Some(token) => ready(Ok(BearerToken(token.to_owned()))),
            None => ready(Err(AppError::MissingToken.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_bearer_token_extractor_success() {
        let req = test::TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer some_token"))
            .to_http_request();

        let mut payload = Payload::None;
        let extracted = BearerToken::from_request(&req, &mut payload).await;
        assert_eq!(extracted.unwrap().token(), "some_token");
    }

    #[actix_rt::test]
    async fn test_bearer_token_extractor_missing_header() {
        let req = test::TestRequest::default().to_http_request();

        let mut payload = Payload::None;
        let extracted = BearerToken::from_request(&req, &mut payload).await;
        assert!(extracted.is_err());

        let err = extracted.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_bearer_token_extractor_wrong_scheme() {
        let req = test::TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();

        let mut payload = Payload::None;
        let extracted = BearerToken::from_request(&req, &mut payload).await;
        assert!(extracted.is_err());
    }
}
