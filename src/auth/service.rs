use mongodb::{bson::doc, Collection};

use crate::auth::{
    create_access_token, hash_password, verify_password, AuthResponse, SignUpRequest,
};
use crate::db;
use crate::error::AppError;
use crate::models::User;

/// Authentication over the users collection.
///
/// A fresh instance is constructed per request via [`AuthService::connect`],
/// which resolves a new client through the database accessor. The service
/// holds no state besides the collection handle.
pub struct AuthService {
    users: Collection<User>,
}

impl AuthService {
    /// Obtains a live client and binds to the users collection.
    pub async fn connect() -> Result<Self, AppError> {
        let client = db::get_client().await?;
        Ok(Self {
            users: db::users_collection(&client),
        })
    }

    /// Registers a new user and issues a first access token.
    ///
    /// Fails with `AppError::UserAlreadyExists` when a user with the same
    /// email is already stored. The password is hashed before the document
    /// is written; the plaintext never reaches the database.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, AppError> {
        if self.find_user_by_email(&request.email).await?.is_some() {
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.name.clone(), request.email.clone(), password_hash);
        self.users.insert_one(&user).await?;

        log::info!("registered user {}", user.email);

        let access_token = create_access_token()?;
        Ok(AuthResponse::bearer(user.email, access_token))
    }

    /// Checks credentials and issues a fresh access token.
    ///
    /// An unknown email and a failed password check surface the same
    /// `AppError::SignInWrongCredentials`, so the caller cannot tell which
    /// part was wrong.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::SignInWrongCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::SignInWrongCredentials);
        }

        let access_token = create_access_token()?;
        Ok(AuthResponse::bearer(user.email, access_token))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }
}
