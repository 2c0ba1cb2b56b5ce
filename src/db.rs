//!
//! # Database Accessor
//!
//! Produces a live MongoDB client for the services. The connection string is
//! resolved from the environment at call time, the client is built with the
//! server API pinned to version 1, and liveness is confirmed with a `ping`
//! before the client is handed out.
//!
//! There is no retry, reconnect, or pooling policy here beyond what the
//! driver does internally; each service instantiation asks for a fresh
//! client.

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::env;

use crate::error::AppError;
use crate::models::User;

/// Name of the database holding the user collection.
pub const DATABASE_NAME: &str = "task-manager-db";
/// Name of the collection of user documents with embedded task lists.
pub const USERS_COLLECTION: &str = "users";

/// Environment variable holding the MongoDB connection string.
pub const CONNECTION_STRING_VAR: &str = "MONGODB_CONNECTION_STRING";

/// Connects to the database and returns a verified client.
///
/// Fails with `AppError::ConnectionString` if the connection string is not
/// set, `AppError::DatabaseConnection` if the client cannot be built from it,
/// and `AppError::DatabaseResponse` if the liveness probe fails.
pub async fn get_client() -> Result<Client, AppError> {
    let connection_string = connection_string()?;

    let mut options = ClientOptions::parse(&connection_string).await.map_err(|e| {
        log::error!("failed to parse connection options: {}", e);
        AppError::DatabaseConnection
    })?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(options).map_err(|e| {
        log::error!("failed to build database client: {}", e);
        AppError::DatabaseConnection
    })?;

    test_connection(&client).await?;

    Ok(client)
}

/// Handle on the users collection, typed over the `User` document.
pub fn users_collection(client: &Client) -> Collection<User> {
    client.database(DATABASE_NAME).collection(USERS_COLLECTION)
}

fn connection_string() -> Result<String, AppError> {
    env::var(CONNECTION_STRING_VAR).map_err(|_| AppError::ConnectionString)
}

/// Liveness probe: a `ping` against the admin database.
async fn test_connection(client: &Client) -> Result<(), AppError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| {
            log::error!("database did not answer ping: {}", e);
            AppError::DatabaseResponse
        })?;
    Ok(())
}
