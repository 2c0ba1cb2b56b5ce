#![doc = "The `taskvault` library crate."]
#![doc = ""]
#![doc = "Account-and-task web backend: user registration and sign-in with hashed"]
#![doc = "credentials and bearer tokens, plus a per-user task list embedded in user"]
#![doc = "documents in MongoDB. The main binary (`main.rs`) wires these modules into"]
#![doc = "an actix-web application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod tasks;
