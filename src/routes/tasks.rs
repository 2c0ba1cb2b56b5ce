use crate::{
    auth::{verify_access_token, BearerToken},
    error::AppError,
    tasks::{AddTaskRequest, GetTasksQuery, GetTasksResponse, TaskService},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Appends a task to a user's list of tasks.
///
/// Requires a bearer token. The owning user is named in the body, not
/// derived from the token; the token only proves a prior sign-in.
///
/// ## Responses:
/// - `201 Created`: `{"detail": "Task added successfully"}`.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no user with the given email.
/// - `409 Conflict`: the user already has a task with that title.
/// - `422 Unprocessable Entity`: payload validation failed.
#[post("/add-task")]
pub async fn add_task(
    request: web::Json<AddTaskRequest>,
    bearer: BearerToken,
) -> Result<impl Responder, AppError> {
    verify_access_token(bearer.token())?;
    request.validate()?;

    let service = TaskService::connect().await?;
    let AddTaskRequest { email, task } = request.into_inner();
    service.add_task(&email, task).await?;

    Ok(HttpResponse::Created().json(json!({ "detail": "Task added successfully" })))
}

/// Lists a user's tasks.
///
/// Requires a bearer token. Returns the stored list unchanged; a user who
/// has never added a task gets an empty list.
///
/// ## Responses:
/// - `200 OK`: `{"tasks": [...]}`.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no user with the given email.
#[get("/get-tasks")]
pub async fn get_tasks(
    query: web::Query<GetTasksQuery>,
    bearer: BearerToken,
) -> Result<impl Responder, AppError> {
    verify_access_token(bearer.token())?;

    let service = TaskService::connect().await?;
    let tasks = service.get_tasks(&query.email).await?;

    Ok(HttpResponse::Ok().json(GetTasksResponse { tasks }))
}
