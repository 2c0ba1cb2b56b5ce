pub mod service;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Task;

pub use service::TaskService;

/// Payload for the add-task endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskRequest {
    /// Email of the task's owner.
    #[validate(email)]
    pub email: String,
    #[validate]
    pub task: Task,
}

/// Query payload for the get-tasks endpoint.
#[derive(Debug, Deserialize)]
pub struct GetTasksQuery {
    pub email: String,
}

/// Response body of the get-tasks endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetTasksResponse {
    pub tasks: Vec<Task>,
}
