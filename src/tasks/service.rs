use mongodb::{
    bson::{doc, to_bson},
    Collection,
};

use crate::db;
use crate::error::AppError;
use crate::models::{Task, User};

/// Task storage over the users collection.
///
/// Tasks live embedded in their owner's user document; every operation is a
/// lookup by email followed by at most one write. A fresh instance is
/// constructed per request via [`TaskService::connect`].
pub struct TaskService {
    users: Collection<User>,
}

impl TaskService {
    /// Obtains a live client and binds to the users collection.
    pub async fn connect() -> Result<Self, AppError> {
        let client = db::get_client().await?;
        Ok(Self {
            users: db::users_collection(&client),
        })
    }

    /// Returns the user's tasks, oldest first.
    ///
    /// Fails with `AppError::UserNotFound` when no user matches; a user
    /// without a `tasks` field simply has no tasks yet.
    pub async fn get_tasks(&self, email: &str) -> Result<Vec<Task>, AppError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(user.tasks.unwrap_or_default())
    }

    /// Appends a task to the user's list and writes the list back.
    ///
    /// Fails with `AppError::UserNotFound` when no user matches and
    /// `AppError::TaskAlreadyExists` when a stored task already carries the
    /// same title (exact, case-sensitive match).
    ///
    /// The write replaces the full task list ($set), so two concurrent adds
    /// for the same user are last-writer-wins: one of the two lists can be
    /// overwritten. Callers get no stronger guarantee.
    pub async fn add_task(&self, email: &str, new_task: Task) -> Result<(), AppError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let mut tasks = user.tasks.unwrap_or_default();

        if tasks.iter().any(|task| task.title == new_task.title) {
            return Err(AppError::TaskAlreadyExists);
        }

        tasks.push(new_task);

        self.users
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "tasks": to_bson(&tasks)? } },
            )
            .await?;

        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }
}
