use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// A user document as stored in the users collection.
///
/// The task list is embedded in the document; there is no separate tasks
/// collection. The `tasks` field is absent until the first task is added,
/// and `_id` is assigned by the server on insert.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Unique across users, case-sensitive as stored. Uniqueness is enforced
    /// by a lookup before insert, not by an index.
    pub email: String,
    /// bcrypt hash; the plaintext password is never stored.
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl User {
    /// A user as it is first persisted: no id yet, no task list.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            tasks: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_user_has_no_id_and_no_tasks() {
        let user = User::new(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "$2b$12$hash".to_string(),
        );
        assert!(user.id.is_none());
        assert!(user.tasks.is_none());
    }

    #[test]
    fn test_serialized_user_omits_absent_fields() {
        let user = User::new(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "$2b$12$hash".to_string(),
        );
        let document = bson::to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("tasks"));
        assert_eq!(document.get_str("email").unwrap(), "test@example.com");
    }

    #[test]
    fn test_deserializes_document_without_tasks_field() {
        let document = doc! {
            "_id": mongodb::bson::oid::ObjectId::new(),
            "name": "Test User",
            "email": "test@example.com",
            "password_hash": "$2b$12$hash",
        };
        let user: User = bson::from_document(document).unwrap();
        assert!(user.tasks.is_none());
    }
}
